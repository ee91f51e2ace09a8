extern crate std;
use std::vec::Vec;

use crate::hid::{MouseEvent, MouseHid};

/// Records every HID call so tests can assert on what the engine sent.
#[derive(Default)]
pub struct RecordingHid {
    pub events: Vec<MouseEvent>,
}
impl RecordingHid {
    pub fn take(&mut self) -> Vec<MouseEvent> {
        core::mem::take(&mut self.events)
    }
}
impl MouseHid for RecordingHid {
    fn initialize_mouse(&mut self) {
        self.events.push(MouseEvent::Init);
    }

    fn initialize_absolute_mouse(&mut self) {
        self.events.push(MouseEvent::InitAbsolute);
    }

    fn press_buttons(&mut self, buttons: u8) {
        self.events.push(MouseEvent::Press(buttons));
    }

    fn release_buttons(&mut self, buttons: u8) {
        self.events.push(MouseEvent::Release(buttons));
    }

    fn move_mouse(&mut self, dx: i8, dy: i8, wheel: i8) {
        self.events.push(MouseEvent::Move(dx, dy, wheel));
    }

    fn move_absolute_mouse_to(&mut self, x: u16, y: u16, wheel: i8) {
        self.events.push(MouseEvent::MoveTo(x, y, wheel));
    }
}
