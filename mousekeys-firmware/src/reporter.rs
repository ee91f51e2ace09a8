use embassy_sync::{blocking_mutex::raw::RawMutex, channel::Channel};
use embassy_usb::driver::EndpointIn;

use crate::hid::{absolute_mouse_report, mouse_report, HidWriter, MouseEvent, MouseHid};

pub type ReportChannel<M, const N: usize> = Channel<M, MouseEvent, N>;

/// A [MouseHid] that queues events for a [MouseReporter]. When the queue is full the event is
/// dropped.
pub struct ReportQueue<'c, M: RawMutex, const N: usize> {
    channel: &'c ReportChannel<M, N>,
}

impl<'c, M: RawMutex, const N: usize> ReportQueue<'c, M, N> {
    pub fn new(channel: &'c ReportChannel<M, N>) -> Self {
        Self { channel }
    }

    fn send(&self, event: MouseEvent) {
        if self.channel.try_send(event).is_err() {
            crate::warn!("mouse report queue full; dropped {:?}", event);
        }
    }
}

impl<M: RawMutex, const N: usize> MouseHid for ReportQueue<'_, M, N> {
    fn initialize_mouse(&mut self) {
        self.send(MouseEvent::Init);
    }

    fn initialize_absolute_mouse(&mut self) {
        self.send(MouseEvent::InitAbsolute);
    }

    fn press_buttons(&mut self, buttons: u8) {
        self.send(MouseEvent::Press(buttons));
    }

    fn release_buttons(&mut self, buttons: u8) {
        self.send(MouseEvent::Release(buttons));
    }

    fn move_mouse(&mut self, dx: i8, dy: i8, wheel: i8) {
        self.send(MouseEvent::Move(dx, dy, wheel));
    }

    fn move_absolute_mouse_to(&mut self, x: u16, y: u16, wheel: i8) {
        self.send(MouseEvent::MoveTo(x, y, wheel));
    }
}

/// Writes queued [MouseEvent]s as HID reports, tracking which buttons are held.
pub struct MouseReporter<E: EndpointIn, const DESC_SIZE: usize> {
    hid_writer: HidWriter<E, DESC_SIZE>,
    buttons: u8,
}

impl<E: EndpointIn, const DESC_SIZE: usize> MouseReporter<E, DESC_SIZE> {
    pub fn new(hid_writer: HidWriter<E, DESC_SIZE>) -> Self {
        Self {
            hid_writer,
            buttons: 0,
        }
    }

    pub fn buttons(&self) -> u8 {
        self.buttons
    }

    async fn write_report(&mut self, report: &[u8]) {
        if let Err(e) = self.hid_writer.write(report).await {
            crate::warn!("Failed to send report: {:?}", e);
        }
    }

    async fn write_buttons(&mut self) {
        self.write_report(&mouse_report(self.buttons, 0, 0, 0)).await;
    }

    pub async fn report(&mut self, event: MouseEvent) {
        match event {
            MouseEvent::Init => {
                self.buttons = 0;
                self.write_buttons().await;
            }
            MouseEvent::InitAbsolute => {
                self.buttons = 0;
            }
            MouseEvent::Press(buttons) => {
                self.buttons |= buttons;
                self.write_buttons().await;
            }
            MouseEvent::Release(buttons) => {
                self.buttons &= !buttons;
                self.write_buttons().await;
            }
            MouseEvent::Move(dx, dy, wheel) => {
                self.write_report(&mouse_report(self.buttons, dx, dy, wheel))
                    .await;
            }
            MouseEvent::MoveTo(x, y, wheel) => {
                self.write_report(&absolute_mouse_report(self.buttons, x, y, wheel))
                    .await;
            }
        }
    }

    /// Report events from `channel` forever.
    pub async fn run<M: RawMutex, const N: usize>(&mut self, channel: &ReportChannel<M, N>) -> ! {
        loop {
            let event = channel.receive().await;
            self.report(event).await;
        }
    }
}

#[cfg(test)]
#[path = "reporter_test.rs"]
mod test;
