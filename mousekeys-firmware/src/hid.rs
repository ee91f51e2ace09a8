use embassy_usb::driver::{EndpointError, EndpointIn};

pub const MOUSE_REPORT_ID: u8 = 2;
pub const ABSOLUTE_MOUSE_REPORT_ID: u8 = 7;

/// Relative X/Y/wheel logical range is `-MAX_REPORT_DELTA..=MAX_REPORT_DELTA`.
pub const MAX_REPORT_DELTA: i8 = 127;

pub const MOUSE_REPORT_LEN: usize = 6;
pub const ABSOLUTE_MOUSE_REPORT_LEN: usize = 7;

/// The HID sink the motion engine drives. Reports are fire-and-forget; delivery failures are the
/// transport's concern.
pub trait MouseHid {
    fn initialize_mouse(&mut self);
    fn initialize_absolute_mouse(&mut self);
    fn press_buttons(&mut self, buttons: u8);
    fn release_buttons(&mut self, buttons: u8);
    fn move_mouse(&mut self, dx: i8, dy: i8, wheel: i8);
    fn move_absolute_mouse_to(&mut self, x: u16, y: u16, wheel: i8);
}

/// One call into a [MouseHid], for transports that queue work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MouseEvent {
    Init,
    InitAbsolute,
    Press(u8),
    Release(u8),
    Move(i8, i8, i8),
    MoveTo(u16, u16, i8),
}

/// Relative report: `[id, buttons, dx, dy, wheel, pan]`.
pub fn mouse_report(buttons: u8, dx: i8, dy: i8, wheel: i8) -> [u8; MOUSE_REPORT_LEN] {
    [MOUSE_REPORT_ID, buttons, dx as u8, dy as u8, wheel as u8, 0]
}

/// Absolute report: `[id, buttons, x_lo, x_hi, y_lo, y_hi, wheel]`.
pub fn absolute_mouse_report(
    buttons: u8,
    x: u16,
    y: u16,
    wheel: i8,
) -> [u8; ABSOLUTE_MOUSE_REPORT_LEN] {
    let [x0, x1] = x.to_le_bytes();
    let [y0, y1] = y.to_le_bytes();
    [ABSOLUTE_MOUSE_REPORT_ID, buttons, x0, x1, y0, y1, wheel as u8]
}

#[rustfmt::skip]
pub const MOUSE_REPORT_DESC: [u8; 73 + 60] = [
    // MOUSE_DESC  [u8; 73]
    0x05, 0x01, // (GLOBAL) USAGE_PAGE         0x0001 Generic Desktop Page
    0x09, 0x02, // (LOCAL)  USAGE              0x00010002 Mouse (Application Collection)
    0xA1, 0x01, // (MAIN) COLLECTION 0x01 Application (Usage=0x00010002: Page=Generic Desktop Page,
                //  Usage=Mouse, Type=Application Collection)
    0x85, 0x02, //   (GLOBAL) REPORT_ID          0x02 (2)
    0x09, 0x01, //   (LOCAL)  USAGE              0x00010001 Pointer (Physical Collection)
    0xA1, 0x00, //   (MAIN) COLLECTION 0x00 Physical (Usage=0x00010001: Page=Generic Desktop Page,
                //    Usage=Pointer, Type=Physical Collection)
    0x05, 0x09, //     (GLOBAL) USAGE_PAGE         0x0009 Button Page
    0x19, 0x01, //     (LOCAL) USAGE_MINIMUM 0x00090001 Button 1 Primary/trigger (Selector, On/Off
                //      Control, Momentary Control, or One Shot Control)
    0x29, 0x08, //     (LOCAL) USAGE_MAXIMUM 0x00090008 Button 8 (Selector, On/Off Control,
                //      Momentary Control, or One Shot Control)
    0x15, 0x00, //     (GLOBAL) LOGICAL_MINIMUM    0x00 (0)
    0x25, 0x01, //     (GLOBAL) LOGICAL_MAXIMUM    0x01 (1)
    0x95, 0x08, //     (GLOBAL) REPORT_COUNT       0x08 (8) Number of fields
    0x75, 0x01, //     (GLOBAL) REPORT_SIZE        0x01 (1) Number of bits per field
    0x81, 0x02, //     (MAIN) INPUT 0x00000002 (8 fields x 1 bit) 0=Data 1=Variable 0=Absolute
                //       0=NoWrap 0=Linear 0=PrefState 0=NoNull 0=NonVolatile 0=Bitmap
    0x05, 0x01, //     (GLOBAL) USAGE_PAGE         0x0001 Generic Desktop Page
    0x09, 0x30, //     (LOCAL)  USAGE              0x00010030 X (Dynamic Value)
    0x09, 0x31, //     (LOCAL)  USAGE              0x00010031 Y (Dynamic Value)
    0x15, 0x81, //     (GLOBAL) LOGICAL_MINIMUM    0x81 (-127)
    0x25, 0x7F, //     (GLOBAL) LOGICAL_MAXIMUM    0x7F (127)
    0x95, 0x02, //     (GLOBAL) REPORT_COUNT       0x02 (2) Number of fields
    0x75, 0x08, //     (GLOBAL) REPORT_SIZE        0x08 (8) Number of bits per field
    0x81, 0x06, //     (MAIN) INPUT 0x00000006 (2 fields x 8 bits) 0=Data 1=Variable 1=Relative
                //       0=NoWrap 0=Linear 0=PrefState 0=NoNull 0=NonVolatile 0=Bitmap
    0x09, 0x38, //     (LOCAL)  USAGE              0x00010038 Wheel (Dynamic Value)
    0x15, 0x81, //     (GLOBAL) LOGICAL_MINIMUM    0x81 (-127)
    0x25, 0x7F, //     (GLOBAL) LOGICAL_MAXIMUM    0x7F (127)
    0x95, 0x01, //     (GLOBAL) REPORT_COUNT       0x01 (1) Number of fields
    0x75, 0x08, //     (GLOBAL) REPORT_SIZE        0x08 (8) Number of bits per field
    0x81, 0x06, //     (MAIN) INPUT 0x00000006 (1 field x 8 bits) 0=Data 1=Variable 1=Relative
                //       0=NoWrap 0=Linear 0=PrefState 0=NoNull 0=NonVolatile 0=Bitmap
    0x05, 0x0C, //     (GLOBAL) USAGE_PAGE         0x000C Consumer Page
    0x0A, 0x38, 0x02,//(LOCAL)  USAGE              0x000C0238 AC Pan (Linear Control)
    0x15, 0x81, //     (GLOBAL) LOGICAL_MINIMUM    0x81 (-127)
    0x25, 0x7F, //     (GLOBAL) LOGICAL_MAXIMUM    0x7F (127)
    0x95, 0x01, //     (GLOBAL) REPORT_COUNT       0x01 (1) Number of fields
    0x75, 0x08, //     (GLOBAL) REPORT_SIZE        0x08 (8) Number of bits per field
    0x81, 0x06, //     (MAIN) INPUT 0x00000006 (1 field x 8 bits) 0=Data 1=Variable 1=Relative
                //       0=NoWrap 0=Linear 0=PrefState 0=NoNull 0=NonVolatile 0=Bitmap
    0xC0,       //   (MAIN)   END_COLLECTION     Physical
    0xC0,       // (MAIN)   END_COLLECTION     Application

    // ABSOLUTE_MOUSE_DESC  [u8; 60]
    0x05, 0x01, // (GLOBAL) USAGE_PAGE         0x0001 Generic Desktop Page
    0x09, 0x02, // (LOCAL)  USAGE              0x00010002 Mouse (Application Collection)
    0xA1, 0x01, // (MAIN) COLLECTION 0x01 Application
    0x85, 0x07, //   (GLOBAL) REPORT_ID          0x07 (7)
    0x09, 0x01, //   (LOCAL)  USAGE              0x00010001 Pointer (Physical Collection)
    0xA1, 0x00, //   (MAIN) COLLECTION 0x00 Physical
    0x05, 0x09, //     (GLOBAL) USAGE_PAGE         0x0009 Button Page
    0x19, 0x01, //     (LOCAL) USAGE_MINIMUM 0x00090001 Button 1
    0x29, 0x08, //     (LOCAL) USAGE_MAXIMUM 0x00090008 Button 8
    0x15, 0x00, //     (GLOBAL) LOGICAL_MINIMUM    0x00 (0)
    0x25, 0x01, //     (GLOBAL) LOGICAL_MAXIMUM    0x01 (1)
    0x95, 0x08, //     (GLOBAL) REPORT_COUNT       0x08 (8) Number of fields
    0x75, 0x01, //     (GLOBAL) REPORT_SIZE        0x01 (1) Number of bits per field
    0x81, 0x02, //     (MAIN) INPUT 0x00000002 (8 fields x 1 bit) 0=Data 1=Variable 0=Absolute
    0x05, 0x01, //     (GLOBAL) USAGE_PAGE         0x0001 Generic Desktop Page
    0x09, 0x30, //     (LOCAL)  USAGE              0x00010030 X (Dynamic Value)
    0x09, 0x31, //     (LOCAL)  USAGE              0x00010031 Y (Dynamic Value)
    0x16, 0x00, 0x00, //(GLOBAL) LOGICAL_MINIMUM   0x0000 (0)
    0x26, 0xFF, 0x7F, //(GLOBAL) LOGICAL_MAXIMUM   0x7FFF (32767)
    0x75, 0x10, //     (GLOBAL) REPORT_SIZE        0x10 (16) Number of bits per field
    0x95, 0x02, //     (GLOBAL) REPORT_COUNT       0x02 (2) Number of fields
    0x81, 0x02, //     (MAIN) INPUT 0x00000002 (2 fields x 16 bits) 0=Data 1=Variable 0=Absolute
    0x09, 0x38, //     (LOCAL)  USAGE              0x00010038 Wheel (Dynamic Value)
    0x15, 0x81, //     (GLOBAL) LOGICAL_MINIMUM    0x81 (-127)
    0x25, 0x7F, //     (GLOBAL) LOGICAL_MAXIMUM    0x7F (127)
    0x75, 0x08, //     (GLOBAL) REPORT_SIZE        0x08 (8) Number of bits per field
    0x95, 0x01, //     (GLOBAL) REPORT_COUNT       0x01 (1) Number of fields
    0x81, 0x06, //     (MAIN) INPUT 0x00000006 (1 field x 8 bits) 0=Data 1=Variable 1=Relative
    0xC0,       //   (MAIN)   END_COLLECTION     Physical
    0xC0,       // (MAIN)   END_COLLECTION     Application
];

pub struct HidWriter<E: EndpointIn, const N: usize> {
    ep_in: E,
}

impl<E: EndpointIn, const N: usize> HidWriter<E, N> {
    pub fn new(ep_in: E) -> Self {
        Self { ep_in }
    }

    /// Writes `report` to its interrupt endpoint.
    pub async fn write(&mut self, report: &[u8]) -> Result<(), EndpointError> {
        assert!(report.len() <= N);

        let max_packet_size = usize::from(self.ep_in.info().max_packet_size);
        let zlp_needed = report.len() < N && report.len().is_multiple_of(max_packet_size);
        for chunk in report.chunks(max_packet_size) {
            self.ep_in.write(chunk).await?;
        }

        if zlp_needed {
            self.ep_in.write(&[]).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "hid_test.rs"]
mod test;
