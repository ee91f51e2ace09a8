use embassy_futures::block_on;

use crate::usb_test_stub::MyEndpointIn;

use super::*;

extern crate std;
use std::vec;

#[test]
fn relative_report() {
    assert_eq!(mouse_report(1, 5, -3, 0), [2, 1, 5, 253, 0, 0]);
    assert_eq!(mouse_report(0, -128, 127, -1), [2, 0, 128, 127, 255, 0]);
}

#[test]
fn absolute_report() {
    assert_eq!(
        absolute_mouse_report(0, 600, 450, 0),
        [7, 0, 0x58, 0x02, 0xc2, 0x01, 0]
    );
    assert_eq!(
        absolute_mouse_report(3, 32_767, 0, 1),
        [7, 3, 0xff, 0x7f, 0, 0, 1]
    );
}

#[test]
fn report_descriptor_ids() {
    let ids: std::vec::Vec<u8> = MOUSE_REPORT_DESC
        .windows(2)
        .filter(|w| w[0] == 0x85)
        .map(|w| w[1])
        .collect();
    assert_eq!(ids, vec![MOUSE_REPORT_ID, ABSOLUTE_MOUSE_REPORT_ID]);
    assert_eq!(MOUSE_REPORT_DESC[MOUSE_REPORT_DESC.len() - 1], 0xC0);
}

#[test]
fn write_splits_packets() {
    block_on(async {
        let ep_in = MyEndpointIn::with_max_packet_size(4);
        let messages = ep_in.messages.clone();
        let mut hid_writer = HidWriter::<_, 16>::new(ep_in);

        hid_writer.write(&[1, 2, 3, 4, 5, 6]).await.unwrap();
        assert_eq!(messages.take(), vec![vec![1, 2, 3, 4], vec![5, 6]]);

        hid_writer.write(&[1, 2, 3, 4, 5, 6, 7, 8]).await.unwrap();
        assert_eq!(
            messages.take(),
            vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![]]
        );
    });
}

#[test]
fn write_full_report_needs_no_zlp() {
    block_on(async {
        let ep_in = MyEndpointIn::with_max_packet_size(4);
        let messages = ep_in.messages.clone();
        let mut hid_writer = HidWriter::<_, 8>::new(ep_in);

        hid_writer.write(&[1, 2, 3, 4, 5, 6, 7, 8]).await.unwrap();
        assert_eq!(messages.take(), vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]]);
    });
}

#[test]
fn write_error() {
    block_on(async {
        let mut ep_in = MyEndpointIn::default();
        ep_in.disabled = true;
        let messages = ep_in.messages.clone();
        let mut hid_writer = HidWriter::<_, 8>::new(ep_in);

        assert!(hid_writer.write(&[1, 2]).await.is_err());
        assert!(messages.is_empty());
    });
}
