#![no_std]
pub mod hid;
pub mod mouse_keys;
pub mod reporter;
pub mod warp;

#[cfg(any(test, feature = "test-utils"))]
pub mod hid_test_stub;
#[cfg(any(test, feature = "test-utils"))]
pub mod usb_test_stub;

#[macro_use]
mod macros;

pub use mousekeys_common::{
    math,
    mouse::{button, MotionConfig, WarpBounds, WarpGridSize},
    warp::WarpCommand,
};
