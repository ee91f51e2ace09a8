#![no_std]
pub mod math;
pub mod mouse;
pub mod warp;
