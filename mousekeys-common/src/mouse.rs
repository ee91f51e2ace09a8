use core::num::NonZeroU8;

/// Mouse button masks as sent in the HID button byte.
pub mod button {
    pub const LEFT: u8 = 1 << 0;
    pub const RIGHT: u8 = 1 << 1;
    pub const MIDDLE: u8 = 1 << 2;
    pub const PREV: u8 = 1 << 3;
    pub const NEXT: u8 = 1 << 4;
}

/// Largest coordinate of the absolute pointer's logical range.
pub const MAX_ABSOLUTE: u16 = 32_767;

/// Number of subdivisions per axis for each warp step. Always a power of two, at least 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WarpGridSize(u8);
impl WarpGridSize {
    pub const GRID_2X2: Self = Self(2);
    pub const GRID_4X4: Self = Self(4);

    pub const fn new(size: u8) -> Option<Self> {
        if size >= 2 && size.is_power_of_two() {
            Some(Self(size))
        } else {
            None
        }
    }

    pub const fn get(&self) -> u8 {
        self.0
    }
}
impl Default for WarpGridSize {
    fn default() -> Self {
        Self::GRID_2X2
    }
}

/// The screen area warping navigates, in absolute pointer units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WarpBounds {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
}
impl WarpBounds {
    pub const fn new(left: u16, top: u16, width: u16, height: u16) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub const fn full_screen() -> Self {
        Self::new(0, 0, MAX_ABSOLUTE, MAX_ABSOLUTE)
    }
}
impl Default for WarpBounds {
    fn default() -> Self {
        Self::full_screen()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionConfig {
    /// Maximum subpixels moved per axis per report.
    pub speed_limit: u8,
    /// Fixed point scale; how many subpixels make one pixel.
    pub subpixels_per_pixel: NonZeroU8,
    pub warp_grid_size: WarpGridSize,
    pub warp_bounds: WarpBounds,
}
impl Default for MotionConfig {
    fn default() -> Self {
        MotionConfig::new()
    }
}
impl MotionConfig {
    pub const fn new() -> Self {
        Self {
            speed_limit: 127,
            subpixels_per_pixel: match NonZeroU8::new(16) {
                Some(n) => n,
                None => unreachable!(),
            },
            warp_grid_size: WarpGridSize::GRID_2X2,
            warp_bounds: WarpBounds::full_screen(),
        }
    }

    /// Read a config saved as `[speed_limit, subpixels_per_pixel, warp_grid_size, left, top,
    /// width, height]`.
    ///
    /// Returns `None` when the input is short or a field is out of range.
    pub fn deserialize(bin: &mut impl Iterator<Item = u16>) -> Option<MotionConfig> {
        Some(MotionConfig {
            speed_limit: u8_from_u16(bin.next()?)?,
            subpixels_per_pixel: NonZeroU8::new(u8_from_u16(bin.next()?)?)?,
            warp_grid_size: WarpGridSize::new(u8_from_u16(bin.next()?)?)?,
            warp_bounds: WarpBounds::new(bin.next()?, bin.next()?, bin.next()?, bin.next()?),
        })
    }
}

fn u8_from_u16(v: u16) -> Option<u8> {
    u8::try_from(v).ok()
}

#[cfg(test)]
#[path = "mouse_test.rs"]
mod test;
