use core::ops::{BitOr, BitOrAssign};

/// A warp navigation command: a set of direction flags plus an end flag.
///
/// Up and down together mean "zoom" into the centre of the current sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WarpCommand(u8);
impl WarpCommand {
    pub const NONE: Self = Self(0);
    pub const END: Self = Self(1 << 0);
    pub const UP: Self = Self(1 << 1);
    pub const DOWN: Self = Self(1 << 2);
    pub const LEFT: Self = Self(1 << 3);
    pub const RIGHT: Self = Self(1 << 4);

    const ALL: u8 = 0x1f;

    /// Build from a raw bitmask; bits outside the known flags are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL)
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_end(&self) -> bool {
        self.contains(Self::END)
    }

    pub const fn is_zoom(&self) -> bool {
        self.contains(Self(Self::UP.0 | Self::DOWN.0))
    }
}

impl BitOr for WarpCommand {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for WarpCommand {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<u8> for WarpCommand {
    fn from(bits: u8) -> Self {
        Self::from_bits(bits)
    }
}

#[cfg(test)]
#[path = "warp_test.rs"]
mod test;
