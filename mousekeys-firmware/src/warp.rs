//! Absolute pointer placement by repeatedly subdividing the screen.
//!
//! Each step splits the current sector into a `grid x grid` set of cells, picks one cell from
//! the command's direction flags and jumps the pointer to its centre. The chosen cell becomes the
//! sector for the next step.

use mousekeys_common::{
    mouse::{WarpBounds, WarpGridSize},
    warp::WarpCommand,
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WarpNavigator {
    is_warping: bool,
    section_left: u16,
    section_top: u16,
    next_width: u16,
    next_height: u16,
}

impl WarpNavigator {
    pub const fn new() -> Self {
        Self {
            is_warping: false,
            section_left: 0,
            section_top: 0,
            next_width: 0,
            next_height: 0,
        }
    }

    pub fn is_warping(&self) -> bool {
        self.is_warping
    }

    /// The current sector as `(left, top, width, height)`. Only meaningful while warping.
    pub fn sector(&self) -> (u16, u16, u16, u16) {
        (
            self.section_left,
            self.section_top,
            self.next_width,
            self.next_height,
        )
    }

    pub fn begin(&mut self, bounds: &WarpBounds) {
        self.section_left = bounds.left;
        self.section_top = bounds.top;
        self.next_width = bounds.width;
        self.next_height = bounds.height;
        self.is_warping = true;
    }

    pub fn end(&mut self) {
        self.is_warping = false;
    }

    /// Start again from the full bounds, but only if a warp is in progress.
    pub fn reset(&mut self, bounds: &WarpBounds) {
        if self.is_warping {
            self.begin(bounds);
        }
    }

    /// Apply one warp command. Returns the absolute position to jump to, or `None` when the
    /// command ended warping.
    pub fn step(
        &mut self,
        cmd: WarpCommand,
        grid: WarpGridSize,
        bounds: &WarpBounds,
    ) -> Option<(u16, u16)> {
        if !self.is_warping {
            self.begin(bounds);
        }

        if cmd.is_end() {
            self.end();
            return None;
        }

        let grid = grid.get() as u16;
        self.next_width /= grid;
        self.next_height /= grid;

        if cmd.is_zoom() {
            self.section_left = self.section_left.wrapping_add(self.next_width);
            self.section_top = self.section_top.wrapping_add(self.next_height);
            return Some(self.center());
        }

        if cmd.contains(WarpCommand::DOWN) {
            self.section_top = self
                .section_top
                .wrapping_add(self.next_height.wrapping_mul(grid - 1));
        } else if !cmd.contains(WarpCommand::UP) {
            self.section_top = self.section_top.wrapping_add(self.next_height);
        }

        if cmd.contains(WarpCommand::RIGHT) {
            self.section_left = self
                .section_left
                .wrapping_add(self.next_width.wrapping_mul(grid - 1));
        } else if !cmd.contains(WarpCommand::LEFT) {
            self.section_left = self.section_left.wrapping_add(self.next_width);
        }

        Some(self.center())
    }

    fn center(&self) -> (u16, u16) {
        (
            self.section_left.wrapping_add(self.next_width / 2),
            self.section_top.wrapping_add(self.next_height / 2),
        )
    }
}

#[cfg(test)]
#[path = "warp_test.rs"]
mod test;
