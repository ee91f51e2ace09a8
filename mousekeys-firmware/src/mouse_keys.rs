use core::num::NonZeroU8;

use mousekeys_common::{
    math::{acceleration, diagonalize},
    mouse::{MotionConfig, WarpBounds, WarpGridSize},
    warp::WarpCommand,
};

use crate::{
    hid::{MouseHid, MAX_REPORT_DELTA},
    warp::WarpNavigator,
};

/// Mouse keys motion engine.
///
/// Turns per-axis step requests into accelerated pixel reports, carrying the subpixel remainder
/// between calls, and drives absolute warping. Any relative movement or button release cancels
/// a warp in progress.
pub struct MouseKeys<H: MouseHid> {
    hid: H,
    config: MotionConfig,
    accel_step: u8,
    remainder_x: i16,
    remainder_y: i16,
    warp: WarpNavigator,
}

impl<H: MouseHid> MouseKeys<H> {
    pub fn new(hid: H) -> Self {
        Self::with_config(hid, MotionConfig::new())
    }

    pub fn with_config(hid: H, config: MotionConfig) -> Self {
        Self {
            hid,
            config,
            accel_step: 0,
            remainder_x: 0,
            remainder_y: 0,
            warp: WarpNavigator::new(),
        }
    }

    pub fn begin(&mut self) {
        self.hid.initialize_mouse();
        self.hid.initialize_absolute_mouse();
        crate::info!(
            "mouse keys ready; speed limit {}, subpixels {}",
            self.config.speed_limit,
            self.config.subpixels_per_pixel.get()
        );
    }

    pub fn hid(&self) -> &H {
        &self.hid
    }

    pub fn hid_mut(&mut self) -> &mut H {
        &mut self.hid
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Replace the whole configuration. Remainders are dropped if the subpixel scale changes and
    /// a warp in progress restarts from the new bounds.
    pub fn set_config(&mut self, config: &MotionConfig) {
        let scale_changed = config.subpixels_per_pixel != self.config.subpixels_per_pixel;
        self.config = *config;
        if scale_changed {
            self.clear_remainders();
        }
        self.reset_warping();
    }

    pub fn set_speed_limit(&mut self, speed_limit: u8) {
        self.config.speed_limit = speed_limit;
    }

    pub fn set_subpixels_per_pixel(&mut self, subpixels_per_pixel: NonZeroU8) {
        if self.config.subpixels_per_pixel != subpixels_per_pixel {
            self.config.subpixels_per_pixel = subpixels_per_pixel;
            self.clear_remainders();
        }
    }

    pub fn set_warp_grid_size(&mut self, warp_grid_size: WarpGridSize) {
        self.config.warp_grid_size = warp_grid_size;
    }

    pub fn set_warp_bounds(&mut self, warp_bounds: WarpBounds) {
        self.config.warp_bounds = warp_bounds;
        self.reset_warping();
    }

    pub fn accel_step(&self) -> u8 {
        self.accel_step
    }

    /// The acceleration phase is advanced by the key handling layer, once per report tick.
    pub fn set_accel_step(&mut self, accel_step: u8) {
        self.accel_step = accel_step;
    }

    /// Subpixels carried over to the next move, as `(x, y)`.
    pub fn remainder(&self) -> (i16, i16) {
        (self.remainder_x, self.remainder_y)
    }

    pub fn press_button(&mut self, button: u8) {
        self.hid.press_buttons(button);
    }

    pub fn release_button(&mut self, button: u8) {
        self.hid.release_buttons(button);
        self.end_warping();
    }

    /// Move by `x` and `y` steps, scaled by the current acceleration and sent as whole pixels.
    pub fn move_cursor(&mut self, x: i8, y: i8) {
        let mut x = x as i16;
        let mut y = y as i16;
        let mut speed_limit = self.config.speed_limit as i16;

        if x != 0 && y != 0 {
            speed_limit = diagonalize(speed_limit);
            x = diagonalize(x);
            y = diagonalize(y);
        }

        let accel = acceleration(self.accel_step) as i16;
        let move_x = subpixels(self.remainder_x, x, accel, speed_limit);
        let move_y = subpixels(self.remainder_y, y, accel, speed_limit);

        self.end_warping();

        let scale = self.config.subpixels_per_pixel.get() as i16;
        let (dx, rx) = quantize(move_x, scale);
        let (dy, ry) = quantize(move_y, scale);
        self.hid.move_mouse(dx, dy, 0);

        // an idle axis keeps its remainder
        if x != 0 {
            self.remainder_x = rx;
        }
        if y != 0 {
            self.remainder_y = ry;
        }
    }

    pub fn warp(&mut self, cmd: WarpCommand) {
        if !self.warp.is_warping() {
            crate::debug!("warp begin");
        }
        match self
            .warp
            .step(cmd, self.config.warp_grid_size, &self.config.warp_bounds)
        {
            Some((x, y)) => {
                crate::debug!("warp to {}, {}", x, y);
                self.hid.move_absolute_mouse_to(x, y, 0);
            }
            None => crate::debug!("warp ended"),
        }
    }

    pub fn is_warping(&self) -> bool {
        self.warp.is_warping()
    }

    /// Restart a warp in progress from the full bounds; used when the screen layout changes.
    pub fn reset_warping(&mut self) {
        self.warp.reset(&self.config.warp_bounds);
    }

    pub fn end_warping(&mut self) {
        self.warp.end();
    }

    fn clear_remainders(&mut self) {
        self.remainder_x = 0;
        self.remainder_y = 0;
    }
}

/// Subpixels to move on one axis, limited to `speed_limit` in either direction.
fn subpixels(remainder: i16, value: i16, accel: i16, speed_limit: i16) -> i16 {
    if value == 0 {
        return 0;
    }
    let limit = speed_limit as i32;
    (remainder as i32 + value as i32 * accel as i32).clamp(-limit, limit) as i16
}

/// Split subpixels into whole pixels (saturated to the report's -127..=127 range) and the
/// leftover.
fn quantize(subpixels: i16, scale: i16) -> (i8, i16) {
    let pixels = subpixels / scale;
    let leftover = subpixels - pixels * scale;
    (
        pixels.clamp(-(MAX_REPORT_DELTA as i16), MAX_REPORT_DELTA as i16) as i8,
        leftover,
    )
}

#[cfg(test)]
#[path = "mouse_keys_test.rs"]
mod test;
