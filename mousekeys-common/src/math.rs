use core::cmp::min;

/// Cubic ease curve, based on the FastLED cubic wave.
///
/// Maps an acceleration phase in `0..=255` onto a speed multiplier in `1..=255`: slow growth near
/// 0, fast growth in the middle and slow growth again near 255. The integer truncation is part of
/// the curve, so the output is not strictly monotonic; it can dip by one or two steps.
///
/// # Examples
///
/// ```
/// use mousekeys_common::math::acceleration;
///
/// assert_eq!(acceleration(0), 1);
/// assert_eq!(acceleration(128), 129);
/// assert_eq!(acceleration(255), 255);
/// ```
pub fn acceleration(cycles: u8) -> u8 {
    let i = cycles as u16;

    let ii = (i * i) >> 8;
    let iii = (ii * i) >> 8;

    // can reach 257 at the top of the curve
    min(3 * ii - 2 * iii + 1, 255) as u8
}

/// Scale `value` by roughly sqrt(2)/2 so diagonal motion is no faster than motion along one
/// axis. A value that would truncate to zero is returned unscaled.
pub fn diagonalize(value: i16) -> i16 {
    // 99 / 140 is close to sqrt(2) / 2; integer division truncates towards zero.
    let diagonal = (value as i32 * 99 / 140) as i16;
    if diagonal == 0 {
        value
    } else {
        diagonal
    }
}

#[cfg(test)]
#[path = "math_test.rs"]
mod test;
