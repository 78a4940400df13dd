//! HUD layout helpers: digit readouts and the lives row
//!
//! Pure functions the renderer samples each frame. Digit readouts are fixed
//! width with leading zeros, matching the arcade-style scoreboard.

use glam::Vec2;

use crate::consts::PIXELS_PER_UNIT;

/// Width of the score and high score readouts
pub const SCORE_DIGITS: usize = 5;
/// Width of the time-bonus readout
pub const BONUS_DIGITS: usize = 2;

/// Leftmost icon of the lives row
pub const LIVES_ORIGIN: Vec2 = Vec2::new(-6.3125, -6.75);
/// Icon pitch, 9 pixels
pub const LIVES_SPACING: f32 = 9.0 / PIXELS_PER_UNIT;

/// Decompose a value into `N` digits, least significant first. Values wider
/// than the readout wrap silently, like the original odometer-style counter.
pub fn digits<const N: usize>(value: u32) -> [u8; N] {
    let mut rest = value;
    std::array::from_fn(|_| {
        let digit = (rest % 10) as u8;
        rest /= 10;
        digit
    })
}

/// Icon positions for the remaining extra lives, left to right
pub fn life_icon_positions(extra_lives: i32) -> Vec<Vec2> {
    (0..extra_lives.max(0))
        .map(|i| LIVES_ORIGIN + Vec2::new(i as f32 * LIVES_SPACING, 0.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_little_endian_with_leading_zeros() {
        assert_eq!(digits::<SCORE_DIGITS>(450), [0, 5, 4, 0, 0]);
        assert_eq!(digits::<BONUS_DIGITS>(7), [7, 0]);
        assert_eq!(digits::<SCORE_DIGITS>(0), [0; 5]);
    }

    #[test]
    fn test_digits_wrap_past_the_readout_width() {
        // 123456 shows as 23456 on a five-digit readout
        assert_eq!(digits::<SCORE_DIGITS>(123_456), [6, 5, 4, 3, 2]);
    }

    #[test]
    fn test_life_icons_spread_right() {
        let icons = life_icon_positions(2);
        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0], LIVES_ORIGIN);
        assert!((icons[1].x - (LIVES_ORIGIN.x + LIVES_SPACING)).abs() < 1e-6);

        // Negative lives happen briefly at game over
        assert!(life_icon_positions(-1).is_empty());
    }
}
