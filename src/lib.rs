//! Hopway - a lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, session state)
//! - `audio`: Cue routing from simulation events to an audio backend
//! - `display`: Digit decomposition and HUD layout helpers
//! - `highscores`: Single-integer high score persistence

pub mod audio;
pub mod display;
pub mod highscores;
pub mod sim;

pub use highscores::HighScoreStore;

/// Game configuration constants
pub mod consts {
    /// World units are snapped to this pixel grid for rendering
    pub const PIXELS_PER_UNIT: f32 = 16.0;
    /// Animation timing is authored in 60ths of a second
    pub const FRAMES_PER_SECOND: f32 = 60.0;

    /// One hop animates over 8 frames
    pub const HOP_DURATION: f32 = 8.0 / FRAMES_PER_SECOND;
    /// Death animation length; the session resolves the death when it elapses
    pub const DEATH_ANIM_DURATION: f32 = 1.0;

    /// Countdown per life
    pub const TIMER_DURATION: f32 = 30.0;
    pub const TIME_SLICES_PER_SECOND: f32 = 2.0;
    /// Warning cue threshold (seconds left)
    pub const TIME_WARNING_THRESHOLD: f32 = 5.0;

    /// Player spawn point (median column, bottom row)
    pub const SPAWN_X: f32 = 1.0;
    pub const SPAWN_Y: f32 = -6.0;

    /// Movement bounds; a hop is allowed while the player is inside them
    pub const TOP_BOUND: f32 = 5.001;
    pub const BOTTOM_BOUND: f32 = -6.001;
    pub const LEFT_BOUND: f32 = -5.001;
    pub const RIGHT_BOUND: f32 = 6.001;

    /// A carrier can drag the player this far out before the wrap-and-die guard fires
    pub const OFFSCREEN_LEFT: f32 = -7.0;
    pub const OFFSCREEN_RIGHT: f32 = 8.0;
    pub const SCREEN_WRAP_DISTANCE: f32 = 16.0;

    /// Goal row geometry: five slots along the top row
    pub const GOAL_ROW: i32 = 6;
    pub const FIRST_GOAL_X: f32 = -5.5;
    pub const GOAL_SPACING: f32 = 3.0;
    pub const GOAL_X_TOLERANCE: f32 = 0.5;
    /// An upward hop from at or above this y targets the goal row
    pub const GOAL_ROW_THRESHOLD: f32 = 4.9;

    /// Scoring
    pub const PROGRESS_POINTS: u32 = 10;
    pub const GOAL_POINTS: u32 = 50;
    pub const TIME_SLICE_POINTS: u32 = 10;
    pub const LEVEL_COMPLETE_POINTS: u32 = 1000;

    pub const STARTING_EXTRA_LIVES: i32 = 2;

    /// Bonus-time display lingers this long after a goal arrival
    pub const BONUS_DISPLAY_DURATION: f32 = 4.25;
    /// Delay before the scheduled restart after clearing all five goals
    pub const LEVEL_COMPLETE_RESTART_DELAY: f32 = 7.0;
    /// Restart input is ignored for this long after game over
    pub const GAME_OVER_RESTART_GRACE: f32 = 1.0;

    /// Sinker group animation cadence
    pub const SWIM_FRAME_DURATION: f32 = 16.0 / FRAMES_PER_SECOND;
    pub const TIME_BETWEEN_DIVES: f32 = 48.0 / FRAMES_PER_SECOND;
}

/// Snap a coordinate to the nearest 1/16-unit pixel position
#[inline]
pub fn snap_to_pixel(x: f32) -> f32 {
    (x * consts::PIXELS_PER_UNIT).round() / consts::PIXELS_PER_UNIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_pixel() {
        assert_eq!(snap_to_pixel(0.0), 0.0);
        assert_eq!(snap_to_pixel(1.04), 1.0625); // 16.64 px rounds to 17 px
        assert_eq!(snap_to_pixel(-0.51), -0.5);
    }
}
