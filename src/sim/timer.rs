//! Countdown timer with a one-shot warning and an idempotent expiry
//!
//! The timer only advances while the session is Playing; the session resets
//! it on every respawn. Expiry may be reported on consecutive ticks - the
//! session transitions away from Playing on the first one, so repeats are
//! harmless by design of the caller.

use crate::consts::*;
use crate::sim::events::{GameEvent, SoundCue};

/// Visual tier of the timer bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTier {
    Normal,
    Warning,
}

/// Outcome of a timer update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    Running,
    Expired,
}

/// The timer bar scales from the right edge; this is its anchor
pub const TIMER_BAR_ORIGIN: (f32, f32) = (1.75, -7.25);

#[derive(Debug, Clone)]
pub struct CountdownTimer {
    start_time: f32,
    time_left: f32,
    warning_played: bool,
}

impl CountdownTimer {
    pub fn new(now: f32) -> Self {
        Self {
            start_time: now,
            time_left: TIMER_DURATION,
            warning_played: false,
        }
    }

    /// Reset to full duration; re-arms the warning
    pub fn reset(&mut self, now: f32) {
        self.start_time = now;
        self.time_left = TIMER_DURATION;
        self.warning_played = false;
    }

    /// Recompute time left and fire warning/expiry signals
    pub fn update(&mut self, now: f32, events: &mut Vec<GameEvent>) -> TimerOutcome {
        self.time_left = TIMER_DURATION - (now - self.start_time);

        if self.time_left < 0.0 {
            return TimerOutcome::Expired;
        }
        if self.time_left <= TIME_WARNING_THRESHOLD && !self.warning_played {
            self.warning_played = true;
            events.push(GameEvent::Sound(SoundCue::TimeRunningOut));
        }
        TimerOutcome::Running
    }

    pub fn time_left(&self) -> f32 {
        self.time_left
    }

    /// Remaining half-second slices, clamped at zero
    pub fn slices_left(&self) -> u32 {
        (self.time_left.max(0.0) * TIME_SLICES_PER_SECOND) as u32
    }

    pub fn warning_played(&self) -> bool {
        self.warning_played
    }

    pub fn tier(&self) -> TimerTier {
        if self.warning_played {
            TimerTier::Warning
        } else {
            TimerTier::Normal
        }
    }

    /// Horizontal scale of the timer bar, in world units
    pub fn bar_scale_x(&self) -> f32 {
        self.slices_left() as f32 * 2.0 / PIXELS_PER_UNIT
    }

    /// X offset from the bar origin; grows as time drains so the bar stays
    /// pinned to its right edge
    pub fn bar_x_offset(&self) -> f32 {
        let full = TIMER_DURATION * TIME_SLICES_PER_SECOND;
        (full - self.slices_left() as f32) / PIXELS_PER_UNIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slices_count_down() {
        let mut timer = CountdownTimer::new(0.0);
        assert_eq!(timer.slices_left(), 60);

        let mut events = Vec::new();
        assert_eq!(timer.update(10.0, &mut events), TimerOutcome::Running);
        assert_eq!(timer.slices_left(), 40);
        assert!(events.is_empty());
    }

    #[test]
    fn test_warning_fires_once_per_reset() {
        let mut timer = CountdownTimer::new(0.0);
        let mut events = Vec::new();

        timer.update(25.5, &mut events);
        assert_eq!(events, vec![GameEvent::Sound(SoundCue::TimeRunningOut)]);
        assert_eq!(timer.tier(), TimerTier::Warning);

        events.clear();
        timer.update(26.0, &mut events);
        assert!(events.is_empty(), "warning must be one-shot");

        // Reset re-arms it
        timer.reset(30.0);
        assert!(!timer.warning_played());
        assert_eq!(timer.tier(), TimerTier::Normal);
        assert_eq!(timer.slices_left(), 60);
        timer.update(55.5, &mut events);
        assert_eq!(events, vec![GameEvent::Sound(SoundCue::TimeRunningOut)]);
    }

    #[test]
    fn test_expiry_is_repeatable() {
        let mut timer = CountdownTimer::new(0.0);
        let mut events = Vec::new();
        assert_eq!(timer.update(30.5, &mut events), TimerOutcome::Expired);
        assert_eq!(timer.update(30.6, &mut events), TimerOutcome::Expired);
        assert_eq!(timer.slices_left(), 0);
    }

    #[test]
    fn test_bar_pins_to_right_edge() {
        let mut timer = CountdownTimer::new(0.0);
        let mut events = Vec::new();

        // Full bar: no offset
        assert_eq!(timer.bar_x_offset(), 0.0);
        let full_scale = timer.bar_scale_x();

        timer.update(15.0, &mut events);
        assert_eq!(timer.slices_left(), 30);
        assert!((timer.bar_scale_x() - full_scale / 2.0).abs() < 1e-6);
        assert!((timer.bar_x_offset() - 30.0 / PIXELS_PER_UNIT).abs() < 1e-6);
    }
}
