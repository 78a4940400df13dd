//! Synchronized submerging carrier groups
//!
//! All rafts of a group share one clock, so every member swims and dives in
//! lockstep even after resurfacing. Swim frames cycle continuously; dives
//! follow a per-phase frame schedule, and the phase at index
//! [`SUBMERGED_PHASE`] drowns any rider.

use crate::consts::*;

/// Dive phase index when the group is completely underwater
pub const SUBMERGED_PHASE: usize = 2;

/// Animation phase reported to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkPhase {
    /// Cycling swim frame
    Swimming(usize),
    /// Index into the dive schedule
    Diving(usize),
}

#[derive(Debug, Clone)]
pub struct SinkerGroup {
    pub does_dive: bool,
    swim_frame_count: usize,
    /// Duration of each dive phase, in frames
    dive_durations: Vec<u32>,
    next_dive_start: f32,
    time_since_start: f32,
    phase: SinkPhase,
}

impl SinkerGroup {
    pub fn new(
        does_dive: bool,
        swim_frame_count: usize,
        dive_durations: Vec<u32>,
        first_dive_delay_frames: u32,
    ) -> Self {
        Self {
            does_dive,
            swim_frame_count,
            dive_durations,
            next_dive_start: first_dive_delay_frames as f32 / FRAMES_PER_SECOND,
            time_since_start: 0.0,
            phase: SinkPhase::Swimming(0),
        }
    }

    /// Advance the shared clock and recompute the phase
    pub fn advance(&mut self, dt: f32) {
        self.time_since_start += dt;

        self.phase = if self.does_dive && self.time_since_start >= self.next_dive_start {
            let frames =
                (FRAMES_PER_SECOND * (self.time_since_start - self.next_dive_start)) as u32;
            match dive_phase(frames, &self.dive_durations) {
                Some(index) => SinkPhase::Diving(index),
                None => {
                    // Dive finished: schedule the next one and swim this tick
                    self.next_dive_start = self.time_since_start + TIME_BETWEEN_DIVES;
                    SinkPhase::Swimming(self.swim_frame())
                }
            }
        } else {
            SinkPhase::Swimming(self.swim_frame())
        };
    }

    fn swim_frame(&self) -> usize {
        (self.time_since_start / SWIM_FRAME_DURATION) as usize % self.swim_frame_count
    }

    pub fn phase(&self) -> SinkPhase {
        self.phase
    }

    /// Riders drown while this is true
    pub fn is_submerged(&self) -> bool {
        self.phase == SinkPhase::Diving(SUBMERGED_PHASE)
    }
}

/// Walk the dive schedule's cumulative durations; `None` means the dive is
/// finished
pub fn dive_phase(mut elapsed_frames: u32, durations: &[u32]) -> Option<usize> {
    for (index, &duration) in durations.iter().enumerate() {
        if elapsed_frames < duration {
            return Some(index);
        }
        elapsed_frames -= duration;
    }
    None
}
