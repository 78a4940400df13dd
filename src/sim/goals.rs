//! The five goal zones along the top row
//!
//! Occupancy is set exactly once per zone per session and only cleared by a
//! full session restart. Indexing out of range is a caller bug and panics.

use crate::consts::*;
use glam::Vec2;

pub const GOAL_COUNT: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct GoalZone {
    pub index: usize,
    occupied: bool,
}

impl GoalZone {
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }
}

#[derive(Debug, Clone)]
pub struct Goals([GoalZone; GOAL_COUNT]);

impl Default for Goals {
    fn default() -> Self {
        Self::new()
    }
}

impl Goals {
    pub fn new() -> Self {
        Self(std::array::from_fn(|index| GoalZone {
            index,
            occupied: false,
        }))
    }

    /// World x of a goal slot
    pub fn x_of(index: usize) -> f32 {
        FIRST_GOAL_X + GOAL_SPACING * index as f32
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.0[index].occupied
    }

    pub fn occupy(&mut self, index: usize) {
        debug_assert!(!self.0[index].occupied, "goal {index} occupied twice");
        self.0[index].occupied = true;
    }

    pub fn filled_count(&self) -> u32 {
        self.0.iter().filter(|zone| zone.occupied).count() as u32
    }

    /// Which slot's tolerance window contains this x, if any
    pub fn slot_at_x(x: f32) -> Option<usize> {
        (0..GOAL_COUNT).find(|&index| {
            let goal_x = Self::x_of(index);
            x >= goal_x - GOAL_X_TOLERANCE && x <= goal_x + GOAL_X_TOLERANCE
        })
    }

    /// Would an upward hop from this position land in an occupied goal?
    pub fn blocks_hop_from(&self, pos: Vec2) -> bool {
        if pos.y < GOAL_ROW_THRESHOLD {
            return false;
        }
        match Self::slot_at_x(pos.x) {
            Some(index) => self.is_occupied(index),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_positions() {
        assert_eq!(Goals::x_of(0), -5.5);
        assert_eq!(Goals::x_of(4), 6.5);
        assert_eq!(Goals::slot_at_x(-5.5), Some(0));
        assert_eq!(Goals::slot_at_x(6.9), Some(4));
        assert_eq!(Goals::slot_at_x(0.0), None);
    }

    #[test]
    fn test_tolerance_boundaries_inclusive() {
        for index in 0..GOAL_COUNT {
            let x = Goals::x_of(index);
            assert_eq!(Goals::slot_at_x(x - GOAL_X_TOLERANCE), Some(index));
            assert_eq!(Goals::slot_at_x(x + GOAL_X_TOLERANCE), Some(index));
            assert_eq!(Goals::slot_at_x(x - GOAL_X_TOLERANCE - 0.01), None);
            assert_eq!(Goals::slot_at_x(x + GOAL_X_TOLERANCE + 0.01), None);
        }
    }

    #[test]
    fn test_blocks_hop_only_when_occupied_and_at_threshold() {
        let mut goals = Goals::new();
        let below = Vec2::new(-5.5, 4.0);
        let at_row = Vec2::new(-5.5, 5.0);

        assert!(!goals.blocks_hop_from(at_row));
        goals.occupy(0);
        assert!(goals.blocks_hop_from(at_row));
        assert!(!goals.blocks_hop_from(below), "only the home row is gated");
        assert!(!goals.blocks_hop_from(Vec2::new(-2.5, 5.0)), "open slot");
    }

    #[test]
    fn test_filled_count() {
        let mut goals = Goals::new();
        assert_eq!(goals.filled_count(), 0);
        goals.occupy(2);
        goals.occupy(4);
        assert_eq!(goals.filled_count(), 2);
    }
}
