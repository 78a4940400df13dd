//! Session state: score, lives, row progress, and the restart schedule
//!
//! The session is the single authority on scoring and life accounting.
//! Everything it decides is reported as [`GameEvent`]s; it never touches
//! audio or display backends directly.

use crate::consts::*;
use crate::sim::events::{GameEvent, MusicTrack};
use crate::sim::goals::GOAL_COUNT;
use crate::sim::player::PlayerAgent;
use crate::sim::timer::CountdownTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    /// Death animation running; resolved after [`DEATH_ANIM_DURATION`]
    Dead,
    LevelComplete,
    GameOver,
}

/// What a resolved death leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathResolution {
    Respawn,
    OutOfLives,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    pub state: SessionState,
    score: u32,
    high_score: u32,
    /// Extra lives beyond the one in play; game over when this goes negative
    extra_lives: i32,
    /// Highest row reached this life, in world y
    best_row: f32,
    /// Scheduled hide time for the bonus display, on the gameplay clock
    bonus_hide_at: Option<f32>,
    /// Scheduled level restart after the fifth goal, on the gameplay clock
    restart_at: Option<f32>,
    time_over_shown: bool,
    /// Unscaled-clock timestamp of the game over, for the restart grace
    game_over_at: Option<f32>,
}

impl GameSession {
    pub fn new(high_score: u32) -> Self {
        Self {
            state: SessionState::Playing,
            score: 0,
            high_score,
            extra_lives: STARTING_EXTRA_LIVES,
            best_row: SPAWN_Y,
            bonus_hide_at: None,
            restart_at: None,
            time_over_shown: false,
            game_over_at: None,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn extra_lives(&self) -> i32 {
        self.extra_lives
    }

    pub fn bonus_hide_at(&self) -> Option<f32> {
        self.bonus_hide_at
    }

    pub fn restart_at(&self) -> Option<f32> {
        self.restart_at
    }

    pub fn game_over_at(&self) -> Option<f32> {
        self.game_over_at
    }

    /// Add points and track the high score, announcing every improvement
    pub fn add_score(&mut self, points: u32, events: &mut Vec<GameEvent>) {
        self.score += points;
        if self.score > self.high_score {
            self.high_score = self.score;
            events.push(GameEvent::HighScoreChanged(self.high_score));
        }
    }

    /// Score forward row progress. A row counts once per life, and the
    /// median row is worth nothing.
    pub fn evaluate_progress(&mut self, y: f32, events: &mut Vec<GameEvent>) {
        if y - self.best_row >= 0.999 {
            self.best_row = y.round();
            if self.best_row != 0.0 {
                self.add_score(PROGRESS_POINTS, events);
            }
        }
    }

    /// A goal was just occupied; `goals_filled` counts it in
    pub fn on_goal_reached(
        &mut self,
        goals_filled: u32,
        slices_left: u32,
        now: f32,
        events: &mut Vec<GameEvent>,
    ) {
        self.add_score(
            GOAL_POINTS + TIME_SLICE_POINTS * slices_left,
            events,
        );

        // Showing a new bonus cancels and replaces any pending hide
        events.push(GameEvent::BonusTimeShown(slices_left));
        self.bonus_hide_at = Some(now + BONUS_DISPLAY_DURATION);

        if goals_filled as usize >= GOAL_COUNT {
            self.add_score(LEVEL_COMPLETE_POINTS, events);
            self.state = SessionState::LevelComplete;
            self.restart_at = Some(now + LEVEL_COMPLETE_RESTART_DELAY);
            events.push(GameEvent::Music(MusicTrack::LevelComplete));
            log::info!("level complete, score {}", self.score);
        } else {
            events.push(GameEvent::Music(MusicTrack::ByGoalsFilled(goals_filled)));
        }
    }

    /// The death animation finished; spend a life
    pub fn resolve_death(&mut self) -> DeathResolution {
        self.extra_lives -= 1;
        if self.extra_lives < 0 {
            DeathResolution::OutOfLives
        } else {
            DeathResolution::Respawn
        }
    }

    /// Forget row progress so the next climb scores again
    pub fn reset_progress(&mut self) {
        self.best_row = SPAWN_Y;
    }

    /// Put the player back in play after a death or time-out
    pub fn respawn(
        &mut self,
        player: &mut PlayerAgent,
        timer: &mut CountdownTimer,
        now: f32,
        events: &mut Vec<GameEvent>,
    ) {
        player.respawn();
        timer.reset(now);
        self.reset_progress();
        self.state = SessionState::Playing;
        if self.time_over_shown {
            self.time_over_shown = false;
            events.push(GameEvent::TimeOverHidden);
        }
        events.push(GameEvent::Music(MusicTrack::RespawnAfterDeath));
    }

    /// Show the time-over banner until the next respawn
    pub fn show_time_over(&mut self, events: &mut Vec<GameEvent>) {
        if !self.time_over_shown {
            self.time_over_shown = true;
            events.push(GameEvent::TimeOverShown);
        }
    }

    pub fn game_over(
        &mut self,
        player: &mut PlayerAgent,
        now_unscaled: f32,
        events: &mut Vec<GameEvent>,
    ) {
        self.state = SessionState::GameOver;
        self.game_over_at = Some(now_unscaled);
        player.active = false;
        // The end screen replaces every transient display
        if self.bonus_hide_at.take().is_some() {
            events.push(GameEvent::BonusTimeHidden);
        }
        if self.time_over_shown {
            self.time_over_shown = false;
            events.push(GameEvent::TimeOverHidden);
        }
        events.push(GameEvent::Music(MusicTrack::GameOver));
        log::info!("game over, final score {}", self.score);
    }

    /// Consume the bonus-display hide if it is due
    pub fn take_due_bonus_hide(&mut self, now: f32) -> bool {
        match self.bonus_hide_at {
            Some(due) if now >= due => {
                self.bonus_hide_at = None;
                true
            }
            _ => false,
        }
    }

    /// Consume the level-restart schedule if it is due
    pub fn take_due_restart(&mut self, now: f32) -> bool {
        match self.restart_at {
            Some(due) if now >= due => {
                self.restart_at = None;
                true
            }
            _ => false,
        }
    }
}
