//! Player agent: hop movement, carrier riding, and the death state machine
//!
//! Positions are stored carrier-relative while riding (the agent's world x is
//! `carrier.x + offset`, recomputed per query), so horizontal hops on a
//! moving log interpolate in the log's frame just like everything else.

use glam::Vec2;

use crate::consts::*;
use crate::sim::events::{GameEvent, SoundCue};
use crate::sim::goals::Goals;
use crate::sim::lane::LaneObject;
use crate::sim::session::{GameSession, SessionState};
use crate::sim::tick::TickInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Ready,
    Hopping,
    Dead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, 1.0),
            Direction::Down => Vec2::new(0.0, -1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Which cue plays for a death; the session logic is cause-agnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    Hazard,
    Drown,
}

/// Riding relation: lane object id plus the frozen horizontal offset
#[derive(Debug, Clone, Copy)]
struct CarrierRef {
    lane_id: u32,
    // Offset lives in local_pos.x; kept as a named struct for clarity at the
    // attach/detach seams
}

#[derive(Debug, Clone)]
pub struct PlayerAgent {
    pub state: PlayerState,
    /// Deactivated on level complete and game over
    pub active: bool,
    pub heading: Direction,
    /// Carrier-relative while riding, world-absolute otherwise
    local_pos: Vec2,
    carrier: Option<CarrierRef>,
    hop_start: Vec2,
    hop_end: Vec2,
    hop_start_time: f32,
    death_cause: Option<DeathCause>,
    died_at: f32,
}

impl PlayerAgent {
    pub fn new() -> Self {
        Self {
            state: PlayerState::Ready,
            active: true,
            heading: Direction::Up,
            local_pos: Vec2::new(SPAWN_X, SPAWN_Y),
            carrier: None,
            hop_start: Vec2::ZERO,
            hop_end: Vec2::ZERO,
            hop_start_time: 0.0,
            death_cause: None,
            died_at: 0.0,
        }
    }

    /// World position; carrier-relative coordinates are resolved per query,
    /// so riders track their carrier without per-tick bookkeeping
    pub fn world_pos(&self, lanes: &[LaneObject]) -> Vec2 {
        match self.carrier {
            Some(carrier) => match lanes.iter().find(|lane| lane.id == carrier.lane_id) {
                Some(lane) => Vec2::new(lane.snapped_x() + self.local_pos.x, self.local_pos.y),
                None => self.local_pos,
            },
            None => self.local_pos,
        }
    }

    pub fn carrier_lane(&self) -> Option<u32> {
        self.carrier.map(|carrier| carrier.lane_id)
    }

    pub fn death_cause(&self) -> Option<DeathCause> {
        self.death_cause
    }

    pub fn died_at(&self) -> f32 {
        self.died_at
    }

    /// Become carrier-relative to the given lane, freezing the current
    /// world x as an offset
    pub fn attach(&mut self, lane: &LaneObject, world: Vec2) {
        self.local_pos = Vec2::new(world.x - lane.snapped_x(), world.y);
        self.carrier = Some(CarrierRef { lane_id: lane.id });
    }

    /// Freeze the carrier-relative offset into an absolute position
    pub fn detach(&mut self, lanes: &[LaneObject]) {
        self.local_pos = self.world_pos(lanes);
        self.carrier = None;
    }

    /// Resolve one edge-triggered directional command, if any applies.
    /// Priority and movement bounds follow the cabinet behavior; an upward
    /// hop into an occupied goal is rejected outright.
    pub fn handle_input(
        &mut self,
        input: &TickInput,
        goals: &Goals,
        lanes: &[LaneObject],
        now: f32,
        events: &mut Vec<GameEvent>,
    ) {
        if self.state != PlayerState::Ready {
            return;
        }
        let world = self.world_pos(lanes);

        if input.up && world.y <= TOP_BOUND {
            if goals.blocks_hop_from(world) {
                log::debug!("hop up rejected: goal above is occupied");
                return;
            }
            self.detach(lanes);
            self.start_hop(Direction::Up, now, events);
        } else if input.down && world.y >= BOTTOM_BOUND {
            self.detach(lanes);
            self.start_hop(Direction::Down, now, events);
        } else if input.right && world.x <= RIGHT_BOUND {
            self.start_hop(Direction::Right, now, events);
        } else if input.left && world.x >= LEFT_BOUND {
            self.start_hop(Direction::Left, now, events);
        }
    }

    fn start_hop(&mut self, direction: Direction, now: f32, events: &mut Vec<GameEvent>) {
        events.push(GameEvent::Sound(SoundCue::Hop));
        self.heading = direction;
        self.hop_start = self.local_pos;
        self.hop_end = self.local_pos + direction.unit();
        self.hop_start_time = now;
        self.state = PlayerState::Hopping;
    }

    /// Interpolate the hop; returns true when the hop just completed
    pub fn advance_hop(&mut self, now: f32) -> bool {
        let t = ((now - self.hop_start_time) / HOP_DURATION).clamp(0.0, 1.0);
        self.local_pos = self.hop_start.lerp(self.hop_end, t);
        t >= 1.0
    }

    /// Enter the death state; the session resolves it after the death
    /// animation elapses
    pub fn die(
        &mut self,
        cause: DeathCause,
        now: f32,
        session: &mut GameSession,
        events: &mut Vec<GameEvent>,
    ) {
        self.state = PlayerState::Dead;
        self.death_cause = Some(cause);
        self.died_at = now;
        session.state = SessionState::Dead;
        events.push(GameEvent::MusicStopped);
        events.push(GameEvent::Sound(match cause {
            DeathCause::Hazard => SoundCue::DieHazard,
            DeathCause::Drown => SoundCue::Drown,
        }));
    }

    /// Back to the spawn point, detached and ready
    pub fn respawn(&mut self) {
        self.carrier = None;
        self.local_pos = Vec2::new(SPAWN_X, SPAWN_Y);
        self.heading = Direction::Up;
        self.state = PlayerState::Ready;
        self.death_cause = None;
    }

    /// Teleport to an absolute position, dropping any carrier
    #[cfg(test)]
    pub(crate) fn place_at(&mut self, pos: Vec2) {
        self.carrier = None;
        self.local_pos = pos;
    }

    /// Riding off-screen kills and wraps to the mirrored edge
    pub fn check_offscreen(
        &mut self,
        lanes: &[LaneObject],
        now: f32,
        session: &mut GameSession,
        events: &mut Vec<GameEvent>,
    ) {
        if self.state == PlayerState::Dead {
            return;
        }
        let pos = self.world_pos(lanes);
        if pos.x < OFFSCREEN_LEFT || pos.x > OFFSCREEN_RIGHT {
            self.die(DeathCause::Hazard, now, session, events);
            // The corpse shows at the mirrored edge, no longer carried
            self.carrier = None;
            self.local_pos = pos;
            if pos.x < OFFSCREEN_LEFT {
                self.local_pos.x += SCREEN_WRAP_DISTANCE;
            } else {
                self.local_pos.x -= SCREEN_WRAP_DISTANCE;
            }
        }
    }
}

impl Default for PlayerAgent {
    fn default() -> Self {
        Self::new()
    }
}
