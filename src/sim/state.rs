//! World state container and the default level layout
//!
//! [`GameWorld`] owns every simulated entity. It is a plain value: callers
//! construct it, feed it to [`crate::sim::tick::tick`], and read whatever
//! they need for rendering. Nothing here touches platform APIs.

use crate::consts::*;
use crate::sim::goals::Goals;
use crate::sim::lane::{LaneObject, LapReaction, SurfaceKind};
use crate::sim::player::PlayerAgent;
use crate::sim::session::GameSession;
use crate::sim::sinkers::SinkerGroup;
use crate::sim::timer::CountdownTimer;

/// Rows where standing on bare ground means drowning. The goal row counts:
/// landing there outside a goal slot is water.
pub fn is_water_row(row: i32) -> bool {
    (1..=GOAL_ROW).contains(&row)
}

#[derive(Debug, Clone)]
pub struct GameWorld {
    pub session: GameSession,
    pub player: PlayerAgent,
    pub goals: Goals,
    pub lanes: Vec<LaneObject>,
    pub sinkers: Vec<SinkerGroup>,
    pub timer: CountdownTimer,
    /// Gameplay clock; frozen once the session is over
    pub clock: f32,
    /// Wall clock that keeps running through game over, for the restart grace
    pub unscaled_clock: f32,
    /// Set until the first tick announces the intro music
    pub intro_pending: bool,
}

impl GameWorld {
    pub fn new(high_score: u32) -> Self {
        Self {
            session: GameSession::new(high_score),
            player: PlayerAgent::new(),
            goals: Goals::new(),
            lanes: default_lanes(),
            sinkers: default_sinkers(),
            timer: CountdownTimer::new(0.0),
            clock: 0.0,
            unscaled_clock: 0.0,
            intro_pending: true,
        }
    }

    /// Fresh session on the same machine; only the high score survives
    pub fn restart(&mut self) {
        *self = Self::new(self.session.high_score());
    }
}

/// Standard board: five traffic rows below the median, five river rows above
fn default_lanes() -> Vec<LaneObject> {
    let mut lanes = Vec::new();
    let mut id = 0;
    let mut push = |lanes: &mut Vec<LaneObject>,
                    row: i32,
                    kind: SurfaceKind,
                    xs: &[f32],
                    speed: f32,
                    half_width: f32,
                    reaction: LapReaction| {
        for &x in xs {
            lanes.push(LaneObject::new(id, row, kind, x, speed, half_width, reaction));
            id += 1;
        }
    };

    // Traffic lanes
    push(&mut lanes, -5, SurfaceKind::Hazard, &[-6.0, -1.0, 4.0], -30.0, 0.5, LapReaction::None);
    push(&mut lanes, -4, SurfaceKind::Hazard, &[-4.0, 1.0, 6.0], 40.0, 0.5, LapReaction::None);
    push(&mut lanes, -3, SurfaceKind::Hazard, &[-5.0, 3.0], -50.0, 0.5, LapReaction::None);
    // The race car starts slow and pins to full speed after six laps
    push(
        &mut lanes,
        -2,
        SurfaceKind::Hazard,
        &[0.0],
        40.0,
        0.5,
        LapReaction::SpeedUp {
            laps_before_speedup: 6,
            fast_speed: 120.0,
        },
    );
    push(&mut lanes, -1, SurfaceKind::Hazard, &[-3.0, 5.0], -35.0, 1.0, LapReaction::None);

    // River lanes
    push(
        &mut lanes,
        1,
        SurfaceKind::SinkingCarrier { group: 0 },
        &[-6.0, -1.0, 4.0],
        -30.0,
        1.0,
        LapReaction::None,
    );
    push(&mut lanes, 2, SurfaceKind::Carrier, &[-5.0, 0.0, 5.0], 25.0, 1.5, LapReaction::None);
    push(&mut lanes, 3, SurfaceKind::Carrier, &[-4.0, 4.0], 55.0, 2.5, LapReaction::None);
    push(
        &mut lanes,
        4,
        SurfaceKind::SinkingCarrier { group: 1 },
        &[-7.0, -2.0, 3.0],
        -40.0,
        1.0,
        LapReaction::None,
    );
    push(&mut lanes, 5, SurfaceKind::Carrier, &[-6.0, 0.0, 6.0], 35.0, 2.0, LapReaction::None);

    lanes
}

fn default_sinkers() -> Vec<SinkerGroup> {
    vec![
        // Diving group: two swim frames, then the five-phase dive
        SinkerGroup::new(true, 2, vec![16, 16, 32, 16, 16], 24),
        // Steady group; never goes under
        SinkerGroup::new(false, 2, Vec::new(), 0),
    ]
}
