//! Fixed-order world update
//!
//! One call to [`tick`] advances the whole world by `dt` seconds and returns
//! every event the step produced. The order inside is load-bearing: input,
//! hop resolution, contact, death resolution, timer, schedules, lane motion,
//! and finally the submerged-rider check, so a raft that goes under this
//! tick drowns its rider this tick.

use crate::consts::*;
use crate::sim::events::{GameEvent, MusicTrack, SoundCue};
use crate::sim::goals::Goals;
use crate::sim::lane::SurfaceKind;
use crate::sim::player::{DeathCause, PlayerState};
use crate::sim::session::{DeathResolution, SessionState};
use crate::sim::state::{is_water_row, GameWorld};
use crate::sim::timer::TimerOutcome;

/// Edge-triggered input sampled for one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Any key at all; only consulted on the game over screen
    pub any_key: bool,
}

pub fn tick(world: &mut GameWorld, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if world.intro_pending {
        world.intro_pending = false;
        events.push(GameEvent::Music(MusicTrack::Intro));
    }

    world.unscaled_clock += dt;

    // Game over freezes the world; only the restart poll runs
    if world.session.state == SessionState::GameOver {
        let grace_over = match world.session.game_over_at() {
            Some(at) => world.unscaled_clock - at >= GAME_OVER_RESTART_GRACE,
            None => true,
        };
        if input.any_key && grace_over {
            world.restart();
            events.push(GameEvent::SessionRestarted);
        }
        return events;
    }

    world.clock += dt;

    if world.session.state == SessionState::Playing && world.player.active {
        world.player.handle_input(
            input,
            &world.goals,
            &world.lanes,
            world.clock,
            &mut events,
        );
    }

    if world.player.state == PlayerState::Hopping {
        let landed = world.player.advance_hop(world.clock);
        if landed {
            world.player.state = PlayerState::Ready;
            resolve_landing(world, &mut events);
        }
    }

    check_hazard_contact(world, &mut events);

    world
        .player
        .check_offscreen(&world.lanes, world.clock, &mut world.session, &mut events);

    // Death animation done: spend a life
    if world.session.state == SessionState::Dead
        && world.clock - world.player.died_at() >= DEATH_ANIM_DURATION
    {
        match world.session.resolve_death() {
            DeathResolution::Respawn => {
                world.session.respawn(
                    &mut world.player,
                    &mut world.timer,
                    world.clock,
                    &mut events,
                );
            }
            DeathResolution::OutOfLives => {
                world
                    .session
                    .game_over(&mut world.player, world.unscaled_clock, &mut events);
            }
        }
    }

    if world.session.state == SessionState::Playing && world.player.active {
        if world.timer.update(world.clock, &mut events) == TimerOutcome::Expired {
            world.session.show_time_over(&mut events);
            world.player.die(
                DeathCause::Hazard,
                world.clock,
                &mut world.session,
                &mut events,
            );
        }
    }

    if world.session.take_due_bonus_hide(world.clock) {
        events.push(GameEvent::BonusTimeHidden);
    }
    if world.session.take_due_restart(world.clock) {
        world.restart();
        events.push(GameEvent::SessionRestarted);
        return events;
    }

    for lane in &mut world.lanes {
        lane.advance(dt, &mut events);
    }
    for group in &mut world.sinkers {
        group.advance(dt);
    }

    check_submerged_rider(world, &mut events);

    events
}

/// A hop just finished; decide what the player is standing on
fn resolve_landing(world: &mut GameWorld, events: &mut Vec<GameEvent>) {
    let pos = world.player.world_pos(&world.lanes);
    let row = pos.y.round() as i32;

    if row == GOAL_ROW {
        match Goals::slot_at_x(pos.x) {
            // Arrival scores the goal bonus only; row progress never counts
            // the home row
            Some(slot) if !world.goals.is_occupied(slot) => {
                world.goals.occupy(slot);
                events.push(GameEvent::Sound(SoundCue::ReachedHome));
                world.session.on_goal_reached(
                    world.goals.filled_count(),
                    world.timer.slices_left(),
                    world.clock,
                    events,
                );
                if world.session.state == SessionState::Playing {
                    world.player.respawn();
                    world.timer.reset(world.clock);
                    world.session.reset_progress();
                } else {
                    world.player.active = false;
                }
            }
            // Between the homes, or into a filled one, is water
            _ => {
                world
                    .player
                    .die(DeathCause::Drown, world.clock, &mut world.session, events);
            }
        }
        return;
    }

    if is_water_row(row) {
        let carrier = world
            .lanes
            .iter()
            .find(|lane| lane.row == row && lane.is_carrier() && lane.contains(pos.x));
        match carrier {
            Some(lane) => {
                let lane = lane.clone();
                world.player.attach(&lane, pos);
            }
            None => {
                // Drowning forfeits the row: progress scores only on safe
                // landings
                world
                    .player
                    .die(DeathCause::Drown, world.clock, &mut world.session, events);
                return;
            }
        }
    }

    world.session.evaluate_progress(pos.y, events);
}

/// Vehicles kill on touch, mid-hop included
fn check_hazard_contact(world: &mut GameWorld, events: &mut Vec<GameEvent>) {
    if world.session.state != SessionState::Playing || !world.player.active {
        return;
    }
    if world.player.state == PlayerState::Dead {
        return;
    }
    let pos = world.player.world_pos(&world.lanes);
    let row = pos.y.round() as i32;
    let hit = world
        .lanes
        .iter()
        .any(|lane| lane.row == row && lane.kind == SurfaceKind::Hazard && lane.contains(pos.x));
    if hit {
        world
            .player
            .die(DeathCause::Hazard, world.clock, &mut world.session, events);
    }
}

/// Riding a raft whose group is fully under drowns immediately
fn check_submerged_rider(world: &mut GameWorld, events: &mut Vec<GameEvent>) {
    if world.player.state == PlayerState::Dead {
        return;
    }
    let Some(lane_id) = world.player.carrier_lane() else {
        return;
    };
    let Some(lane) = world.lanes.iter().find(|lane| lane.id == lane_id) else {
        return;
    };
    if let SurfaceKind::SinkingCarrier { group } = lane.kind {
        if world.sinkers[group].is_submerged() {
            world
                .player
                .die(DeathCause::Drown, world.clock, &mut world.session, events);
        }
    }
}
