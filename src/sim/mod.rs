//! Deterministic game simulation
//!
//! Everything in here is pure state plus arithmetic: no platform calls, no
//! wall clock, no audio. The host drives [`tick::tick`] with real elapsed
//! time and routes the returned [`events::GameEvent`]s to its backends,
//! which keeps replays and tests exact.

pub mod events;
pub mod goals;
pub mod lane;
pub mod player;
pub mod session;
pub mod sinkers;
pub mod state;
pub mod tick;
pub mod timer;

pub use events::{GameEvent, MusicTrack, SoundCue};
pub use state::GameWorld;
pub use tick::{tick, TickInput};
