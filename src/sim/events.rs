//! Events emitted by the simulation for external collaborators
//!
//! The core never plays audio or touches a display; it returns these values
//! from `tick` and the shell routes them (see `crate::audio`).

/// Fire-and-forget sound effect triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Player started a hop
    Hop,
    /// Player drowned (water landing or submerged carrier)
    Drown,
    /// Player hit a hazard, rode off-screen, or ran out of time
    DieHazard,
    /// Player arrived at an open goal
    ReachedHome,
    /// Countdown dropped to the warning threshold
    TimeRunningOut,
    /// The race car finished a lap at full speed
    LapMilestone,
}

/// Background music selection; non-looping tracks fall back to the main
/// theme when they end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    Intro,
    MainTheme,
    GameOver,
    LevelComplete,
    RespawnAfterDeath,
    /// Track keyed by how many goals are filled (1..=4 during a level)
    ByGoalsFilled(u32),
}

/// Everything the simulation reports outward in a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Sound(SoundCue),
    Music(MusicTrack),
    MusicStopped,
    /// Bonus time slices should be shown on the display
    BonusTimeShown(u32),
    BonusTimeHidden,
    TimeOverShown,
    TimeOverHidden,
    /// The high score grew; persist the new value
    HighScoreChanged(u32),
    /// The whole world was reinitialized
    SessionRestarted,
}
