//! Event-to-clip routing for sound and music
//!
//! The simulation only names cues; this maps them onto clip names and hands
//! them to whatever backend the host provides. A table slot left empty is a
//! soft failure: the cue is logged and dropped, never an error.

use crate::sim::events::{GameEvent, MusicTrack, SoundCue};
use crate::sim::goals::GOAL_COUNT;

/// Playback backend provided by the host platform
pub trait AudioSink {
    fn play_clip(&mut self, name: &str);
    /// Looping is the backend's job; `looped = false` tracks are expected to
    /// fall through to the main theme when they end
    fn play_music(&mut self, name: &str, looped: bool);
    fn stop_music(&mut self);
}

/// Clip tables for every cue the simulation can emit
pub struct AudioDirector {
    hop: Option<String>,
    drown: Option<String>,
    die_hazard: Option<String>,
    reached_home: Option<String>,
    time_running_out: Option<String>,
    lap_milestone: Option<String>,
    intro: Option<String>,
    main_theme: Option<String>,
    game_over: Option<String>,
    level_complete: Option<String>,
    respawn: Option<String>,
    /// One track per filled-goal count, indexed by `goals_filled - 1`
    by_goals_filled: [Option<String>; GOAL_COUNT],
}

impl Default for AudioDirector {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioDirector {
    /// The standard clip set; hosts can rename entries before use
    pub fn new() -> Self {
        Self {
            hop: Some("hop".into()),
            drown: Some("plunk".into()),
            die_hazard: Some("squash".into()),
            reached_home: Some("home".into()),
            time_running_out: Some("time-low".into()),
            lap_milestone: Some("engine-rev".into()),
            intro: Some("music/intro".into()),
            main_theme: Some("music/main".into()),
            game_over: Some("music/game-over".into()),
            level_complete: Some("music/level-complete".into()),
            respawn: Some("music/respawn".into()),
            by_goals_filled: [
                Some("music/goals-1".into()),
                Some("music/goals-2".into()),
                Some("music/goals-3".into()),
                Some("music/goals-4".into()),
                None,
            ],
        }
    }

    /// Route one simulation event to the backend. Non-audio events are
    /// ignored so the whole tick output can be fed through unfiltered.
    pub fn handle(&self, event: &GameEvent, sink: &mut dyn AudioSink) {
        match event {
            GameEvent::Sound(cue) => self.play_cue(*cue, sink),
            GameEvent::Music(track) => self.play_track(*track, sink),
            GameEvent::MusicStopped => sink.stop_music(),
            _ => {}
        }
    }

    fn play_cue(&self, cue: SoundCue, sink: &mut dyn AudioSink) {
        let clip = match cue {
            SoundCue::Hop => &self.hop,
            SoundCue::Drown => &self.drown,
            SoundCue::DieHazard => &self.die_hazard,
            SoundCue::ReachedHome => &self.reached_home,
            SoundCue::TimeRunningOut => &self.time_running_out,
            SoundCue::LapMilestone => &self.lap_milestone,
        };
        match clip {
            Some(name) => sink.play_clip(name),
            None => log::warn!("no clip assigned for {cue:?}"),
        }
    }

    fn play_track(&self, track: MusicTrack, sink: &mut dyn AudioSink) {
        let (clip, looped) = match track {
            MusicTrack::Intro => (&self.intro, false),
            MusicTrack::MainTheme => (&self.main_theme, true),
            MusicTrack::GameOver => (&self.game_over, false),
            MusicTrack::LevelComplete => (&self.level_complete, false),
            MusicTrack::RespawnAfterDeath => (&self.respawn, false),
            MusicTrack::ByGoalsFilled(n) => {
                let index = (n as usize).saturating_sub(1).min(GOAL_COUNT - 1);
                (&self.by_goals_filled[index], false)
            }
        };
        match clip {
            Some(name) => sink.play_music(name, looped),
            None => log::warn!("no track assigned for {track:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        clips: Vec<String>,
        music: Vec<(String, bool)>,
        stops: u32,
    }

    impl AudioSink for RecordingSink {
        fn play_clip(&mut self, name: &str) {
            self.clips.push(name.to_string());
        }
        fn play_music(&mut self, name: &str, looped: bool) {
            self.music.push((name.to_string(), looped));
        }
        fn stop_music(&mut self) {
            self.stops += 1;
        }
    }

    #[test]
    fn test_routes_cues_and_tracks() {
        let director = AudioDirector::new();
        let mut sink = RecordingSink::default();

        director.handle(&GameEvent::Sound(SoundCue::Hop), &mut sink);
        director.handle(&GameEvent::MusicStopped, &mut sink);
        director.handle(&GameEvent::Music(MusicTrack::ByGoalsFilled(2)), &mut sink);
        director.handle(&GameEvent::HighScoreChanged(10), &mut sink);

        assert_eq!(sink.clips, vec!["hop"]);
        assert_eq!(sink.stops, 1);
        assert_eq!(sink.music, vec![("music/goals-2".to_string(), false)]);
    }

    #[test]
    fn test_missing_clip_is_a_no_op() {
        let mut director = AudioDirector::new();
        director.hop = None;
        let mut sink = RecordingSink::default();

        director.handle(&GameEvent::Sound(SoundCue::Hop), &mut sink);
        assert!(sink.clips.is_empty());
    }
}
