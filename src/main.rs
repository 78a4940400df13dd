//! Hopway entry point
//!
//! Native builds run a headless scripted session, which doubles as a smoke
//! test of the whole event pipeline: simulation, audio routing, HUD state,
//! and high score persistence. The rendering host lives elsewhere and links
//! the library crate directly.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Hopway (headless) starting...");

    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm build is a cdylib driven by the host page; nothing to do here
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use hopway::audio::{AudioDirector, AudioSink};
    use hopway::display::{digits, SCORE_DIGITS};
    use hopway::sim::{tick, GameEvent, GameWorld, TickInput};
    use hopway::HighScoreStore;

    const DT: f32 = 1.0 / 60.0;

    /// Backend that just logs what it would play
    struct LoggingSink;

    impl AudioSink for LoggingSink {
        fn play_clip(&mut self, name: &str) {
            log::info!("sfx: {name}");
        }
        fn play_music(&mut self, name: &str, looped: bool) {
            log::info!("music: {name} (looped: {looped})");
        }
        fn stop_music(&mut self) {
            log::info!("music stopped");
        }
    }

    pub fn run() {
        let mut store = HighScoreStore::load();
        let mut world = GameWorld::new(store.high_score());
        let director = AudioDirector::new();
        let mut sink = LoggingSink;

        // A short scripted run: hop up to the first river row, sit there
        // until the timer runs the session out
        let script = build_script();
        let mut frame = 0usize;

        loop {
            // Past the script's end, keep mashing so a game over restarts
            let input = script.get(frame).copied().unwrap_or(TickInput {
                any_key: true,
                ..TickInput::default()
            });
            let events = tick(&mut world, &input, DT);
            frame += 1;

            for event in &events {
                director.handle(event, &mut sink);
                if let GameEvent::HighScoreChanged(score) = event {
                    store.record(*score);
                }
            }

            if events.contains(&GameEvent::SessionRestarted) || frame > 60 * 120 {
                break;
            }
        }

        log::info!(
            "session ended after {frame} frames, score {} (readout {:?}), high score {}",
            world.session.score(),
            digits::<SCORE_DIGITS>(world.session.score()),
            store.high_score()
        );
    }

    /// Hop up once per second for six rows, then mash keys so the game over
    /// screen restarts once it appears
    fn build_script() -> Vec<TickInput> {
        let mut script = vec![TickInput::default(); 60 * 20];
        for hop in 0..6 {
            script[10 + hop * 60].up = true;
        }
        for input in script.iter_mut().skip(60 * 10) {
            input.any_key = true;
        }
        script
    }
}
