//! High score persistence
//!
//! One best score per machine. Browser builds keep it in LocalStorage,
//! native builds in a small JSON file next to the binary. A corrupt or
//! missing payload just means starting from zero.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct HighScoreData {
    best: u32,
}

/// Loaded-once store; [`record`](HighScoreStore::record) persists on every
/// improvement so a crash never loses the score
#[derive(Debug)]
pub struct HighScoreStore {
    data: HighScoreData,
    #[cfg(not(target_arch = "wasm32"))]
    path: std::path::PathBuf,
}

impl HighScoreStore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "hopway_highscore";

    #[cfg(not(target_arch = "wasm32"))]
    const DEFAULT_PATH: &'static str = "hopway_highscore.json";

    pub fn high_score(&self) -> u32 {
        self.data.best
    }

    /// Keep the score if it beats the stored best
    pub fn record(&mut self, score: u32) {
        if score > self.data.best {
            self.data.best = score;
            self.save();
        }
    }

    fn parse(json: &str) -> Option<HighScoreData> {
        match serde_json::from_str(json) {
            Ok(data) => Some(data),
            Err(err) => {
                log::warn!("Ignoring corrupt high score data: {err}");
                None
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let data = storage
            .and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten())
            .and_then(|json| Self::parse(&json))
            .unwrap_or_default();

        log::info!("High score loaded: {}", data.best);
        Self { data }
    }

    #[cfg(target_arch = "wasm32")]
    fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let (Some(storage), Ok(json)) = (storage, serde_json::to_string(&self.data)) {
            let _ = storage.set_item(Self::STORAGE_KEY, &json);
            log::info!("High score saved: {}", self.data.best);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::load_from(Self::DEFAULT_PATH)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: impl Into<std::path::PathBuf>) -> Self {
        let path = path.into();
        let data = std::fs::read_to_string(&path)
            .ok()
            .and_then(|json| Self::parse(&json))
            .unwrap_or_default();

        log::info!("High score loaded: {}", data.best);
        Self { data, path }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save(&self) {
        match serde_json::to_string(&self.data) {
            Ok(json) => {
                if let Err(err) = std::fs::write(&self.path, json) {
                    log::warn!("Failed to save high score: {err}");
                } else {
                    log::info!("High score saved: {}", self.data.best);
                }
            }
            Err(err) => log::warn!("Failed to encode high score: {err}"),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("hopway_test_{name}_{}.json", std::process::id()))
    }

    #[test]
    fn test_round_trips_through_the_file() {
        let path = temp_path("roundtrip");
        let _ = std::fs::remove_file(&path);

        let mut store = HighScoreStore::load_from(&path);
        assert_eq!(store.high_score(), 0);

        store.record(450);
        let reloaded = HighScoreStore::load_from(&path);
        assert_eq!(reloaded.high_score(), 450);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_lower_score_does_not_overwrite() {
        let path = temp_path("lower");
        let _ = std::fs::remove_file(&path);

        let mut store = HighScoreStore::load_from(&path);
        store.record(500);
        store.record(300);
        assert_eq!(store.high_score(), 500);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_payload_starts_fresh() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "not json at all").unwrap();

        let store = HighScoreStore::load_from(&path);
        assert_eq!(store.high_score(), 0);

        let _ = std::fs::remove_file(&path);
    }
}
