//! Best score across runs
//!
//! Persisted to LocalStorage as a single scalar.

use serde::{Deserialize, Serialize};

/// The best score seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "rooftopRushHighScore";

    pub fn new(best: u64) -> Self {
        Self { best }
    }

    /// Record a finished run's score. Returns true if it beat the best.
    pub fn record(&mut self, score: u64) -> bool {
        if score > self.best {
            log::info!("New high score: {} (was {})", score, self.best);
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Stored form: the bare decimal score
    pub fn to_stored(&self) -> String {
        self.best.to_string()
    }

    /// Parse the stored value
    pub fn from_stored(raw: &str) -> Option<Self> {
        raw.trim().parse::<u64>().ok().map(Self::new)
    }

    /// Load the high score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(raw)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(score) = Self::from_stored(&raw) {
                    log::info!("Loaded high score {}", score.best);
                    return score;
                }
                log::warn!("Discarding unreadable high score {raw:?}");
            }
        }

        log::info!("No high score found, starting fresh");
        Self::default()
    }

    /// Save the high score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if storage.set_item(Self::STORAGE_KEY, &self.to_stored()).is_err() {
                log::warn!("Failed to save high score");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_only_strictly_higher() {
        let mut hs = HighScore::new(5);
        assert!(!hs.record(3));
        assert!(!hs.record(5));
        assert_eq!(hs.best, 5);
        assert!(hs.record(6));
        assert_eq!(hs.best, 6);
    }

    #[test]
    fn test_zero_never_records() {
        let mut hs = HighScore::default();
        assert!(!hs.record(0));
    }

    #[test]
    fn test_from_stored() {
        assert_eq!(HighScore::from_stored("7"), Some(HighScore::new(7)));
        assert_eq!(HighScore::from_stored(" 19\n"), Some(HighScore::new(19)));
        assert_eq!(HighScore::from_stored(r#"{"best":12}"#), None);
        assert_eq!(HighScore::from_stored("nope"), None);
        assert_eq!(HighScore::from_stored("-3"), None);
    }

    #[test]
    fn test_stored_as_bare_integer() {
        let hs = HighScore::new(12);
        assert_eq!(hs.to_stored(), "12");
        assert_eq!(HighScore::from_stored(&hs.to_stored()), Some(hs));
        // serde form is the scalar too
        assert_eq!(serde_json::to_string(&hs).unwrap(), "12");
        assert_eq!(serde_json::from_str::<HighScore>("12").unwrap(), hs);
    }
}
