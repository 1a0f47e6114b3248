//! Persisted high score record
//!
//! A single integer in LocalStorage. The engine arbitrates in memory and
//! reports `new_high` through its events; the host owns this record and
//! persists it on each new record. It never decreases.

use serde::{Deserialize, Serialize};

/// The best score achieved on this device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScore(pub u32);

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "mfd_high";

    pub fn value(self) -> u32 {
        self.0
    }

    /// Raise the record if `score` strictly exceeds it. Returns whether a
    /// new record was set.
    pub fn observe(&mut self, score: u32) -> bool {
        if score > self.0 {
            self.0 = score;
            true
        } else {
            false
        }
    }

    /// Load the record from LocalStorage (WASM only). Missing or malformed
    /// values read as 0.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(raw)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(value) = raw.parse::<u32>() {
                    log::info!("Loaded high score: {}", value);
                    return Self(value);
                }
                log::warn!("Ignoring malformed high score {:?}", raw);
            }
        }

        log::info!("No high score found, starting fresh");
        Self::default()
    }

    /// Save the record to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.0.to_string());
            log::info!("High score saved ({})", self.0);
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_raises_on_strict_increase() {
        let mut high = HighScore::default();
        assert!(high.observe(1));
        assert_eq!(high.value(), 1);
        assert!(high.observe(5));
        assert_eq!(high.value(), 5);
    }

    #[test]
    fn test_observe_never_decreases() {
        let mut high = HighScore(10);
        assert!(!high.observe(10));
        assert!(!high.observe(3));
        assert!(!high.observe(0));
        assert_eq!(high.value(), 10);
    }
}
