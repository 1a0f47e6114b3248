//! Game settings and preferences
//!
//! Persisted to LocalStorage as individual string-typed scalars: booleans
//! as `"true"`/`"false"`, the difficulty as its lowercase name.

use serde::{Deserialize, Serialize};

use crate::sim::Difficulty;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Difficulty the next session starts with
    pub difficulty: Difficulty,
    /// Background music toggle
    pub music: bool,
    /// Sound effects toggle
    pub sfx: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            music: true,
            sfx: true,
        }
    }
}

impl Settings {
    /// LocalStorage keys (used only in wasm32)
    #[allow(dead_code)]
    const KEY_DIFFICULTY: &'static str = "mfd_difficulty";
    #[allow(dead_code)]
    const KEY_MUSIC: &'static str = "mfd_music";
    #[allow(dead_code)]
    const KEY_SFX: &'static str = "mfd_sfx";

    /// Load settings from LocalStorage (WASM only). Missing or malformed
    /// values fall back to the field default.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::info!("No LocalStorage, using default settings");
            return Self::default();
        };

        let defaults = Self::default();
        let read = |key: &str| storage.get_item(key).ok().flatten();

        let settings = Self {
            difficulty: read(Self::KEY_DIFFICULTY)
                .and_then(|s| Difficulty::from_str(&s))
                .unwrap_or(defaults.difficulty),
            music: read(Self::KEY_MUSIC)
                .map(|s| parse_flag(&s))
                .unwrap_or(defaults.music),
            sfx: read(Self::KEY_SFX)
                .map(|s| parse_flag(&s))
                .unwrap_or(defaults.sfx),
        };
        log::info!("Loaded settings from LocalStorage");
        settings
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::KEY_DIFFICULTY, self.difficulty.as_str());
            let _ = storage.set_item(Self::KEY_MUSIC, flag_str(self.music));
            let _ = storage.set_item(Self::KEY_SFX, flag_str(self.sfx));
            log::info!("Settings saved");
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

/// Parse a stored boolean; anything but `"true"` reads as off
fn parse_flag(s: &str) -> bool {
    s == "true"
}

fn flag_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.difficulty, Difficulty::Easy);
        assert!(settings.music);
        assert!(settings.sfx);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("TRUE"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("1"));
    }

    #[test]
    fn test_flag_round_trip() {
        assert!(parse_flag(flag_str(true)));
        assert!(!parse_flag(flag_str(false)));
    }
}
