//! Browser-facing bindings
//!
//! A thin wasm-bindgen facade over the engine plus its persisted
//! surroundings. The JavaScript host renders; this owns the state. Events
//! cross the boundary as a JSON array drained once per frame.

use wasm_bindgen::prelude::*;

use crate::highscores::HighScore;
use crate::platform;
use crate::settings::Settings;
use crate::sim::{CardinalInput, Difficulty, GameEvent, GameState};

#[wasm_bindgen]
pub struct MindFlipDash {
    state: GameState,
    settings: Settings,
    high: HighScore,
}

#[wasm_bindgen]
impl MindFlipDash {
    /// Load persisted settings and record, seed the RNG from the clock.
    #[wasm_bindgen(constructor)]
    pub fn new() -> MindFlipDash {
        platform::init_logging();
        let settings = Settings::load();
        let high = HighScore::load();
        let seed = platform::now_ms() as u64;
        log::info!("Engine initialized with seed {}", seed);
        MindFlipDash {
            state: GameState::new(seed, high.value()),
            settings,
            high,
        }
    }

    /// Start a session with the persisted difficulty preference
    pub fn start(&mut self) {
        let difficulty = self.settings.difficulty;
        self.state.start(difficulty, platform::now_ms());
    }

    /// Start a session with an explicit difficulty name. Unknown names fall
    /// back to easy.
    pub fn start_with_difficulty(&mut self, difficulty: &str) {
        let difficulty = Difficulty::from_str(difficulty).unwrap_or_default();
        self.state.start(difficulty, platform::now_ms());
    }

    pub fn tick(&mut self, now_ms: f64) {
        self.state.tick(now_ms);
    }

    /// Feed a `KeyboardEvent.code`. Non-arrow keys are ignored.
    pub fn submit_key(&mut self, code: &str, now_ms: f64) {
        if let Some(key) = CardinalInput::from_key_code(code) {
            self.state.submit_input(key, now_ms);
        }
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Drain pending events as a JSON array, persisting the record when a
    /// new high went by.
    pub fn drain_events(&mut self) -> String {
        let events = self.state.drain_events();
        for event in &events {
            if let GameEvent::Success {
                score,
                new_high: true,
            } = event
            {
                if self.high.observe(*score) {
                    self.high.save();
                }
            }
        }
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn high_score(&self) -> u32 {
        self.state.high_score
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Short name of the live arrow ("up", "ne", ...) for asset lookup,
    /// or `None` when no round is running
    pub fn current_direction(&self) -> Option<String> {
        self.state.current.map(|d| d.as_str().to_string())
    }

    /// Normalized remaining time for the timer bar
    pub fn remaining(&self, now_ms: f64) -> f32 {
        self.state.remaining(now_ms)
    }

    // === Settings, persisted on every write ===

    pub fn difficulty(&self) -> String {
        self.settings.difficulty.as_str().to_string()
    }

    /// Advance easy -> medium -> hard -> easy, as the settings screen does
    pub fn cycle_difficulty(&mut self) -> String {
        self.settings.difficulty = self.settings.difficulty.next();
        self.settings.save();
        self.difficulty()
    }

    pub fn music(&self) -> bool {
        self.settings.music
    }

    pub fn set_music(&mut self, on: bool) {
        self.settings.music = on;
        self.settings.save();
    }

    pub fn sfx(&self) -> bool {
        self.settings.sfx
    }

    pub fn set_sfx(&mut self, on: bool) {
        self.settings.sfx = on;
        self.settings.save();
    }
}
