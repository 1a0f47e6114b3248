//! Mind Flip Dash - a reflex arrow-matching arcade game
//!
//! Core modules:
//! - `sim`: Deterministic gameplay state machine (directions, timing, rounds)
//! - `settings`: Player preferences persisted to LocalStorage
//! - `highscores`: Persisted high score record
//! - `platform`: Browser/native platform abstraction
//! - `wasm_api`: wasm-bindgen facade for the JavaScript host

pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use highscores::HighScore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Starting time budget per round (milliseconds)
    pub const BASE_TIME_MS: u32 = 2000;
    /// Floor for the time budget - rounds never get faster than this
    pub const MIN_TIME_MS: u32 = 700;
    /// Budget reduction applied per score step
    pub const DECREASE_PER_STEP_MS: u32 = 100;
    /// Number of successful matches per budget reduction step
    pub const SCORE_STEP: u32 = 5;

    /// Remaining-time threshold below which the host should blink the
    /// timer bar. Presentation-only - the engine never acts on it.
    pub const LOW_TIME_WARN_MS: u32 = 500;
}
