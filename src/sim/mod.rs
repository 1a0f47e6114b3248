//! Deterministic gameplay module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Wall-clock time arrives via `now_ms` parameters only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod direction;
pub mod state;
pub mod tick;
pub mod timing;

pub use direction::{CardinalInput, Difficulty, Direction, CARDINAL_POOL, DIAGONAL_POOL};
pub use state::{GameEvent, GamePhase, GameState};
pub use timing::{remaining_fraction, time_budget_ms};
