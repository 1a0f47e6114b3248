//! Round engine state and observable events

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::direction::{Difficulty, Direction};
use crate::consts::BASE_TIME_MS;

/// Current phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session in progress
    Idle,
    /// A round is live and the timer is running
    Running,
    /// Session ended (wrong key or timeout); restart via `start()`
    GameOver,
}

/// Observable state changes the host must render.
///
/// The engine appends these to an internal queue; the host drains them once
/// per frame with [`GameState::drain_events`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new arrow is live
    DirectionChanged { direction: Direction },
    /// Normalized remaining time for the current round, for the timer bar
    Progress { remaining: f32 },
    /// Correct key; `new_high` asks the host to persist the record
    Success { score: u32, new_high: bool },
    /// Wrong key or timeout - the session is over
    RoundExpired { final_score: u32 },
}

/// Complete round engine state.
///
/// Deterministic per seed: identical call sequences with identical `now_ms`
/// samples produce identical states and events.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Difficulty the current session was started with
    pub difficulty: Difficulty,
    /// Session phase
    pub phase: GamePhase,
    /// Live arrow facing; `Some` exactly while `phase == Running`
    pub current: Option<Direction>,
    /// Correct matches this session
    pub score: u32,
    /// Best score ever seen; never decreases. The host persists it.
    pub high_score: u32,
    /// Milliseconds allowed for the current round
    pub time_budget_ms: u32,
    /// Wall-clock stamp of the current round's start
    pub round_start_ms: f64,
    /// Seeded RNG for direction draws
    pub(crate) rng: Pcg32,
    /// Events not yet drained by the host
    pub(crate) pending_events: Vec<GameEvent>,
}

impl GameState {
    /// Create an idle engine. `high_score` is the persisted record loaded by
    /// the host at session start.
    pub fn new(seed: u64, high_score: u32) -> Self {
        Self {
            difficulty: Difficulty::default(),
            phase: GamePhase::Idle,
            current: None,
            score: 0,
            high_score,
            time_budget_ms: BASE_TIME_MS,
            round_start_ms: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            pending_events: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take all events emitted since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.pending_events.push(event);
    }
}
