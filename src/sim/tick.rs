//! Round lifecycle transitions
//!
//! The host drives the engine by calling `start`, then `tick` from its frame
//! loop and `submit_input` from its key/touch handlers. All four entry
//! points are total: calls that make no sense in the current phase are
//! silent no-ops, never errors.

use super::direction::{CardinalInput, Difficulty};
use super::state::{GameEvent, GamePhase, GameState};
use super::timing::{remaining_fraction, time_budget_ms};

impl GameState {
    /// Begin a new session. Implicitly cancels any in-flight round.
    pub fn start(&mut self, difficulty: Difficulty, now_ms: f64) {
        self.difficulty = difficulty;
        self.score = 0;
        self.phase = GamePhase::Running;
        self.next_arrow(now_ms);
        log::info!("Session started ({})", difficulty.as_str());
    }

    /// Advance the clock. Expires the round once the budget is spent,
    /// otherwise reports progress. No-op unless a round is running.
    pub fn tick(&mut self, now_ms: f64) {
        if self.phase != GamePhase::Running {
            return;
        }

        let elapsed = now_ms - self.round_start_ms;
        if elapsed >= f64::from(self.time_budget_ms) {
            self.expire();
        } else {
            self.push_event(GameEvent::Progress {
                remaining: remaining_fraction(elapsed, self.time_budget_ms),
            });
        }
    }

    /// Resolve a key press against the live arrow. A correct key scores and
    /// immediately advances to the next round; a wrong key ends the session
    /// exactly like a timeout. No-op unless a round is running.
    pub fn submit_input(&mut self, key: CardinalInput, now_ms: f64) {
        if self.phase != GamePhase::Running {
            return;
        }
        let Some(current) = self.current else {
            return;
        };

        if current.accepts(key) {
            self.score += 1;
            let new_high = self.score > self.high_score;
            if new_high {
                self.high_score = self.score;
            }
            self.push_event(GameEvent::Success {
                score: self.score,
                new_high,
            });
            self.next_arrow(now_ms);
        } else {
            self.expire();
        }
    }

    /// Return to `Idle`, discarding the session. The high score survives.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Idle;
        self.current = None;
        self.score = 0;
        self.time_budget_ms = crate::consts::BASE_TIME_MS;
        self.round_start_ms = 0.0;
        self.pending_events.clear();
    }

    /// Normalized remaining time for the current round, 1.0 when idle
    pub fn remaining(&self, now_ms: f64) -> f32 {
        if self.phase != GamePhase::Running {
            return 1.0;
        }
        remaining_fraction(now_ms - self.round_start_ms, self.time_budget_ms)
    }

    /// Draw the next arrow and restart the round clock. The budget is fixed
    /// here for the whole round; mid-round score changes are impossible.
    fn next_arrow(&mut self, now_ms: f64) {
        let direction = self.difficulty.draw(&mut self.rng);
        self.current = Some(direction);
        self.time_budget_ms = time_budget_ms(self.score);
        self.round_start_ms = now_ms;
        self.push_event(GameEvent::DirectionChanged { direction });
    }

    fn expire(&mut self) {
        self.phase = GamePhase::GameOver;
        self.current = None;
        self.push_event(GameEvent::RoundExpired {
            final_score: self.score,
        });
        log::info!("Game over at score {}", self.score);
    }
}
