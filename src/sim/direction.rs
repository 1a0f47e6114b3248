//! Direction catalog and the input-matching rule
//!
//! The arrow can face 8 ways but the player only has 4 physical keys, so the
//! matching rule is asymmetric: cardinals demand the one strict opposite,
//! diagonals accept either axis component of their opposite.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the 8 facings the arrow can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[serde(rename = "ne")]
    NorthEast,
    #[serde(rename = "nw")]
    NorthWest,
    #[serde(rename = "se")]
    SouthEast,
    #[serde(rename = "sw")]
    SouthWest,
}

/// The 4 cardinal facings, in display order
pub const CARDINAL_POOL: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

/// The 4 diagonal facings
pub const DIAGONAL_POOL: [Direction; 4] = [
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::SouthEast,
    Direction::SouthWest,
];

impl Direction {
    /// Whether this facing is one of the 4 cardinals
    pub fn is_cardinal(self) -> bool {
        matches!(
            self,
            Direction::Up | Direction::Down | Direction::Left | Direction::Right
        )
    }

    /// Whether this facing is one of the 4 diagonals
    pub fn is_diagonal(self) -> bool {
        !self.is_cardinal()
    }

    /// Geometric opposite (an involution over all 8 facings)
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }

    /// The two cardinal axis components of a diagonal, `None` for cardinals
    pub fn axis_inputs(self) -> Option<[CardinalInput; 2]> {
        match self {
            Direction::NorthEast => Some([CardinalInput::Up, CardinalInput::Right]),
            Direction::NorthWest => Some([CardinalInput::Up, CardinalInput::Left]),
            Direction::SouthEast => Some([CardinalInput::Down, CardinalInput::Right]),
            Direction::SouthWest => Some([CardinalInput::Down, CardinalInput::Left]),
            _ => None,
        }
    }

    /// The core gameplay predicate: does `input` defeat this facing?
    ///
    /// Cardinal facings accept exactly their strict opposite key. Diagonal
    /// facings accept either axis key of the *opposite* diagonal (e.g. NE's
    /// opposite is SW, so Left and Down both count). The 2-of-4 acceptance
    /// for diagonals is intentional - the device only emits 4 key symbols.
    pub fn accepts(self, input: CardinalInput) -> bool {
        match self {
            Direction::Up => input == CardinalInput::Down,
            Direction::Down => input == CardinalInput::Up,
            Direction::Left => input == CardinalInput::Right,
            Direction::Right => input == CardinalInput::Left,
            diagonal => diagonal
                .opposite()
                .axis_inputs()
                .is_some_and(|axis| axis.contains(&input)),
        }
    }

    /// Short name used for asset lookup ("up", "ne", ...)
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::NorthEast => "ne",
            Direction::NorthWest => "nw",
            Direction::SouthEast => "se",
            Direction::SouthWest => "sw",
        }
    }
}

/// One of the 4 physical directional keys/buttons the player can press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardinalInput {
    Up,
    Down,
    Left,
    Right,
}

impl CardinalInput {
    /// Parse a DOM `KeyboardEvent.code`. Anything but the 4 arrow keys is
    /// not an input symbol and parses to `None`.
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(CardinalInput::Up),
            "ArrowDown" => Some(CardinalInput::Down),
            "ArrowLeft" => Some(CardinalInput::Left),
            "ArrowRight" => Some(CardinalInput::Right),
            _ => None,
        }
    }
}

/// Difficulty levels, mapped to direction pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Cycle order used by the settings screen
    pub fn next(self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    /// Draw a facing for one round.
    ///
    /// Easy samples the cardinal pool, Medium the diagonal pool. Hard flips
    /// an unbiased coin for the pool on every draw (the pool choice is never
    /// remembered between rounds), then samples uniformly within it.
    pub fn draw<R: Rng>(self, rng: &mut R) -> Direction {
        let pool = match self {
            Difficulty::Easy => &CARDINAL_POOL,
            Difficulty::Medium => &DIAGONAL_POOL,
            Difficulty::Hard => {
                if rng.random_bool(0.5) {
                    &CARDINAL_POOL
                } else {
                    &DIAGONAL_POOL
                }
            }
        };
        pool[rng.random_range(0..pool.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const ALL_INPUTS: [CardinalInput; 4] = [
        CardinalInput::Up,
        CardinalInput::Down,
        CardinalInput::Left,
        CardinalInput::Right,
    ];

    #[test]
    fn test_cardinal_accepts_exactly_strict_opposite() {
        for dir in CARDINAL_POOL {
            let accepted: Vec<_> = ALL_INPUTS
                .iter()
                .copied()
                .filter(|&input| dir.accepts(input))
                .collect();
            assert_eq!(accepted.len(), 1, "{:?} must accept exactly one key", dir);
        }
        assert!(Direction::Up.accepts(CardinalInput::Down));
        assert!(Direction::Down.accepts(CardinalInput::Up));
        assert!(Direction::Left.accepts(CardinalInput::Right));
        assert!(Direction::Right.accepts(CardinalInput::Left));
    }

    #[test]
    fn test_diagonal_accepts_axis_of_opposite() {
        // NE's opposite is SW, whose axis keys are Down and Left
        assert!(Direction::NorthEast.accepts(CardinalInput::Down));
        assert!(Direction::NorthEast.accepts(CardinalInput::Left));
        assert!(!Direction::NorthEast.accepts(CardinalInput::Up));
        assert!(!Direction::NorthEast.accepts(CardinalInput::Right));

        // SE's opposite is NW: Up and Left
        assert!(Direction::SouthEast.accepts(CardinalInput::Up));
        assert!(Direction::SouthEast.accepts(CardinalInput::Left));
        assert!(!Direction::SouthEast.accepts(CardinalInput::Down));
        assert!(!Direction::SouthEast.accepts(CardinalInput::Right));

        for dir in DIAGONAL_POOL {
            let accepted = ALL_INPUTS
                .iter()
                .filter(|&&input| dir.accepts(input))
                .count();
            assert_eq!(accepted, 2, "{:?} must accept exactly two keys", dir);
        }
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in CARDINAL_POOL.iter().chain(DIAGONAL_POOL.iter()) {
            assert_eq!(dir.opposite().opposite(), *dir);
        }
    }

    #[test]
    fn test_easy_draws_only_cardinals() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            assert!(Difficulty::Easy.draw(&mut rng).is_cardinal());
        }
    }

    #[test]
    fn test_medium_draws_only_diagonals() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            assert!(Difficulty::Medium.draw(&mut rng).is_diagonal());
        }
    }

    #[test]
    fn test_hard_draws_from_both_pools() {
        let mut rng = Pcg32::seed_from_u64(7);
        let draws: Vec<_> = (0..200).map(|_| Difficulty::Hard.draw(&mut rng)).collect();
        assert!(draws.iter().any(|d| d.is_cardinal()));
        assert!(draws.iter().any(|d| d.is_diagonal()));
    }

    #[test]
    fn test_key_code_parsing() {
        assert_eq!(
            CardinalInput::from_key_code("ArrowUp"),
            Some(CardinalInput::Up)
        );
        assert_eq!(
            CardinalInput::from_key_code("ArrowLeft"),
            Some(CardinalInput::Left)
        );
        assert_eq!(CardinalInput::from_key_code("Space"), None);
        assert_eq!(CardinalInput::from_key_code("KeyW"), None);
    }

    #[test]
    fn test_difficulty_string_round_trip() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }

    #[test]
    fn test_difficulty_cycle() {
        assert_eq!(Difficulty::Easy.next(), Difficulty::Medium);
        assert_eq!(Difficulty::Medium.next(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
    }
}
