//! Error type shared by the whole engine.
//!
//! Only `InvalidPlayerCount` and `PlayerCountOutOfRange` are recoverable (the
//! player-count prompt re-asks). Everything else is a broken contract between
//! the engine and a presenter or policy and ends the session.

use super::constants::{MAX_PLAYERS, MIN_PLAYERS};
use super::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("'{0}' is not a whole number")]
    InvalidPlayerCount(String),

    #[error("player count must be between {min} and {max}, got {0}", min = MIN_PLAYERS, max = MAX_PLAYERS)]
    PlayerCountOutOfRange(usize),

    #[error("deck exhausted: {requested} cards requested, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },

    #[error("row index {0} out of range")]
    RowOutOfRange(usize),

    #[error("{player} does not hold card {card}")]
    CardNotInHand { player: PlayerId, card: u8 },

    #[error("invalid value '{value}' for {key}")]
    InvalidEnv { key: String, value: String },
}

impl GameError {
    /// Whether the caller may ask the user again instead of giving up.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InvalidPlayerCount(_) | GameError::PlayerCountOutOfRange(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GameError::PlayerCountOutOfRange(11).to_string(),
            "player count must be between 2 and 10, got 11"
        );
        assert_eq!(
            GameError::CardNotInHand { player: PlayerId::new(0), card: 7 }.to_string(),
            "Seat 0 does not hold card 7"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(GameError::InvalidPlayerCount("x".into()).is_recoverable());
        assert!(GameError::PlayerCountOutOfRange(1).is_recoverable());
        assert!(!GameError::RowOutOfRange(4).is_recoverable());
        assert!(!GameError::DeckExhausted { requested: 1, remaining: 0 }.is_recoverable());
    }
}
