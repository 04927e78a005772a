//! Card value type.

use serde::{Deserialize, Serialize};

use super::catalog::penalty_of;
use crate::core::constants::DECK_SIZE;

/// An immutable card. The penalty is always `penalty_of(number)`.
///
/// Only built through `Card::new`, and serialized as its face number, so a
/// card can never carry a penalty that disagrees with the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card {
    number: u8,
    penalty: u8,
}

impl Card {
    #[must_use]
    pub fn new(number: u8) -> Self {
        debug_assert!((1..=104).contains(&number), "card {} out of range", number);
        Self {
            number,
            penalty: penalty_of(number),
        }
    }

    /// Face number, 1..=104.
    #[must_use]
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Bull heads printed on the card.
    #[must_use]
    pub fn penalty(&self) -> u8 {
        self.penalty
    }
}

impl TryFrom<u8> for Card {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        if (1..=DECK_SIZE as u8).contains(&number) {
            Ok(Self::new(number))
        } else {
            Err(format!("card {} out of range", number))
        }
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.number
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number)?;
        if self.penalty > 1 {
            write!(f, "({})", self.penalty)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_penalty_derived() {
        assert_eq!(Card::new(55).penalty(), 7);
        assert_eq!(Card::new(33).penalty(), 5);
        assert_eq!(Card::new(8).penalty(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(8).to_string(), "8");
        assert_eq!(Card::new(55).to_string(), "55(7)");
    }

    #[test]
    fn test_serde_recomputes_penalty() {
        assert_eq!(serde_json::to_string(&Card::new(55)).unwrap(), "55");

        // Only the number travels; the penalty always comes from the catalog
        let card: Card = serde_json::from_str("22").unwrap();
        assert_eq!(card.number(), 22);
        assert_eq!(card.penalty(), 5);
        assert_eq!(card, Card::new(22));

        assert!(serde_json::from_str::<Card>("105").is_err());
    }
}
