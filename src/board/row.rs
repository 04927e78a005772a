//! A single row of the board.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::cards::Card;
use crate::core::constants::MAX_ROW_LEN;

/// An ordered, never-empty pile of cards.
///
/// Cards are appended in play order and each appended card is higher than
/// the current tail, so the last card is always the highest in the row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    cards: SmallVec<[Card; MAX_ROW_LEN]>,
}

impl Row {
    #[must_use]
    pub fn new(card: Card) -> Self {
        Self { cards: smallvec![card] }
    }

    /// Build a row from face numbers in play order.
    ///
    /// Panics if `numbers` is empty, longer than a row, or not ascending.
    #[must_use]
    pub fn from_numbers(numbers: &[u8]) -> Self {
        assert!(!numbers.is_empty(), "Row must hold at least one card");
        assert!(numbers.len() <= MAX_ROW_LEN, "Row holds at most {} cards", MAX_ROW_LEN);
        assert!(
            numbers.windows(2).all(|w| w[0] < w[1]),
            "Row cards must ascend in play order"
        );
        Self {
            cards: numbers.iter().copied().map(Card::new).collect(),
        }
    }

    /// The tail card, which is also the highest.
    #[must_use]
    pub fn last(&self) -> Card {
        self.cards[self.cards.len() - 1]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Rows are never empty; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The next card placed here takes the row.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= MAX_ROW_LEN
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Total bull heads in the row.
    #[must_use]
    pub fn penalty(&self) -> u32 {
        self.cards.iter().map(|c| u32::from(c.penalty())).sum()
    }

    pub(crate) fn push(&mut self, card: Card) {
        debug_assert!(!self.is_full());
        debug_assert!(card.number() > self.last().number());
        self.cards.push(card);
    }

    /// Restart the row with `card`, returning the cards that were in it.
    pub(crate) fn restart(&mut self, card: Card) -> Vec<Card> {
        std::mem::replace(&mut self.cards, smallvec![card]).into_vec()
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_basics() {
        let row = Row::from_numbers(&[3, 10, 55]);
        assert_eq!(row.len(), 3);
        assert_eq!(row.last().number(), 55);
        assert_eq!(row.penalty(), 1 + 3 + 7);
        assert!(!row.is_full());
        assert_eq!(row.to_string(), "3 10(3) 55(7)");
    }

    #[test]
    fn test_push_until_full() {
        let mut row = Row::new(Card::new(1));
        for n in 2..=5 {
            row.push(Card::new(n));
        }
        assert!(row.is_full());
        assert_eq!(row.last().number(), 5);
    }

    #[test]
    fn test_restart_returns_old_cards() {
        let mut row = Row::from_numbers(&[4, 6]);
        let taken = row.restart(Card::new(2));

        assert_eq!(taken, vec![Card::new(4), Card::new(6)]);
        assert_eq!(row.cards(), &[Card::new(2)]);
    }

    #[test]
    #[should_panic(expected = "Row cards must ascend")]
    fn test_from_numbers_rejects_descending() {
        let _ = Row::from_numbers(&[9, 3]);
    }

    #[test]
    fn test_row_serialization() {
        let row = Row::from_numbers(&[12, 13]);
        let json = serde_json::to_string(&row).unwrap();
        let back: Row = serde_json::from_str(&json).unwrap();
        assert_eq!(row, back);
    }
}
