//! A player's hand.

use serde::{Deserialize, Serialize};

use super::Card;

/// Cards held by one player, in the order they were dealt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// An empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from face numbers (handy for tests and scripted play).
    pub fn from_numbers(numbers: impl IntoIterator<Item = u8>) -> Self {
        Self {
            cards: numbers.into_iter().map(Card::new).collect(),
        }
    }

    /// Add a dealt card.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Number of cards still held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn contains(&self, number: u8) -> bool {
        self.cards.iter().any(|c| c.number() == number)
    }

    /// Lowest-numbered card, used when the human runs out of time.
    #[must_use]
    pub fn lowest(&self) -> Option<Card> {
        self.cards.iter().min_by_key(|c| c.number()).copied()
    }

    /// Remove and return the card with face `number`.
    pub fn remove(&mut self, number: u8) -> Option<Card> {
        let idx = self.cards.iter().position(|c| c.number() == number)?;
        Some(self.cards.remove(idx))
    }

    /// Cards sorted by number, for display.
    #[must_use]
    pub fn sorted(&self) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.sort_by_key(|c| c.number());
        cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_by_number() {
        let mut hand = Hand::from_numbers([40, 5, 17]);

        assert_eq!(hand.remove(5), Some(Card::new(5)));
        assert_eq!(hand.remove(5), None);
        assert_eq!(hand.len(), 2);
        assert!(!hand.contains(5));
        assert!(hand.contains(17));
    }

    #[test]
    fn test_lowest() {
        let hand = Hand::from_numbers([40, 5, 17]);
        assert_eq!(hand.lowest(), Some(Card::new(5)));
        assert_eq!(Hand::new().lowest(), None);
    }

    #[test]
    fn test_sorted_leaves_hand_order() {
        let hand = Hand::from_numbers([30, 2, 14]);
        let numbers: Vec<_> = hand.sorted().iter().map(|c| c.number()).collect();
        assert_eq!(numbers, vec![2, 14, 30]);
        assert_eq!(hand.cards()[0].number(), 30);
    }
}
