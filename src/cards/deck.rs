//! The 104-card deck, dealing and reshuffling.
//!
//! The deck is a stack: cards are drawn from the end of the vector.

use serde::{Deserialize, Serialize};

use super::Card;
use crate::core::constants::{DECK_SIZE, HAND_SIZE};
use crate::core::{GameError, GameRng, Player, PlayerMap};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 104 cards in ascending order. The top of the deck is card 104.
    #[must_use]
    pub fn ordered() -> Self {
        Self {
            cards: (1..=DECK_SIZE as u8).map(Card::new).collect(),
        }
    }

    /// All 104 cards in uniformly random order.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::ordered();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Deck with exactly these cards; the last number is drawn first.
    pub fn from_numbers(numbers: impl IntoIterator<Item = u8>) -> Self {
        Self {
            cards: numbers.into_iter().map(Card::new).collect(),
        }
    }

    /// Number of cards left to draw.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards; the last one is drawn next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Draw the top card, failing if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::DeckExhausted {
            requested: 1,
            remaining: 0,
        })
    }

    /// Deal `hand_size` cards to every player, one at a time in seat order.
    ///
    /// Nothing is dealt if the deck cannot cover the whole deal.
    pub fn deal(&mut self, players: &mut PlayerMap<Player>, hand_size: usize) -> Result<(), GameError> {
        let requested = players.player_count() * hand_size;
        if requested > self.cards.len() {
            return Err(GameError::DeckExhausted {
                requested,
                remaining: self.cards.len(),
            });
        }

        for _ in 0..hand_size {
            for (_, player) in players.iter_mut() {
                player.hand.add(self.draw()?);
            }
        }
        Ok(())
    }
}

/// If every hand is empty, replace `deck` with a fresh shuffled deck and deal
/// a new hand to everyone. Returns whether that happened.
///
/// Rows and penalty piles are left alone.
pub fn reshuffle_if_empty(
    deck: &mut Deck,
    players: &mut PlayerMap<Player>,
    rng: &mut GameRng,
) -> Result<bool, GameError> {
    if players.values().any(|p| !p.hand.is_empty()) {
        return Ok(false);
    }

    *deck = Deck::shuffled(rng);
    deck.deal(players, HAND_SIZE)?;
    tracing::info!(remaining = deck.len(), "all hands empty, dealt a fresh deck");
    Ok(true)
}
