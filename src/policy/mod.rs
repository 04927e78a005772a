//! Decision policies for computer-controlled players.
//!
//! A policy makes the two choices an AI player ever faces:
//! - which card to play this round
//! - which row to take when its card is lower than every row

use crate::board::Board;
use crate::cards::{Card, Hand};
use crate::core::GameRng;

/// Policy for an AI seat.
pub trait AiPolicy: Send + Sync {
    /// Choose a card to play from a non-empty hand.
    ///
    /// Must return a card that is in `hand`.
    fn select_card(&self, hand: &Hand, board: &Board, rng: &mut GameRng) -> Option<Card>;

    /// Choose a row to take for `card`, which fits no row.
    ///
    /// Must return an index in `0..4`.
    fn select_row(&self, board: &Board, card: Card) -> usize;
}

/// Plays a uniformly random card and, when forced, takes the row with the
/// fewest bull heads (lowest index on ties).
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl AiPolicy for RandomPolicy {
    fn select_card(&self, hand: &Hand, _board: &Board, rng: &mut GameRng) -> Option<Card> {
        if hand.is_empty() {
            return None;
        }
        Some(hand.cards()[rng.gen_index(hand.len())])
    }

    fn select_row(&self, board: &Board, _card: Card) -> usize {
        board.cheapest_row()
    }
}
