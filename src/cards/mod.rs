//! Cards, the penalty catalog, hands and the deck.

pub mod card;
pub mod catalog;
pub mod deck;
pub mod hand;

pub use card::Card;
pub use catalog::penalty_of;
pub use deck::{reshuffle_if_empty, Deck};
pub use hand::Hand;
