//! Player identification, per-player storage and player state.
//!
//! ## PlayerId
//!
//! Seat index of a player. Seat 0 is always the human.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a `Vec`, indexed by `PlayerId`.
//!
//! ## Player
//!
//! Name, hand, cumulative penalty points and the pile of cards taken from rows.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::{Card, Hand};

/// Seat index of a player (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The human always sits in seat 0.
    pub const HUMAN: PlayerId = PlayerId(0);

    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a table of `player_count` players.
    ///
    /// ```
    /// use take_six::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use take_six::core::{PlayerId, PlayerMap};
///
/// let mut points: PlayerMap<u32> = PlayerMap::with_value(4, 0);
/// points[PlayerId::new(2)] += 5;
/// assert_eq!(points[PlayerId::new(2)], 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build one entry per seat from a factory.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Same starting value for every seat.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over `(PlayerId, &T)` in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over `(PlayerId, &mut T)` in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values only, in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A seat at the table.
///
/// `penalty_points` only ever grows. Cards taken from rows go to `taken`
/// and stay out of play until the next reshuffle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub is_human: bool,
    pub hand: Hand,
    pub penalty_points: u32,
    pub taken: Vec<Card>,
}

impl Player {
    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    pub fn ai(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    fn new(name: impl Into<String>, is_human: bool) -> Self {
        Self {
            name: name.into(),
            is_human,
            hand: Hand::new(),
            penalty_points: 0,
            taken: Vec::new(),
        }
    }

    /// Add a taken row to this player's pile and score.
    ///
    /// Returns the penalty added.
    pub fn take_cards(&mut self, cards: impl IntoIterator<Item = Card>) -> u32 {
        let mut penalty = 0;
        for card in cards {
            penalty += u32::from(card.penalty());
            self.taken.push(card);
        }
        self.penalty_points += penalty;
        penalty
    }
}

/// Seat the human in seat 0 and `player_count - 1` AI players after it.
pub fn seat_players(player_count: usize, human_name: &str) -> PlayerMap<Player> {
    PlayerMap::new(player_count, |id| {
        if id == PlayerId::HUMAN {
            Player::human(human_name)
        } else {
            Player::ai(format!("AI{}", id.0))
        }
    })
}
