//! A presenter that answers from a queue and records everything it is told.
//!
//! Useful for tests and headless games. An empty card queue behaves like a
//! human who never answers in time; an empty row queue like one who never
//! picks a row.

use std::collections::VecDeque;
use std::time::Duration;

use super::Presenter;
use crate::board::Board;
use crate::cards::Card;
use crate::core::{Player, PlayerMap};
use crate::rules::{Play, Resolved, Standings};

#[derive(Debug, Default)]
pub struct ScriptedPresenter {
    cards: VecDeque<Option<u8>>,
    rows: VecDeque<Option<usize>>,

    /// Timeout passed with each card request.
    pub card_timeouts: Vec<Duration>,
    /// Timeout passed with each row request, with the card that forced it.
    pub row_requests: Vec<(Card, Option<Duration>)>,
    /// Every reveal, in order.
    pub reveals: Vec<Vec<Play>>,
    /// Every placement, in resolution order.
    pub placements: Vec<Resolved>,
    pub reshuffles: usize,
    pub game_over: Option<Standings>,
}

impl ScriptedPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue card answers; `None` lets the window expire.
    #[must_use]
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = Option<u8>>) -> Self {
        self.cards.extend(cards);
        self
    }

    /// Queue row answers; `None` gives no answer.
    #[must_use]
    pub fn with_rows(mut self, rows: impl IntoIterator<Item = Option<usize>>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn push_card(&mut self, card: Option<u8>) {
        self.cards.push_back(card);
    }

    pub fn push_row(&mut self, row: Option<usize>) {
        self.rows.push_back(row);
    }
}

impl Presenter for ScriptedPresenter {
    fn request_human_card_choice(
        &mut self,
        player: &Player,
        _players: &PlayerMap<Player>,
        _board: &Board,
        timeout: Duration,
    ) -> Option<Card> {
        self.card_timeouts.push(timeout);
        let number = self.cards.pop_front().flatten()?;
        // A number not in hand is passed through so the engine can reject it.
        Some(
            player
                .hand
                .iter()
                .find(|c| c.number() == number)
                .copied()
                .unwrap_or_else(|| Card::new(number)),
        )
    }

    fn request_human_row_choice(
        &mut self,
        _player: &Player,
        _players: &PlayerMap<Player>,
        _board: &Board,
        card: Card,
        timeout: Option<Duration>,
    ) -> Option<usize> {
        self.row_requests.push((card, timeout));
        self.rows.pop_front().flatten()
    }

    fn notify_round_revealed(&mut self, plays: &[Play], _players: &PlayerMap<Player>) {
        self.reveals.push(plays.to_vec());
    }

    fn notify_placement(&mut self, resolved: &Resolved, _player: &Player, _board: &Board) {
        self.placements.push(resolved.clone());
    }

    fn notify_reshuffle(&mut self, _players: &PlayerMap<Player>) {
        self.reshuffles += 1;
    }

    fn notify_game_over(&mut self, standings: &Standings) {
        self.game_over = Some(standings.clone());
    }
}
