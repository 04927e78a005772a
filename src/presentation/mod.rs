//! The contract between the engine and whatever shows the game.
//!
//! The engine is the only driver. A presenter is a synchronous callee: it
//! answers the two human decisions and is told about reveals, placements,
//! reshuffles and the end of the game. It never mutates game state.

pub mod prompt;
pub mod scripted;
pub mod terminal;

pub use prompt::{prompt_menu, prompt_play_again, prompt_player_count, write_rules, MenuChoice, RULES};
pub use scripted::ScriptedPresenter;
pub use terminal::TerminalPresenter;

use std::time::Duration;

use crate::board::Board;
use crate::cards::Card;
use crate::core::{Player, PlayerMap};
use crate::rules::{Play, Resolved, Standings};

pub trait Presenter {
    /// Ask the human for a card from `player.hand`, waiting at most `timeout`.
    ///
    /// `players` is the whole table, for showing scores. `None` means the
    /// window expired; the engine then plays the lowest card in hand. A
    /// returned card must be in the hand.
    fn request_human_card_choice(
        &mut self,
        player: &Player,
        players: &PlayerMap<Player>,
        board: &Board,
        timeout: Duration,
    ) -> Option<Card>;

    /// Ask the human which row to take for `card`, which fits no row.
    ///
    /// `timeout` of `None` means wait as long as it takes. `None` back means
    /// no answer is coming; the engine then takes the cheapest row. A
    /// returned index must be in `0..4`.
    fn request_human_row_choice(
        &mut self,
        player: &Player,
        players: &PlayerMap<Player>,
        board: &Board,
        card: Card,
        timeout: Option<Duration>,
    ) -> Option<usize>;

    /// All cards chosen this round, shown at once. Display only.
    fn notify_round_revealed(&mut self, plays: &[Play], players: &PlayerMap<Player>);

    /// One card has been placed; `player` is the seat that played it, after
    /// any penalty was charged.
    fn notify_placement(&mut self, _resolved: &Resolved, _player: &Player, _board: &Board) {}

    /// Every hand was empty and a fresh deck was dealt.
    fn notify_reshuffle(&mut self, _players: &PlayerMap<Player>) {}

    /// Final standings, lowest score first.
    fn notify_game_over(&mut self, standings: &Standings);
}
