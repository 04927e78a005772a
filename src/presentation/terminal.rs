//! Plain-text presenter over stdin/stdout.
//!
//! A reader thread forwards input lines over a channel so the card prompt
//! can wait with a deadline (`recv_timeout`) and be cut short by a valid
//! answer.

use std::fmt::Write as _;
use std::io::{self, BufRead, Stdout, Write};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use super::Presenter;
use crate::board::Board;
use crate::cards::Card;
use crate::core::constants::ROW_COUNT;
use crate::core::{Player, PlayerMap};
use crate::rules::{Play, Resolved, Standings};

/// How long revealed cards stay on screen.
pub const DEFAULT_REVEAL_DWELL: Duration = Duration::from_secs(3);

pub struct TerminalPresenter<W: Write = Stdout> {
    input: Receiver<String>,
    out: W,
    reveal_dwell: Duration,
}

impl TerminalPresenter<Stdout> {
    /// Read from stdin on a background thread and write to stdout.
    #[must_use]
    pub fn stdin() -> Self {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
            tracing::debug!("stdin closed");
        });
        Self::new(rx, io::stdout())
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(input: Receiver<String>, out: W) -> Self {
        Self {
            input,
            out,
            reveal_dwell: DEFAULT_REVEAL_DWELL,
        }
    }

    #[must_use]
    pub fn with_reveal_dwell(mut self, dwell: Duration) -> Self {
        self.reveal_dwell = dwell;
        self
    }

    /// Input lines (blocking) and the output, for the menus.
    pub fn split(&mut self) -> (mpsc::Iter<'_, String>, &mut W) {
        (self.input.iter(), &mut self.out)
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        let result = self.out.write_all(text.as_bytes()).and_then(|()| self.out.flush());
        if let Err(err) = result {
            tracing::warn!(%err, "failed to write to terminal");
        }
    }

    /// Throw away lines typed while no prompt was open, so they cannot
    /// answer a question the player has not seen yet.
    fn discard_pending(&mut self) {
        let mut dropped = 0;
        while self.input.try_recv().is_ok() {
            dropped += 1;
        }
        if dropped > 0 {
            tracing::debug!(dropped, "discarded stale input");
        }
    }

    /// Next line before `deadline`, or `None` on timeout or closed input.
    fn line_before(&mut self, deadline: Option<Instant>) -> Option<String> {
        match deadline {
            None => self.input.recv().ok(),
            Some(deadline) => {
                let remaining = deadline.saturating_duration_since(Instant::now());
                self.input.recv_timeout(remaining).ok()
            }
        }
    }
}

fn render_scores(players: &PlayerMap<Player>) -> String {
    let scores: Vec<String> = players
        .values()
        .map(|p| format!("{} {}", p.name, p.penalty_points))
        .collect();
    scores.join(" | ")
}

/// Rows followed by every player's score.
fn render_table(board: &Board, players: &PlayerMap<Player>) -> String {
    let mut text = String::from("\n");
    let _ = write!(text, "{}", board);
    let _ = writeln!(text, "Scores: {}", render_scores(players));
    text
}

fn render_hand(player: &Player) -> String {
    let cards: Vec<String> = player.hand.sorted().iter().map(Card::to_string).collect();
    format!("Your hand: {}\n", cards.join("  "))
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn request_human_card_choice(
        &mut self,
        player: &Player,
        players: &PlayerMap<Player>,
        board: &Board,
        timeout: Duration,
    ) -> Option<Card> {
        self.discard_pending();
        let deadline = Instant::now() + timeout;

        let mut text = render_table(board, players);
        text.push_str(&render_hand(player));
        let _ = write!(text, "Pick a card ({}s): ", timeout.as_secs());
        self.emit(&text);

        loop {
            let Some(line) = self.line_before(Some(deadline)) else {
                self.emit("\nTime's up! Your lowest card is played.\n");
                return None;
            };

            let card = line
                .trim()
                .parse::<u8>()
                .ok()
                .and_then(|n| player.hand.iter().find(|c| c.number() == n).copied());
            if card.is_some() {
                return card;
            }

            let left = deadline.saturating_duration_since(Instant::now()).as_secs();
            self.emit(&format!(
                "'{}' is not in your hand. Time left: {}s: ",
                line.trim(),
                left
            ));
        }
    }

    fn request_human_row_choice(
        &mut self,
        _player: &Player,
        players: &PlayerMap<Player>,
        board: &Board,
        card: Card,
        timeout: Option<Duration>,
    ) -> Option<usize> {
        self.discard_pending();
        let deadline = timeout.map(|t| Instant::now() + t);

        let mut text = render_table(board, players);
        let _ = write!(
            text,
            "Your card {} is lowest! Choose a row to take (1-{}): ",
            card, ROW_COUNT
        );
        self.emit(&text);

        loop {
            let line = self.line_before(deadline)?;
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=ROW_COUNT).contains(&n) => return Some(n - 1),
                _ => self.emit(&format!("Enter a row number from 1 to {}: ", ROW_COUNT)),
            }
        }
    }

    fn notify_round_revealed(&mut self, plays: &[Play], players: &PlayerMap<Player>) {
        let mut text = String::from("\nRevealing the selected cards:\n");
        for play in plays {
            let _ = writeln!(text, "  {:>8}: {}", players[play.player].name, play.card);
        }
        self.emit(&text);
        std::thread::sleep(self.reveal_dwell);
        self.discard_pending();
    }

    fn notify_placement(&mut self, resolved: &Resolved, player: &Player, _board: &Board) {
        let placement = &resolved.placement;
        if !placement.taken().is_empty() {
            self.emit(&format!(
                "{} takes row {} for {} points (total {}).\n",
                player.name,
                placement.row + 1,
                placement.penalty(),
                player.penalty_points
            ));
        }
    }

    fn notify_reshuffle(&mut self, players: &PlayerMap<Player>) {
        self.emit(&format!(
            "\nAll hands played. New deal! Scores: {}\n",
            render_scores(players)
        ));
    }

    fn notify_game_over(&mut self, standings: &Standings) {
        // Nothing typed during the last round should answer "play again"
        self.discard_pending();
        let mut text = String::from("\n*** GAME OVER ***\n");
        let _ = write!(text, "{}", standings);
        let winners: Vec<&str> = standings.winners().iter().map(|s| s.name.as_str()).collect();
        let _ = writeln!(text, "Winner: {}", winners.join(", "));
        self.emit(&text);
    }
}
