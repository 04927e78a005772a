//! One round: every player picks a card, the cards are revealed together,
//! then placed in ascending order.
//!
//! ```text
//! Collecting -> Revealing -> Resolving -> Done
//! ```
//!
//! Placement is sequential: each card sees the board as left by every lower
//! card played this round.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::board::{Board, Placement};
use crate::cards::Card;
use crate::core::{GameError, GameRng, Player, PlayerId, PlayerMap};
use crate::policy::AiPolicy;
use crate::presentation::Presenter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Collecting,
    Revealing,
    Resolving,
    Done,
}

/// A card chosen by a player for this round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub player: PlayerId,
    pub card: Card,
}

/// A resolved play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolved {
    pub player: PlayerId,
    pub placement: Placement,
}

/// What a finished round did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub number: u32,
    /// Plays in resolution (ascending card) order.
    pub plays: Vec<Play>,
    /// Placements in resolution order.
    pub resolved: Vec<Resolved>,
}

impl RoundReport {
    /// Penalty points `player` picked up this round.
    #[must_use]
    pub fn penalty_for(&self, player: PlayerId) -> u32 {
        self.resolved
            .iter()
            .filter(|r| r.player == player)
            .map(|r| r.placement.penalty())
            .sum()
    }
}

/// Everything a round reads and mutates.
pub struct RoundContext<'a> {
    pub players: &'a mut PlayerMap<Player>,
    pub board: &'a mut Board,
    pub rng: &'a mut GameRng,
    pub policy: &'a dyn AiPolicy,
    pub selection_timeout: Duration,
    pub row_choice_timeout: Option<Duration>,
}

#[derive(Clone, Debug)]
pub struct Round {
    number: u32,
    phase: RoundPhase,
    plays: Vec<Play>,
    resolved: Vec<Resolved>,
}

impl Round {
    /// A fresh round waiting for cards. `number` is 1-based.
    #[must_use]
    pub fn new(number: u32) -> Self {
        Self {
            number,
            phase: RoundPhase::Collecting,
            plays: Vec::new(),
            resolved: Vec::new(),
        }
    }

    /// Round number within the session.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Plays collected so far.
    #[must_use]
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    /// Run all phases and return the report.
    pub fn play(
        mut self,
        ctx: &mut RoundContext<'_>,
        presenter: &mut dyn Presenter,
    ) -> Result<RoundReport, GameError> {
        self.collect(ctx, presenter)?;
        self.reveal(&*ctx.players, presenter);
        self.resolve(ctx, presenter)?;
        Ok(self.into_report())
    }

    /// Take one card from every player who still holds cards.
    ///
    /// The human gets `selection_timeout` to answer; on expiry their lowest
    /// card is played. Chosen cards leave the hand immediately.
    pub fn collect(
        &mut self,
        ctx: &mut RoundContext<'_>,
        presenter: &mut dyn Presenter,
    ) -> Result<(), GameError> {
        assert_eq!(self.phase, RoundPhase::Collecting, "Round already collected");

        for id in PlayerId::all(ctx.players.player_count()) {
            let player = &ctx.players[id];
            if player.hand.is_empty() {
                continue;
            }

            let chosen = if player.is_human {
                match presenter.request_human_card_choice(
                    player,
                    &*ctx.players,
                    &*ctx.board,
                    ctx.selection_timeout,
                ) {
                    Some(card) => Some(card),
                    None => {
                        let lowest = player.hand.lowest();
                        tracing::warn!(
                            player = %player.name,
                            card = ?lowest.map(|c| c.number()),
                            "card selection timed out, playing lowest card"
                        );
                        lowest
                    }
                }
            } else {
                ctx.policy.select_card(&player.hand, &*ctx.board, &mut *ctx.rng)
            };

            let Some(chosen) = chosen else { continue };
            let card = ctx.players[id]
                .hand
                .remove(chosen.number())
                .ok_or(GameError::CardNotInHand { player: id, card: chosen.number() })?;

            self.plays.push(Play { player: id, card });
        }

        self.phase = RoundPhase::Revealing;
        Ok(())
    }

    /// Show every chosen card at once. No state changes.
    pub fn reveal(&mut self, players: &PlayerMap<Player>, presenter: &mut dyn Presenter) {
        assert_eq!(self.phase, RoundPhase::Revealing, "Round not ready to reveal");

        presenter.notify_round_revealed(&self.plays, players);
        self.phase = RoundPhase::Resolving;
    }

    /// Place every card, lowest first, charging each player for rows taken.
    #[tracing::instrument(skip_all, fields(round = self.number))]
    pub fn resolve(
        &mut self,
        ctx: &mut RoundContext<'_>,
        presenter: &mut dyn Presenter,
    ) -> Result<(), GameError> {
        assert_eq!(self.phase, RoundPhase::Resolving, "Round not ready to resolve");

        self.plays.sort_by_key(|p| p.card.number());

        for play in &self.plays {
            let players = &*ctx.players;
            let policy = ctx.policy;
            let timeout = ctx.row_choice_timeout;

            let placement = ctx.board.place(play.card, |board| {
                Ok(choose_row(
                    play.player,
                    players,
                    board,
                    play.card,
                    policy,
                    timeout,
                    &mut *presenter,
                ))
            })?;

            let player = &mut ctx.players[play.player];
            let penalty = player.take_cards(placement.taken().iter().copied());
            tracing::debug!(
                player = %player.name,
                card = play.card.number(),
                row = placement.row,
                penalty,
                total = player.penalty_points,
                "card placed"
            );

            let resolved = Resolved { player: play.player, placement };
            presenter.notify_placement(&resolved, &ctx.players[play.player], &*ctx.board);
            self.resolved.push(resolved);
        }

        self.phase = RoundPhase::Done;
        Ok(())
    }

    /// Consume a finished round.
    #[must_use]
    pub fn into_report(self) -> RoundReport {
        assert_eq!(self.phase, RoundPhase::Done, "Round not finished");
        RoundReport {
            number: self.number,
            plays: self.plays,
            resolved: self.resolved,
        }
    }
}

/// Row to take when `card` fits nowhere.
fn choose_row(
    id: PlayerId,
    players: &PlayerMap<Player>,
    board: &Board,
    card: Card,
    policy: &dyn AiPolicy,
    timeout: Option<Duration>,
    presenter: &mut dyn Presenter,
) -> usize {
    let player = &players[id];
    if !player.is_human {
        return policy.select_row(board, card);
    }

    presenter
        .request_human_row_choice(player, players, board, card, timeout)
        .unwrap_or_else(|| {
            let row = board.cheapest_row();
            tracing::warn!(player = %player.name, row, "no row chosen, taking cheapest row");
            row
        })
}
