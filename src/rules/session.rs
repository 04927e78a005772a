//! A game session: deals, rounds, reshuffles and the end of the game.
//!
//! Each `step` does exactly one of:
//! - end the game if anyone has reached `MAX_PENALTY`
//! - deal a fresh deck if every hand is empty (rows stay as they are)
//! - play one round
//!
//! Playing again means building a new `GameSession`; nothing carries over.

use crate::board::Board;
use crate::cards::{reshuffle_if_empty, Deck};
use crate::core::constants::{HAND_SIZE, MAX_PENALTY};
use crate::core::{seat_players, GameConfig, GameError, GameRng, Player, PlayerMap};
use crate::policy::{AiPolicy, RandomPolicy};
use crate::presentation::Presenter;

use super::round::{Round, RoundContext, RoundReport};
use super::standings::Standings;

/// Outcome of one `GameSession::step`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    RoundPlayed(RoundReport),
    Reshuffled,
    Finished(Standings),
}

pub struct GameSession {
    config: GameConfig,
    seed: u64,
    players: PlayerMap<Player>,
    board: Board,
    deck: Deck,
    deck_rng: GameRng,
    ai_rng: GameRng,
    policy: Box<dyn AiPolicy>,
    rounds_played: u32,
    deals: u32,
    finished: bool,
}

impl GameSession {
    /// Seat the players, shuffle, deal ten cards each and seed the four rows.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let seed = rng.seed();
        let mut deck_rng = rng.for_context("deck");
        let ai_rng = rng.for_context("ai");

        let mut players = seat_players(config.player_count, &config.human_name);
        let mut deck = Deck::shuffled(&mut deck_rng);
        deck.deal(&mut players, HAND_SIZE)?;
        let board = Board::deal(&mut deck)?;

        tracing::info!(seed, players = config.player_count, "session started");

        Ok(Self {
            config,
            seed,
            players,
            board,
            deck,
            deck_rng,
            ai_rng,
            policy: Box::new(RandomPolicy),
            rounds_played: 0,
            deals: 1,
            finished: false,
        })
    }

    /// Replace the AI policy used by every computer seat.
    #[must_use]
    pub fn with_policy(mut self, policy: impl AiPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed actually used, even when the config asked for entropy.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get every seat's player state.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut PlayerMap<Player> {
        &mut self.players
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cards left undealt from the current deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Rounds resolved so far, across all deals.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Number of times hands have been dealt, including the first deal.
    #[must_use]
    pub fn deals(&self) -> u32 {
        self.deals
    }

    /// Someone has reached the penalty limit.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.players.values().any(|p| p.penalty_points >= MAX_PENALTY)
    }

    #[must_use]
    pub fn standings(&self) -> Standings {
        Standings::from_players(&self.players)
    }

    /// Advance the session by one step.
    pub fn step(&mut self, presenter: &mut dyn Presenter) -> Result<SessionStatus, GameError> {
        if self.finished {
            return Ok(SessionStatus::Finished(self.standings()));
        }

        if self.is_over() {
            self.finished = true;
            let standings = self.standings();
            tracing::info!(rounds = self.rounds_played, deals = self.deals, "game over");
            presenter.notify_game_over(&standings);
            return Ok(SessionStatus::Finished(standings));
        }

        if reshuffle_if_empty(&mut self.deck, &mut self.players, &mut self.deck_rng)? {
            self.deals += 1;
            presenter.notify_reshuffle(&self.players);
            return Ok(SessionStatus::Reshuffled);
        }

        self.rounds_played += 1;
        let mut ctx = RoundContext {
            players: &mut self.players,
            board: &mut self.board,
            rng: &mut self.ai_rng,
            policy: self.policy.as_ref(),
            selection_timeout: self.config.selection_timeout,
            row_choice_timeout: self.config.row_choice_timeout,
        };
        let report = Round::new(self.rounds_played).play(&mut ctx, presenter)?;
        tracing::info!(
            round = report.number,
            cards = report.plays.len(),
            "round resolved"
        );

        Ok(SessionStatus::RoundPlayed(report))
    }

    /// Step until the game ends and return the final standings.
    pub fn run(&mut self, presenter: &mut dyn Presenter) -> Result<Standings, GameError> {
        loop {
            if let SessionStatus::Finished(standings) = self.step(presenter)? {
                return Ok(standings);
            }
        }
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("seed", &self.seed)
            .field("players", &self.players)
            .field("board", &self.board)
            .field("rounds_played", &self.rounds_played)
            .field("deals", &self.deals)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::DECK_SIZE;
    use crate::core::PlayerId;
    use crate::presentation::ScriptedPresenter;

    fn session(players: usize, seed: u64) -> GameSession {
        GameSession::new(GameConfig::new(players).unwrap().with_seed(seed)).unwrap()
    }

    /// Every card number in deck, hands, rows and penalty piles.
    fn all_numbers(session: &GameSession) -> Vec<u8> {
        let mut numbers: Vec<u8> = session.deck().cards().iter().map(|c| c.number()).collect();
        for p in session.players().values() {
            numbers.extend(p.hand.iter().map(|c| c.number()));
            numbers.extend(p.taken.iter().map(|c| c.number()));
        }
        numbers.extend(session.board().cards().map(|c| c.number()));
        numbers.sort_unstable();
        numbers
    }

    #[test]
    fn test_new_session_setup() {
        let s = session(4, 42);

        assert_eq!(s.players().player_count(), 4);
        assert!(s.players().values().all(|p| p.hand.len() == HAND_SIZE));
        assert!(s.board().rows().iter().all(|r| r.len() == 1));
        assert_eq!(s.deck().len(), DECK_SIZE - 4 * HAND_SIZE - 4);
        assert_eq!(s.seed(), 42);
        assert!(!s.is_over());
    }

    #[test]
    fn test_rejects_bad_player_count() {
        let mut config = GameConfig::default();
        config.player_count = 11;
        assert_eq!(
            GameSession::new(config).unwrap_err(),
            GameError::PlayerCountOutOfRange(11)
        );
    }

    #[test]
    fn test_cards_conserved_within_a_deal() {
        let mut s = session(5, 7);
        let mut presenter = ScriptedPresenter::new();
        let full: Vec<u8> = (1..=DECK_SIZE as u8).collect();

        assert_eq!(all_numbers(&s), full);
        for _ in 0..HAND_SIZE {
            match s.step(&mut presenter).unwrap() {
                SessionStatus::RoundPlayed(_) => assert_eq!(all_numbers(&s), full),
                SessionStatus::Finished(_) => break,
                SessionStatus::Reshuffled => panic!("reshuffled before hands were empty"),
            }
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = session(3, 99);
        let mut b = session(3, 99);

        let sa = a.run(&mut ScriptedPresenter::new()).unwrap();
        let sb = b.run(&mut ScriptedPresenter::new()).unwrap();

        assert_eq!(sa, sb);
        assert_eq!(a.rounds_played(), b.rounds_played());
    }

    #[test]
    fn test_end_check_precedes_round() {
        let mut s = session(3, 5);
        s.players_mut()[PlayerId::new(2)].penalty_points = MAX_PENALTY;
        let mut presenter = ScriptedPresenter::new();

        let status = s.step(&mut presenter).unwrap();

        assert!(matches!(status, SessionStatus::Finished(_)));
        assert_eq!(s.rounds_played(), 0);
        assert!(s.players().values().all(|p| p.hand.len() == HAND_SIZE));
        assert!(presenter.game_over.is_some());
    }

    #[test]
    fn test_finished_is_sticky() {
        let mut s = session(2, 5);
        s.players_mut()[PlayerId::new(0)].penalty_points = 70;
        let mut presenter = ScriptedPresenter::new();

        s.step(&mut presenter).unwrap();
        s.players_mut()[PlayerId::new(0)].penalty_points = 0;
        let status = s.step(&mut presenter).unwrap();

        assert!(matches!(status, SessionStatus::Finished(_)));
        assert_eq!(s.rounds_played(), 0);
    }
}
