//! # take-six
//!
//! The card game "6 nimmt!" for one human against computer players.
//!
//! ## Design Principles
//!
//! 1. **Engine drives, presenter answers**: the game loop owns all state and
//!    calls into a [`Presenter`] for the two human decisions (which card,
//!    which row) and for display events. Presenters never mutate the game.
//!
//! 2. **Deterministic when seeded**: shuffles and AI choices come from
//!    separate ChaCha8 streams derived from one seed, so a seeded session
//!    replays exactly.
//!
//! 3. **Sequential resolution**: cards revealed together are placed lowest
//!    first, each one seeing the board left by the cards before it.
//!
//! ## Modules
//!
//! - `core`: players, seats, RNG, configuration, errors, constants
//! - `cards`: penalty table, cards, hands and the deck
//! - `board`: the four rows and the placement rule
//! - `policy`: how computer players pick cards and rows
//! - `rules`: rounds, standings and the session loop
//! - `presentation`: the presenter contract, a terminal UI and a scripted
//!   presenter for tests

pub mod core;
pub mod cards;
pub mod board;
pub mod policy;
pub mod rules;
pub mod presentation;

// Re-export commonly used types
pub use crate::core::{seat_players, GameConfig, GameError, GameRng, Player, PlayerId, PlayerMap};

pub use crate::cards::{penalty_of, Card, Deck, Hand};

pub use crate::board::{Board, Placement, PlacementOutcome, Row};

pub use crate::policy::{AiPolicy, RandomPolicy};

pub use crate::rules::{
    GameSession, Play, Resolved, Round, RoundContext, RoundPhase, RoundReport, SessionStatus,
    Standing, Standings,
};

pub use crate::presentation::{MenuChoice, Presenter, ScriptedPresenter, TerminalPresenter};
