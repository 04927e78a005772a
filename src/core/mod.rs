//! Core types: players, RNG, configuration, errors and rule constants.

pub mod constants;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use error::GameError;
pub use player::{seat_players, Player, PlayerId, PlayerMap};
pub use rng::GameRng;
