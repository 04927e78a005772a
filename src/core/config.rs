//! Session configuration.
//!
//! Rule constants live in `constants`; this only covers what legitimately
//! varies between sessions: table size, seed and input windows.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::constants::{MAX_PLAYERS, MIN_PLAYERS};
use super::GameError;

/// Default window for the human to pick a card.
pub const DEFAULT_SELECTION_TIMEOUT: Duration = Duration::from_secs(15);

pub const ENV_SEED: &str = "TAKE_SIX_SEED";
pub const ENV_SELECTION_SECS: &str = "TAKE_SIX_SELECTION_SECS";
pub const ENV_ROW_CHOICE_SECS: &str = "TAKE_SIX_ROW_CHOICE_SECS";

/// Configuration for one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Total players including the human (2-10).
    pub player_count: usize,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// How long the human may take to choose a card before the lowest
    /// card in hand is played for them.
    pub selection_timeout: Duration,

    /// How long the human may take to choose a row to take.
    /// `None` waits indefinitely.
    pub row_choice_timeout: Option<Duration>,

    /// Display name of the human player.
    pub human_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            seed: None,
            selection_timeout: DEFAULT_SELECTION_TIMEOUT,
            row_choice_timeout: None,
            human_name: "You".to_string(),
        }
    }
}

impl GameConfig {
    /// Default configuration for `player_count` players.
    pub fn new(player_count: usize) -> Result<Self, GameError> {
        Self::default().with_player_count(player_count)
    }

    /// Defaults overlaid with `TAKE_SIX_*` environment variables.
    pub fn from_env() -> Result<Self, GameError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GameError> {
        let mut config = Self::default();

        if let Some(seed) = lookup(ENV_SEED) {
            config.seed = Some(parse_env(ENV_SEED, &seed)?);
        }
        if let Some(secs) = lookup(ENV_SELECTION_SECS) {
            config.selection_timeout = Duration::from_secs(parse_env(ENV_SELECTION_SECS, &secs)?);
        }
        if let Some(secs) = lookup(ENV_ROW_CHOICE_SECS) {
            config.row_choice_timeout =
                Some(Duration::from_secs(parse_env(ENV_ROW_CHOICE_SECS, &secs)?));
        }

        Ok(config)
    }

    /// Set the player count, rejecting anything outside 2-10.
    pub fn with_player_count(mut self, player_count: usize) -> Result<Self, GameError> {
        validate_player_count(player_count)?;
        self.player_count = player_count;
        Ok(self)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_selection_timeout(mut self, timeout: Duration) -> Self {
        self.selection_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_row_choice_timeout(mut self, timeout: Duration) -> Self {
        self.row_choice_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_human_name(mut self, name: impl Into<String>) -> Self {
        self.human_name = name.into();
        self
    }

    /// Re-check invariants on a config built by hand or deserialized.
    pub fn validate(&self) -> Result<(), GameError> {
        validate_player_count(self.player_count)
    }
}

/// Check a player count against the supported table sizes.
pub fn validate_player_count(player_count: usize) -> Result<(), GameError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        Ok(())
    } else {
        Err(GameError::PlayerCountOutOfRange(player_count))
    }
}

/// Parse user-typed player count input.
pub fn parse_player_count(input: &str) -> Result<usize, GameError> {
    let trimmed = input.trim();
    let count: usize = trimmed
        .parse()
        .map_err(|_| GameError::InvalidPlayerCount(trimmed.to_string()))?;
    validate_player_count(count)?;
    Ok(count)
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, GameError> {
    value.trim().parse().map_err(|_| GameError::InvalidEnv {
        key: key.to_string(),
        value: value.to_string(),
    })
}
