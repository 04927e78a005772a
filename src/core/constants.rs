//! Fixed rules of the game. None of these are configurable.

/// Cards numbered 1..=104.
pub const DECK_SIZE: usize = 104;

/// Rows on the board.
pub const ROW_COUNT: usize = 4;

/// A row holding this many cards is taken by the next card placed on it.
pub const MAX_ROW_LEN: usize = 5;

/// Cards dealt to each player per deal.
pub const HAND_SIZE: usize = 10;

/// The game ends once any player holds this many penalty points.
pub const MAX_PENALTY: u32 = 64;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;
