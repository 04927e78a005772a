//! Line-based menus: main menu, player count, play again.
//!
//! Every prompt reads from an iterator of lines so it can be driven by the
//! terminal reader thread or by a fixed script. End of input is treated as
//! "leave".

use std::io::{self, Write};

use crate::core::config::parse_player_count;
use crate::core::constants::{MAX_PLAYERS, MIN_PLAYERS};

pub const RULES: &[&str] = &[
    "Each player starts with 10 cards.",
    "Four rows start on the table with one card each.",
    "Each round, all players choose one card.",
    "Cards are revealed together and placed in ascending order.",
    "A card goes on the row whose last card is the closest lower number.",
    "If that row already has 5 cards, you take them and your card starts the row.",
    "If your card is lower than every row, you must take a row of your choice.",
    "Each card taken costs its bull heads in penalty points.",
    "The game ends when someone reaches 64 points. Lowest score wins!",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    HowToPlay,
    Exit,
}

/// Show the main menu until a valid choice is entered.
pub fn prompt_menu(
    lines: &mut impl Iterator<Item = String>,
    out: &mut impl Write,
) -> io::Result<MenuChoice> {
    loop {
        writeln!(out)?;
        writeln!(out, "=== 6 nimmt! ===")?;
        writeln!(out, "  1) Play")?;
        writeln!(out, "  2) How to play")?;
        writeln!(out, "  3) Exit")?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            return Ok(MenuChoice::Exit);
        };
        match line.trim().to_ascii_lowercase().as_str() {
            "1" | "p" | "play" => return Ok(MenuChoice::Play),
            "2" | "h" | "how" | "help" => return Ok(MenuChoice::HowToPlay),
            "3" | "q" | "exit" | "quit" => return Ok(MenuChoice::Exit),
            other => writeln!(out, "Unknown choice '{}'.", other)?,
        }
    }
}

/// Ask for the number of players until a valid one is entered.
///
/// Returns `None` if input ends first. Only recoverable errors re-prompt;
/// anything else is returned as `InvalidInput`.
pub fn prompt_player_count(
    lines: &mut impl Iterator<Item = String>,
    out: &mut impl Write,
) -> io::Result<Option<usize>> {
    loop {
        write!(out, "Enter number of players ({}-{}): ", MIN_PLAYERS, MAX_PLAYERS)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        match parse_player_count(&line) {
            Ok(count) => return Ok(Some(count)),
            Err(err) if err.is_recoverable() => {
                tracing::debug!(input = %line.trim(), %err, "rejected player count");
                writeln!(out, "{}. Try again.", err)?;
            }
            Err(err) => return Err(io::Error::new(io::ErrorKind::InvalidInput, err)),
        }
    }
}

/// Ask whether to start a new game. Anything but yes means no.
pub fn prompt_play_again(
    lines: &mut impl Iterator<Item = String>,
    out: &mut impl Write,
) -> io::Result<bool> {
    write!(out, "Play again? [y/N] ")?;
    out.flush()?;

    Ok(lines
        .next()
        .map(|l| matches!(l.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
        .unwrap_or(false))
}

pub fn write_rules(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "How to play")?;
    for rule in RULES {
        writeln!(out, "  * {}", rule)?;
    }
    Ok(())
}
