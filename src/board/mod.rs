//! The four rows and the placement rule.
//!
//! ## Placement
//!
//! A card goes to the row whose tail is the closest lower number. If that
//! row is already full the player takes it and the card starts it over.
//! If the card is lower than every tail, the player picks a row to take
//! (via the caller-supplied chooser) and the card starts it over.

mod row;

pub use row::Row;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};
use crate::core::constants::ROW_COUNT;
use crate::core::GameError;

/// What happened to a placed card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementOutcome {
    /// Card appended to the row.
    Appended,
    /// Row was full; the player took these cards.
    Overflow { taken: Vec<Card> },
    /// Card was below every row; the player chose a row and took these cards.
    Forced { taken: Vec<Card> },
}

/// Result of placing one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub card: Card,
    pub row: usize,
    pub outcome: PlacementOutcome,
}

impl Placement {
    /// Cards the player has to take (empty when appended).
    #[must_use]
    pub fn taken(&self) -> &[Card] {
        match &self.outcome {
            PlacementOutcome::Appended => &[],
            PlacementOutcome::Overflow { taken } | PlacementOutcome::Forced { taken } => taken,
        }
    }

    /// Penalty points this placement costs the player.
    #[must_use]
    pub fn penalty(&self) -> u32 {
        self.taken().iter().map(|c| u32::from(c.penalty())).sum()
    }
}

/// Exactly four rows, alive for the whole session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: [Row; ROW_COUNT],
}

impl Board {
    /// Seed each row with one card drawn from `deck`.
    pub fn deal(deck: &mut Deck) -> Result<Self, GameError> {
        Ok(Self {
            rows: [
                Row::new(deck.draw()?),
                Row::new(deck.draw()?),
                Row::new(deck.draw()?),
                Row::new(deck.draw()?),
            ],
        })
    }

    /// Board with the given rows, in row order.
    #[must_use]
    pub fn from_rows(rows: [Row; ROW_COUNT]) -> Self {
        Self { rows }
    }

    /// All four rows, in row order.
    #[must_use]
    pub fn rows(&self) -> &[Row; ROW_COUNT] {
        &self.rows
    }

    /// Row at `index`, or `RowOutOfRange`.
    pub fn row(&self, index: usize) -> Result<&Row, GameError> {
        self.rows.get(index).ok_or(GameError::RowOutOfRange(index))
    }

    /// Tail numbers of every row, in row order.
    #[must_use]
    pub fn last_numbers(&self) -> [u8; ROW_COUNT] {
        std::array::from_fn(|i| self.rows[i].last().number())
    }

    /// Every card currently on the board.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.rows.iter().flat_map(|r| r.cards().iter())
    }

    /// Row `card` would land on, or `None` if it is lower than every tail.
    ///
    /// Picks the smallest positive gap; on equal gaps the lowest index wins.
    #[must_use]
    pub fn target_row(&self, card: Card) -> Option<usize> {
        let mut best: Option<(usize, u8)> = None;

        for (i, row) in self.rows.iter().enumerate() {
            let last = row.last().number();
            if last < card.number() {
                let diff = card.number() - last;
                if best.map_or(true, |(_, d)| diff < d) {
                    best = Some((i, diff));
                }
            }
        }

        best.map(|(i, _)| i)
    }

    /// Row with the lowest total penalty; lowest index on ties.
    #[must_use]
    pub fn cheapest_row(&self) -> usize {
        self.rows
            .iter()
            .enumerate()
            .min_by_key(|(_, row)| row.penalty())
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Place `card`, asking `choose_row` only if no row accepts it.
    ///
    /// `choose_row` sees the board before the card is placed. An index
    /// outside `0..4` is a contract violation and fails the placement
    /// without touching the board.
    pub fn place(
        &mut self,
        card: Card,
        choose_row: impl FnOnce(&Board) -> Result<usize, GameError>,
    ) -> Result<Placement, GameError> {
        if let Some(index) = self.target_row(card) {
            let row = &mut self.rows[index];
            let outcome = if row.is_full() {
                PlacementOutcome::Overflow { taken: row.restart(card) }
            } else {
                row.push(card);
                PlacementOutcome::Appended
            };
            return Ok(Placement { card, row: index, outcome });
        }

        let index = choose_row(self)?;
        let row = self
            .rows
            .get_mut(index)
            .ok_or(GameError::RowOutOfRange(index))?;

        Ok(Placement {
            card,
            row: index,
            outcome: PlacementOutcome::Forced { taken: row.restart(card) },
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            writeln!(f, "Row {}: {}  [{} pts]", i + 1, row, row.penalty())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [&[u8]; ROW_COUNT]) -> Board {
        Board::from_rows(rows.map(Row::from_numbers))
    }

    fn never_called(_: &Board) -> Result<usize, GameError> {
        panic!("row chooser should not be called")
    }

    #[test]
    fn test_deal_draws_four() {
        let mut deck = Deck::from_numbers([1, 2, 3, 4, 5]);
        let board = Board::deal(&mut deck).unwrap();

        assert_eq!(board.last_numbers(), [5, 4, 3, 2]);
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_minimal_gap_wins() {
        let mut b = board([&[3], &[17], &[42], &[90]]);

        assert_eq!(b.target_row(Card::new(20)), Some(1));
        let placement = b.place(Card::new(20), never_called).unwrap();

        assert_eq!(placement.row, 1);
        assert_eq!(placement.outcome, PlacementOutcome::Appended);
        assert_eq!(placement.penalty(), 0);
        assert_eq!(b.rows()[1].cards(), &[Card::new(17), Card::new(20)]);
        assert_eq!(b.last_numbers(), [3, 20, 42, 90]);
    }

    #[test]
    fn test_higher_than_all_goes_to_closest() {
        let b = board([&[3], &[17], &[42], &[90]]);
        assert_eq!(b.target_row(Card::new(104)), Some(3));
        assert_eq!(b.target_row(Card::new(4)), Some(0));
    }

    #[test]
    fn test_overflow_takes_row() {
        let mut b = board([&[1, 2, 3, 10, 11], &[60], &[70], &[80]]);
        assert_eq!(b.rows()[0].penalty(), 1 + 1 + 1 + 3 + 5);

        let placement = b.place(Card::new(12), never_called).unwrap();

        assert_eq!(placement.row, 0);
        assert_eq!(placement.penalty(), 11);
        assert!(matches!(placement.outcome, PlacementOutcome::Overflow { .. }));
        assert_eq!(placement.taken().len(), 5);
        assert_eq!(b.rows()[0].cards(), &[Card::new(12)]);
    }

    #[test]
    fn test_forced_uses_chooser() {
        let mut b = board([&[5], &[8], &[12], &[30]]);

        let placement = b.place(Card::new(2), |board| Ok(board.cheapest_row())).unwrap();

        // penalties 2, 1, 1, 3: the first one-point row is taken
        assert_eq!(placement.row, 1);
        assert_eq!(placement.penalty(), 1);
        assert!(matches!(placement.outcome, PlacementOutcome::Forced { .. }));
        assert_eq!(b.last_numbers(), [5, 2, 12, 30]);
    }

    #[test]
    fn test_forced_chooser_sees_board() {
        let mut b = board([&[50], &[60], &[70], &[80]]);

        let placement = b
            .place(Card::new(7), |board| {
                assert_eq!(board.last_numbers(), [50, 60, 70, 80]);
                Ok(3)
            })
            .unwrap();

        assert_eq!(placement.row, 3);
        assert_eq!(placement.taken(), &[Card::new(80)]);
        assert_eq!(b.last_numbers(), [50, 60, 70, 7]);
    }

    #[test]
    fn test_forced_out_of_range_leaves_board() {
        let mut b = board([&[50], &[60], &[70], &[80]]);
        let before = b.clone();

        let err = b.place(Card::new(7), |_| Ok(4)).unwrap_err();

        assert_eq!(err, GameError::RowOutOfRange(4));
        assert_eq!(b, before);
    }

    #[test]
    fn test_cheapest_row_ties_lowest_index() {
        let b = board([&[55], &[8, 9], &[12, 13], &[30]]);
        // penalties: 7, 2, 2, 3
        assert_eq!(b.cheapest_row(), 1);

        let flat = board([&[2], &[3], &[4], &[6]]);
        assert_eq!(flat.cheapest_row(), 0);
    }

    #[test]
    fn test_equal_tail_number_is_not_a_target() {
        // After a reshuffle a row tail can share a number with a dealt card.
        let b = board([&[20], &[40], &[60], &[80]]);
        assert_eq!(b.target_row(Card::new(40)), Some(0));
        assert_eq!(b.target_row(Card::new(20)), None);
    }

    #[test]
    fn test_row_lookup() {
        let b = board([&[20], &[40], &[60], &[80]]);
        assert_eq!(b.row(2).unwrap().last().number(), 60);
        assert_eq!(b.row(9), Err(GameError::RowOutOfRange(9)));
        assert_eq!(b.cards().count(), 4);
    }
}
