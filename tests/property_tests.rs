//! Property-based tests for dealing and placement invariants.

use std::collections::HashSet;

use proptest::prelude::*;

use take_six::board::{Board, Row};
use take_six::cards::{Card, Deck};
use take_six::core::constants::{DECK_SIZE, HAND_SIZE, MAX_ROW_LEN, ROW_COUNT};
use take_six::core::{seat_players, GameConfig, GameRng};
use take_six::presentation::ScriptedPresenter;
use take_six::rules::{GameSession, SessionStatus};

fn full_deck() -> Vec<u8> {
    (1..=DECK_SIZE as u8).collect()
}

fn check_rows(board: &Board) -> Result<(), TestCaseError> {
    for row in board.rows() {
        prop_assert!((1..=MAX_ROW_LEN).contains(&row.len()), "row length {}", row.len());
        let numbers: Vec<u8> = row.cards().iter().map(|c| c.number()).collect();
        prop_assert!(
            numbers.windows(2).all(|w| w[0] < w[1]),
            "row not ascending: {:?}",
            numbers
        );
        prop_assert_eq!(row.last().number(), *numbers.iter().max().unwrap());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// A shuffled deck holds every number exactly once.
    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>()) {
        let deck = Deck::shuffled(&mut GameRng::new(seed));
        let mut numbers: Vec<u8> = deck.cards().iter().map(|c| c.number()).collect();
        numbers.sort_unstable();
        prop_assert_eq!(numbers, full_deck());
    }

    /// Hands are disjoint and, with the rest of the deck, cover 1..=104.
    #[test]
    fn prop_deal_is_disjoint(seed in any::<u64>(), count in 2usize..=10) {
        let mut deck = Deck::shuffled(&mut GameRng::new(seed));
        let mut players = seat_players(count, "You");
        deck.deal(&mut players, HAND_SIZE).unwrap();

        let mut seen = HashSet::new();
        for p in players.values() {
            prop_assert_eq!(p.hand.len(), HAND_SIZE);
            for c in p.hand.iter() {
                prop_assert!(seen.insert(c.number()), "card {} dealt twice", c.number());
            }
        }
        for c in deck.cards() {
            prop_assert!(seen.insert(c.number()), "card {} both dealt and in deck", c.number());
        }
        prop_assert_eq!(seen.len(), DECK_SIZE);
    }

    /// The chosen row has the closest lower tail; no other row beats it.
    #[test]
    fn prop_target_row_minimal_gap(
        numbers in prop::collection::hash_set(1u8..=104, ROW_COUNT + 1),
    ) {
        let numbers: Vec<u8> = numbers.into_iter().collect();
        let card = Card::new(numbers[ROW_COUNT]);
        let board = Board::from_rows([
            Row::from_numbers(&numbers[0..1]),
            Row::from_numbers(&numbers[1..2]),
            Row::from_numbers(&numbers[2..3]),
            Row::from_numbers(&numbers[3..4]),
        ]);
        let tails = board.last_numbers();

        match board.target_row(card) {
            None => prop_assert!(tails.iter().all(|&t| t > card.number())),
            Some(i) => {
                prop_assert!(tails[i] < card.number());
                for (j, &t) in tails.iter().enumerate() {
                    if j != i && t < card.number() {
                        prop_assert!(t < tails[i]);
                    }
                }
            }
        }
    }

    /// Rows stay within 1..=5 ascending cards for a whole game, and
    /// penalties never go down.
    #[test]
    fn prop_rows_hold_through_a_game(seed in any::<u64>(), count in 2usize..=10) {
        let config = GameConfig::new(count).unwrap().with_seed(seed);
        let mut session = GameSession::new(config).unwrap();
        let mut presenter = ScriptedPresenter::new();
        let mut last_points: Vec<u32> = vec![0; count];

        loop {
            let status = session.step(&mut presenter).unwrap();
            check_rows(session.board())?;

            let points: Vec<u32> = session.players().values().map(|p| p.penalty_points).collect();
            for (before, after) in last_points.iter().zip(&points) {
                prop_assert!(after >= before);
            }
            last_points = points;

            if let SessionStatus::Finished(_) = status {
                break;
            }
        }
    }
}
