//! Bull-head penalty values for card faces 1..=104.
//!
//! The exception table is consulted strictly before the modulo rules.
//! For today's entries the two agree; the lookup order is kept so a table
//! entry always wins if they ever diverge.

/// Face numbers with a fixed penalty, checked before the modulo rules.
pub const EXCEPTIONS: &[(u8, u8)] = &[(55, 7), (5, 2), (10, 3), (1, 1)];

/// Penalty ("bull heads") printed on card `number`.
///
/// ```
/// use take_six::cards::penalty_of;
///
/// assert_eq!(penalty_of(55), 7);
/// assert_eq!(penalty_of(44), 5);
/// assert_eq!(penalty_of(30), 3);
/// assert_eq!(penalty_of(25), 2);
/// assert_eq!(penalty_of(26), 1);
/// ```
#[must_use]
pub fn penalty_of(number: u8) -> u8 {
    if let Some(&(_, penalty)) = EXCEPTIONS.iter().find(|(n, _)| *n == number) {
        return penalty;
    }

    if number % 11 == 0 {
        5
    } else if number % 10 == 0 {
        3
    } else if number % 5 == 0 {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::DECK_SIZE;

    #[test]
    fn test_exceptions() {
        assert_eq!(penalty_of(55), 7);
        assert_eq!(penalty_of(5), 2);
        assert_eq!(penalty_of(10), 3);
        assert_eq!(penalty_of(1), 1);
    }

    #[test]
    fn test_modulo_rules() {
        assert_eq!(penalty_of(11), 5);
        assert_eq!(penalty_of(22), 5);
        assert_eq!(penalty_of(20), 3);
        assert_eq!(penalty_of(15), 2);
        assert_eq!(penalty_of(7), 1);
        assert_eq!(penalty_of(104), 1);
        assert_eq!(penalty_of(100), 3);
        assert_eq!(penalty_of(99), 5);
    }

    #[test]
    fn test_total_over_deck() {
        let total: u32 = (1..=DECK_SIZE as u8).map(|n| u32::from(penalty_of(n))).sum();
        // 1 card worth 7, 8 worth 5, 10 worth 3, 9 worth 2, 76 worth 1
        assert_eq!(total, 7 + 8 * 5 + 10 * 3 + 9 * 2 + 76);
    }
}
