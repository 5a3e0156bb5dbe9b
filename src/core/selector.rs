//! Event type selection for financial events

use crate::core::traits::RandomSource;
use crate::types::EventKind;

/// Pick the financial event kind for one iteration
///
/// Deposit and withdrawal are equally likely and each call is independent of
/// every other decision the generator makes.
pub fn select_financial_kind<R: RandomSource + ?Sized>(rng: &mut R) -> EventKind {
    if rng.chance(0.5) {
        EventKind::Deposit
    } else {
        EventKind::Withdrawal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::SeededSource;
    use crate::core::testing::ScriptedSource;
    use rstest::rstest;

    #[rstest]
    #[case(true, EventKind::Deposit)]
    #[case(false, EventKind::Withdrawal)]
    fn test_select_financial_kind(#[case] draw: bool, #[case] expected: EventKind) {
        let mut rng = ScriptedSource::new().chances(&[draw]);
        assert_eq!(select_financial_kind(&mut rng), expected);
    }

    #[test]
    fn test_roughly_even_split() {
        let mut rng = SeededSource::from_seed(99);
        let deposits = (0..10_000)
            .filter(|_| select_financial_kind(&mut rng) == EventKind::Deposit)
            .count();

        assert!((4_500..5_500).contains(&deposits), "deposits: {}", deposits);
    }
}
