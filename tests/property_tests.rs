//! Property tests for deck construction.

use proptest::prelude::*;

use spot_deck::builder::{build_deck, BuildOutcome, DeckBuilder, Step};
use spot_deck::core::{BuildConfig, Symbol, SymbolPool};
use spot_deck::design::{check_pairwise, ProjectivePlane};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_every_pair_shares_exactly_one_symbol(k in 1usize..=8) {
        let build = build_deck(k).unwrap();
        prop_assert!(check_pairwise(&build.deck).is_ok());
    }

    #[test]
    fn prop_every_card_has_k_symbols(k in 1usize..=8) {
        let build = build_deck(k).unwrap();
        prop_assert!(build.deck.iter().all(|card| card.len() == k));
    }

    #[test]
    fn prop_terminates_before_the_cap(k in 1usize..=8) {
        let build = build_deck(k).unwrap();
        let capped = matches!(build.outcome, BuildOutcome::IterationCapReached { .. });
        prop_assert!(!capped);
    }

    #[test]
    fn prop_build_is_deterministic(k in 1usize..=8) {
        prop_assert_eq!(build_deck(k).unwrap(), build_deck(k).unwrap());
    }

    #[test]
    fn prop_fresh_symbols_are_strictly_increasing(k in 1usize..=8) {
        let mut builder = DeckBuilder::new(BuildConfig::new(k)).unwrap();
        let mut fresh_seen: Vec<Symbol> = Vec::new();

        loop {
            let next_fresh = builder.state().next_fresh().unwrap();
            match builder.step() {
                Step::Committed(index) => {
                    let card = builder.state().deck().get(index).unwrap().clone();
                    fresh_seen.extend(card.iter().filter(|&s| s >= next_fresh));
                }
                Step::Finished(_) => break,
            }
        }

        prop_assert!(fresh_seen.windows(2).all(|w| w[0] < w[1]));
        if let Some(first) = fresh_seen.first() {
            prop_assert_eq!(first.raw(), k as u32);
        }
    }

    #[test]
    fn prop_malformed_pools_never_break_the_invariant(
        k in 1usize..=5,
        counts in proptest::collection::vec((0u32..12, 0u32..4), 0..12),
    ) {
        let pool = SymbolPool::from_counts(counts.into_iter().map(|(s, c)| (Symbol::new(s), c)));
        let mut builder = DeckBuilder::with_pool(BuildConfig::new(k), pool).unwrap();

        let mut steps = 0;
        loop {
            steps += 1;
            if steps > 200 {
                break;
            }
            if let Step::Finished(_) = builder.step() {
                break;
            }
        }

        let deck = builder.state().deck();
        prop_assert!(check_pairwise(deck).is_ok());
        prop_assert!(deck.iter().all(|card| card.len() == k));
    }

    #[test]
    fn prop_projective_decks_are_valid(order in prop::sample::select(vec![2u32, 3, 5, 7])) {
        let deck = ProjectivePlane::new(order).unwrap().to_deck();
        let n = order as usize;
        prop_assert_eq!(deck.len(), n * n + n + 1);
        prop_assert!(check_pairwise(&deck).is_ok());
    }
}
