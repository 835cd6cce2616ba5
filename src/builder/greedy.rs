//! Greedy incremental deck construction.
//!
//! Each iteration builds at most one new card:
//!
//! 1. **Seed**: on an empty deck, take the first `k` distinct pooled symbols.
//! 2. **Intersect**: walk committed cards in order. A card already sharing a
//!    symbol with the new card is skipped. Otherwise its symbols are tried in
//!    order and the first one that is still pooled and passes the
//!    double-match guard is placed. If none passes, the build stops.
//! 3. **Pad**: fill remaining slots with fresh symbols, each pooled `k-1`
//!    more times. Running out of fresh symbols stalls the build.
//! 4. **Commit** the card.
//!
//! The build stops when step 2 (or 1) cannot place a symbol. With the pool
//! exhausted that is a clean completion; otherwise it is a stall. The
//! iteration cap is a separate safety stop.
//!
//! ```
//! use spot_deck::builder::build_deck;
//!
//! let build = build_deck(3).unwrap();
//! assert!(build.outcome.is_complete());
//! assert_eq!(build.deck.len(), 7);
//! ```

use tracing::{debug, error, info, warn};

use crate::core::{BuildConfig, Card, DeckError, SymbolPool};

use super::outcome::{BuildOutcome, DeckBuild, Stall, StallReason};
use super::state::BuildState;

/// Why a card could not be completed.
struct Blocked {
    reason: StallReason,
    blocking_card: Option<usize>,
    partial: Card,
}

/// Result of a single builder iteration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// A card was committed at this deck index.
    Committed(usize),
    /// No card could be formed; the build is over.
    Finished(BuildOutcome),
}

/// Deck builder for one configuration.
///
/// Use [`build`](Self::build) to run to termination, or [`step`](Self::step)
/// to drive iterations one at a time.
#[derive(Clone, Debug)]
pub struct DeckBuilder {
    config: BuildConfig,
    state: BuildState,
}

impl DeckBuilder {
    /// Create a builder with the default seeded pool.
    pub fn new(config: BuildConfig) -> Result<Self, DeckError> {
        config.validate()?;
        let state = BuildState::new(config.symbols_per_card);
        Ok(Self { config, state })
    }

    /// Create a builder over a caller-supplied pool.
    pub fn with_pool(config: BuildConfig, pool: SymbolPool) -> Result<Self, DeckError> {
        config.validate()?;
        Ok(Self {
            config,
            state: BuildState::with_pool(pool),
        })
    }

    /// The build configuration.
    #[must_use]
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Current build state.
    #[must_use]
    pub fn state(&self) -> &BuildState {
        &self.state
    }

    /// Run one iteration.
    ///
    /// Does not enforce the iteration cap; [`build`](Self::build) does.
    pub fn step(&mut self) -> Step {
        self.state.stats.iterations += 1;

        let attempt = if self.state.deck.is_empty() {
            self.seed_card()
        } else {
            self.intersect_card()
        };

        match attempt.and_then(|card| self.pad_card(card)) {
            Ok(card) => {
                let index = self.state.deck.len();
                debug!(card = index, symbols = %card, "committed card");
                self.state.deck.push(card);
                self.state.stats.cards = self.state.deck.len();
                Step::Committed(index)
            }
            Err(blocked) => Step::Finished(self.finish(blocked)),
        }
    }

    /// Run until the build terminates or the iteration cap fires.
    pub fn build(mut self) -> DeckBuild {
        let outcome = loop {
            if self.state.stats.iterations >= self.config.max_iterations {
                error!(
                    max_iterations = self.config.max_iterations,
                    cards = self.state.deck.len(),
                    "iteration cap reached, aborting build"
                );
                break BuildOutcome::IterationCapReached {
                    max_iterations: self.config.max_iterations,
                };
            }
            if let Step::Finished(outcome) = self.step() {
                break outcome;
            }
        };

        self.state.stats.pool_remaining = self.state.pool.total();
        DeckBuild {
            deck: self.state.deck,
            outcome,
            stats: self.state.stats,
        }
    }

    /// First `k` distinct symbols from the pool.
    fn seed_card(&mut self) -> Result<Card, Blocked> {
        let k = self.config.symbols_per_card;
        let mut card = Card::with_capacity(k);

        for symbol in self.state.pool.first_distinct(k) {
            if self.state.pool.take(symbol) {
                card.push(symbol);
            }
        }

        if card.len() < k {
            return Err(Blocked {
                reason: StallReason::SeedShort,
                blocking_card: None,
                partial: card,
            });
        }
        Ok(card)
    }

    /// One symbol from each committed card the new card does not yet meet.
    fn intersect_card(&mut self) -> Result<Card, Blocked> {
        let k = self.config.symbols_per_card;
        let state = &mut self.state;
        let mut card = Card::with_capacity(k);

        for (index, existing) in state.deck.iter().enumerate() {
            if card.shared_count(existing) > 0 {
                continue;
            }
            // Full but disjoint: no slot left to meet this card.
            if card.len() >= k {
                return Err(Blocked {
                    reason: StallReason::CardFull,
                    blocking_card: Some(index),
                    partial: card,
                });
            }

            let accepted = existing
                .iter()
                .find(|&symbol| state.pool.contains(symbol) && !state.double_match(&card, symbol));

            match accepted {
                Some(symbol) => {
                    state.pool.take(symbol);
                    card.push(symbol);
                }
                None => {
                    return Err(Blocked {
                        reason: StallReason::NoCandidate,
                        blocking_card: Some(index),
                        partial: card,
                    })
                }
            }
        }

        Ok(card)
    }

    /// Top up with fresh symbols, each pooled for `k-1` further cards.
    ///
    /// The pool is left untouched if the allocator cannot cover every slot.
    fn pad_card(&mut self, mut card: Card) -> Result<Card, Blocked> {
        let k = self.config.symbols_per_card;
        let mut fresh = Vec::with_capacity(k.saturating_sub(card.len()));
        while card.len() + fresh.len() < k {
            match self.state.allocator.allocate() {
                Some(symbol) => fresh.push(symbol),
                None => {
                    return Err(Blocked {
                        reason: StallReason::FreshSymbolsExhausted,
                        blocking_card: None,
                        partial: card,
                    })
                }
            }
        }

        // k is bounded by `MAX_SYMBOLS_PER_CARD`, so this fits.
        let copies = (k - 1) as u32;
        for symbol in fresh {
            card.push(symbol);
            self.state.pool.replenish(symbol, copies);
            self.state.stats.fresh_symbols += 1;
        }
        Ok(card)
    }

    /// Classify a blocked card as completion or stall.
    fn finish(&mut self, blocked: Blocked) -> BuildOutcome {
        self.state.roll_back(&blocked.partial);

        if self.state.pool.is_exhausted() {
            info!(
                cards = self.state.deck.len(),
                iterations = self.state.stats.iterations,
                "deck complete"
            );
            return BuildOutcome::Complete;
        }

        let stall = Stall {
            card_index: self.state.deck.len(),
            reason: blocked.reason,
            blocking_card: blocked.blocking_card,
            partial: blocked.partial,
            pool_remaining: self.state.pool.total(),
        };
        warn!(
            card = stall.card_index,
            reason = ?stall.reason,
            blocking_card = ?stall.blocking_card,
            partial = %stall.partial,
            pool_remaining = stall.pool_remaining,
            "failed to match new card"
        );
        BuildOutcome::Stalled(stall)
    }
}

/// Build a deck with `k` symbols per card and the default iteration cap.
pub fn build_deck(symbols_per_card: usize) -> Result<DeckBuild, DeckError> {
    build_with_config(BuildConfig::new(symbols_per_card))
}

/// Build a deck for an explicit configuration.
pub fn build_with_config(config: BuildConfig) -> Result<DeckBuild, DeckError> {
    Ok(DeckBuilder::new(config)?.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;

    fn ids(card: &Card) -> Vec<u32> {
        card.iter().map(Symbol::raw).collect()
    }

    #[test]
    fn test_seed_step() {
        let mut builder = DeckBuilder::new(BuildConfig::new(3)).unwrap();

        assert_eq!(builder.step(), Step::Committed(0));
        assert_eq!(ids(builder.state().deck().get(0).unwrap()), vec![0, 1, 2]);
        assert_eq!(builder.state().pool().total(), 6);
    }

    #[test]
    fn test_second_card_pads_with_fresh_symbols() {
        let mut builder = DeckBuilder::new(BuildConfig::new(3)).unwrap();
        builder.step();
        builder.step();

        let state = builder.state();
        assert_eq!(ids(state.deck().get(1).unwrap()), vec![0, 3, 4]);
        assert_eq!(state.pool().available(Symbol::new(0)), 1);
        assert_eq!(state.pool().available(Symbol::new(3)), 2);
        assert_eq!(state.next_fresh(), Some(Symbol::new(5)));
        assert_eq!(state.stats().fresh_symbols, 2);
    }

    #[test]
    fn test_unmatchable_card_stalls() {
        let pool = SymbolPool::from_counts([(Symbol::new(0), 1), (Symbol::new(1), 5)]);
        let mut builder = DeckBuilder::with_pool(BuildConfig::new(1), pool).unwrap();

        assert_eq!(builder.step(), Step::Committed(0));
        // Seed consumed 0; nothing left on [0] for the next card.
        match builder.step() {
            Step::Finished(BuildOutcome::Stalled(stall)) => {
                assert_eq!(stall.reason, StallReason::NoCandidate);
                assert_eq!(stall.card_index, 1);
                assert_eq!(stall.blocking_card, Some(0));
                assert!(stall.partial.is_empty());
                assert_eq!(stall.pool_remaining, 5);
            }
            other => panic!("expected stall, got {other:?}"),
        }
    }

    #[test]
    fn test_full_card_missing_a_later_card_stalls() {
        // Builds the star [0, 1], [0, 2], [0, 3]. The fourth card takes 1 from
        // the first card and 2 from the second, then has no room for [0, 3].
        let pool = SymbolPool::from_counts([(Symbol::new(0), 3), (Symbol::new(1), 2)]);
        let mut builder = DeckBuilder::with_pool(BuildConfig::new(2), pool).unwrap();

        for index in 0..3 {
            assert_eq!(builder.step(), Step::Committed(index));
        }
        let deck: Vec<_> = builder.state().deck().iter().map(ids).collect();
        assert_eq!(deck, vec![vec![0, 1], vec![0, 2], vec![0, 3]]);

        match builder.step() {
            Step::Finished(BuildOutcome::Stalled(stall)) => {
                assert_eq!(stall.reason, StallReason::CardFull);
                assert_eq!(stall.card_index, 3);
                assert_eq!(stall.blocking_card, Some(2));
                assert_eq!(ids(&stall.partial), vec![1, 2]);
                assert_eq!(stall.pool_remaining, 3);
            }
            other => panic!("expected stall, got {other:?}"),
        }
        assert_eq!(builder.state().deck().len(), 3);
    }

    #[test]
    fn test_padding_stalls_when_fresh_symbols_run_out() {
        let top = u32::MAX;
        let pool = SymbolPool::from_counts([(Symbol::new(top - 1), 1), (Symbol::new(top), 2)]);
        let mut builder = DeckBuilder::with_pool(BuildConfig::new(2), pool).unwrap();

        assert_eq!(builder.step(), Step::Committed(0));
        match builder.step() {
            Step::Finished(BuildOutcome::Stalled(stall)) => {
                assert_eq!(stall.reason, StallReason::FreshSymbolsExhausted);
                assert_eq!(stall.card_index, 1);
                assert_eq!(stall.blocking_card, None);
                assert_eq!(ids(&stall.partial), vec![top]);
                assert_eq!(stall.pool_remaining, 1);
            }
            other => panic!("expected stall, got {other:?}"),
        }
        assert_eq!(builder.state().stats().fresh_symbols, 0);
    }

    #[test]
    fn test_rejects_invalid_config() {
        assert!(DeckBuilder::new(BuildConfig::new(0)).is_err());
        assert!(build_deck(0).is_err());
    }

    #[test]
    fn test_cap_is_distinct_from_completion() {
        let config = BuildConfig::new(3).with_max_iterations(2);
        let build = build_with_config(config).unwrap();

        assert_eq!(
            build.outcome,
            BuildOutcome::IterationCapReached { max_iterations: 2 }
        );
        assert_eq!(build.deck.len(), 2);
        assert_eq!(build.stats.iterations, 2);
    }
}
