//! Build results: the deck, how the build ended, and statistics.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Deck};

/// Why the builder could not complete a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StallReason {
    /// The pool holds fewer than `k` distinct symbols for the seed card.
    SeedShort,
    /// No pooled symbol of the blocking card passes the double-match guard.
    NoCandidate,
    /// The new card is already full but shares nothing with the blocking card.
    CardFull,
    /// Padding needs fresh symbols past `u32::MAX`.
    FreshSymbolsExhausted,
}

/// A card that could not be completed.
///
/// Stalls are reported, not raised: the deck built so far is still
/// returned alongside.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stall {
    /// Index the new card would have had in the deck.
    pub card_index: usize,

    /// What went wrong.
    pub reason: StallReason,

    /// Existing card the new card could not be matched against.
    /// `None` for the seed step and for padding failures.
    pub blocking_card: Option<usize>,

    /// Symbols placed on the new card before the stall. Never committed.
    pub partial: Card,

    /// Pool units still available after the partial card was rolled back.
    pub pool_remaining: u64,
}

impl std::fmt::Display for Stall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            StallReason::SeedShort => {
                write!(f, "seed card {} is short of distinct symbols", self.partial)?;
            }
            StallReason::FreshSymbolsExhausted => write!(
                f,
                "card {} {} ran out of fresh symbols",
                self.card_index, self.partial
            )?,
            StallReason::NoCandidate | StallReason::CardFull => {
                let verb = if self.reason == StallReason::CardFull {
                    "is full but misses"
                } else {
                    "could not be matched with"
                };
                write!(f, "card {} {} {verb}", self.card_index, self.partial)?;
                if let Some(blocking) = self.blocking_card {
                    write!(f, " card {blocking}")?;
                }
            }
        }
        write!(f, " ({} pool units left)", self.pool_remaining)
    }
}

/// How a build ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildOutcome {
    /// No further card could be formed and the pool is exhausted.
    Complete,

    /// No further card could be formed while symbols remain.
    Stalled(Stall),

    /// The iteration cap fired before the build terminated.
    IterationCapReached {
        /// The cap that was hit
        max_iterations: u32,
    },
}

impl BuildOutcome {
    /// Check if the build terminated naturally with nothing left over.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// The stall report, if the build stalled.
    #[must_use]
    pub fn stall(&self) -> Option<&Stall> {
        match self {
            Self::Stalled(stall) => Some(stall),
            _ => None,
        }
    }
}

impl std::fmt::Display for BuildOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Complete => write!(f, "complete"),
            Self::Stalled(stall) => write!(f, "stalled: {stall}"),
            Self::IterationCapReached { max_iterations } => {
                write!(f, "aborted after {max_iterations} iterations")
            }
        }
    }
}

/// Counters collected during a build.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Builder iterations performed.
    pub iterations: u32,

    /// Cards committed to the deck.
    pub cards: usize,

    /// Fresh symbols introduced by padding.
    pub fresh_symbols: u32,

    /// Pool units left when the build ended.
    pub pool_remaining: u64,
}

/// Everything a build produces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckBuild {
    /// The committed cards, in construction order.
    pub deck: Deck,

    /// How the build ended.
    pub outcome: BuildOutcome,

    /// Build counters.
    pub stats: BuildStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;

    #[test]
    fn test_outcome_accessors() {
        assert!(BuildOutcome::Complete.is_complete());
        assert!(BuildOutcome::Complete.stall().is_none());

        let stall = Stall {
            card_index: 1,
            reason: StallReason::NoCandidate,
            blocking_card: Some(0),
            partial: Card::new(),
            pool_remaining: 3,
        };
        let outcome = BuildOutcome::Stalled(stall.clone());
        assert!(!outcome.is_complete());
        assert_eq!(outcome.stall(), Some(&stall));
    }

    #[test]
    fn test_stall_display() {
        let mut stall = Stall {
            card_index: 4,
            reason: StallReason::NoCandidate,
            blocking_card: Some(2),
            partial: Card::try_from_symbols([Symbol::new(1)]).unwrap(),
            pool_remaining: 6,
        };
        assert_eq!(
            stall.to_string(),
            "card 4 [1] could not be matched with card 2 (6 pool units left)"
        );

        stall.reason = StallReason::CardFull;
        assert_eq!(
            stall.to_string(),
            "card 4 [1] is full but misses card 2 (6 pool units left)"
        );

        stall.reason = StallReason::FreshSymbolsExhausted;
        stall.blocking_card = None;
        assert_eq!(
            stall.to_string(),
            "card 4 [1] ran out of fresh symbols (6 pool units left)"
        );

        let cap = BuildOutcome::IterationCapReached { max_iterations: 5 };
        assert_eq!(cap.to_string(), "aborted after 5 iterations");
    }
}
