//! Deck validation: the pairwise one-shared-symbol rule, card sizes, and
//! symbol frequency analysis.
//!
//! Construction is never trusted to be correct; decks are checked here.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Deck, DeckError, Symbol};

/// Two cards that do not share exactly one symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairViolation {
    /// Index of the first card
    pub first: usize,
    /// Index of the second card
    pub second: usize,
    /// Number of shared symbols
    pub shared: usize,
}

/// A card whose size differs from the expected size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeViolation {
    /// Index of the card
    pub card: usize,
    /// Symbols found on it
    pub size: usize,
}

/// How many cards each symbol appears on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolFrequencies {
    /// `(symbol, cards)` sorted by symbol.
    counts: Vec<(Symbol, usize)>,
}

impl SymbolFrequencies {
    /// Count symbol occurrences across a deck.
    #[must_use]
    pub fn of(deck: &Deck) -> Self {
        let mut counts: FxHashMap<Symbol, usize> = FxHashMap::default();
        for symbol in deck.iter().flat_map(|card| card.iter()) {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_unstable_by_key(|&(symbol, _)| symbol);
        Self { counts }
    }

    /// Number of cards carrying `symbol`.
    #[must_use]
    pub fn get(&self, symbol: Symbol) -> usize {
        self.counts
            .binary_search_by_key(&symbol, |&(s, _)| s)
            .map_or(0, |i| self.counts[i].1)
    }

    /// Number of distinct symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no symbols were counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Check that every symbol appears on exactly `cards` cards.
    #[must_use]
    pub fn is_uniform(&self, cards: usize) -> bool {
        self.counts.iter().all(|&(_, count)| count == cards)
    }

    /// Iterate `(symbol, cards)` in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, usize)> + '_ {
        self.counts.iter().copied()
    }
}

impl std::fmt::Display for SymbolFrequencies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (symbol, count)) in self.counts.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "Symbol {symbol}: {count} times")?;
        }
        Ok(())
    }
}

/// Full validation result for a deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckReport {
    /// Every pair that breaks the one-shared-symbol rule.
    pub pair_violations: Vec<PairViolation>,
    /// Every card of the wrong size (empty if no size was expected).
    pub size_violations: Vec<SizeViolation>,
    /// Symbol usage across the deck.
    pub frequencies: SymbolFrequencies,
}

impl DeckReport {
    /// Check if the deck passed every check.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.pair_violations.is_empty() && self.size_violations.is_empty()
    }
}

/// Shared symbol counts for every unordered card pair, in index order.
fn pairs(deck: &Deck) -> impl Iterator<Item = PairViolation> + '_ {
    deck.iter().enumerate().flat_map(move |(i, a)| {
        deck.iter().enumerate().skip(i + 1).map(move |(j, b)| PairViolation {
            first: i,
            second: j,
            shared: a.shared_count(b),
        })
    })
}

/// Check the one-shared-symbol rule, stopping at the first bad pair.
pub fn check_pairwise(deck: &Deck) -> Result<(), DeckError> {
    match pairs(deck).find(|pair| pair.shared != 1) {
        Some(bad) => Err(DeckError::pair_violation(bad.first, bad.second, bad.shared)),
        None => Ok(()),
    }
}

/// Run every check on a deck.
///
/// Card sizes are only checked when `expected_card_size` is given.
#[must_use]
pub fn validate_deck(deck: &Deck, expected_card_size: Option<usize>) -> DeckReport {
    let pair_violations = pairs(deck).filter(|pair| pair.shared != 1).collect();

    let size_violations = match expected_card_size {
        Some(expected) => deck
            .iter()
            .enumerate()
            .filter(|(_, card)| card.len() != expected)
            .map(|(card, c)| SizeViolation {
                card,
                size: c.len(),
            })
            .collect(),
        None => Vec::new(),
    };

    DeckReport {
        pair_violations,
        size_violations,
        frequencies: SymbolFrequencies::of(deck),
    }
}
