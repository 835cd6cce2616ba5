//! Symbol pool: how many more cards each symbol may still appear on.
//!
//! The pool is a multiplicity map. Taking a symbol consumes one unit;
//! a symbol whose count reaches zero is no longer available. Counts can
//! never go negative: `take` refuses instead.
//!
//! Iteration is in ascending symbol order, which defines "first available"
//! for the seed card.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Symbol;

/// Multiset of symbols available for placement.
///
/// ```
/// use spot_deck::core::{Symbol, SymbolPool};
///
/// let mut pool = SymbolPool::seeded(3);
/// assert_eq!(pool.total(), 9);
///
/// assert!(pool.take(Symbol::new(0)));
/// assert_eq!(pool.available(Symbol::new(0)), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolPool {
    counts: BTreeMap<Symbol, u32>,
}

impl SymbolPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The initial pool for `k` symbols per card: symbols `0..k`, each
    /// available `k` times. `k` saturates at `u32::MAX`.
    #[must_use]
    pub fn seeded(symbols_per_card: usize) -> Self {
        let k = u32::try_from(symbols_per_card).unwrap_or(u32::MAX);
        Self::from_counts((0..k).map(|id| (Symbol::new(id), k)))
    }

    /// Build a pool from explicit `(symbol, count)` pairs.
    ///
    /// Repeated symbols accumulate. Zero counts are dropped.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (Symbol, u32)>,
    {
        let mut pool = Self::new();
        for (symbol, count) in counts {
            pool.replenish(symbol, count);
        }
        pool
    }

    /// Remaining multiplicity of a symbol (0 if absent).
    #[must_use]
    pub fn available(&self, symbol: Symbol) -> u32 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Check if a symbol can still be placed.
    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.available(symbol) > 0
    }

    /// Consume one unit of a symbol.
    ///
    /// Returns `false` (and changes nothing) if the symbol is exhausted.
    pub fn take(&mut self, symbol: Symbol) -> bool {
        match self.counts.get_mut(&symbol) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.counts.remove(&symbol);
                true
            }
            None => false,
        }
    }

    /// Add `count` units of a symbol.
    pub fn replenish(&mut self, symbol: Symbol, count: u32) {
        if count > 0 {
            *self.counts.entry(symbol).or_insert(0) += count;
        }
    }

    /// Total units across all symbols.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Check if no symbol is available.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.counts.is_empty()
    }

    /// The first `n` distinct available symbols in ascending order.
    ///
    /// Returns fewer than `n` if the pool does not hold that many.
    #[must_use]
    pub fn first_distinct(&self, n: usize) -> Vec<Symbol> {
        self.counts.keys().copied().take(n).collect()
    }

    /// Largest symbol with a non-zero count.
    #[must_use]
    pub fn max_symbol(&self) -> Option<Symbol> {
        self.counts.keys().next_back().copied()
    }

    /// Iterate over `(symbol, count)` for available symbols.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u32)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }
}
