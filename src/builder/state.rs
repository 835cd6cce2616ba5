//! Mutable state owned by a single deck build.
//!
//! A fresh `BuildState` is created per build, so builds never share
//! counters or pools and can run side by side.

use crate::core::{Card, Deck, Symbol, SymbolAllocator, SymbolPool};

use super::outcome::BuildStats;

/// Working deck, symbol pool, and fresh-symbol counter.
#[derive(Clone, Debug)]
pub struct BuildState {
    pub(crate) deck: Deck,
    pub(crate) pool: SymbolPool,
    pub(crate) allocator: SymbolAllocator,
    pub(crate) stats: BuildStats,
}

impl BuildState {
    /// State for `k` symbols per card: the seeded pool and a counter
    /// starting just past the seed symbols.
    #[must_use]
    pub fn new(symbols_per_card: usize) -> Self {
        Self {
            deck: Deck::new(),
            pool: SymbolPool::seeded(symbols_per_card),
            allocator: SymbolAllocator::starting_at(symbols_per_card as u64),
            stats: BuildStats::default(),
        }
    }

    /// State over a caller-supplied pool.
    ///
    /// Fresh symbols start one past the largest pooled symbol. A pool
    /// holding `u32::MAX` leaves no fresh symbols at all.
    #[must_use]
    pub fn with_pool(pool: SymbolPool) -> Self {
        let allocator = pool
            .max_symbol()
            .map_or_else(SymbolAllocator::default, SymbolAllocator::after);
        Self {
            deck: Deck::new(),
            pool,
            allocator,
            stats: BuildStats::default(),
        }
    }

    /// Cards committed so far.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Symbols still available.
    #[must_use]
    pub fn pool(&self) -> &SymbolPool {
        &self.pool
    }

    /// The symbol the next padding step will introduce, if any are left.
    #[must_use]
    pub fn next_fresh(&self) -> Option<Symbol> {
        self.allocator.peek()
    }

    /// Counters so far.
    #[must_use]
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Would adding `candidate` to `card` make it share more than one
    /// symbol with any committed card?
    ///
    /// A candidate already on the card also counts as a double match.
    #[must_use]
    pub fn double_match(&self, card: &Card, candidate: Symbol) -> bool {
        if card.contains(candidate) {
            return true;
        }
        self.deck.iter().any(|existing| {
            existing.shared_count(card) + usize::from(existing.contains(candidate)) > 1
        })
    }

    /// Return every symbol on an abandoned card to the pool.
    pub(crate) fn roll_back(&mut self, card: &Card) {
        for symbol in card.iter() {
            self.pool.replenish(symbol, 1);
        }
    }
}
