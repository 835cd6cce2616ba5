//! Symbol identifiers and fresh-symbol allocation.
//!
//! A symbol is an opaque marker printed on cards (a picture in the real
//! game). The engine only compares symbols for equality and ordering.
//!
//! ```
//! use spot_deck::core::{Symbol, SymbolAllocator};
//!
//! let mut alloc = SymbolAllocator::starting_at(3);
//! assert_eq!(alloc.allocate(), Some(Symbol::new(3)));
//! assert_eq!(alloc.allocate(), Some(Symbol::new(4)));
//! assert_eq!(alloc.peek(), Some(Symbol::new(5)));
//! ```

use serde::{Deserialize, Serialize};

/// Opaque symbol identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub u32);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Symbol {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Hands out symbols that have never been used before.
///
/// Allocation is strictly increasing; an allocator never returns the
/// same symbol twice. Once `u32::MAX` has been handed out the allocator
/// is exhausted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolAllocator {
    // One wider than `Symbol` so the position past `u32::MAX` is representable.
    next: u64,
}

impl SymbolAllocator {
    /// Create an allocator whose first symbol is `first`.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Create an allocator starting one past `last`.
    #[must_use]
    pub fn after(last: Symbol) -> Self {
        Self::starting_at(u64::from(last.raw()) + 1)
    }

    /// Allocate the next fresh symbol, or `None` once the symbol space is used up.
    pub fn allocate(&mut self) -> Option<Symbol> {
        let symbol = self.peek()?;
        self.next += 1;
        Some(symbol)
    }

    /// The symbol the next `allocate` call will return.
    #[must_use]
    pub fn peek(&self) -> Option<Symbol> {
        u32::try_from(self.next).ok().map(Symbol)
    }

    /// Fresh symbols left before the allocator is exhausted.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        (u64::from(u32::MAX) + 1).saturating_sub(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_is_strictly_increasing() {
        let mut alloc = SymbolAllocator::starting_at(10);
        let drawn: Vec<_> = (0..5).filter_map(|_| alloc.allocate()).collect();

        assert_eq!(drawn.first(), Some(&Symbol::new(10)));
        assert!(drawn.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(alloc.peek(), Some(Symbol::new(15)));
    }

    #[test]
    fn test_allocator_stops_at_symbol_space_end() {
        let mut alloc = SymbolAllocator::after(Symbol::new(u32::MAX - 2));
        assert_eq!(alloc.remaining(), 2);

        assert_eq!(alloc.allocate(), Some(Symbol::new(u32::MAX - 1)));
        assert_eq!(alloc.allocate(), Some(Symbol::new(u32::MAX)));
        assert_eq!(alloc.remaining(), 0);
        assert_eq!(alloc.peek(), None);
        assert_eq!(alloc.allocate(), None);

        let past_end = SymbolAllocator::after(Symbol::new(u32::MAX));
        assert_eq!(past_end.remaining(), 0);
        assert_eq!(past_end.peek(), None);
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::new(42).to_string(), "42");
        assert_eq!(Symbol::from(7).raw(), 7);
    }

    #[test]
    fn test_symbol_serializes_as_number() {
        let json = serde_json::to_string(&Symbol::new(9)).unwrap();
        assert_eq!(json, "9");
    }
}
