//! Cards: small ordered sets of distinct symbols.
//!
//! Symbol order on a card is insertion order. It carries no meaning for
//! matching but is preserved so builds are reproducible.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{DeckError, Symbol};

/// A single card.
///
/// Symbols are stored inline for typical card sizes (up to 8 symbols
/// before spilling to the heap).
///
/// ```
/// use spot_deck::core::{Card, Symbol};
///
/// let a = Card::try_from_symbols([0, 1, 2].map(Symbol::new)).unwrap();
/// let b = Card::try_from_symbols([2, 3, 4].map(Symbol::new)).unwrap();
///
/// assert_eq!(a.shared_count(&b), 1);
/// assert_eq!(a.common_symbol(&b), Some(Symbol::new(2)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct Card {
    symbols: SmallVec<[Symbol; 8]>,
}

impl Card {
    /// Create an empty card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty card with room for `capacity` symbols.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            symbols: SmallVec::with_capacity(capacity),
        }
    }

    /// Build a card from symbols, rejecting duplicates.
    pub fn try_from_symbols<I>(symbols: I) -> Result<Self, DeckError>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut card = Self::new();
        for symbol in symbols {
            if card.contains(symbol) {
                return Err(DeckError::DuplicateSymbol { symbol });
            }
            card.symbols.push(symbol);
        }
        Ok(card)
    }

    /// Append a symbol. Callers guarantee it is not already present.
    pub(crate) fn push(&mut self, symbol: Symbol) {
        debug_assert!(!self.contains(symbol), "symbol {symbol} already on card");
        self.symbols.push(symbol);
    }

    /// Number of symbols on the card.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the card has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check if a symbol is on this card.
    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Number of symbols this card shares with `other`.
    #[must_use]
    pub fn shared_count(&self, other: &Card) -> usize {
        self.symbols.iter().filter(|s| other.contains(**s)).count()
    }

    /// First symbol of this card that also appears on `other`.
    #[must_use]
    pub fn common_symbol(&self, other: &Card) -> Option<Symbol> {
        self.symbols.iter().copied().find(|s| other.contains(*s))
    }

    /// Iterate over symbols in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }

    /// Symbols as a slice.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Mutable access for in-place reordering.
    pub(crate) fn symbols_mut(&mut self) -> &mut [Symbol] {
        &mut self.symbols
    }
}

// Deserialization goes through the duplicate check.
impl TryFrom<Vec<Symbol>> for Card {
    type Error = DeckError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self, Self::Error> {
        Self::try_from_symbols(symbols)
    }
}

impl From<Card> for Vec<Symbol> {
    fn from(card: Card) -> Self {
        card.symbols.into_vec()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{symbol}")?;
        }
        write!(f, "]")
    }
}
