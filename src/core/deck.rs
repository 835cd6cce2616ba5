//! Decks: append-only, insertion-ordered sequences of cards.
//!
//! Backed by `im::Vector` so that partial decks can be captured in O(1)
//! while the builder keeps appending.

use std::collections::BTreeSet;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::{Card, DeckError, Symbol};

/// An ordered collection of cards.
///
/// ## Example
///
/// ```
/// use spot_deck::core::{Card, Deck, Symbol};
///
/// let mut deck = Deck::new();
/// deck.push(Card::try_from_symbols([0, 1].map(Symbol::new)).unwrap());
/// deck.push(Card::try_from_symbols([0, 2].map(Symbol::new)).unwrap());
///
/// assert_eq!(deck.len(), 2);
/// assert_eq!(deck.symbols().len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card to the end of the deck.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Iterate over cards in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// All distinct symbols used by the deck, sorted.
    #[must_use]
    pub fn symbols(&self) -> BTreeSet<Symbol> {
        self.cards.iter().flat_map(Card::iter).collect()
    }

    /// Encode the deck as bincode bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DeckError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a deck from bincode bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DeckError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Encode the deck as a JSON array of symbol arrays.
    pub fn to_json(&self) -> Result<String, DeckError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a deck from a JSON array of symbol arrays.
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = im::vector::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Human-readable dump: one line per card, then the symbol set.
impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            writeln!(f, "Card {}: {}", i + 1, card)?;
        }
        write!(f, "Symbols: {{")?;
        for (i, symbol) in self.symbols().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{symbol}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(ids: &[u32]) -> Card {
        Card::try_from_symbols(ids.iter().copied().map(Symbol::new)).unwrap()
    }

    fn triangle() -> Deck {
        [card(&[0, 1]), card(&[0, 2]), card(&[1, 2])]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_push_preserves_order() {
        let deck = triangle();
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.get(1), Some(&card(&[0, 2])));
        assert!(deck.get(3).is_none());
    }

    #[test]
    fn test_clone_is_a_snapshot() {
        let mut deck = triangle();
        let snapshot = deck.clone();

        deck.push(card(&[7, 8]));

        assert_eq!(snapshot.len(), 3);
        assert_eq!(deck.len(), 4);
    }

    #[test]
    fn test_symbols_are_sorted_and_distinct() {
        let symbols: Vec<_> = triangle().symbols().into_iter().map(Symbol::raw).collect();
        assert_eq!(symbols, vec![0, 1, 2]);
    }

    #[test]
    fn test_display_dump() {
        let text = triangle().to_string();
        assert_eq!(text, "Card 1: [0, 1]\nCard 2: [0, 2]\nCard 3: [1, 2]\nSymbols: {0, 1, 2}");
    }

    #[test]
    fn test_bincode_codec() {
        let deck = triangle();
        let bytes = deck.to_bytes().unwrap();
        assert_eq!(Deck::from_bytes(&bytes).unwrap(), deck);

        assert!(matches!(Deck::from_bytes(&[0xff]), Err(DeckError::Codec(_))));
    }

    #[test]
    fn test_json_shape() {
        assert_eq!(triangle().to_json().unwrap(), "[[0,1],[0,2],[1,2]]");
        assert!(matches!(Deck::from_json("{"), Err(DeckError::Json(_))));
    }
}
