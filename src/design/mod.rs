//! Deck designs: validation of the one-shared-symbol rule and exact
//! projective-plane decks.

pub mod projective;
pub mod validate;

pub use projective::{ProjectivePlane, Triple};
pub use validate::{
    check_pairwise, validate_deck, DeckReport, PairViolation, SizeViolation, SymbolFrequencies,
};
