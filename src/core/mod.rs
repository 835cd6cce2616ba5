//! Core deck types: symbols, cards, decks, the symbol pool, configuration,
//! RNG, and errors.
//!
//! These are shared by the builder, the design checks, and the game.

pub mod symbol;
pub mod card;
pub mod deck;
pub mod pool;
pub mod config;
pub mod rng;
pub mod error;

pub use symbol::{Symbol, SymbolAllocator};
pub use card::Card;
pub use deck::Deck;
pub use pool::SymbolPool;
pub use config::{
    BuildConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_SYMBOLS_PER_CARD, MAX_SYMBOLS_PER_CARD,
};
pub use rng::DeckRng;
pub use error::DeckError;
