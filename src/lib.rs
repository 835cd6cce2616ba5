//! # spot-deck
//!
//! Builds decks for Spot-It style matching games: every pair of cards shares
//! exactly one symbol.
//!
//! ## Constructions
//!
//! 1. **Greedy builder** (`builder`): grows a deck card by card from a pool of
//!    symbols, guarding every placement against double matches. Works for any
//!    number of symbols per card; completeness is best-effort.
//!
//! 2. **Projective planes** (`design::ProjectivePlane`): exact, complete decks
//!    for `p + 1` symbols per card when `p` is prime.
//!
//! Whatever produced a deck, `design::validate_deck` checks it.
//!
//! ## Modules
//!
//! - `core`: symbols, cards, decks, the symbol pool, configuration, RNG, errors
//! - `builder`: greedy deck construction
//! - `design`: validation and projective planes
//! - `play`: dealing rounds and scoring guesses
//!
//! ```
//! use spot_deck::{build_deck, check_pairwise};
//!
//! let build = build_deck(3).unwrap();
//! assert!(check_pairwise(&build.deck).is_ok());
//! ```

pub mod core;
pub mod builder;
pub mod design;
pub mod play;

// Re-export commonly used types
pub use crate::core::{
    Symbol, SymbolAllocator, Card, Deck, SymbolPool,
    BuildConfig, DeckRng, DeckError,
};

pub use crate::builder::{
    build_deck, build_with_config, DeckBuilder, BuildState, Step,
    BuildOutcome, BuildStats, DeckBuild, Stall, StallReason,
};

pub use crate::design::{
    check_pairwise, validate_deck, DeckReport, PairViolation, SizeViolation,
    SymbolFrequencies, ProjectivePlane,
};

pub use crate::play::{
    PlayerId, Scoreboard,
    Session, SessionConfig, Phase, Round, RoundRecord, GuessResult,
};
