//! Deck builder: greedy construction of a one-shared-symbol deck.
//!
//! ## Key Types
//!
//! - `DeckBuilder`: runs the construction for one `BuildConfig`
//! - `BuildState`: working deck, symbol pool, fresh-symbol counter
//! - `DeckBuild`: the resulting deck, its `BuildOutcome`, and `BuildStats`
//!
//! The construction is deterministic: the same configuration and pool always
//! produce the same deck.

pub mod greedy;
pub mod outcome;
pub mod state;

pub use greedy::{build_deck, build_with_config, DeckBuilder, Step};
pub use outcome::{BuildOutcome, BuildStats, DeckBuild, Stall, StallReason};
pub use state::BuildState;
