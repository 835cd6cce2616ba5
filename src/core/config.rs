//! Deck build configuration.
//!
//! A build is configured by the number of symbols per card and a safety
//! cap on builder iterations. The cap is a circuit breaker against
//! non-termination, not part of the construction: a correct build from the
//! default pool finishes in at most `k(k-1)+2` iterations.
//!
//! Configurations load from JSON with per-field defaults:
//!
//! ```
//! use spot_deck::core::BuildConfig;
//!
//! let config = BuildConfig::from_json(r#"{ "symbols_per_card": 4 }"#).unwrap();
//! assert_eq!(config.symbols_per_card, 4);
//! assert_eq!(config.max_iterations, 100);
//! ```

use serde::{Deserialize, Serialize};

use super::DeckError;

/// Default number of symbols on each card.
pub const DEFAULT_SYMBOLS_PER_CARD: usize = 3;

/// Largest supported `symbols_per_card`. Symbol ids and pool counts are
/// `u32`, and a deck of that size is already far past any printable game.
pub const MAX_SYMBOLS_PER_CARD: usize = 1 << 16;

/// Default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Parameters for one deck build.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Symbols on every card (`k`). Must be in `1..=MAX_SYMBOLS_PER_CARD`.
    pub symbols_per_card: usize,

    /// Maximum builder iterations before the build is aborted.
    /// Each iteration commits at most one card.
    pub max_iterations: u32,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            symbols_per_card: DEFAULT_SYMBOLS_PER_CARD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl BuildConfig {
    /// Create a config for `k` symbols per card with the default cap.
    #[must_use]
    pub fn new(symbols_per_card: usize) -> Self {
        Self::default().with_symbols_per_card(symbols_per_card)
    }

    /// Set symbols per card.
    #[must_use]
    pub fn with_symbols_per_card(mut self, k: usize) -> Self {
        self.symbols_per_card = k;
        self
    }

    /// Set the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, cap: u32) -> Self {
        self.max_iterations = cap;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config describes a buildable deck.
    pub fn validate(&self) -> Result<(), DeckError> {
        if self.symbols_per_card == 0 || self.symbols_per_card > MAX_SYMBOLS_PER_CARD {
            return Err(DeckError::InvalidSymbolsPerCard {
                value: self.symbols_per_card,
            });
        }
        if self.max_iterations == 0 {
            return Err(DeckError::InvalidMaxIterations);
        }
        Ok(())
    }
}
