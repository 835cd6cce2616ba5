//! Error types for deck construction, validation, and play.

use thiserror::Error;

use super::Symbol;

/// Errors returned by the deck library.
///
/// A deck that could not be completed is NOT an error: the builder reports
/// it through `BuildOutcome`. Errors cover invalid input and I/O.
#[derive(Debug, Error)]
pub enum DeckError {
    /// Cards must carry between 1 and `MAX_SYMBOLS_PER_CARD` symbols.
    #[error("Invalid symbols per card: {value} (must be 1-65536)")]
    InvalidSymbolsPerCard {
        /// Value that was supplied
        value: usize,
    },

    /// The iteration cap must allow at least one iteration.
    #[error("Invalid iteration cap: must be at least 1")]
    InvalidMaxIterations,

    /// Projective planes are only built over prime fields.
    #[error("Invalid plane order {order}: must be a prime >= 2")]
    InvalidOrder {
        /// Order that was requested
        order: u32,
    },

    /// A card listed the same symbol twice.
    #[error("Symbol {symbol} appears more than once on a card")]
    DuplicateSymbol {
        /// The repeated symbol
        symbol: Symbol,
    },

    /// Two cards do not share exactly one symbol.
    #[error("Cards {first} and {second} share {shared} symbols (expected exactly 1)")]
    PairViolation {
        /// Index of the first card
        first: usize,
        /// Index of the second card
        second: usize,
        /// Number of symbols they share
        shared: usize,
    },

    /// A game needs at least two cards to deal a round.
    #[error("Deck too small: {cards} cards (need at least 2)")]
    DeckTooSmall {
        /// Cards in the deck
        cards: usize,
    },

    /// A game needs between 1 and 255 players.
    #[error("Invalid player count: {players} (must be 1-255)")]
    InvalidPlayerCount {
        /// Count supplied
        players: usize,
    },

    /// A guess came from a player outside the session.
    #[error("Unknown player {player} (session has {players} players)")]
    UnknownPlayer {
        /// Player index supplied
        player: u8,
        /// Players in the session
        players: usize,
    },

    /// A guess arrived while no round was being played.
    #[error("No round in progress")]
    NotPlaying,

    /// Binary encoding or decoding failed.
    #[error("Codec error: {0}")]
    Codec(#[from] bincode::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DeckError {
    /// Create a PairViolation error.
    pub fn pair_violation(first: usize, second: usize, shared: usize) -> Self {
        Self::PairViolation {
            first,
            second,
            shared,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DeckError::pair_violation(0, 3, 2);
        assert_eq!(
            err.to_string(),
            "Cards 0 and 3 share 2 symbols (expected exactly 1)"
        );

        let err = DeckError::InvalidOrder { order: 6 };
        assert!(err.to_string().contains("prime"));
    }
}
