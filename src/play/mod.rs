//! The matching game a deck is built for.
//!
//! - `Session`: deals pairs of cards and scores guesses
//! - `Scoreboard`: points per `PlayerId`

pub mod scoreboard;
pub mod session;

pub use scoreboard::{PlayerId, Scoreboard};
pub use session::{GuessResult, Phase, Round, RoundRecord, Session, SessionConfig};
