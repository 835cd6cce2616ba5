//! A matching game played over a deck.
//!
//! Each round deals two distinct cards. Players race to name the one symbol
//! the cards share; a correct guess scores a point. Either way the round
//! ends and the next pair is dealt, until the configured number of rounds
//! has been played.
//!
//! ## Usage
//!
//! ```
//! use spot_deck::builder::build_deck;
//! use spot_deck::play::{GuessResult, Phase, PlayerId, Session, SessionConfig};
//!
//! let deck = build_deck(3).unwrap().deck;
//! let mut session = Session::new(deck, SessionConfig::default().with_rounds(1)).unwrap();
//!
//! let answer = session.start().unwrap().unwrap().matching;
//! let result = session.guess(PlayerId::new(0), answer).unwrap();
//!
//! assert_eq!(result, GuessResult::Correct);
//! assert_eq!(session.phase(), Phase::Finished);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Card, Deck, DeckError, DeckRng, Symbol};
use crate::design::check_pairwise;

use super::scoreboard::{PlayerId, Scoreboard};

/// Session parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Rounds per game.
    pub rounds: u32,

    /// Number of players (1-255).
    pub players: usize,

    /// Seed for dealing.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rounds: 10,
            players: 2,
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Set the number of rounds.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set the number of players.
    #[must_use]
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Set the dealing seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Created, not yet started.
    Ready,
    /// A round is dealt and waiting for a guess.
    Playing,
    /// All rounds played.
    Finished,
}

/// One dealt pair of cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based round number.
    pub number: u32,
    /// Deck index of the first card.
    pub first: usize,
    /// Deck index of the second card.
    pub second: usize,
    /// The symbol both cards carry.
    pub matching: Symbol,
}

/// Result of a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessResult {
    /// The guessed symbol is the shared one.
    Correct,
    /// Wrong symbol; carries the right answer.
    Incorrect {
        /// The shared symbol
        expected: Symbol,
    },
}

/// A finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// The round that was dealt.
    pub round: Round,
    /// Who guessed.
    pub player: PlayerId,
    /// What they guessed.
    pub guess: Symbol,
    /// How it went.
    pub result: GuessResult,
}

/// A game over one deck.
#[derive(Clone, Debug)]
pub struct Session {
    deck: Deck,
    config: SessionConfig,
    rng: DeckRng,
    phase: Phase,
    current: Option<Round>,
    scores: Scoreboard,
    history: Vec<RoundRecord>,
}

impl Session {
    /// Create a session. The deck must be valid and hold at least two cards.
    pub fn new(deck: Deck, config: SessionConfig) -> Result<Self, DeckError> {
        if deck.len() < 2 {
            return Err(DeckError::DeckTooSmall { cards: deck.len() });
        }
        if config.players == 0 || config.players > 255 {
            return Err(DeckError::InvalidPlayerCount {
                players: config.players,
            });
        }
        check_pairwise(&deck)?;

        Ok(Self {
            rng: DeckRng::new(config.seed).for_context("deal"),
            scores: Scoreboard::new(config.players),
            deck,
            config,
            phase: Phase::Ready,
            current: None,
            history: Vec::new(),
        })
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The round awaiting a guess, if any.
    #[must_use]
    pub fn current_round(&self) -> Option<&Round> {
        self.current.as_ref()
    }

    /// The two cards of a round.
    #[must_use]
    pub fn cards(&self, round: &Round) -> Option<(&Card, &Card)> {
        Some((self.deck.get(round.first)?, self.deck.get(round.second)?))
    }

    /// Scores so far.
    #[must_use]
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Finished rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// The deck being played.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Start (or restart) the game and deal the first round.
    ///
    /// Restarting replays the same deals for the same seed. Returns `None`
    /// when the session has no rounds to play.
    pub fn start(&mut self) -> Result<Option<&Round>, DeckError> {
        self.rng = DeckRng::new(self.config.seed).for_context("deal");
        self.scores = Scoreboard::new(self.config.players);
        self.history.clear();
        self.deal()?;
        Ok(self.current.as_ref())
    }

    /// Submit a guess for the current round, then deal the next one.
    pub fn guess(&mut self, player: PlayerId, symbol: Symbol) -> Result<GuessResult, DeckError> {
        let round = match (self.phase, self.current) {
            (Phase::Playing, Some(round)) => round,
            _ => return Err(DeckError::NotPlaying),
        };
        if !self.scores.has_player(player) {
            return Err(DeckError::UnknownPlayer {
                player: player.0,
                players: self.scores.player_count(),
            });
        }

        let result = if symbol == round.matching {
            self.scores.award(player);
            GuessResult::Correct
        } else {
            GuessResult::Incorrect {
                expected: round.matching,
            }
        };
        debug!(round = round.number, %player, guess = %symbol, ?result, "round played");

        self.history.push(RoundRecord {
            round,
            player,
            guess: symbol,
            result,
        });
        self.deal()?;
        Ok(result)
    }

    fn deal(&mut self) -> Result<(), DeckError> {
        let played = self.history.len() as u32;
        if played >= self.config.rounds {
            self.current = None;
            self.phase = Phase::Finished;
            info!(rounds = played, leader = ?self.scores.leader(), "game finished");
            return Ok(());
        }

        let (first, second) = self
            .rng
            .pick_pair(self.deck.len())
            .ok_or(DeckError::DeckTooSmall {
                cards: self.deck.len(),
            })?;
        let matching = match (self.deck.get(first), self.deck.get(second)) {
            (Some(a), Some(b)) => a.common_symbol(b),
            _ => None,
        }
        .ok_or_else(|| DeckError::pair_violation(first, second, 0))?;

        self.current = Some(Round {
            number: played + 1,
            first,
            second,
            matching,
        });
        self.phase = Phase::Playing;
        Ok(())
    }
}
