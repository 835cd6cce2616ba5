//! Players and their scores.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Points per player, one entry per seat.
///
/// ```
/// use spot_deck::play::{PlayerId, Scoreboard};
///
/// let mut board = Scoreboard::new(2);
/// board.award(PlayerId::new(1));
/// assert_eq!(board[PlayerId::new(1)], 1);
/// assert_eq!(board.leader(), Some(PlayerId::new(1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    points: Vec<u32>,
}

impl Scoreboard {
    /// Zeroed scores for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            points: vec![0; player_count],
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.points.len()
    }

    /// Check if a player has a seat.
    #[must_use]
    pub fn has_player(&self, player: PlayerId) -> bool {
        player.index() < self.points.len()
    }

    /// Add one point. Callers check `has_player` first.
    pub fn award(&mut self, player: PlayerId) {
        self.points[player.index()] += 1;
    }

    /// Sum of all points.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.points.iter().sum()
    }

    /// The player with the most points, or `None` on a tie for first.
    #[must_use]
    pub fn leader(&self) -> Option<PlayerId> {
        let best = *self.points.iter().max()?;
        let mut leaders = self.iter().filter(|&(_, points)| points == best);
        match (leaders.next(), leaders.next()) {
            (Some((player, _)), None) => Some(player),
            _ => None,
        }
    }

    /// Iterate `(player, points)`.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, u32)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(i, &p)| (PlayerId(i as u8), p))
    }
}

impl Index<PlayerId> for Scoreboard {
    type Output = u32;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.points[player.index()]
    }
}
