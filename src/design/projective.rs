//! Exact decks from finite projective planes.
//!
//! For a prime order `n`, the projective plane over GF(n) has
//! `n² + n + 1` points and as many lines. Every line holds `n + 1` points,
//! every point lies on `n + 1` lines, and two distinct lines meet in exactly
//! one point. Reading lines as cards and points as symbols gives a complete
//! deck: order 7 yields the classic 57 cards of 8 symbols.
//!
//! ```
//! use spot_deck::design::ProjectivePlane;
//!
//! let plane = ProjectivePlane::new(2).unwrap();
//! let deck = plane.to_deck();
//! assert_eq!(deck.len(), 7);
//! assert!(deck.iter().all(|card| card.len() == 3));
//! ```

use crate::core::{Card, Deck, DeckError, DeckRng, Symbol};

/// Homogeneous coordinates `[x, y, z]` over GF(order), normalized so the
/// first non-zero coordinate is 1.
pub type Triple = [u32; 3];

/// Projective plane of prime order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectivePlane {
    order: u32,
    points: Vec<Triple>,
}

fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let n = u64::from(n);
    (2u64..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

/// All normalized triples in canonical order: `[0,0,1]`, `[0,1,z]`, `[1,y,z]`.
fn normalized_triples(order: u32) -> Vec<Triple> {
    let mut triples = Vec::with_capacity((order * order + order + 1) as usize);
    triples.push([0, 0, 1]);
    triples.extend((0..order).map(|z| [0, 1, z]));
    for y in 0..order {
        triples.extend((0..order).map(|z| [1, y, z]));
    }
    triples
}

impl ProjectivePlane {
    /// Build the plane of a prime order.
    pub fn new(order: u32) -> Result<Self, DeckError> {
        if !is_prime(order) {
            return Err(DeckError::InvalidOrder { order });
        }
        Ok(Self {
            order,
            points: normalized_triples(order),
        })
    }

    /// The plane whose cards carry `k` symbols (order `k - 1`).
    pub fn for_symbols_per_card(symbols_per_card: usize) -> Result<Self, DeckError> {
        let order = u32::try_from(symbols_per_card.saturating_sub(1)).unwrap_or(0);
        Self::new(order)
    }

    /// Field order.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Number of points (= symbols = cards).
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Symbols on each card.
    #[must_use]
    pub fn symbols_per_card(&self) -> usize {
        self.order as usize + 1
    }

    /// Normalized points, indexed by symbol.
    #[must_use]
    pub fn points(&self) -> &[Triple] {
        &self.points
    }

    /// Lines use the same normalization as points.
    #[must_use]
    pub fn lines(&self) -> &[Triple] {
        &self.points
    }

    /// Check if `point` lies on `line`.
    #[must_use]
    pub fn incident(&self, point: Triple, line: Triple) -> bool {
        let n = u64::from(self.order);
        let dot: u64 = point
            .iter()
            .zip(line.iter())
            .map(|(&p, &l)| u64::from(p) * u64::from(l))
            .sum();
        dot % n == 0
    }

    /// One card per line; each card lists its incident points in point order.
    #[must_use]
    pub fn to_deck(&self) -> Deck {
        self.lines()
            .iter()
            .map(|&line| {
                let mut card = Card::with_capacity(self.symbols_per_card());
                for (index, &point) in self.points.iter().enumerate() {
                    if self.incident(point, line) {
                        card.push(Symbol::new(index as u32));
                    }
                }
                card
            })
            .collect()
    }

    /// Like [`to_deck`](Self::to_deck) with symbol order shuffled on every card.
    #[must_use]
    pub fn shuffled_deck(&self, rng: &mut DeckRng) -> Deck {
        self.to_deck()
            .iter()
            .cloned()
            .map(|mut card| {
                rng.shuffle(card.symbols_mut());
                card
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::validate::{check_pairwise, validate_deck};

    #[test]
    fn test_prime_check() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(7));
        assert!(!is_prime(9));
        assert!(is_prime(13));
    }

    #[test]
    fn test_rejects_non_prime_orders() {
        assert!(matches!(
            ProjectivePlane::new(4),
            Err(DeckError::InvalidOrder { order: 4 })
        ));
        assert!(ProjectivePlane::new(1).is_err());
        assert!(ProjectivePlane::for_symbols_per_card(0).is_err());
    }

    #[test]
    fn test_point_layout() {
        let plane = ProjectivePlane::new(3).unwrap();
        assert_eq!(plane.point_count(), 13);
        assert_eq!(plane.points()[0], [0, 0, 1]);
        assert_eq!(plane.points()[1], [0, 1, 0]);
        assert_eq!(plane.points()[4], [1, 0, 0]);
    }

    #[test]
    fn test_fano_plane() {
        let deck = ProjectivePlane::new(2).unwrap().to_deck();
        let first: Vec<_> = deck.get(0).unwrap().iter().map(Symbol::raw).collect();
        // Line [0,0,1] holds the points with z = 0: [0,1,0], [1,0,0], [1,1,0].
        assert_eq!(first, vec![1, 3, 5]);
        assert!(check_pairwise(&deck).is_ok());
    }

    #[test]
    fn test_order_seven_is_the_classic_deck() {
        let plane = ProjectivePlane::for_symbols_per_card(8).unwrap();
        let deck = plane.to_deck();

        assert_eq!(deck.len(), 57);
        let report = validate_deck(&deck, Some(8));
        assert!(report.is_valid());
        assert_eq!(report.frequencies.len(), 57);
        assert!(report.frequencies.is_uniform(8));
    }

    #[test]
    fn test_shuffled_deck_keeps_cards() {
        let plane = ProjectivePlane::new(5).unwrap();
        let plain = plane.to_deck();
        let shuffled = plane.shuffled_deck(&mut DeckRng::new(11));

        assert_eq!(plain.len(), shuffled.len());
        for (a, b) in plain.iter().zip(shuffled.iter()) {
            let mut a: Vec<_> = a.iter().collect();
            let mut b: Vec<_> = b.iter().collect();
            a.sort();
            b.sort();
            assert_eq!(a, b);
        }
        assert!(check_pairwise(&shuffled).is_ok());

        let again = plane.shuffled_deck(&mut DeckRng::new(11));
        assert_eq!(shuffled, again);
    }
}
