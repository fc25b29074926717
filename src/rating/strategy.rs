//! Two-party Elo rating updates
//!
//! Used when a match is known a priori to be exactly two parties. This path
//! operates on caller-owned scalar rating records, not on live players, and
//! delegates the Elo arithmetic to the skillratings crate.

use serde::{Deserialize, Serialize};
use skillratings::elo::{elo, EloConfig, EloRating};
use skillratings::Outcomes;

/// Caller-owned rating scalar for a single match settlement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub rating: f64,
}

impl RatingRecord {
    pub fn new(rating: f64) -> Self {
        Self { rating }
    }
}

/// Strategy mapping two ratings plus an outcome to two updated ratings
pub trait RatingStrategy: Send + Sync {
    fn update(&self, a: &mut RatingRecord, b: &mut RatingRecord, a_won: bool);
}

/// Elo strategy for the two-party path
///
/// Defaults to K = 30, the constant this path has always shipped with; the
/// group path's K values do not apply here.
#[derive(Debug, Clone)]
pub struct EloRatingStrategy {
    config: EloConfig,
}

impl EloRatingStrategy {
    pub const DEFAULT_K: f64 = 30.0;

    pub fn new(k: f64) -> Self {
        Self {
            config: EloConfig { k },
        }
    }
}

impl Default for EloRatingStrategy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_K)
    }
}

impl RatingStrategy for EloRatingStrategy {
    fn update(&self, a: &mut RatingRecord, b: &mut RatingRecord, a_won: bool) {
        let rating_a = EloRating { rating: a.rating };
        let rating_b = EloRating { rating: b.rating };
        let outcome = if a_won { Outcomes::WIN } else { Outcomes::LOSS };

        let (new_a, new_b) = elo(&rating_a, &rating_b, &outcome, &self.config);
        a.rating = new_a.rating;
        b.rating = new_b.rating;
    }
}

/// Pass-through orchestrator for the two-party path
pub struct RatingManager {
    strategy: Box<dyn RatingStrategy>,
}

impl Default for RatingManager {
    fn default() -> Self {
        Self::new(Box::new(EloRatingStrategy::default()))
    }
}

impl RatingManager {
    pub fn new(strategy: Box<dyn RatingStrategy>) -> Self {
        Self { strategy }
    }

    pub fn update_ratings(&self, a: &mut RatingRecord, b: &mut RatingRecord, a_won: bool) {
        self.strategy.update(a, b, a_won);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_ratings_split_k() {
        // Equal 1500s at K=30: the winner takes exactly half of K.
        let manager = RatingManager::default();
        let mut a = RatingRecord::new(1500.0);
        let mut b = RatingRecord::new(1500.0);

        manager.update_ratings(&mut a, &mut b, true);

        assert!((a.rating - 1515.0).abs() < 1e-9);
        assert!((b.rating - 1485.0).abs() < 1e-9);
    }

    #[test]
    fn test_loss_moves_ratings_the_other_way() {
        let manager = RatingManager::default();
        let mut a = RatingRecord::new(1600.0);
        let mut b = RatingRecord::new(1400.0);

        manager.update_ratings(&mut a, &mut b, false);

        assert!(a.rating < 1600.0);
        assert!(b.rating > 1400.0);
    }

    #[test]
    fn test_rating_sum_is_preserved() {
        let strategy = EloRatingStrategy::new(24.0);
        let mut a = RatingRecord::new(1532.0);
        let mut b = RatingRecord::new(1489.0);
        let before = a.rating + b.rating;

        strategy.update(&mut a, &mut b, true);

        assert!((a.rating + b.rating - before).abs() < 1e-9);
    }

    #[test]
    fn test_upset_win_pays_more() {
        let strategy = EloRatingStrategy::default();

        let mut favorite = RatingRecord::new(1700.0);
        let mut underdog = RatingRecord::new(1300.0);
        strategy.update(&mut favorite, &mut underdog, false);
        let upset_gain = underdog.rating - 1300.0;

        let mut favorite = RatingRecord::new(1700.0);
        let mut underdog = RatingRecord::new(1300.0);
        strategy.update(&mut favorite, &mut underdog, true);
        let expected_gain = favorite.rating - 1700.0;

        assert!(upset_gain > expected_gain);
    }
}
