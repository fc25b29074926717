//! Skill rating updates for concluded matches
//!
//! Two independent pipelines: the group path updates every member of a
//! winner and a loser group from the groups' average ratings, and the
//! two-party path settles a match known a priori to have exactly two
//! parties via the skillratings crate.

pub mod ranking;
pub mod strategy;

// Re-export commonly used types
pub use ranking::{EloRankingStrategy, RankingManager, RankingStrategy};
pub use strategy::{EloRatingStrategy, RatingManager, RatingRecord, RatingStrategy};
