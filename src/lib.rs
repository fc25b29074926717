//! War Room - victory resolution for multiplayer tactical matches
//!
//! This crate decides, turn by turn, whether a match has ended and who won,
//! and applies Elo-style skill rating updates to the winners and losers
//! when it concludes.

pub mod config;
pub mod error;
pub mod game;
pub mod rating;
pub mod types;
pub mod victory;

// Re-export commonly used types and traits
pub use error::{Result, VictoryError};
pub use types::*;

// Re-export key components
pub use config::EloConfig;
pub use game::{GameState, LocalGame};
pub use rating::{RankingManager, RankingStrategy, RatingManager, RatingStrategy};
pub use victory::{VictoryCondition, VictoryContext, VictoryEvaluator, VictoryResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
