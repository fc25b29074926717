//! Error types for the victory resolution core
//!
//! This module defines all error types using anyhow for consistent error
//! handling throughout the crate.

use crate::types::PlayerId;

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific victory/rating scenarios
///
/// "No victory yet" is a normal evaluation outcome and is never represented
/// as an error; these variants cover genuine precondition violations.
#[derive(Debug, thiserror::Error)]
pub enum VictoryError {
    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: PlayerId },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Rating update failed: {reason}")]
    RatingUpdateFailed { reason: String },
}
