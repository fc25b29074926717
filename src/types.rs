//! Common types used throughout the victory resolution core

use serde::{Deserialize, Serialize};

/// Unique identifier for a player within a match
pub type PlayerId = i32;

/// Identifier for a team within a match
pub type TeamId = i32;

/// Sentinel id meaning "no specific player"
pub const PLAYER_NONE: PlayerId = -1;

/// Sentinel team id; team 0 is reserved for unaffiliated players
pub const TEAM_NONE: TeamId = 0;

/// Report code announcing a match winner (player or team)
pub const REPORT_VICTORY: u32 = 7200;

/// A participant in a match
///
/// The `rating` field is the long-lived skill estimate carried across
/// matches; the rating pipeline mutates it in place when a match concludes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Display label used in victory reports
    pub name: String,
    pub team: TeamId,
    pub rating: f64,
    pub is_observer: bool,
    /// True while the player vetoes a proposed agreed victory
    pub refuses_defeat: bool,
}

impl Player {
    /// Create a participant with a default rating of 1500
    pub fn new(id: PlayerId, name: impl Into<String>, team: TeamId) -> Self {
        Self {
            id,
            name: name.into(),
            team,
            rating: 1500.0,
            is_observer: false,
            refuses_defeat: false,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn as_observer(mut self) -> Self {
        self.is_observer = true;
        self
    }
}

/// An opaque notification record emitted during victory processing
///
/// Consumers only rely on how many reports are appended and in what order;
/// the rendered text is a reporting-layer concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub code: u32,
    pub args: Vec<String>,
}

impl Report {
    pub fn new(code: u32) -> Self {
        Self {
            code,
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}
