//! Match-state collaborator interface
//!
//! Victory conditions read match state through [`GameState`]; the finalize
//! and rating steps write the winner fields and updated ratings back through
//! it. The broader game-state container lives outside this crate; a minimal
//! in-memory implementation is provided for tests and simple embedders.

use crate::error::{Result, VictoryError};
use crate::types::{Player, PlayerId, TeamId, PLAYER_NONE, TEAM_NONE};
use std::collections::HashMap;

/// Read/write seam between the victory core and the match container
///
/// Reads must be cheap and side-effect free; the setters are invoked only
/// during finalize and rating update, under the caller's concurrency
/// discipline (this crate performs no locking of its own).
pub trait GameState {
    /// Ordered snapshot of all participants
    fn players(&self) -> Vec<Player>;

    /// Look up a single participant by id
    fn player(&self, id: PlayerId) -> Option<Player>;

    /// Number of live, deployed units owned by the given player
    fn live_unit_count(&self, player_id: PlayerId) -> usize;

    /// True while an agreed "force victory" proposal is pending
    fn is_force_victory(&self) -> bool;

    /// Proposed (or, after finalize, resolved) winning player id
    fn victory_player_id(&self) -> PlayerId;

    /// Proposed (or, after finalize, resolved) winning team id
    fn victory_team(&self) -> TeamId;

    /// Record the match-level winner fields
    fn set_victory(&mut self, player: PlayerId, team: TeamId);

    /// Clear any pending victory proposal and winner fields
    fn cancel_victory(&mut self);

    /// Write back an updated skill rating for one participant
    fn set_player_rating(&mut self, player_id: PlayerId, rating: f64) -> Result<()>;
}

/// In-memory [`GameState`] implementation
#[derive(Debug, Clone, Default)]
pub struct LocalGame {
    players: Vec<Player>,
    live_units: HashMap<PlayerId, usize>,
    force_victory: bool,
    victory_player_id: PlayerId,
    victory_team: TeamId,
}

impl LocalGame {
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            live_units: HashMap::new(),
            force_victory: false,
            victory_player_id: PLAYER_NONE,
            victory_team: TEAM_NONE,
        }
    }

    /// Set the live deployed unit count for a player
    pub fn set_live_units(&mut self, player_id: PlayerId, count: usize) {
        self.live_units.insert(player_id, count);
    }

    /// Register an agreed-victory proposal for a player or team
    pub fn propose_victory(&mut self, player: PlayerId, team: TeamId) {
        self.force_victory = true;
        self.victory_player_id = player;
        self.victory_team = team;
    }
}

impl GameState for LocalGame {
    fn players(&self) -> Vec<Player> {
        self.players.clone()
    }

    fn player(&self, id: PlayerId) -> Option<Player> {
        self.players.iter().find(|p| p.id == id).cloned()
    }

    fn live_unit_count(&self, player_id: PlayerId) -> usize {
        self.live_units.get(&player_id).copied().unwrap_or(0)
    }

    fn is_force_victory(&self) -> bool {
        self.force_victory
    }

    fn victory_player_id(&self) -> PlayerId {
        self.victory_player_id
    }

    fn victory_team(&self) -> TeamId {
        self.victory_team
    }

    fn set_victory(&mut self, player: PlayerId, team: TeamId) {
        self.victory_player_id = player;
        self.victory_team = team;
    }

    fn cancel_victory(&mut self) {
        self.force_victory = false;
        self.victory_player_id = PLAYER_NONE;
        self.victory_team = TEAM_NONE;
    }

    fn set_player_rating(&mut self, player_id: PlayerId, rating: f64) -> Result<()> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or(VictoryError::PlayerNotFound { player_id })?;
        player.rating = rating;
        Ok(())
    }
}
