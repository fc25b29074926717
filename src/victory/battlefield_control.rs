//! Last-force-standing victory condition

use crate::game::GameState;
use crate::types::{Player, TeamId, PLAYER_NONE, TEAM_NONE};
use crate::victory::condition::{VictoryCondition, VictoryContext};
use crate::victory::result::VictoryResult;
use std::collections::HashSet;

/// Decides the match on battlefield control: the last player or team with
/// live deployed units wins, and a battlefield with no survivors is a draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct BattlefieldControlVictory;

impl VictoryCondition for BattlefieldControlVictory {
    fn check_victory(&self, game: &dyn GameState, _ctx: &VictoryContext) -> VictoryResult {
        let alive: Vec<Player> = game
            .players()
            .into_iter()
            .filter(|p| game.live_unit_count(p.id) > 0)
            .collect();

        if alive.is_empty() {
            return VictoryResult::draw_result();
        }

        if alive.len() == 1 {
            let last = &alive[0];
            if last.team == TEAM_NONE {
                return VictoryResult::with_winner(true, last.id, TEAM_NONE);
            }
        }

        let alive_teams: HashSet<TeamId> = alive
            .iter()
            .map(|p| p.team)
            .filter(|&t| t != TEAM_NONE)
            .collect();
        let any_unteamed = alive.iter().any(|p| p.team == TEAM_NONE);

        if alive_teams.len() == 1 && !any_unteamed {
            if let Some(&team) = alive_teams.iter().next() {
                return VictoryResult::with_winner(true, PLAYER_NONE, team);
            }
        }

        VictoryResult::no_result()
    }
}
