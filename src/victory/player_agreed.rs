//! Agreed ("forced") victory condition

use crate::game::GameState;
use crate::types::{PLAYER_NONE, TEAM_NONE};
use crate::victory::condition::{VictoryCondition, VictoryContext};
use crate::victory::result::VictoryResult;

/// Decides the match when the players agree to end it
///
/// Fires only while the match carries a force-victory proposal naming a
/// winning player or team. Every participant who is not the proposed
/// winner, not an observer, and not on the winning team must have dropped
/// their defeat veto; a single holdout keeps the match going.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerAgreedVictory;

impl VictoryCondition for PlayerAgreedVictory {
    fn check_victory(&self, game: &dyn GameState, _ctx: &VictoryContext) -> VictoryResult {
        if !game.is_force_victory() {
            return VictoryResult::no_result();
        }

        let proposed_player = game.victory_player_id();
        let proposed_team = game.victory_team();
        if proposed_player == PLAYER_NONE && proposed_team == TEAM_NONE {
            return VictoryResult::no_result();
        }

        let everyone_agrees = game.players().iter().all(|p| {
            p.id == proposed_player
                || p.is_observer
                || (proposed_team != TEAM_NONE && p.team == proposed_team)
                || !p.refuses_defeat
        });

        if everyone_agrees {
            VictoryResult::with_winner(true, proposed_player, proposed_team)
        } else {
            VictoryResult::no_result()
        }
    }
}
