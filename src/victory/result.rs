//! Victory result accumulation and match conclusion
//!
//! A [`VictoryResult`] stores the outcome of checking one or more victory
//! conditions: per-player and per-team scores plus a flag for whether the
//! match should end. Both an actual victory and an agreed draw set the
//! flag; the match typically ends when a decisive result is found.

use crate::error::{Result, VictoryError};
use crate::game::GameState;
use crate::rating::RankingManager;
use crate::types::{Player, PlayerId, Report, TeamId, PLAYER_NONE, REPORT_VICTORY, TEAM_NONE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Scoring accumulator for one evaluation cycle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VictoryResult {
    victory: bool,
    player_scores: HashMap<PlayerId, f64>,
    team_scores: HashMap<TeamId, f64>,
    reports: Vec<Report>,
}

impl VictoryResult {
    pub fn new(victory: bool) -> Self {
        Self {
            victory,
            ..Self::default()
        }
    }

    /// Create a result crediting a specific player and/or team with 1.0
    ///
    /// Sentinel ids are skipped, so `with_winner(true, id, TEAM_NONE)`
    /// credits only the player.
    pub fn with_winner(victory: bool, player: PlayerId, team: TeamId) -> Self {
        let mut result = Self::new(victory);
        if player != PLAYER_NONE {
            result.set_player_score(player, 1.0);
        }
        if team != TEAM_NONE {
            result.set_team_score(team, 1.0);
        }
        result
    }

    /// Non-decisive result with no winner identified
    pub fn no_result() -> Self {
        Self::with_winner(false, PLAYER_NONE, TEAM_NONE)
    }

    /// Decisive result with no winner: the match ends in a draw
    pub fn draw_result() -> Self {
        Self::with_winner(true, PLAYER_NONE, TEAM_NONE)
    }

    /// True if this result indicates a match-ending state; this can be a
    /// victory but also a draw
    pub fn is_victory(&self) -> bool {
        self.victory
    }

    pub fn set_victory(&mut self, victory: bool) {
        self.victory = victory;
    }

    /// True iff neither a winning player nor a winning team resolves
    pub fn is_draw(&self) -> bool {
        self.winning_player() == PLAYER_NONE && self.winning_team() == TEAM_NONE
    }

    /// Id of the winning player, or `PLAYER_NONE` on a tie or empty board
    pub fn winning_player(&self) -> PlayerId {
        Self::resolve_winner(&self.player_scores, PLAYER_NONE)
    }

    /// Id of the winning team, or `TEAM_NONE` on a tie or empty board
    pub fn winning_team(&self) -> TeamId {
        Self::resolve_winner(&self.team_scores, TEAM_NONE)
    }

    /// Incorporate another result's scores into this one
    ///
    /// Scores for ids present in both are added. Commutative and
    /// associative, so fragments may be folded in any order.
    pub fn add_scores(&mut self, other: &VictoryResult) {
        for (&id, &score) in &other.player_scores {
            self.set_player_score(id, self.player_score(id) + score);
        }
        for (&id, &score) in &other.team_scores {
            self.set_team_score(id, self.team_score(id) + score);
        }
    }

    pub fn set_player_score(&mut self, id: PlayerId, score: f64) {
        self.player_scores.insert(id, score);
    }

    pub fn set_team_score(&mut self, id: TeamId, score: f64) {
        self.team_scores.insert(id, score);
    }

    /// Score for a player; ids with no entry score 0
    pub fn player_score(&self, id: PlayerId) -> f64 {
        self.player_scores.get(&id).copied().unwrap_or(0.0)
    }

    pub fn team_score(&self, id: TeamId) -> f64 {
        self.team_scores.get(&id).copied().unwrap_or(0.0)
    }

    pub fn scoring_players(&self) -> Vec<PlayerId> {
        self.player_scores.keys().copied().collect()
    }

    pub fn scoring_teams(&self) -> Vec<TeamId> {
        self.team_scores.keys().copied().collect()
    }

    pub fn add_report(&mut self, report: Report) {
        self.reports.push(report);
    }

    /// Reports emitted during victory checking, usually empty while no
    /// victory occurs
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Finalize this result against the match
    ///
    /// If decisive, emits one report per resolved winner (player and team
    /// may both fire) and records the winner fields on the match, clearing
    /// them for a draw. If not decisive, cancels any pending victory state.
    /// Returns the reports produced this cycle.
    pub fn process_victory(&self, game: &mut dyn GameState) -> Result<Vec<Report>> {
        let mut gathered = self.reports.clone();

        if self.victory {
            let draw = self.is_draw();
            let won_player = self.winning_player();
            let won_team = self.winning_team();

            if won_player != PLAYER_NONE {
                let winner = game.player(won_player).ok_or(VictoryError::PlayerNotFound {
                    player_id: won_player,
                })?;
                gathered.push(Report::new(REPORT_VICTORY).with_arg(winner.name));
            }

            if won_team != TEAM_NONE {
                gathered.push(Report::new(REPORT_VICTORY).with_arg(format!("Team {won_team}")));
            }

            if draw {
                game.set_victory(PLAYER_NONE, TEAM_NONE);
            } else {
                game.set_victory(won_player, won_team);
            }
        } else {
            game.cancel_victory();
        }

        Ok(gathered)
    }

    /// Feed the resolved outcome to the rating pipeline
    ///
    /// A resolved winning player puts that player against everyone else; a
    /// resolved winning team puts its members against everyone outside it.
    /// Both branches fire if both ids are resolved. Not idempotent: callers
    /// must invoke this at most once per match conclusion.
    pub fn trigger_rating_update(
        &self,
        game: &mut dyn GameState,
        rankings: &RankingManager,
    ) -> Result<()> {
        let won_player = self.winning_player();
        if won_player != PLAYER_NONE {
            let (winners, losers): (Vec<Player>, Vec<Player>) = game
                .players()
                .into_iter()
                .partition(|p| p.id == won_player);
            Self::apply_group_update(game, rankings, winners, losers)?;
        }

        let won_team = self.winning_team();
        if won_team != TEAM_NONE {
            let (winners, losers): (Vec<Player>, Vec<Player>) = game
                .players()
                .into_iter()
                .partition(|p| p.team == won_team);
            Self::apply_group_update(game, rankings, winners, losers)?;
        }

        Ok(())
    }

    fn apply_group_update(
        game: &mut dyn GameState,
        rankings: &RankingManager,
        mut winners: Vec<Player>,
        mut losers: Vec<Player>,
    ) -> Result<()> {
        if winners.is_empty() || losers.is_empty() {
            debug!("rating update suppressed: empty winner or loser group");
            return Ok(());
        }

        rankings.update_rankings(&mut winners, &mut losers);
        for player in winners.iter().chain(losers.iter()) {
            game.set_player_rating(player.id, player.rating)?;
        }
        Ok(())
    }

    // PlayerId and TeamId share a representation; one scan serves both maps.
    // A second entry equal to the running maximum marks a tie; a strictly
    // greater entry clears it. Ties at the maximum resolve to the sentinel.
    fn resolve_winner(scores: &HashMap<i32, f64>, sentinel: i32) -> i32 {
        let mut best: Option<f64> = None;
        let mut best_id = sentinel;
        let mut tied = false;

        for (&id, &score) in scores {
            match best {
                None => {
                    best = Some(score);
                    best_id = id;
                }
                Some(max) if score > max => {
                    best = Some(score);
                    best_id = id;
                    tied = false;
                }
                Some(max) if score == max => tied = true,
                Some(_) => {}
            }
        }

        if tied {
            sentinel
        } else {
            best_id
        }
    }
}

impl fmt::Display for VictoryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.victory {
            write!(
                f,
                "[VictoryResult] Win: true Player: {} Team: {}",
                self.winning_player(),
                self.winning_team()
            )
        } else {
            write!(f, "[VictoryResult] Win: false")
        }
    }
}
