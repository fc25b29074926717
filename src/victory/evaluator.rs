//! Victory condition aggregation
//!
//! The evaluator runs every active condition in order against the match and
//! folds the returned fragments into one authoritative result: scores are
//! added, decisiveness is OR-ed, and reports are concatenated. Conditions
//! never observe each other's partial output.

use crate::game::GameState;
use crate::victory::condition::{VictoryCondition, VictoryContext};
use crate::victory::result::VictoryResult;
use tracing::debug;

/// Runs a configured set of [`VictoryCondition`]s for one evaluation cycle
#[derive(Default)]
pub struct VictoryEvaluator {
    conditions: Vec<Box<dyn VictoryCondition>>,
}

impl VictoryEvaluator {
    pub fn new(conditions: Vec<Box<dyn VictoryCondition>>) -> Self {
        Self { conditions }
    }

    pub fn add_condition(&mut self, condition: Box<dyn VictoryCondition>) {
        self.conditions.push(condition);
    }

    /// Evaluate all conditions against the current match state
    ///
    /// The merged result is decisive if any fragment was decisive; with no
    /// conditions configured it is an empty, non-decisive board.
    pub fn check(&self, game: &dyn GameState, ctx: &VictoryContext) -> VictoryResult {
        let mut merged = VictoryResult::new(false);

        for condition in &self.conditions {
            let fragment = condition.check_victory(game, ctx);
            if fragment.is_victory() {
                debug!(%fragment, "victory condition fired");
                merged.set_victory(true);
            }
            for report in fragment.reports() {
                merged.add_report(report.clone());
            }
            merged.add_scores(&fragment);
        }

        merged
    }
}
