//! Victory condition trait and evaluation context

use crate::game::GameState;
use crate::victory::result::VictoryResult;
use std::collections::HashMap;

/// Open key-value bag for evaluator-specific parameters
///
/// Conditions that need configuration beyond match state (a time limit, a
/// score threshold) read it from here; the two built-in variants take all
/// their input from the game itself.
pub type VictoryContext = HashMap<String, serde_json::Value>;

/// A pluggable victory evaluator
///
/// `check_victory` must be a pure read of match state: no participant or
/// match mutation, and "no victory yet" is expressed as a non-decisive
/// [`VictoryResult`], never as an error.
pub trait VictoryCondition: Send + Sync {
    fn check_victory(&self, game: &dyn GameState, ctx: &VictoryContext) -> VictoryResult;
}
