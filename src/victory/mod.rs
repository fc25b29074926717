//! Victory condition evaluation and match conclusion
//!
//! Each evaluation cycle, every active [`VictoryCondition`] inspects match
//! state and returns a [`VictoryResult`] fragment; fragments are merged by
//! score addition into one authoritative result. A decisive result is then
//! finalized against the match and fed to the rating pipeline.

pub mod battlefield_control;
pub mod condition;
pub mod evaluator;
pub mod player_agreed;
pub mod result;

// Re-export commonly used types
pub use battlefield_control::BattlefieldControlVictory;
pub use condition::{VictoryCondition, VictoryContext};
pub use evaluator::VictoryEvaluator;
pub use player_agreed::PlayerAgreedVictory;
pub use result::VictoryResult;
