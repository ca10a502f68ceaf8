//! Service layer - orchestration over the domain, store and collaborators.

pub mod game_flow;
pub mod round_judge;

pub use game_flow::{GameFlowService, GameStatusView, MatchOutcome, SubmitOutcome};
pub use round_judge::RoundJudge;
