//! Meme judging module - scores submissions on the three axes.
//!
//! This module provides:
//! - AxisScorer trait for pluggable axis judges
//! - HumorJudge, RelevanceJudge, OriginalityJudge: the built-in heuristics
//! - ScoreAggregator: weighted combination with per-axis failure recovery
//! - A static registry enumerating the installed judges

pub mod aggregator;
pub mod humor;
pub mod originality;
pub mod registry;
pub mod relevance;
mod trait_def;

pub use aggregator::ScoreAggregator;
pub use humor::HumorJudge;
pub use originality::OriginalityJudge;
pub use registry::{by_name, registered_judges, JudgeFactory};
pub use relevance::RelevanceJudge;
pub use trait_def::{AxisScorer, JudgeError};
