//! Scoring-axis trait definition.

use std::fmt;

use async_trait::async_trait;

use crate::domain::scoring::AxisScore;
use crate::domain::submission::MemeSubmission;
use crate::domain::theme::Theme;
use crate::error::AppError;

/// Errors that can occur while an axis judge scores a meme.
#[derive(Debug)]
pub enum JudgeError {
    /// Judge failed to produce a verdict within its time budget
    Timeout,
    /// Judge encountered an internal error
    Internal(String),
    /// A collaborator the judge depends on was unavailable
    Upstream(String),
}

impl fmt::Display for JudgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JudgeError::Timeout => write!(f, "judge timeout"),
            JudgeError::Internal(msg) => write!(f, "judge internal error: {msg}"),
            JudgeError::Upstream(msg) => write!(f, "judge upstream error: {msg}"),
        }
    }
}

impl std::error::Error for JudgeError {}

impl From<JudgeError> for AppError {
    fn from(err: JudgeError) -> Self {
        AppError::collaborator_unavailable(format!("judge error: {err}"))
    }
}

/// Trait for scoring-axis judges.
///
/// Implementations score one meme on a single axis against the round's
/// theme. `peers` holds the other memes submitted in the same round,
/// never the meme being scored; axes that compare against the field
/// (originality) read it, the rest ignore it.
#[async_trait]
pub trait AxisScorer: Send + Sync {
    /// Produce a 0..=10 verdict with feedback for one meme.
    async fn score(
        &self,
        meme: &MemeSubmission,
        theme: &Theme,
        peers: &[MemeSubmission],
    ) -> Result<AxisScore, JudgeError>;
}
