//! Combines the three axis judges into one weighted verdict per meme.
//!
//! The aggregator never fails a meme: a broken axis is logged, scored as
//! zero and annotated in its feedback, and the remaining axes still count.

use crate::domain::{AxisScore, JudgeScoreSet, MemeSubmission, ScoreWeights, Theme};
use crate::judges::humor::HumorJudge;
use crate::judges::originality::OriginalityJudge;
use crate::judges::relevance::RelevanceJudge;
use crate::judges::trait_def::{AxisScorer, JudgeError};

/// Weighted aggregator over the humor, relevance and originality axes.
pub struct ScoreAggregator {
    weights: ScoreWeights,
    humor: Box<dyn AxisScorer + Send + Sync>,
    relevance: Box<dyn AxisScorer + Send + Sync>,
    originality: Box<dyn AxisScorer + Send + Sync>,
}

impl ScoreAggregator {
    /// Aggregator over the built-in judges with the given weights.
    pub fn new(weights: ScoreWeights) -> Self {
        Self::with_scorers(
            weights,
            Box::new(HumorJudge::new()),
            Box::new(RelevanceJudge::new()),
            Box::new(OriginalityJudge::new()),
        )
    }

    /// Aggregator with explicit axis implementations.
    pub fn with_scorers(
        weights: ScoreWeights,
        humor: Box<dyn AxisScorer + Send + Sync>,
        relevance: Box<dyn AxisScorer + Send + Sync>,
        originality: Box<dyn AxisScorer + Send + Sync>,
    ) -> Self {
        Self {
            weights,
            humor,
            relevance,
            originality,
        }
    }

    /// Scores one meme on all three axes concurrently.
    ///
    /// `peers` must hold the other memes of the round, never `meme` itself.
    pub async fn score(
        &self,
        meme: &MemeSubmission,
        theme: &Theme,
        peers: &[MemeSubmission],
    ) -> JudgeScoreSet {
        let (humor, relevance, originality) = futures::join!(
            self.humor.score(meme, theme, peers),
            self.relevance.score(meme, theme, peers),
            self.originality.score(meme, theme, peers),
        );

        let humor = recover(HumorJudge::NAME, &meme.id, humor);
        let relevance = recover(RelevanceJudge::NAME, &meme.id, relevance);
        let originality = recover(OriginalityJudge::NAME, &meme.id, originality);

        JudgeScoreSet::from_axes(&self.weights, humor, relevance, originality)
    }
}

/// Maps an axis failure onto the zero score that stands in for it.
fn recover(axis: &str, meme_id: &str, verdict: Result<AxisScore, JudgeError>) -> AxisScore {
    match verdict {
        Ok(score) => score,
        Err(error) => {
            tracing::warn!(
                axis,
                meme_id,
                error = %error,
                "axis judge failed, substituting zero score"
            );
            AxisScore::zeroed(format!("{axis} judging error: score substituted with 0"))
        }
    }
}
