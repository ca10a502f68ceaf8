//! Humor — deterministic comedy scoring.
//!
//! Four criteria on fixed point scales, summing to at most 10:
//! - setup/punchline structure (0-3)
//! - timing and delivery (0-3)
//! - surprise factor (0-2)
//! - wordplay and cleverness (0-2)
//!
//! Determinism: no randomness, no external calls. Same captions always
//! score the same.

use async_trait::async_trait;

use crate::domain::scoring::{AxisScore, ScoreComponent};
use crate::domain::submission::MemeSubmission;
use crate::domain::theme::Theme;
use crate::judges::trait_def::{AxisScorer, JudgeError};

const SURPRISE_WORDS: [&str; 4] = ["actually", "plot twist", "surprise", "unexpected"];
const WORDPLAY_MARKERS: [&str; 3] = ["pun", "play on words", "double meaning"];
const REFERENCE_MARKERS: [&str; 3] = ["reference", "callback", "meta"];

#[derive(Clone, Default)]
pub struct HumorJudge;

impl HumorJudge {
    pub const NAME: &'static str = "humor";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }

    /// Setup-punchline structure (0-3): rewards a two-part joke and a
    /// twist word in the punchline.
    fn setup_punchline(top: &str, bottom: &str) -> f64 {
        let mut score: f64 = 0.0;
        if !top.is_empty() && !bottom.is_empty() {
            score += 1.5;
        }
        if !top.is_empty() && !bottom.is_empty() && top.chars().count() > bottom.chars().count() {
            score += 0.5;
        }
        let bottom_lower = bottom.to_lowercase();
        if bottom_lower.contains("but") || bottom_lower.contains("however") {
            score += 1.0;
        }
        score.min(3.0)
    }

    /// Timing and delivery (0-3): concise punchline, impactful ending,
    /// reaction-style template.
    fn timing_delivery(bottom: &str, template_name: &str) -> f64 {
        let mut score: f64 = 0.0;
        if bottom.chars().count() <= 50 {
            score += 1.0;
        }
        if matches!(bottom.chars().last(), Some('!') | Some('?')) {
            score += 1.0;
        }
        if template_name.to_lowercase().contains("reaction") {
            score += 1.0;
        }
        score.min(3.0)
    }

    /// Surprise factor (0-2): words that signal an unexpected turn.
    fn surprise_factor(bottom: &str) -> f64 {
        let bottom_lower = bottom.to_lowercase();
        let mut score: f64 = 0.0;
        for word in SURPRISE_WORDS {
            if bottom_lower.contains(word) {
                score += 0.5;
            }
        }
        if bottom_lower.contains("but") {
            score += 0.5;
        }
        score.min(2.0)
    }

    /// Wordplay and cleverness (0-2): explicit wordplay or reference
    /// markers in the punchline.
    fn wordplay_cleverness(bottom: &str) -> f64 {
        let bottom_lower = bottom.to_lowercase();
        let mut score: f64 = 0.0;
        if WORDPLAY_MARKERS.iter().any(|w| bottom_lower.contains(w)) {
            score += 1.0;
        }
        if REFERENCE_MARKERS.iter().any(|w| bottom_lower.contains(w)) {
            score += 1.0;
        }
        score.min(2.0)
    }

    fn feedback(total: f64) -> &'static str {
        if total >= 8.0 {
            "Excellent humor! Strong setup-punchline structure with great timing."
        } else if total >= 6.0 {
            "Good humor! Solid comedic structure with room for improvement."
        } else if total >= 4.0 {
            "Decent humor. Consider strengthening the punchline or timing."
        } else {
            "Needs improvement. Focus on setup-punchline structure and timing."
        }
    }
}

#[async_trait]
impl AxisScorer for HumorJudge {
    async fn score(
        &self,
        meme: &MemeSubmission,
        _theme: &Theme,
        _peers: &[MemeSubmission],
    ) -> Result<AxisScore, JudgeError> {
        let setup = Self::setup_punchline(&meme.top_text, &meme.bottom_text);
        let timing = Self::timing_delivery(&meme.bottom_text, &meme.template_name);
        let surprise = Self::surprise_factor(&meme.bottom_text);
        let wordplay = Self::wordplay_cleverness(&meme.bottom_text);
        let total = setup + timing + surprise + wordplay;

        let breakdown = vec![
            ScoreComponent {
                label: "setup_punchline".to_string(),
                points: setup,
            },
            ScoreComponent {
                label: "timing_delivery".to_string(),
                points: timing,
            },
            ScoreComponent {
                label: "surprise_factor".to_string(),
                points: surprise,
            },
            ScoreComponent {
                label: "wordplay_cleverness".to_string(),
                points: wordplay,
            },
        ];

        Ok(AxisScore::with_breakdown(
            total,
            Self::feedback(total),
            breakdown,
        ))
    }
}
