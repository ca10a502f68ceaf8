//! Originality — uniqueness of a meme relative to its round peers.
//!
//! Three criteria on fixed point scales, summing to at most 10:
//! - text originality against peer captions (0-4)
//! - creative interpretation markers (0-3)
//! - template usage rarity among peers (0-3)
//!
//! The peer slice never contains the meme being scored, so a lone
//! submission faces no similarity or template-reuse deductions.

use std::collections::HashSet;

use async_trait::async_trait;
use lazy_regex::regex;

use crate::domain::scoring::{AxisScore, ScoreComponent};
use crate::domain::submission::MemeSubmission;
use crate::domain::theme::Theme;
use crate::judges::trait_def::{AxisScorer, JudgeError};

/// Caption word-set overlap above this ratio counts as derivative.
const SIMILARITY_THRESHOLD: f64 = 0.7;

const CREATIVE_MARKERS: [&str; 5] = ["metaphor", "analogy", "wordplay", "puns", "references"];

#[derive(Clone, Default)]
pub struct OriginalityJudge;

impl OriginalityJudge {
    pub const NAME: &'static str = "originality";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }

    /// Lowercased caption word set; punctuation never splits a match.
    fn caption_words(text: &str) -> HashSet<String> {
        regex!(r"[a-z0-9']+")
            .find_iter(&text.to_lowercase())
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Jaccard similarity of the two captions' word sets.
    fn text_similarity(a: &str, b: &str) -> f64 {
        let words_a = Self::caption_words(a);
        let words_b = Self::caption_words(b);
        if words_a.is_empty() || words_b.is_empty() {
            return 0.0;
        }
        let intersection = words_a.intersection(&words_b).count();
        let union = words_a.union(&words_b).count();
        intersection as f64 / union as f64
    }

    /// Text originality (0-4): start from 4 and deduct one point per
    /// peer caption this one closely resembles.
    fn text_originality(combined: &str, peers: &[MemeSubmission]) -> f64 {
        let similar = peers
            .iter()
            .filter(|peer| {
                Self::text_similarity(combined, &peer.combined_text().to_lowercase())
                    > SIMILARITY_THRESHOLD
            })
            .count();
        (4.0 - similar as f64).max(0.0)
    }

    /// Creative interpretation (0-3): explicit creative-language markers
    /// plus substance in both captions.
    fn creative_interpretation(top: &str, bottom: &str) -> f64 {
        let combined = format!("{top} {bottom}").to_lowercase();
        let mut score: f64 = 0.0;
        for marker in CREATIVE_MARKERS {
            if combined.contains(marker) {
                score += 0.5;
            }
        }
        if top.split_whitespace().count() > 3 && bottom.split_whitespace().count() > 3 {
            score += 1.0;
        }
        score.min(3.0)
    }

    /// Template usage rarity (0-3): the fewer peers picked the same
    /// template, the more points.
    fn template_originality(template_id: &str, peers: &[MemeSubmission]) -> f64 {
        let uses = peers
            .iter()
            .filter(|peer| peer.template_id == template_id)
            .count();
        match uses {
            0 => 3.0,
            1 => 2.0,
            2 => 1.0,
            _ => 0.0,
        }
    }

    fn feedback(score: f64) -> &'static str {
        if score >= 8.0 {
            "Highly original! Creative and unique interpretation."
        } else if score >= 6.0 {
            "Good originality! Shows creative thinking."
        } else if score >= 4.0 {
            "Moderate originality. Some creative elements present."
        } else {
            "Low originality. Consider more creative approaches."
        }
    }
}

#[async_trait]
impl AxisScorer for OriginalityJudge {
    async fn score(
        &self,
        meme: &MemeSubmission,
        _theme: &Theme,
        peers: &[MemeSubmission],
    ) -> Result<AxisScore, JudgeError> {
        let combined = meme.combined_text().to_lowercase();

        let text = Self::text_originality(&combined, peers);
        let creative = Self::creative_interpretation(&meme.top_text, &meme.bottom_text);
        let template = Self::template_originality(&meme.template_id, peers);
        let total = text + creative + template;

        let breakdown = vec![
            ScoreComponent {
                label: "text_originality".to_string(),
                points: text,
            },
            ScoreComponent {
                label: "creative_interpretation".to_string(),
                points: creative,
            },
            ScoreComponent {
                label: "template_originality".to_string(),
                points: template,
            },
        ];

        Ok(AxisScore::with_breakdown(
            total,
            Self::feedback(total),
            breakdown,
        ))
    }
}
