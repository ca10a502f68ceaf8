//! Relevance — how tightly a meme connects to the round's theme.
//!
//! Three criteria on fixed point scales, summing to at most 10:
//! - direct keyword matches in the captions (0-4)
//! - conceptual matches against the full theme name (0-3)
//! - template-name relevance (0-3)

use std::collections::HashSet;

use async_trait::async_trait;
use lazy_regex::regex;
use once_cell::sync::Lazy;

use crate::domain::scoring::{AxisScore, ScoreComponent};
use crate::domain::submission::MemeSubmission;
use crate::domain::theme::Theme;
use crate::judges::trait_def::{AxisScorer, JudgeError};

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    ]
    .into_iter()
    .collect()
});

#[derive(Clone, Default)]
pub struct RelevanceJudge;

impl RelevanceJudge {
    pub const NAME: &'static str = "relevance";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }

    /// Lowercased word tokens of a theme name, punctuation stripped.
    fn words(text: &str) -> Vec<String> {
        regex!(r"[a-z0-9']+")
            .find_iter(&text.to_lowercase())
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Keywords worth matching: theme-name words that are not stopwords
    /// and long enough to carry meaning.
    fn extract_keywords(theme_name: &str) -> Vec<String> {
        Self::words(theme_name)
            .into_iter()
            .filter(|w| !STOPWORDS.contains(w.as_str()) && w.len() > 2)
            .collect()
    }

    /// Direct keyword matching (0-4): one point per keyword present in
    /// the combined captions.
    fn keyword_relevance(text: &str, keywords: &[String]) -> f64 {
        let mut score: f64 = 0.0;
        for keyword in keywords {
            if text.contains(keyword.as_str()) {
                score += 1.0;
            }
        }
        score.min(4.0)
    }

    /// Conceptual relevance (0-3): every theme-name word counts here,
    /// stopwords included.
    fn conceptual_relevance(text: &str, theme_name: &str) -> f64 {
        let matches = Self::words(theme_name)
            .iter()
            .filter(|concept| text.contains(concept.as_str()))
            .count();
        (matches as f64).min(3.0)
    }

    /// Template appropriateness (0-3): theme-name words appearing in the
    /// template name.
    fn template_relevance(template_name: &str, theme_name: &str) -> f64 {
        let template_lower = template_name.to_lowercase();
        let mut score: f64 = 0.0;
        for word in Self::words(theme_name) {
            if template_lower.contains(word.as_str()) {
                score += 1.0;
            }
        }
        score.min(3.0)
    }

    fn feedback(score: f64, theme_name: &str) -> String {
        if score >= 8.0 {
            format!("Excellent relevance to '{theme_name}'! Strong thematic connection.")
        } else if score >= 6.0 {
            format!("Good relevance to '{theme_name}'. Clear thematic connection.")
        } else if score >= 4.0 {
            format!("Moderate relevance to '{theme_name}'. Could be more focused.")
        } else {
            format!("Low relevance to '{theme_name}'. Consider refocusing on the theme.")
        }
    }
}

#[async_trait]
impl AxisScorer for RelevanceJudge {
    async fn score(
        &self,
        meme: &MemeSubmission,
        theme: &Theme,
        _peers: &[MemeSubmission],
    ) -> Result<AxisScore, JudgeError> {
        let combined = meme.combined_text().to_lowercase();
        let keywords = Self::extract_keywords(&theme.name);

        let keyword = Self::keyword_relevance(&combined, &keywords);
        let conceptual = Self::conceptual_relevance(&combined, &theme.name);
        let template = Self::template_relevance(&meme.template_name, &theme.name);
        let total = keyword + conceptual + template;

        let breakdown = vec![
            ScoreComponent {
                label: "keyword_match".to_string(),
                points: keyword,
            },
            ScoreComponent {
                label: "conceptual_match".to_string(),
                points: conceptual,
            },
            ScoreComponent {
                label: "template_match".to_string(),
                points: template,
            },
        ];

        Ok(AxisScore::with_breakdown(
            total,
            Self::feedback(total, &theme.name),
            breakdown,
        ))
    }
}
