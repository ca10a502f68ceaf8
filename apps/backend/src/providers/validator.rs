//! Pre-submission meme validation.
//!
//! A draft must pass validation before it is stored for a round. Rule
//! outcomes are itemized so the player sees exactly what to fix; only
//! some rules reject outright, the rest just cost quality points.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::domain::SubmissionDraft;
use crate::providers::ProviderError;

/// Longest caption accepted, counted in chars after NFC normalization.
pub const MAX_CAPTION_CHARS: usize = 100;

static BLOCKED_WORDS: &[&str] = &["inappropriate", "offensive", "spam"];

/// Outcome of validating one draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub quality_score: u8,
}

/// Gate in front of submission storage.
#[async_trait]
pub trait MemeValidator: Send + Sync {
    async fn validate(&self, draft: &SubmissionDraft) -> Result<ValidationReport, ProviderError>;
}

/// Rule-based validator: required fields, caption length, blocked words.
#[derive(Clone, Default)]
pub struct StandardMemeValidator;

impl StandardMemeValidator {
    pub fn new() -> Self {
        Self
    }

    fn check(draft: &SubmissionDraft) -> ValidationReport {
        let mut is_valid = true;
        let mut issues = Vec::new();
        let mut suggestions = Vec::new();

        for (value, field) in [
            (&draft.template_id, "template_id"),
            (&draft.top_text, "top_text"),
            (&draft.bottom_text, "bottom_text"),
        ] {
            if value.is_empty() {
                is_valid = false;
                issues.push(format!("Missing required field: {field}"));
            }
        }

        let top = normalize(&draft.top_text);
        let bottom = normalize(&draft.bottom_text);

        if top.chars().count() > MAX_CAPTION_CHARS {
            issues.push("Top text too long (max 100 characters)".to_string());
            suggestions.push("Consider shortening the top text".to_string());
        }
        if bottom.chars().count() > MAX_CAPTION_CHARS {
            issues.push("Bottom text too long (max 100 characters)".to_string());
            suggestions.push("Consider shortening the bottom text".to_string());
        }

        let combined = format!("{} {}", top, bottom).to_lowercase();
        for word in BLOCKED_WORDS {
            if combined.contains(word) {
                is_valid = false;
                issues.push(format!("Contains inappropriate content: {word}"));
            }
        }

        let mut quality: i32 = 10;
        quality -= issues.len() as i32 * 2;
        if !draft.top_text.is_empty() && !draft.bottom_text.is_empty() {
            quality += 2;
        }

        ValidationReport {
            is_valid,
            issues,
            suggestions,
            quality_score: quality.max(0) as u8,
        }
    }
}

fn normalize(text: &str) -> String {
    text.nfc().collect::<String>()
}

#[async_trait]
impl MemeValidator for StandardMemeValidator {
    async fn validate(&self, draft: &SubmissionDraft) -> Result<ValidationReport, ProviderError> {
        Ok(Self::check(draft))
    }
}
