use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::game::{GameId, PlayerId};

/// Player-authored meme fields before validation and acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionDraft {
    pub template_id: String,
    #[serde(default)]
    pub template_name: String,
    pub top_text: String,
    pub bottom_text: String,
    #[serde(default)]
    pub rendered_url: Option<String>,
}

/// An accepted meme entry for one (game, player, round).
///
/// Resubmitting before judging replaces the stored entry wholesale; only
/// the latest submission is ever judged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemeSubmission {
    pub id: String,
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub round_no: u32,
    pub template_id: String,
    pub template_name: String,
    pub top_text: String,
    pub bottom_text: String,
    pub rendered_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
}

impl MemeSubmission {
    /// Top and bottom captions joined the way judges read them.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.top_text, self.bottom_text)
    }
}
