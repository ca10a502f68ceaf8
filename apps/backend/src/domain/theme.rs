use serde::{Deserialize, Serialize};

/// A round's creative prompt. Immutable once assigned to a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Enrichment snippets attached by the theme provider; empty when
    /// enrichment was unavailable.
    #[serde(default)]
    pub context: Vec<String>,
}
