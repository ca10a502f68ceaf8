//! Theme generation for game rounds.
//!
//! The built-in provider samples a curated pool deterministically per game,
//! so re-running theme assignment for the same game id yields the same
//! themes. Search-backed providers plug in behind the same trait.

use async_trait::async_trait;

use crate::domain::{derive_theme_seed, GameId, Theme};
use crate::providers::ProviderError;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

/// Produces the themes a game's rounds are played on.
///
/// `generate_themes` may return fewer themes than requested when the
/// backing source runs dry; callers shorten the game rather than fail.
#[async_trait]
pub trait ThemeProvider: Send + Sync {
    async fn generate_themes(
        &self,
        game_id: &GameId,
        count: usize,
    ) -> Result<Vec<Theme>, ProviderError>;

    /// Adds cultural background to a theme. Implementations return the
    /// theme unchanged when no context is available for it.
    async fn enrich(&self, theme: Theme) -> Result<Theme, ProviderError>;
}

struct CuratedTheme {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    context: &'static [&'static str],
}

static CURATED_POOL: &[CuratedTheme] = &[
    CuratedTheme {
        id: "monday-mornings",
        name: "Monday mornings",
        description: "The weekly collision between ambition and the snooze button",
        category: "work",
        context: &[
            "Universally dreaded start of the work week",
            "Peak hours for coffee consumption and existential sighs",
        ],
    },
    CuratedTheme {
        id: "group-projects",
        name: "Group project flashbacks",
        description: "One person does everything, four names on the cover page",
        category: "school",
        context: &[
            "The classic free-rider problem of classrooms everywhere",
            "Shared document edit histories tell the real story",
        ],
    },
    CuratedTheme {
        id: "wifi-down",
        name: "When the WiFi goes down",
        description: "Thirty seconds of outage, a lifetime of reflection",
        category: "tech",
        context: &[
            "Router restarts as modern ritual",
            "Suddenly remembering the physical world exists",
        ],
    },
    CuratedTheme {
        id: "meeting-email",
        name: "This meeting could have been an email",
        description: "An hour of calendar time for one paragraph of information",
        category: "work",
        context: &[
            "Office culture's most relatable grievance",
            "Agenda optional, attendance mandatory",
        ],
    },
    CuratedTheme {
        id: "gym-resolutions",
        name: "New Year gym resolutions",
        description: "January crowds, February ghost town",
        category: "life",
        context: &[
            "Membership sales peak on January 2nd",
            "The treadmill as a clothes rack by spring",
        ],
    },
    CuratedTheme {
        id: "autocorrect-fails",
        name: "Autocorrect fails",
        description: "The phone knows what you meant and chooses chaos",
        category: "tech",
        context: &[
            "Ducking keyboards and their creative substitutions",
            "Messages sent are messages owned",
        ],
    },
    CuratedTheme {
        id: "online-shopping",
        name: "Online shopping expectations vs reality",
        description: "The product photo was a work of aspirational fiction",
        category: "life",
        context: &[
            "Size charts as abstract art",
            "Delivery estimates measured in optimism",
        ],
    },
    CuratedTheme {
        id: "software-updates",
        name: "Software updates at the worst time",
        description: "Restart required, deadline ignored",
        category: "tech",
        context: &[
            "Progress bars that lie with confidence",
            "Remind me tomorrow, forever",
        ],
    },
    CuratedTheme {
        id: "weekend-plans",
        name: "Weekend plans vs weekend reality",
        description: "Friday's itinerary, Sunday's couch",
        category: "life",
        context: &[
            "The gap between scheduled adventure and actual napping",
            "Laundry as the weekend's only completed quest",
        ],
    },
    CuratedTheme {
        id: "inbox-zero",
        name: "The dream of inbox zero",
        description: "Forty-seven unread, twelve flagged, all ignored",
        category: "work",
        context: &[
            "Email bankruptcy as a productivity strategy",
            "Reply-all chains that outlive their subject",
        ],
    },
    CuratedTheme {
        id: "pet-logic",
        name: "Pet logic",
        description: "Expensive bed untouched, cardboard box defended with honor",
        category: "life",
        context: &[
            "Cats and the economics of ignoring purchases",
            "Dogs greeting five-minute absences like long voyages",
        ],
    },
    CuratedTheme {
        id: "coffee-dependency",
        name: "Coffee dependency",
        description: "A personality until noon, a beverage after",
        category: "life",
        context: &[
            "Do not schedule anything before the second cup",
            "Decaf regarded as an elaborate prank",
        ],
    },
];

/// Deterministic provider over the curated pool.
///
/// The per-game seed comes from hashing the game id, so the same game
/// always draws the same themes in the same order.
#[derive(Clone, Default)]
pub struct CuratedThemeProvider;

impl CuratedThemeProvider {
    pub const NAME: &'static str = "curated";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }

    fn sample(game_id: &str, count: usize) -> Vec<Theme> {
        let amount = count.min(CURATED_POOL.len());
        if amount == 0 {
            return Vec::new();
        }
        let mut rng = StdRng::seed_from_u64(derive_theme_seed(game_id));
        index::sample(&mut rng, CURATED_POOL.len(), amount)
            .iter()
            .map(|i| {
                let entry = &CURATED_POOL[i];
                Theme {
                    id: entry.id.to_string(),
                    name: entry.name.to_string(),
                    description: entry.description.to_string(),
                    category: entry.category.to_string(),
                    context: Vec::new(),
                }
            })
            .collect()
    }
}

#[async_trait]
impl ThemeProvider for CuratedThemeProvider {
    async fn generate_themes(
        &self,
        game_id: &GameId,
        count: usize,
    ) -> Result<Vec<Theme>, ProviderError> {
        Ok(Self::sample(game_id, count))
    }

    async fn enrich(&self, mut theme: Theme) -> Result<Theme, ProviderError> {
        if let Some(entry) = CURATED_POOL.iter().find(|entry| entry.id == theme.id) {
            theme.context = entry.context.iter().map(|line| line.to_string()).collect();
        }
        Ok(theme)
    }
}
