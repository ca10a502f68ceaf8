#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use backend::config::GameConfig;
use backend::domain::SubmissionDraft;
use backend::events::RecordingNotifier;
use backend::providers::{CuratedThemeProvider, StandardMemeValidator};
use backend::services::GameFlowService;
use backend::store::InMemoryStore;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// A game flow service wired against in-process fakes, plus handles to
/// the fakes so tests can inspect stored state and emitted events.
pub struct TestApp {
    pub service: Arc<GameFlowService>,
    pub store: Arc<InMemoryStore>,
    pub notifier: Arc<RecordingNotifier>,
}

/// Default config for tests: 3 rounds, no pause between rounds.
pub fn test_config() -> GameConfig {
    GameConfig {
        rounds_per_game: 3,
        submission_timeout: Duration::from_secs(90),
        inter_round_delay: Duration::ZERO,
        ..GameConfig::default()
    }
}

pub fn build_app(config: GameConfig) -> TestApp {
    let store = Arc::new(InMemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let service = Arc::new(GameFlowService::new(
        store.clone(),
        notifier.clone(),
        Arc::new(CuratedThemeProvider::new()),
        Arc::new(StandardMemeValidator::new()),
        config,
    ));
    TestApp {
        service,
        store,
        notifier,
    }
}

pub fn draft(template: &str, top: &str, bottom: &str) -> SubmissionDraft {
    SubmissionDraft {
        template_id: format!("tpl-{}", template.to_lowercase().replace(' ', "-")),
        template_name: template.to_string(),
        top_text: top.to_string(),
        bottom_text: bottom.to_string(),
        rendered_url: None,
    }
}
