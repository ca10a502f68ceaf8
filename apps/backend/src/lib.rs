#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod events;
pub mod judges;
pub mod providers;
pub mod services;
pub mod store;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::GameConfig;
pub use error::AppError;
pub use errors::DomainError;
pub use events::{GameEvent, GameNotifier, RecordingNotifier, RedisNotifier};
pub use providers::{CuratedThemeProvider, MemeValidator, StandardMemeValidator, ThemeProvider};
pub use services::{GameFlowService, GameStatusView, MatchOutcome, RoundJudge, SubmitOutcome};
pub use store::{InMemoryStore, KvStore, RedisStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
