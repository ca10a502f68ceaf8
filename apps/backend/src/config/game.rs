use std::env;
use std::time::Duration;

use crate::domain::scoring::ScoreWeights;
use crate::error::AppError;

/// Tunable game pacing knobs, loaded from the environment with sensible
/// defaults. Score weights ride along so services get one config handle.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Number of rounds per game; theme assignment may shrink this
    /// when the provider returns fewer themes than requested.
    pub rounds_per_game: u32,
    /// How long players get to submit a meme each round.
    pub submission_timeout: Duration,
    /// Pause between round results and the next round starting, giving
    /// players time to read the results. Zero skips the pause.
    pub inter_round_delay: Duration,
    pub weights: ScoreWeights,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds_per_game: 3,
            submission_timeout: Duration::from_secs(90),
            inter_round_delay: Duration::from_secs(5),
            weights: ScoreWeights::default(),
        }
    }
}

impl GameConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, AppError> {
        let rounds_per_game = parse_var("ROUNDS_PER_GAME", 3u32)?;
        if rounds_per_game == 0 {
            return Err(AppError::config(
                "ROUNDS_PER_GAME must be at least 1".to_string(),
            ));
        }

        let timeout_secs = parse_var("SUBMISSION_TIMEOUT_SECS", 90u64)?;
        if timeout_secs == 0 {
            return Err(AppError::config(
                "SUBMISSION_TIMEOUT_SECS must be at least 1".to_string(),
            ));
        }

        let delay_secs = parse_var("INTER_ROUND_DELAY_SECS", 5u64)?;

        Ok(Self {
            rounds_per_game,
            submission_timeout: Duration::from_secs(timeout_secs),
            inter_round_delay: Duration::from_secs(delay_secs),
            weights: ScoreWeights::default(),
        })
    }
}

/// Parse an optional environment variable, erroring on malformed values
/// rather than silently falling back.
fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw.parse::<T>().map_err(|_| {
            AppError::config(format!("{name} must be a valid number, got '{raw}'"))
        }),
        Err(_) => Ok(default),
    }
}
