use std::env;

use crate::error::AppError;

/// Get the Redis connection URL from the environment.
pub fn redis_url() -> Result<String, AppError> {
    must_var("REDIS_URL")
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
