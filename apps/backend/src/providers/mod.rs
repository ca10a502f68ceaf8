//! External collaborator seams - theme generation and meme validation.
//!
//! This module provides:
//! - ThemeProvider trait plus the curated built-in implementation
//! - MemeValidator trait plus the standard rule-based implementation
//! - ProviderError: the failure type collaborators surface

use std::error::Error;
use std::fmt;

use crate::error::AppError;

pub mod themes;
pub mod validator;

pub use themes::{CuratedThemeProvider, ThemeProvider};
pub use validator::{MemeValidator, StandardMemeValidator, ValidationReport};

/// Collaborator failure - a provider that could not do its job.
#[derive(Debug)]
pub enum ProviderError {
    /// The upstream source (search, renderer, model) answered with an error.
    Upstream(String),
    /// The provider timed out waiting on its upstream.
    Timeout,
    /// Provider-internal failure.
    Internal(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Upstream(detail) => write!(f, "upstream failure: {detail}"),
            ProviderError::Timeout => write!(f, "provider timed out"),
            ProviderError::Internal(detail) => write!(f, "provider internal error: {detail}"),
        }
    }
}

impl Error for ProviderError {}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::collaborator_unavailable(err.to_string())
    }
}
