use thiserror::Error;

use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: &'static str, detail: String },
    #[error("Invalid transition: {attempted} while {state}")]
    InvalidTransition { attempted: String, state: String },
    #[error("Not found: {detail}")]
    NotFound { code: &'static str, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: &'static str, detail: String },
    #[error("Store unavailable: {detail}")]
    StoreUnavailable { detail: String },
    #[error("Collaborator unavailable: {detail}")]
    CollaboratorUnavailable { detail: String },
    #[error("Serialization error: {detail}")]
    Serialization { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Helper method to extract error code from any error variant
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { code, .. } => code,
            AppError::InvalidTransition { .. } => "INVALID_TRANSITION",
            AppError::NotFound { code, .. } => code,
            AppError::Conflict { code, .. } => code,
            AppError::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
            AppError::CollaboratorUnavailable { .. } => "COLLABORATOR_UNAVAILABLE",
            AppError::Serialization { .. } => "SERIALIZATION_ERROR",
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Internal { .. } => "INTERNAL",
        }
    }

    pub fn invalid(code: &'static str, detail: String) -> Self {
        Self::Validation { code, detail }
    }

    pub fn invalid_transition(attempted: impl Into<String>, state: impl Into<String>) -> Self {
        Self::InvalidTransition {
            attempted: attempted.into(),
            state: state.into(),
        }
    }

    pub fn not_found(code: &'static str, detail: String) -> Self {
        Self::NotFound { code, detail }
    }

    pub fn conflict(code: &'static str, detail: String) -> Self {
        Self::Conflict { code, detail }
    }

    pub fn store_unavailable(detail: String) -> Self {
        Self::StoreUnavailable { detail }
    }

    pub fn collaborator_unavailable(detail: String) -> Self {
        Self::CollaboratorUnavailable { detail }
    }

    pub fn serialization(detail: String) -> Self {
        Self::Serialization { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::internal(format!("env var error: {e}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::serialization(format!("json error: {e}"))
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::store_unavailable(format!("redis error: {e}"))
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(detail) => AppError::invalid("VALIDATION_ERROR", detail),
            DomainError::InvalidTransition { attempted, state } => {
                AppError::InvalidTransition { attempted, state }
            }
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::GameFull => "GAME_FULL",
                    ConflictKind::AlreadyJoined => "ALREADY_JOINED",
                    ConflictKind::JudgingInProgress => "JUDGING_IN_PROGRESS",
                    ConflictKind::Other(_) => "CONFLICT",
                };
                AppError::conflict(code, detail)
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Game => "GAME_NOT_FOUND",
                    NotFoundKind::Submission => "SUBMISSION_NOT_FOUND",
                    NotFoundKind::Theme => "THEME_NOT_FOUND",
                    NotFoundKind::Other(_) => "NOT_FOUND",
                };
                AppError::not_found(code, detail)
            }
        }
    }
}
