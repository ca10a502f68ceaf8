//! Error handling for the meme-duel backend.

pub mod domain;

pub use domain::DomainError;
