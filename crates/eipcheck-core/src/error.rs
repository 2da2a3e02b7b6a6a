//! Error types for the audit
//!
//! This module defines all error types used throughout the workspace.

use thiserror::Error;

/// Result type alias for audit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the audit
#[derive(Error, Debug)]
pub enum Error {
    /// Address listing failed for a reason not covered below
    #[error("Address lister error: {0}")]
    Lister(String),

    /// Publishing failed for a reason not covered below
    #[error("Notifier error: {0}")]
    Notifier(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Authentication or authorization errors
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Throttling errors
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Destination not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create an address lister error
    pub fn lister(msg: impl Into<String>) -> Self {
        Self::Lister(msg.into())
    }

    /// Create a notifier error
    pub fn notifier(msg: impl Into<String>) -> Self {
        Self::Notifier(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create a rate limit error
    pub fn rate_limited(msg: impl Into<String>) -> Self {
        Self::RateLimited(msg.into())
    }

    /// Create a "not found" error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether the error is a configuration problem rather than a runtime failure
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
