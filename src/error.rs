//! Error types for the SEO analyzer.
//!
//! The analysis itself never fails: degenerate input degrades to zero scores and
//! suggestions. Errors only come from building or loading a configuration.

use thiserror::Error;

// ============================================================================
// DOMAIN ERROR TYPE
// ============================================================================

#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration violates one of its invariants
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid or unusable base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// TOML config file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
