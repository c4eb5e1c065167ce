//! Theme error types

use thiserror::Error;

/// Errors raised by the theming engine
///
/// Every variant is a precondition violation. None of them are transient, so
/// callers surface them instead of retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A seed or literal color was not a `#RRGGBB` string
    #[error("invalid color format: {input:?} (expected #RRGGBB)")]
    InvalidColorFormat { input: String },

    /// A name outside one of the enumerated variant sets
    #[error("unsupported {family}: {value:?}")]
    UnsupportedVariant { family: &'static str, value: String },

    /// Theme accessed outside an active provider scope
    #[error("theme not initialized: no theme provider scope is active on this thread")]
    ThemeNotInitialized,

    /// Configuration content the engine rejects
    #[error("invalid theme configuration: {0}")]
    Config(String),
}

impl ThemeError {
    /// Shorthand for [`ThemeError::UnsupportedVariant`]
    pub fn unsupported(family: &'static str, value: impl Into<String>) -> Self {
        Self::UnsupportedVariant {
            family,
            value: value.into(),
        }
    }
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
