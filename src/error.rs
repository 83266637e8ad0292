//! Error types for extman
//!
//! Controller operations are total; these errors only surface at the edges
//! (config files, CLI arguments, preference storage, custom record lists).

use thiserror::Error;

use crate::extension::ExtensionId;

/// Errors that can occur in extman
#[derive(Debug, Error)]
pub enum ExtmanError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown filter mode name
    #[error("Unknown filter '{0}' (expected all, active or inactive)")]
    InvalidFilter(String),

    /// Unknown theme name
    #[error("Unknown theme '{0}' (expected light or dark)")]
    InvalidTheme(String),

    /// A record list contains the same id twice
    #[error("Duplicate extension id: {0}")]
    DuplicateId(ExtensionId),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Preference file is not a JSON object
    #[error("Storage parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for extman operations
pub type ExtmanResult<T> = Result<T, ExtmanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_reports_os_message_once() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = anyhow::Error::from(ExtmanError::from(io));
        let shown = format!("Error: {}", err);
        assert_eq!(shown, "Error: IO error: access denied");
        assert_eq!(shown.matches("access denied").count(), 1);
    }
}
