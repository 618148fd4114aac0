//! Unified error type for the Luxxor application.

use thiserror::Error;

use super::category::ErrorCategory;
use super::contact::ContactError;

/// Unified error type for the Luxxor application.
#[derive(Debug, Error)]
pub enum LuxxorError {
    /// Terminal setup, drawing, or log file I/O.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Contact form validation or delivery.
    #[error(transparent)]
    Contact(#[from] ContactError),

    /// Catalog export.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An environment override could not be parsed.
    #[error("invalid value for {key}: {message}")]
    Config { key: String, message: String },
}

impl LuxxorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LuxxorError::Io(_) => ErrorCategory::System,
            LuxxorError::Contact(err) if err.is_validation() => ErrorCategory::User,
            LuxxorError::Contact(_) => ErrorCategory::Network,
            LuxxorError::Serialization(_) => ErrorCategory::Client,
            LuxxorError::Config { .. } => ErrorCategory::Configuration,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            LuxxorError::Io(_) => {
                "A terminal error occurred. You may need to reset your terminal.".to_string()
            }
            LuxxorError::Contact(err) => err.user_message(),
            LuxxorError::Serialization(_) => "Could not export the catalog.".to_string(),
            LuxxorError::Config { key, .. } => format!("Check the {} environment variable.", key),
        }
    }

    /// Two-line stderr report for failures before the TUI is up.
    pub fn startup_report(&self) -> String {
        format!(
            "luxxor: {} error: {}\n{}",
            self.category(),
            self,
            self.user_message()
        )
    }
}
