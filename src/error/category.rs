//! Error category classification.
//!
//! Categories drive how an error is surfaced: user-actionable problems are
//! shown inline, everything else goes to the log.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection failures and relay rejections.
    Network,

    /// Invalid form input. Fixed by the user, never retried.
    User,

    /// Terminal and filesystem errors.
    System,

    /// Bad environment overrides.
    Configuration,

    /// Serialization failures; indicates a bug.
    Client,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Client => "client",
        }
    }

    /// Whether the message should be shown next to the control that failed.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, ErrorCategory::User | ErrorCategory::Network)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
