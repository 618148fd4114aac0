//! Contact form errors.

use thiserror::Error;

/// Why a contact message was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// A required field is blank
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// The email field does not look like an address
    #[error("'{value}' is not a valid email address")]
    InvalidEmail { value: String },

    /// The relay answered with a non-success status
    #[error("form relay rejected the message (HTTP {status})")]
    Rejected { status: u16 },

    /// The request never completed
    #[error("could not reach the form relay: {message}")]
    Transport { message: String },
}

impl ContactError {
    /// Validation errors are caught before anything is sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ContactError::MissingField { .. } | ContactError::InvalidEmail { .. }
        )
    }

    /// Short text for the status line under the form.
    pub fn user_message(&self) -> String {
        match self {
            ContactError::MissingField { field } => format!("Please fill in {}.", field),
            ContactError::InvalidEmail { .. } => "Please enter a valid email address.".to_string(),
            ContactError::Rejected { .. } | ContactError::Transport { .. } => {
                "Message could not be sent. Please try again later.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for ContactError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ContactError::Rejected {
                status: status.as_u16(),
            },
            None => ContactError::Transport {
                message: err.to_string(),
            },
        }
    }
}
