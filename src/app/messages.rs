//! AppMessage enum for async communication within the application.

use crate::error::ContactError;

/// Messages sent back to the UI task by background work.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// The relay accepted the contact form
    ContactDelivered { generation: u64 },
    /// The contact form could not be delivered
    ContactFailed { generation: u64, error: ContactError },
}

impl AppMessage {
    /// The contact form generation the result belongs to.
    pub fn generation(&self) -> u64 {
        match self {
            AppMessage::ContactDelivered { generation }
            | AppMessage::ContactFailed { generation, .. } => *generation,
        }
    }
}
