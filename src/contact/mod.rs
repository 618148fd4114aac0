//! Contact form: field state, validation, and delivery to the form relay.
//!
//! Delivery is fire-and-forget from the UI's point of view. The form is
//! validated locally, then handed to a [`FormRelay`] on a background task;
//! the outcome only updates the status line under the form.

mod form;
mod relay;

pub use form::{ContactForm, ContactStatus, ContactSubmission};
pub use relay::{FormRelay, Web3FormsRelay};
