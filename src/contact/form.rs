use serde::Serialize;

use crate::app::FormField;
use crate::error::ContactError;
use crate::widgets::TextField;

/// Where the last submission attempt stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    /// Validation or delivery failed; carries the user-facing message
    Failed(String),
}

/// Wire payload posted to the relay as `application/x-www-form-urlencoded`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub access_key: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub message: String,
    /// Honeypot; a human never fills it
    pub botcheck: String,
}

/// The four visible fields and the status line.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: TextField,
    pub surname: TextField,
    pub email: TextField,
    pub message: TextField,
    pub status: ContactStatus,
    /// Bumped on every submit and reset; results carry the value they were
    /// sent under
    generation: u64,
}

impl ContactForm {
    pub const FIELDS: [FormField; 4] = [
        FormField::ContactName,
        FormField::ContactSurname,
        FormField::ContactEmail,
        FormField::ContactMessage,
    ];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: FormField) -> Option<&TextField> {
        match field {
            FormField::ContactName => Some(&self.name),
            FormField::ContactSurname => Some(&self.surname),
            FormField::ContactEmail => Some(&self.email),
            FormField::ContactMessage => Some(&self.message),
            FormField::LoginUsername | FormField::LoginPassword => None,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> Option<&mut TextField> {
        match field {
            FormField::ContactName => Some(&mut self.name),
            FormField::ContactSurname => Some(&mut self.surname),
            FormField::ContactEmail => Some(&mut self.email),
            FormField::ContactMessage => Some(&mut self.message),
            FormField::LoginUsername | FormField::LoginPassword => None,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.status == ContactStatus::Sending
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mark the form as sending and return the generation the result must match.
    pub fn begin_submission(&mut self) -> u64 {
        self.generation += 1;
        self.status = ContactStatus::Sending;
        self.generation
    }

    /// Clear every field. Results of earlier submissions no longer apply.
    pub fn reset(&mut self) {
        *self = Self {
            generation: self.generation + 1,
            ..Self::default()
        };
    }

    /// Check required fields and build the payload.
    ///
    /// First name, email and message are required; the email must have a
    /// non-empty local part and a dotted domain.
    pub fn validate(&self, access_key: &str) -> Result<ContactSubmission, ContactError> {
        let name = self.name.value().trim();
        let email = self.email.value().trim();
        let message = self.message.value().trim();

        if name.is_empty() {
            return Err(ContactError::MissingField { field: "First Name" });
        }
        if email.is_empty() {
            return Err(ContactError::MissingField {
                field: "Email Address",
            });
        }
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail {
                value: email.to_string(),
            });
        }
        if message.is_empty() {
            return Err(ContactError::MissingField { field: "Message" });
        }

        Ok(ContactSubmission {
            access_key: access_key.to_string(),
            name: name.to_string(),
            surname: self.surname.value().trim().to_string(),
            email: email.to_string(),
            message: message.to_string(),
            botcheck: String::new(),
        })
    }
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.name.set_value("Tariro");
        form.email.set_value("tariro@example.co.zw");
        form.message.set_value("We'd like a demo for 40 managers.");
        form
    }

    #[test]
    fn test_valid_form_builds_submission() {
        let submission = filled().validate("key-123").unwrap();
        assert_eq!(submission.access_key, "key-123");
        assert_eq!(submission.name, "Tariro");
        assert_eq!(submission.surname, "");
        assert_eq!(submission.botcheck, "");
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled();
        form.name.clear();
        assert_eq!(
            form.validate("k"),
            Err(ContactError::MissingField { field: "First Name" })
        );

        let mut form = filled();
        form.message.set_value("   ");
        assert_eq!(
            form.validate("k"),
            Err(ContactError::MissingField { field: "Message" })
        );

        let mut form = filled();
        form.email.clear();
        assert!(matches!(
            form.validate("k"),
            Err(ContactError::MissingField { .. })
        ));
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("first.last@mail.example.com"));
        assert!(!looks_like_email("no-at-sign.com"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("a@localhost"));
        assert!(!looks_like_email("a@b@c.com"));
        assert!(!looks_like_email("a b@c.com"));
        assert!(!looks_like_email("a@.com"));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut form = filled();
        form.email.set_value("tariro");
        assert_eq!(
            form.validate("k"),
            Err(ContactError::InvalidEmail {
                value: "tariro".to_string()
            })
        );
    }

    #[test]
    fn test_login_fields_not_on_contact_form() {
        let form = ContactForm::new();
        assert!(form.field(FormField::LoginPassword).is_none());
        assert!(form.field(FormField::ContactEmail).is_some());
    }

    #[test]
    fn test_reset_clears_status() {
        let mut form = filled();
        form.status = ContactStatus::Sent;
        form.reset();
        assert!(form.name.is_empty());
        assert_eq!(form.status, ContactStatus::Idle);
    }

    #[test]
    fn test_generation_advances_on_submit_and_reset() {
        let mut form = filled();
        let first = form.begin_submission();
        assert!(form.is_sending());

        form.reset();
        assert!(form.generation() > first);
        assert!(!form.is_sending());

        let second = form.begin_submission();
        assert_eq!(second, form.generation());
        assert_ne!(first, second);
    }
}
