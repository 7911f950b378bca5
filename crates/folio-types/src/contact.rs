//! Contact form API
//!
//! `POST /api/contact` accepts a [`ContactSubmission`] and answers with
//! [`ContactAccepted`] or an [`ApiError`](crate::ApiError).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned to the visitor once a submission passes validation
pub const CONTACT_SUCCESS_MESSAGE: &str = "Message sent successfully! I will get back to you soon.";

/// Basic shape check: something@something.something, no whitespace
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Returns true when `email` matches the accepted address shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

// ============================================================================
// REQUEST / RESPONSE
// ============================================================================

/// Contact form payload as it arrives over the wire.
///
/// Fields are optional so that an absent or `null` field is reported as a
/// validation error (400) rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Successful submission response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAccepted {
    pub message: String,
}

impl Default for ContactAccepted {
    fn default() -> Self {
        Self {
            message: CONTACT_SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// The four form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a submission was rejected at the boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields { fields: Vec<ContactField> },

    #[error("Invalid email format")]
    InvalidEmail,
}

/// A submission that passed validation. Values are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            subject: Some(subject.into()),
            message: Some(message.into()),
        }
    }

    /// Trimmed value of a field; `None` when absent or blank
    pub fn value(&self, field: ContactField) -> Option<&str> {
        let raw = match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        };
        raw.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    /// Fields that are absent or blank, in display order
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.value(*field).is_none())
            .collect()
    }

    /// Inline error for a single field, used by the form to annotate inputs
    pub fn field_error(&self, field: ContactField) -> Option<&'static str> {
        match self.value(field) {
            None => Some("This field is required"),
            Some(email) if field == ContactField::Email && !is_valid_email(email) => {
                Some("Please enter a valid email address")
            }
            Some(_) => None,
        }
    }

    /// Boundary validation. Missing fields are reported before email shape.
    pub fn validate(&self) -> Result<ValidContact, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields { fields: missing });
        }

        let email = self.value(ContactField::Email).unwrap_or_default();
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(ValidContact {
            name: self.value(ContactField::Name).unwrap_or_default().to_string(),
            email: email.to_string(),
            subject: self
                .value(ContactField::Subject)
                .unwrap_or_default()
                .to_string(),
            message: self
                .value(ContactField::Message)
                .unwrap_or_default()
                .to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> ContactSubmission {
        ContactSubmission::new(
            "Ada",
            "ada@example.com",
            "Hello",
            "Interested in collaborating",
        )
    }

    #[test]
    fn test_valid_submission() {
        let valid = ada().validate().unwrap();
        assert_eq!(valid.name, "Ada");
        assert_eq!(valid.email, "ada@example.com");
    }

    #[test]
    fn test_each_empty_field_is_rejected() {
        for field in ContactField::ALL {
            let mut sub = ada();
            match field {
                ContactField::Name => sub.name = Some(String::new()),
                ContactField::Email => sub.email = Some(String::new()),
                ContactField::Subject => sub.subject = Some("   ".to_string()),
                ContactField::Message => sub.message = None,
            }
            assert_eq!(
                sub.validate(),
                Err(ValidationError::MissingFields {
                    fields: vec![field]
                }),
                "field {field} should be required"
            );
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("ada@example.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
    }

    #[test]
    fn test_invalid_email_rejected_after_presence_check() {
        let mut sub = ada();
        sub.email = Some("not-an-email".to_string());
        assert_eq!(sub.validate(), Err(ValidationError::InvalidEmail));

        sub.subject = None;
        assert!(matches!(
            sub.validate(),
            Err(ValidationError::MissingFields { .. })
        ));
    }

    #[test]
    fn test_field_errors() {
        let mut sub = ada();
        sub.email = Some("nope".to_string());
        sub.name = None;
        assert_eq!(
            sub.field_error(ContactField::Name),
            Some("This field is required")
        );
        assert_eq!(
            sub.field_error(ContactField::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(sub.field_error(ContactField::Subject), None);
    }

    #[test]
    fn test_error_messages_match_wire_contract() {
        assert_eq!(
            ValidationError::MissingFields { fields: vec![] }.to_string(),
            "All fields are required"
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Invalid email format"
        );
    }

    #[test]
    fn test_null_and_absent_fields_deserialize() {
        let sub: ContactSubmission =
            serde_json::from_str(r#"{"name": null, "email": "a@b.co"}"#).unwrap();
        assert_eq!(sub.name, None);
        assert_eq!(sub.subject, None);
        assert_eq!(
            sub.missing_fields(),
            vec![
                ContactField::Name,
                ContactField::Subject,
                ContactField::Message
            ]
        );
    }
}
