//! Contact Service
//!
//! Validates a submission and fans it out to the relay as two messages:
//! an admin notice (reply-to the visitor) and an acknowledgment to the
//! visitor. Nothing is stored and nothing is retried.

use std::sync::Arc;

use folio_types::{ContactAccepted, ContactSubmission, ValidContact};

use super::relay::{EmailRelay, OutboundEmail, RelayError};
use crate::config::{ContactConfig, RelayFailurePolicy};
use crate::error::ContactError;

/// Outcome of the two relay calls for one submission
#[derive(Debug)]
pub enum DeliveryReport {
    /// Relay or admin address missing; nothing was sent
    Skipped,
    Attempted {
        admin: Result<(), RelayError>,
        acknowledgment: Result<(), RelayError>,
    },
}

pub struct ContactService {
    relay: Arc<dyn EmailRelay>,
    config: ContactConfig,
}

impl ContactService {
    pub fn new(relay: Arc<dyn EmailRelay>, config: ContactConfig) -> Self {
        Self { relay, config }
    }

    /// Whether submissions will actually reach an inbox
    pub fn relay_configured(&self) -> bool {
        self.relay.is_configured() && self.config.admin_email.is_some()
    }

    /// Validate and relay a submission.
    ///
    /// Acceptance means "validated". Under [`RelayFailurePolicy::Acknowledge`]
    /// delivery failures are logged and the caller still gets
    /// [`ContactAccepted`]; under [`RelayFailurePolicy::Surface`] a failed
    /// admin notice, or a relay that is not configured at all, becomes
    /// [`ContactError::Delivery`].
    pub async fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ContactAccepted, ContactError> {
        let contact = submission.validate()?;
        tracing::info!("Contact submission accepted from {}", contact.email);

        let report = self.deliver(&contact).await;

        if self.config.failure_policy == RelayFailurePolicy::Surface {
            match report {
                DeliveryReport::Attempted { admin: Err(e), .. } => {
                    return Err(ContactError::Delivery(e));
                }
                DeliveryReport::Skipped => {
                    return Err(ContactError::Delivery(RelayError::NotConfigured));
                }
                DeliveryReport::Attempted { .. } => {}
            }
        }

        Ok(ContactAccepted::default())
    }

    /// Send both messages concurrently, logging each outcome
    pub async fn deliver(&self, contact: &ValidContact) -> DeliveryReport {
        let Some(admin_email) = self.config.admin_email.as_deref() else {
            tracing::warn!("CONTACT_ADMIN_EMAIL not set - skipping relay");
            return DeliveryReport::Skipped;
        };
        if !self.relay.is_configured() {
            tracing::warn!("Email relay not configured - skipping relay");
            return DeliveryReport::Skipped;
        }

        let notice = self.admin_notice(contact, admin_email);
        let ack = self.acknowledgment(contact);

        let (admin, acknowledgment) = tokio::join!(self.relay.send(&notice), self.relay.send(&ack));

        match &admin {
            Ok(()) => tracing::info!("Admin notice sent for {}", contact.email),
            Err(e) => tracing::error!("Admin notice failed for {}: {}", contact.email, e),
        }
        match &acknowledgment {
            Ok(()) => tracing::info!("Acknowledgment sent to {}", contact.email),
            Err(e) => tracing::error!("Acknowledgment to {} failed: {}", contact.email, e),
        }

        DeliveryReport::Attempted {
            admin,
            acknowledgment,
        }
    }

    fn admin_notice(&self, contact: &ValidContact, admin_email: &str) -> OutboundEmail {
        OutboundEmail {
            from: self.config.from_email.clone(),
            to: vec![admin_email.to_string()],
            subject: format!("New contact form submission: {}", contact.subject),
            text: format!(
                "Name: {}\nEmail: {}\nSubject: {}\n\n{}\n",
                contact.name, contact.email, contact.subject, contact.message
            ),
            reply_to: Some(contact.email.clone()),
        }
    }

    fn acknowledgment(&self, contact: &ValidContact) -> OutboundEmail {
        OutboundEmail {
            from: self.config.from_email.clone(),
            to: vec![contact.email.clone()],
            subject: format!("Thanks for reaching out, {}", contact.name),
            text: format!(
                "Hi {},\n\nThanks for your message about \"{}\". I have received it and \
                 will get back to you soon.\n\nFor reference, here is what you sent:\n\n{}\n",
                contact.name, contact.subject, contact.message
            ),
            reply_to: None,
        }
    }
}
