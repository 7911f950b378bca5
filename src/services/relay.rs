//! Email Relay
//!
//! Outbound transactional email over HTTP. The relay speaks the Resend
//! API shape (`POST {base}/emails`, bearer auth), which several providers
//! also accept.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::RelayConfig;

/// Relay delivery failure
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("relay transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("relay rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("relay not configured")]
    NotConfigured,
}

/// One message handed to the relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

/// Port for sending email. Implementations must be cheap to share.
#[async_trait]
pub trait EmailRelay: Send + Sync {
    /// Whether sends can succeed at all; unconfigured relays are skipped
    fn is_configured(&self) -> bool {
        true
    }

    /// Send one message
    async fn send(&self, email: &OutboundEmail) -> Result<(), RelayError>;
}

/// Relay used when no credentials are present
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledRelay;

#[async_trait]
impl EmailRelay for DisabledRelay {
    fn is_configured(&self) -> bool {
        false
    }

    async fn send(&self, _email: &OutboundEmail) -> Result<(), RelayError> {
        Err(RelayError::NotConfigured)
    }
}

/// Resend-compatible HTTP relay
#[derive(Clone)]
pub struct ResendRelay {
    api_key: String,
    api_base: String,
    client: reqwest::Client,
}

impl ResendRelay {
    /// Create a relay client; the configured timeout applies to every send
    pub fn new(api_key: String, config: &RelayConfig) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            api_key,
            api_base: config.api_base.clone(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.api_base)
    }
}

#[async_trait]
impl EmailRelay for ResendRelay {
    async fn send(&self, email: &OutboundEmail) -> Result<(), RelayError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Rejected { status, body });
        }

        #[derive(Deserialize)]
        struct SendResponse {
            id: Option<String>,
        }

        // The id is only used for log correlation
        let sent: Option<SendResponse> = response.json().await.ok();
        tracing::debug!(
            "Relay accepted message to {:?} (id={})",
            email.to,
            sent.and_then(|s| s.id).unwrap_or_else(|| "-".to_string())
        );
        Ok(())
    }
}

/// Pick the relay implementation for a configuration
pub fn create_relay(config: &RelayConfig) -> Result<Arc<dyn EmailRelay>, RelayError> {
    match &config.api_key {
        Some(key) => Ok(Arc::new(ResendRelay::new(key.clone(), config)?)),
        None => {
            tracing::warn!("RESEND_API_KEY not set - contact submissions will not be relayed");
            Ok(Arc::new(DisabledRelay))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_relay_without_key_is_disabled() {
        let relay = create_relay(&RelayConfig::default()).unwrap();
        assert!(!relay.is_configured());
    }

    #[test]
    fn test_create_relay_with_key() {
        let config = RelayConfig {
            api_key: Some("re_test".to_string()),
            ..RelayConfig::default()
        };
        let relay = create_relay(&config).unwrap();
        assert!(relay.is_configured());
    }

    #[test]
    fn test_endpoint() {
        let config = RelayConfig {
            api_base: "http://localhost:9999".to_string(),
            ..RelayConfig::default()
        };
        let relay = ResendRelay::new("k".to_string(), &config).unwrap();
        assert_eq!(relay.endpoint(), "http://localhost:9999/emails");
    }

    #[test]
    fn test_reply_to_omitted_when_none() {
        let email = OutboundEmail {
            from: "a@b.co".into(),
            to: vec!["c@d.co".into()],
            subject: "s".into(),
            text: "t".into(),
            reply_to: None,
        };
        let json = serde_json::to_value(&email).unwrap();
        assert!(json.get("reply_to").is_none());
        assert_eq!(json["to"][0], "c@d.co");
    }

    #[tokio::test]
    async fn test_disabled_relay_refuses() {
        let email = OutboundEmail {
            from: "a@b.co".into(),
            to: vec![],
            subject: String::new(),
            text: String::new(),
            reply_to: None,
        };
        assert!(matches!(
            DisabledRelay.send(&email).await,
            Err(RelayError::NotConfigured)
        ));
    }
}
