//! Environment-driven configuration
//!
//! | Variable | Default |
//! |----------|---------|
//! | `RESEND_API_KEY` | unset (relay disabled) |
//! | `RESEND_API_BASE` | `https://api.resend.com` |
//! | `RELAY_TIMEOUT_SECS` | `10` |
//! | `CONTACT_ADMIN_EMAIL` | unset (relay disabled) |
//! | `CONTACT_FROM_EMAIL` | `Portfolio <onboarding@resend.dev>` |
//! | `CONTACT_RELAY_FAILURE_POLICY` | `acknowledge` |

use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

const DEFAULT_API_BASE: &str = "https://api.resend.com";
const DEFAULT_FROM: &str = "Portfolio <onboarding@resend.dev>";
const DEFAULT_RELAY_TIMEOUT_SECS: u64 = 10;

/// What the caller is told when the admin notice cannot be delivered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelayFailurePolicy {
    /// Validated submissions always get 200; delivery failures are logged only
    #[default]
    Acknowledge,
    /// A failed admin notice turns into a 502 for the caller
    Surface,
}

impl FromStr for RelayFailurePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "acknowledge" | "ack" => Ok(Self::Acknowledge),
            "surface" => Ok(Self::Surface),
            other => Err(anyhow!(
                "unknown relay failure policy '{other}' (expected 'acknowledge' or 'surface')"
            )),
        }
    }
}

/// Transport settings for the email relay
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_key: Option<String>,
    pub api_base: String,
    pub timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_RELAY_TIMEOUT_SECS),
        }
    }
}

impl RelayConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a map)
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let timeout = match non_empty(get("RELAY_TIMEOUT_SECS")) {
            Some(raw) => Duration::from_secs(
                raw.parse()
                    .with_context(|| format!("RELAY_TIMEOUT_SECS is not a number: {raw}"))?,
            ),
            None => Duration::from_secs(DEFAULT_RELAY_TIMEOUT_SECS),
        };

        Ok(Self {
            api_key: non_empty(get("RESEND_API_KEY")),
            api_base: non_empty(get("RESEND_API_BASE"))
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            timeout,
        })
    }
}

/// Addressing and failure policy for contact submissions
#[derive(Debug, Clone)]
pub struct ContactConfig {
    /// Recipient of the admin notice; no admin address means no relay
    pub admin_email: Option<String>,
    pub from_email: String,
    pub failure_policy: RelayFailurePolicy,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            admin_email: None,
            from_email: DEFAULT_FROM.to_string(),
            failure_policy: RelayFailurePolicy::default(),
        }
    }
}

impl ContactConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let failure_policy = match non_empty(get("CONTACT_RELAY_FAILURE_POLICY")) {
            Some(raw) => raw.parse()?,
            None => RelayFailurePolicy::default(),
        };

        Ok(Self {
            admin_email: non_empty(get("CONTACT_ADMIN_EMAIL")),
            from_email: non_empty(get("CONTACT_FROM_EMAIL"))
                .unwrap_or_else(|| DEFAULT_FROM.to_string()),
            failure_policy,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
