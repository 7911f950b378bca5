//! Services module for contact delivery
//!
//! - `relay`: the `EmailRelay` port and its Resend-compatible HTTP adapter
//! - `contact_service`: validation + fan-out of a submission to the relay

pub mod contact_service;
pub mod relay;

pub use contact_service::{ContactService, DeliveryReport};
pub use relay::{create_relay, DisabledRelay, EmailRelay, OutboundEmail, RelayError, ResendRelay};
