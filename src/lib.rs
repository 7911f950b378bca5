//! Folio - portfolio site backend
//!
//! Everything the site needs from a server beyond static files:
//!
//! - **Contact relay**: validates contact form submissions at the boundary
//!   and forwards them to a transactional email API
//! - **Project catalog**: the static list of showcased projects
//!
//! ## Call chain
//!
//! ```text
//! POST /api/contact -> api::contact_routes -> ContactService::submit
//!                                              ├─ ContactSubmission::validate
//!                                              └─ EmailRelay::send (x2)
//! ```
//!
//! The REST routers live behind the `server` feature so the service layer
//! can be reused without pulling in axum.

// Core error handling
pub mod error;

// Environment-driven configuration
pub mod config;

// Contact delivery and the email relay port
pub mod services;

// REST routers (when enabled)
#[cfg(feature = "server")]
pub mod api;

pub use config::{ContactConfig, RelayConfig, RelayFailurePolicy};
pub use error::ContactError;
pub use services::{
    create_relay, ContactService, DeliveryReport, EmailRelay, OutboundEmail, RelayError,
    ResendRelay,
};
