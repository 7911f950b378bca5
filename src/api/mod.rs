//! REST API module
//!
//! Routers are built here and merged by the `folio-web` binary.
//!
//! - `POST /api/contact`  - contact form submission
//! - `GET  /api/projects` - project catalog
//! - `GET  /health`       - liveness + relay status

pub mod contact_routes;
pub mod content_routes;

pub use contact_routes::create_contact_router;
pub use content_routes::create_content_router;
