//! REST API route for the contact form

use std::sync::Arc;

use axum::{body::Bytes, extract::State, response::Json, routing::post, Router};
use folio_types::{ContactAccepted, ContactSubmission};

use crate::error::ContactError;
use crate::services::ContactService;

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/contact
///
/// The body is decoded as JSON whatever its `Content-Type`. A body that is
/// not a JSON object of strings is an unexpected failure (500), not a
/// validation failure; absent fields are validation failures.
async fn submit_contact(
    State(service): State<Arc<ContactService>>,
    body: Bytes,
) -> Result<Json<ContactAccepted>, ContactError> {
    let submission: ContactSubmission =
        serde_json::from_slice(&body).map_err(|e| ContactError::Malformed(e.to_string()))?;
    let accepted = service.submit(&submission).await?;
    Ok(Json(accepted))
}

// ============================================================================
// Router
// ============================================================================

pub fn create_contact_router(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/api/contact", post(submit_contact))
        .with_state(service)
}
