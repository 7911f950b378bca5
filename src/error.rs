//! Error types for the contact pipeline
//!
//! Each variant maps to exactly one HTTP status so handlers can return
//! `Result<_, ContactError>` and let `IntoResponse` do the rest.

use folio_types::ValidationError;
use thiserror::Error;

use crate::services::RelayError;

/// Contact submission failure, as seen by the caller
#[derive(Error, Debug)]
pub enum ContactError {
    /// Missing field or malformed email (400)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Body could not be decoded (500)
    #[error("Failed to process contact request")]
    Malformed(String),

    /// Admin notice failed and the policy says to surface it (502)
    #[error("Message could not be delivered, please try again later")]
    Delivery(#[source] RelayError),
}

impl ContactError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ContactError::Validation(_) => 400,
            ContactError::Malformed(_) => 500,
            ContactError::Delivery(_) => 502,
        }
    }
}

#[cfg(feature = "server")]
mod response {
    use axum::{
        http::StatusCode,
        response::{IntoResponse, Response},
        Json,
    };
    use folio_types::ApiError;

    use super::ContactError;

    impl IntoResponse for ContactError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            match &self {
                ContactError::Validation(e) => tracing::debug!("Contact rejected: {:?}", e),
                ContactError::Malformed(detail) => {
                    tracing::error!("Malformed contact request: {}", detail)
                }
                ContactError::Delivery(e) => tracing::error!("Contact delivery failed: {}", e),
            }

            (status, Json(ApiError::new(self.to_string()))).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ContactError::from(ValidationError::InvalidEmail).status_code(),
            400
        );
        assert_eq!(ContactError::Malformed("eof".into()).status_code(), 500);
        assert_eq!(
            ContactError::Delivery(RelayError::NotConfigured).status_code(),
            502
        );
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = ContactError::from(ValidationError::MissingFields { fields: vec![] });
        assert_eq!(err.to_string(), "All fields are required");
    }
}
