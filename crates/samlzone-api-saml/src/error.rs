//! SAML service-provider error types

use crate::config::ConfigError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Result type for SAML operations
pub type SamlResult<T> = Result<T, SamlError>;

/// SAML service-provider errors
#[derive(Debug, Error)]
pub enum SamlError {
    /// Invalid static configuration (startup only)
    #[error("Invalid SAML configuration: {0}")]
    Configuration(#[from] ConfigError),

    /// No registration is known under the requested id
    #[error("Relying party registration not found: {0}")]
    RegistrationNotFound(String),

    /// The external metadata serializer failed
    #[error("Metadata generation failed: {0}")]
    MetadataGenerationFailed(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl SamlError {
    /// HTTP status and machine-readable code for this error.
    #[must_use]
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            SamlError::RegistrationNotFound(_) => {
                (StatusCode::NOT_FOUND, "registration_not_found")
            }
            SamlError::MetadataGenerationFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "metadata_generation_failed",
            ),
            SamlError::Configuration(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error")
            }
        }
    }
}

impl IntoResponse for SamlError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();

        let message = match &self {
            SamlError::MetadataGenerationFailed(detail) => {
                tracing::error!(detail = %detail, "SAML metadata generation failed");
                "Metadata generation failed".to_string()
            }
            SamlError::Configuration(e) => {
                tracing::error!(error = %e, "SAML configuration error");
                "An internal error occurred".to_string()
            }
            // Only echoes the client-supplied id
            SamlError::RegistrationNotFound(_) => self.to_string(),
        };

        let body = ErrorResponse {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
