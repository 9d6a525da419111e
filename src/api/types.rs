//! API error envelope and status mapping.

use crate::plan::PlanError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Error response envelope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: ApiErrorBody,
}

/// Error details.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorBody {
    pub message: String,
    pub r#type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Structured diagnostics: field violations, validation report,
    /// models tried.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// The offending model output, where the failure class calls for it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
}

impl ApiError {
    fn new(message: &str, r#type: &str, code: &str) -> Self {
        Self {
            error: ApiErrorBody {
                message: message.to_string(),
                r#type: r#type.to_string(),
                code: Some(code.to_string()),
                details: None,
                raw: None,
            },
        }
    }

    fn with_details(mut self, details: Value) -> Self {
        self.error.details = Some(details);
        self
    }

    fn with_raw(mut self, raw: Value) -> Self {
        self.error.raw = Some(raw);
        self
    }

    /// Get the HTTP status code for this error.
    fn status_code(&self) -> StatusCode {
        match self.error.code.as_deref() {
            Some("invalid_input") => StatusCode::BAD_REQUEST,
            Some("missing_credential") => StatusCode::INTERNAL_SERVER_ERROR,
            Some("quota_exceeded") => StatusCode::TOO_MANY_REQUESTS,
            Some("geo_blocked") => StatusCode::SERVICE_UNAVAILABLE,
            Some("generation_failed") => StatusCode::BAD_GATEWAY,
            Some("extraction_failed") => StatusCode::BAD_GATEWAY,
            Some("parse_failed") => StatusCode::BAD_GATEWAY,
            Some("schema_mismatch") => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PlanError> for ApiError {
    fn from(err: PlanError) -> Self {
        match err {
            PlanError::InvalidInput { violations } => {
                Self::new("Invalid request", "invalid_request_error", "invalid_input")
                    .with_details(json!(violations))
            }
            PlanError::MissingCredential => Self::new(
                "Missing GEMINI_API_KEY environment variable",
                "server_error",
                "missing_credential",
            ),
            PlanError::QuotaExceeded { message } => {
                Self::new("Generation quota exceeded", "server_error", "quota_exceeded")
                    .with_details(Value::String(message))
            }
            PlanError::GeoBlocked { message } => Self::new(
                "Generation API is not available from the current location/network",
                "server_error",
                "geo_blocked",
            )
            .with_details(Value::String(message)),
            PlanError::GenerationFailed {
                message,
                models_tried,
            } => Self::new("Generation request failed", "server_error", "generation_failed")
                .with_details(json!({
                    "error": message,
                    "modelsTried": models_tried,
                })),
            PlanError::ExtractionFailed { raw } => {
                Self::new("Model did not return JSON", "server_error", "extraction_failed")
                    .with_raw(Value::String(raw))
            }
            PlanError::ParseFailed { message, raw } => {
                Self::new("Failed to parse model JSON", "server_error", "parse_failed")
                    .with_details(Value::String(message))
                    .with_raw(Value::String(raw))
            }
            PlanError::SchemaMismatch { report, raw } => Self::new(
                "Model JSON does not match the itinerary contract",
                "server_error",
                "schema_mismatch",
            )
            .with_details(json!(report))
            .with_raw(raw),
            PlanError::Unexpected(message) => {
                Self::new("Unexpected error", "server_error", "unexpected")
                    .with_details(Value::String(message))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
