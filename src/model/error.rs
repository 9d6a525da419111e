//! Error types and failure classification for generation calls.

use thiserror::Error;

/// Errors that can occur talking to the generation provider.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Network connectivity error (DNS, connection refused, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded deadline.
    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    /// Provider returned an error response (4xx, 5xx).
    #[error("Provider error {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Provider response doesn't match the expected format.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Failure classes that drive the candidate-fallback decision.
///
/// Quota and geo failures abort the whole operation; a missing model
/// advances to the next candidate; anything else stops the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    QuotaExceeded,
    GeoBlocked,
    ModelNotFound,
    Other,
}

/// Classify a provider failure message (case-insensitive marker match).
pub fn classify_message(message: &str) -> FailureKind {
    let m = message.to_lowercase();
    if m.contains("quota") || m.contains("[429") || m.contains("resource_exhausted") {
        FailureKind::QuotaExceeded
    } else if m.contains("user location is not supported") {
        FailureKind::GeoBlocked
    } else if m.contains("not found") || m.contains("not supported for generatecontent") {
        FailureKind::ModelNotFound
    } else {
        FailureKind::Other
    }
}

impl GenerateError {
    /// Classification used by the fallback loop. HTTP status is considered
    /// first, then the message markers.
    pub fn kind(&self) -> FailureKind {
        if let GenerateError::Upstream { status, .. } = self {
            match status {
                429 => return FailureKind::QuotaExceeded,
                404 => return FailureKind::ModelNotFound,
                _ => {}
            }
        }
        classify_message(&self.to_string())
    }
}
