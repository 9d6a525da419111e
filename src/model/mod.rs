//! Generative-model access.
//!
//! The [`GenerativeBackend`] trait is the seam between the planning pipeline
//! and the hosted provider: listing available models and generating text.
//! [`client::GeminiClient`] is the production implementation; tests provide
//! their own. [`resolver::ModelResolver`] decides which model identifier to
//! address, with a time-boxed cache over the listing endpoint.

pub mod client;
pub mod error;
pub mod resolver;

pub use client::GeminiClient;
pub use error::{classify_message, FailureKind, GenerateError};
pub use resolver::{Clock, ModelResolver, SystemClock};

use async_trait::async_trait;

/// Generation method a usable model must support.
pub const GENERATE_METHOD: &str = "generateContent";

/// Hardcoded safe default when resolution has nothing better.
pub const DEFAULT_MODEL_ID: &str = "gemini-2.5-flash";

/// Static fallback candidates, tried in order after the resolver's pick.
pub const FALLBACK_MODEL_IDS: [&str; 5] = [
    "gemini-2.5-flash",
    "gemini-3-flash-preview",
    "gemini-3.0-flash",
    "gemini-2.0-flash",
    "gemini-2.0-flash-lite",
];

/// A model descriptor from the listing endpoint.
#[derive(Debug, Clone)]
pub struct ModelInfo {
    /// Provider-side name, possibly namespaced (e.g. `models/gemini-2.5-flash`).
    pub name: String,
    /// Generation operations the model supports.
    pub supported_methods: Vec<String>,
}

/// Strip the provider namespace prefix; generation calls want the bare id.
pub fn normalize_model_id(id: &str) -> String {
    let trimmed = id.trim();
    trimmed
        .strip_prefix("models/")
        .unwrap_or(trimmed)
        .to_string()
}

/// Provider seam: model listing plus text generation.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn list_models(&self) -> Result<Vec<ModelInfo>, GenerateError>;

    /// Generate text for `prompt` against a specific model identifier,
    /// returning the raw response text.
    async fn generate(&self, model_id: &str, prompt: &str) -> Result<String, GenerateError>;
}
