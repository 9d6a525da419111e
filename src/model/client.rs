//! Google Generative Language API client.
//!
//! Thin reqwest wrapper over the two endpoints the pipeline needs:
//! - Model listing via `GET /{version}/models?key={key}`
//! - Generation via `POST /{version}/models/{model}:generateContent?key={key}`
//!
//! The base URL is injectable so tests can point at a local mock server.
//! The API key travels only in the query string; it never appears in logs
//! or error messages.

use super::{GenerateError, GenerativeBackend, ModelInfo};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

const LIST_TIMEOUT: Duration = Duration::from_secs(5);
const GENERATE_TIMEOUT: Duration = Duration::from_secs(120);

pub struct GeminiClient {
    base_url: String,
    api_version: String,
    api_key: String,
    /// Shared HTTP client for connection pooling.
    client: Arc<Client>,
}

impl GeminiClient {
    pub fn new(
        base_url: String,
        api_version: String,
        api_key: String,
        client: Arc<Client>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_version,
            api_key,
            client,
        }
    }
}

/// Generation request wire format.
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<WireContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<WirePart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WirePart {
    text: String,
}

/// Generation response wire format.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<WireCandidate>,
}

#[derive(Debug, Deserialize)]
struct WireCandidate {
    content: WireContent,
}

/// Models list response wire format.
#[derive(Debug, Deserialize)]
struct ModelsResponse {
    #[serde(default)]
    models: Vec<WireModel>,
}

#[derive(Debug, Deserialize)]
struct WireModel {
    name: String,
    #[serde(rename = "supportedGenerationMethods")]
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

fn map_transport_error(e: reqwest::Error, timeout: Duration) -> GenerateError {
    if e.is_timeout() {
        GenerateError::Timeout(timeout.as_millis() as u64)
    } else {
        GenerateError::Network(e.without_url().to_string())
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn list_models(&self) -> Result<Vec<ModelInfo>, GenerateError> {
        let url = format!(
            "{}/{}/models?key={}",
            self.base_url, self.api_version, self.api_key
        );

        tracing::debug!(api_version = %self.api_version, "listing models");

        let response = self
            .client
            .get(&url)
            .timeout(LIST_TIMEOUT)
            .send()
            .await
            .map_err(|e| map_transport_error(e, LIST_TIMEOUT))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GenerateError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body: ModelsResponse = response.json().await.map_err(|e| {
            GenerateError::InvalidResponse(format!("Failed to parse models response: {}", e))
        })?;

        Ok(body
            .models
            .into_iter()
            .map(|m| ModelInfo {
                name: m.name,
                supported_methods: m.supported_generation_methods,
            })
            .collect())
    }

    async fn generate(&self, model_id: &str, prompt: &str) -> Result<String, GenerateError> {
        let url = format!(
            "{}/{}/models/{}:generateContent?key={}",
            self.base_url, self.api_version, model_id, self.api_key
        );

        let request = GenerateRequest {
            contents: vec![WireContent {
                role: Some("user".to_string()),
                parts: vec![WirePart {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(model = %model_id, prompt_len = prompt.len(), "initiating generation");

        let start = std::time::Instant::now();
        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&request)
            .timeout(GENERATE_TIMEOUT)
            .send()
            .await
            .map_err(|e| map_transport_error(e, GENERATE_TIMEOUT))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::info!(
                model = %model_id,
                status = %status,
                latency_ms = start.elapsed().as_millis() as u64,
                "generation failed"
            );
            return Err(GenerateError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response.json().await.map_err(|e| {
            GenerateError::InvalidResponse(format!("Failed to parse generation response: {}", e))
        })?;

        let candidate = body
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| GenerateError::InvalidResponse("no candidates returned".to_string()))?;

        let text = candidate
            .content
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        tracing::info!(
            model = %model_id,
            latency_ms = start.elapsed().as_millis() as u64,
            response_len = text.len(),
            "generation succeeded"
        );

        Ok(text)
    }
}
