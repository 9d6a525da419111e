//! The planning pipeline.
//!
//! Orchestrates one request end to end: validate preferences, build the
//! prompt, resolve a model, generate with candidate fallback, then extract,
//! validate, repair and ground the model output. Steps are sequential
//! awaited calls; if the surrounding request is dropped, no further
//! provider calls are started.

use crate::catalog::{Catalog, Poi};
use crate::logging::notes_preview;
use crate::model::{
    normalize_model_id, FailureKind, GenerativeBackend, ModelResolver, FALLBACK_MODEL_IDS,
};
use crate::plan::extract::extract_first_json;
use crate::plan::filter::retain_known_pois;
use crate::plan::itinerary::{self, Itinerary};
use crate::plan::prompt::build_prompt;
use crate::plan::repair::repair_shape;
use crate::plan::request::{FieldViolation, TripRequest};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Everything the request handler needs to answer a successful call.
#[derive(Debug, Clone, Serialize)]
pub struct PlanSuccess {
    pub request: TripRequest,
    pub itinerary: Itinerary,
    pub pois: Vec<Poi>,
}

/// Pipeline failure taxonomy. Each variant maps to a distinct externally
/// observable status; see the API layer for the mapping.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid request")]
    InvalidInput { violations: Vec<FieldViolation> },

    #[error("Missing generation credential")]
    MissingCredential,

    #[error("Generation quota exceeded")]
    QuotaExceeded { message: String },

    #[error("Generation provider is not reachable from this network location")]
    GeoBlocked { message: String },

    #[error("Generation failed across all candidate models")]
    GenerationFailed {
        message: String,
        models_tried: Vec<String>,
    },

    #[error("Model did not return JSON")]
    ExtractionFailed { raw: String },

    #[error("Model returned text that is not valid JSON")]
    ParseFailed { message: String, raw: String },

    #[error("Model output does not match the itinerary contract")]
    SchemaMismatch {
        report: Vec<FieldViolation>,
        raw: Value,
    },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// One planning pipeline instance, shared across requests.
pub struct Planner {
    catalog: Arc<Catalog>,
    backend: Arc<dyn GenerativeBackend>,
    resolver: ModelResolver,
    preferred_model: Option<String>,
}

impl Planner {
    pub fn new(
        catalog: Arc<Catalog>,
        backend: Arc<dyn GenerativeBackend>,
        preferred_model: Option<String>,
    ) -> Self {
        let preferred_model = preferred_model.filter(|p| !p.trim().is_empty());
        Self {
            catalog,
            backend,
            resolver: ModelResolver::new(preferred_model.clone()),
            preferred_model,
        }
    }

    /// Run the full pipeline for one untyped payload.
    pub async fn plan(&self, payload: &Value) -> Result<PlanSuccess, PlanError> {
        let request = TripRequest::from_value(payload)
            .map_err(|violations| PlanError::InvalidInput { violations })?;

        tracing::info!(
            days = request.days,
            region = ?request.base_region,
            notes = %notes_preview(&request.notes),
            "planning trip"
        );

        let candidates: Vec<&Poi> = match request.base_region.region() {
            Some(region) => self.catalog.in_region(region),
            None => self.catalog.all().iter().collect(),
        };
        let prompt = build_prompt(&request, &candidates);

        let resolved = self.resolver.resolve(self.backend.as_ref()).await;
        let text = self.generate_with_fallback(&prompt, &resolved).await?;

        let json_text = extract_first_json(&text).ok_or_else(|| {
            tracing::warn!(raw_len = text.len(), "model text contains no JSON");
            PlanError::ExtractionFailed { raw: text.clone() }
        })?;

        let parsed: Value = serde_json::from_str(json_text).map_err(|e| PlanError::ParseFailed {
            message: e.to_string(),
            raw: text.clone(),
        })?;

        let mut plan = match itinerary::validate(&parsed) {
            Ok(plan) => plan,
            Err(first_report) => {
                let (repaired, actions) = repair_shape(&parsed);
                tracing::debug!(
                    violations = first_report.len(),
                    repair_actions = ?actions,
                    "strict validation failed; repaired model output"
                );
                itinerary::validate(&repaired).map_err(|report| PlanError::SchemaMismatch {
                    report,
                    raw: parsed.clone(),
                })?
            }
        };

        let pois = retain_known_pois(&mut plan, &self.catalog);
        tracing::info!(
            days = plan.days.len(),
            pois = pois.len(),
            "itinerary ready"
        );

        Ok(PlanSuccess {
            request,
            itinerary: plan,
            pois,
        })
    }

    /// Try generation against each candidate identifier in order.
    ///
    /// Quota and geo failures abort immediately; a missing model advances to
    /// the next candidate (invalidating the resolver cache when it was the
    /// resolver's own pick); any other failure stops the loop.
    async fn generate_with_fallback(
        &self,
        prompt: &str,
        resolved: &str,
    ) -> Result<String, PlanError> {
        let mut candidates: Vec<String> = Vec::new();
        if let Some(preferred) = &self.preferred_model {
            candidates.push(normalize_model_id(preferred));
        }
        candidates.push(resolved.to_string());
        candidates.extend(FALLBACK_MODEL_IDS.iter().map(|id| id.to_string()));

        let mut tried: Vec<String> = Vec::new();
        let mut last_error = String::new();

        for id in candidates {
            if tried.contains(&id) {
                continue;
            }
            tried.push(id.clone());

            tracing::debug!(model = %id, attempt = tried.len(), "trying candidate model");
            match self.backend.generate(&id, prompt).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    let message = e.to_string();
                    last_error = message.clone();
                    match e.kind() {
                        FailureKind::QuotaExceeded => {
                            tracing::warn!(model = %id, models_tried = ?tried, "quota exceeded");
                            return Err(PlanError::QuotaExceeded { message });
                        }
                        FailureKind::GeoBlocked => {
                            tracing::warn!(model = %id, models_tried = ?tried, "geo blocked");
                            return Err(PlanError::GeoBlocked { message });
                        }
                        FailureKind::ModelNotFound => {
                            if id == resolved {
                                self.resolver.invalidate();
                            }
                            tracing::info!(model = %id, "model unavailable, trying next candidate");
                        }
                        FailureKind::Other => {
                            tracing::warn!(model = %id, error = %message, "generation aborted");
                            break;
                        }
                    }
                }
            }
        }

        if last_error.is_empty() {
            last_error = "Unknown error".to_string();
        }
        tracing::warn!(models_tried = ?tried, error = %last_error, "all candidates exhausted");
        Err(PlanError::GenerationFailed {
            message: last_error,
            models_tried: tried,
        })
    }
}
