//! Model identifier resolution with a time-boxed cache.
//!
//! An operator-preferred identifier always wins without touching the
//! network. Otherwise the listing endpoint is consulted at most once per TTL
//! window and the pick is cached process-wide. The cache is a plain value
//! swap behind a mutex: concurrent requests may redundantly re-resolve, but
//! never observe a torn value.

use super::{normalize_model_id, GenerativeBackend, ModelInfo, DEFAULT_MODEL_ID, GENERATE_METHOD};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// How long a resolved identifier stays valid.
pub const MODEL_CACHE_TTL: Duration = Duration::from_secs(10 * 60);

/// Clock seam so the TTL can be tested without sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock implementation used in production.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct CachedModel {
    id: String,
    resolved_at: Instant,
}

/// Decides which model identifier generation calls should address.
pub struct ModelResolver {
    preferred: Option<String>,
    cache: Mutex<Option<CachedModel>>,
    clock: Box<dyn Clock>,
}

impl ModelResolver {
    pub fn new(preferred: Option<String>) -> Self {
        Self::with_clock(preferred, Box::new(SystemClock))
    }

    pub fn with_clock(preferred: Option<String>, clock: Box<dyn Clock>) -> Self {
        Self {
            preferred: preferred.filter(|p| !p.trim().is_empty()),
            cache: Mutex::new(None),
            clock,
        }
    }

    /// Resolve the identifier to call.
    ///
    /// Never fails: a listing error logs and falls back to
    /// [`DEFAULT_MODEL_ID`] without caching, so the next call retries the
    /// listing.
    pub async fn resolve(&self, backend: &dyn GenerativeBackend) -> String {
        if let Some(preferred) = &self.preferred {
            return normalize_model_id(preferred);
        }

        let now = self.clock.now();
        if let Some(cached) = self.cache.lock().unwrap().as_ref() {
            if now.duration_since(cached.resolved_at) < MODEL_CACHE_TTL {
                return cached.id.clone();
            }
        }

        let models = match backend.list_models().await {
            Ok(models) => models,
            Err(e) => {
                tracing::warn!(error = %e, fallback = DEFAULT_MODEL_ID, "model listing failed");
                return DEFAULT_MODEL_ID.to_string();
            }
        };

        let id = pick_model(&models);
        tracing::debug!(model = %id, listed = models.len(), "resolved model identifier");
        *self.cache.lock().unwrap() = Some(CachedModel {
            id: id.clone(),
            resolved_at: now,
        });
        id
    }

    /// Drop the cached identifier, forcing re-resolution on the next call.
    /// Used after the provider reports the cached model as gone.
    pub fn invalidate(&self) {
        *self.cache.lock().unwrap() = None;
    }
}

/// Priority pick over models that support generation: current flash, any
/// non-lite flash, anything in the product family, otherwise the first.
fn pick_model(models: &[ModelInfo]) -> String {
    let candidates: Vec<String> = models
        .iter()
        .filter(|m| m.supported_methods.iter().any(|s| s == GENERATE_METHOD))
        .map(|m| normalize_model_id(&m.name))
        .filter(|id| !id.is_empty())
        .collect();

    candidates
        .iter()
        .find(|m| m.contains("2.5") && m.contains("flash"))
        .or_else(|| candidates.iter().find(|m| m.contains("flash") && !m.contains("lite")))
        .or_else(|| candidates.iter().find(|m| m.contains("gemini")))
        .or_else(|| candidates.first())
        .cloned()
        .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string())
}
