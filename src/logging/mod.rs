//! Structured logging helpers.
//!
//! Filter-directive construction for the tracing subscriber, request ID
//! generation, and the privacy helpers that keep free-text request content
//! and credentials out of the logs.

use uuid::Uuid;

/// Maximum characters of request notes included in any log line.
const NOTES_PREVIEW_MAX: usize = 200;

/// Build filter directives string from LoggingConfig
///
/// Constructs a tracing filter string that includes the base log level and
/// any component-specific levels, e.g. `"info,itinera::plan=debug"`.
pub fn build_filter_directives(config: &crate::config::LoggingConfig) -> String {
    let mut filter_str = config.level.clone();

    if let Some(component_levels) = &config.component_levels {
        for (component, level) in component_levels {
            filter_str.push_str(&format!(",itinera::{}={}", component, level));
        }
    }

    filter_str
}

/// Generate a correlation ID for tracking a request through the pipeline,
/// including model fallback attempts.
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Length-capped preview of free-text notes, safe for logging.
pub fn notes_preview(notes: &str) -> String {
    if notes.chars().count() <= NOTES_PREVIEW_MAX {
        notes.to_string()
    } else {
        let cut: String = notes.chars().take(NOTES_PREVIEW_MAX).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogFormat, LoggingConfig};
    use std::collections::HashMap;

    #[test]
    fn test_filter_directives_base_level_only() {
        let config = LoggingConfig::default();
        assert_eq!(build_filter_directives(&config), "info");
    }

    #[test]
    fn test_filter_directives_with_component_levels() {
        let mut component_levels = HashMap::new();
        component_levels.insert("plan".to_string(), "debug".to_string());

        let config = LoggingConfig {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
            component_levels: Some(component_levels),
        };

        assert_eq!(build_filter_directives(&config), "warn,itinera::plan=debug");
    }

    #[test]
    fn test_generate_request_id_unique_and_parseable() {
        let id1 = generate_request_id();
        let id2 = generate_request_id();
        assert_ne!(id1, id2);
        assert!(Uuid::parse_str(&id1).is_ok());
    }

    #[test]
    fn test_notes_preview_caps_length() {
        let long = "n".repeat(500);
        let preview = notes_preview(&long);
        assert_eq!(preview.chars().count(), 203);
        assert!(preview.ends_with("..."));
        assert_eq!(notes_preview("short"), "short");
    }
}
