//! Prompt construction.
//!
//! A pure function from a validated request plus its candidate POI list to
//! the instruction text sent to the model. Same inputs, same bytes: the
//! serialized sections follow struct field order and the framing is static.

use crate::catalog::Poi;
use crate::plan::request::TripRequest;

/// Literal example of the required response shape, embedded verbatim so the
/// model sees the exact field names and nesting.
const RESPONSE_SHAPE: &str = r#"{"title":"string","summary":"string","days":[{"dayNumber":1,"label":"string","items":[{"time":"10:30","poiId":"hermitage","durationMin":90,"why":"string","move":"string","tips":["string"]}]}],"alternatives":["string"]}"#;

/// Render the generation prompt for a request and its candidate POIs.
pub fn build_prompt(request: &TripRequest, candidates: &[&Poi]) -> String {
    let request_json = serde_json::to_string(request).unwrap();
    let poi_json = serde_json::to_string(candidates).unwrap();

    [
        "You are a trip-planning concierge for Saint Petersburg and the Leningrad oblast.",
        "Compose a compact day-by-day, time-by-time route for the user's request.",
        "",
        "HARD RULES:",
        "- Use ONLY poiId values from the POI list below (never invent new places).",
        "- Return ONLY valid JSON (no markdown, no explanations).",
        "- 4-6 items per day. Times in HH:MM format (for example, 10:30).",
        "- Respect pace, transport and weather.",
        "- Do not chain distant points without a clear reason; describe each transfer in the move field.",
        "",
        "INPUT (TripRequest):",
        &request_json,
        "",
        "POI (allowed places):",
        &poi_json,
        "",
        "RESPONSE SHAPE (strict):",
        RESPONSE_SHAPE,
    ]
    .join("\n")
}
