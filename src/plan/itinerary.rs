//! The itinerary contract.
//!
//! Typed shape of the model's structured output, plus validation of a parsed
//! JSON value against it. Validation reports every violating field with its
//! path (`days[0].items[2].time`) so the caller can decide between repair and
//! rejection; it never mutates the input.

use crate::plan::request::{json_type_name, FieldViolation};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const TITLE_MAX: usize = 120;
pub const SUMMARY_MAX: usize = 1000;
pub const LABEL_MAX: usize = 140;
pub const RATIONALE_MAX: usize = 320;
pub const TIP_MAX: usize = 120;
pub const TIPS_MAX: usize = 4;
pub const ALTERNATIVE_MAX: usize = 240;
pub const ALTERNATIVES_MAX: usize = 8;
pub const DAYS_MAX: usize = 3;
pub const DURATION_MIN: i64 = 15;
pub const DURATION_MAX: i64 = 240;

/// `HH:MM`, 24-hour, zero-padded.
static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}:\d{2}$").unwrap());

/// A structured multi-day plan as produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub title: String,
    pub summary: String,
    pub days: Vec<Day>,
    #[serde(default)]
    pub alternatives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub day_number: u8,
    pub label: String,
    pub items: Vec<ItineraryItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItem {
    pub time: String,
    pub poi_id: String,
    pub duration_min: u32,
    /// Why this stop fits the request.
    pub why: String,
    /// How to get here from the previous stop.
    #[serde(rename = "move")]
    pub movement: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

/// Validate a parsed JSON value against the itinerary contract.
///
/// On success returns the typed [`Itinerary`]; on failure, one
/// [`FieldViolation`] per violating field.
pub fn validate(value: &Value) -> Result<Itinerary, Vec<FieldViolation>> {
    let mut report = Vec::new();

    let obj = match value.as_object() {
        Some(obj) => obj,
        None => {
            return Err(vec![FieldViolation {
                field: "$".to_string(),
                message: format!("expected a JSON object, got {}", json_type_name(value)),
            }]);
        }
    };

    check_string(obj.get("title"), "title", TITLE_MAX, &mut report);
    check_string(obj.get("summary"), "summary", SUMMARY_MAX, &mut report);

    match obj.get("days") {
        Some(Value::Array(days)) => {
            if days.is_empty() || days.len() > DAYS_MAX {
                push(
                    &mut report,
                    "days",
                    format!("must contain 1 to {} entries, got {}", DAYS_MAX, days.len()),
                );
            }
            for (idx, day) in days.iter().enumerate() {
                validate_day(day, idx, &mut report);
            }
        }
        other => push_type_mismatch(&mut report, "days", "an array", other),
    }

    match obj.get("alternatives") {
        None | Some(Value::Null) => {}
        Some(Value::Array(alts)) => {
            if alts.len() > ALTERNATIVES_MAX {
                push(
                    &mut report,
                    "alternatives",
                    format!("must contain at most {} entries", ALTERNATIVES_MAX),
                );
            }
            for (idx, alt) in alts.iter().enumerate() {
                check_string(
                    Some(alt),
                    &format!("alternatives[{}]", idx),
                    ALTERNATIVE_MAX,
                    &mut report,
                );
            }
        }
        Some(other) => push_type_mismatch(&mut report, "alternatives", "an array", Some(other)),
    }

    if !report.is_empty() {
        return Err(report);
    }

    // Structural checks above guarantee the typed decode cannot fail; the
    // fallback covers a contract/type drift during development.
    serde_json::from_value(value.clone()).map_err(|e| {
        vec![FieldViolation {
            field: "$".to_string(),
            message: format!("decode failed after validation: {}", e),
        }]
    })
}

fn validate_day(day: &Value, idx: usize, report: &mut Vec<FieldViolation>) {
    let path = format!("days[{}]", idx);
    let obj = match day.as_object() {
        Some(obj) => obj,
        None => {
            push_type_mismatch(report, &path, "an object", Some(day));
            return;
        }
    };

    match obj.get("dayNumber").and_then(Value::as_i64) {
        Some(n) if (1..=DAYS_MAX as i64).contains(&n) => {}
        Some(n) => push(
            &mut *report,
            format!("{}.dayNumber", path),
            format!("must be between 1 and {}, got {}", DAYS_MAX, n),
        ),
        None => push(
            &mut *report,
            format!("{}.dayNumber", path),
            "must be an integer".to_string(),
        ),
    }

    check_string(obj.get("label"), &format!("{}.label", path), LABEL_MAX, report);

    match obj.get("items") {
        Some(Value::Array(items)) => {
            for (item_idx, item) in items.iter().enumerate() {
                validate_item(item, &format!("{}.items[{}]", path, item_idx), report);
            }
        }
        other => push_type_mismatch(report, &format!("{}.items", path), "an array", other),
    }
}

fn validate_item(item: &Value, path: &str, report: &mut Vec<FieldViolation>) {
    let obj = match item.as_object() {
        Some(obj) => obj,
        None => {
            push_type_mismatch(report, path, "an object", Some(item));
            return;
        }
    };

    match obj.get("time").and_then(Value::as_str) {
        Some(time) if TIME_RE.is_match(time) => {}
        Some(time) => push(
            &mut *report,
            format!("{}.time", path),
            format!("must match HH:MM, got '{}'", time),
        ),
        None => push(
            &mut *report,
            format!("{}.time", path),
            "must be a string".to_string(),
        ),
    }

    match obj.get("poiId").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => {}
        Some(_) => push(
            &mut *report,
            format!("{}.poiId", path),
            "must not be empty".to_string(),
        ),
        None => push(
            &mut *report,
            format!("{}.poiId", path),
            "must be a string".to_string(),
        ),
    }

    match obj.get("durationMin").and_then(Value::as_i64) {
        Some(n) if (DURATION_MIN..=DURATION_MAX).contains(&n) => {}
        Some(n) => push(
            &mut *report,
            format!("{}.durationMin", path),
            format!(
                "must be between {} and {} minutes, got {}",
                DURATION_MIN, DURATION_MAX, n
            ),
        ),
        None => push(
            &mut *report,
            format!("{}.durationMin", path),
            "must be an integer".to_string(),
        ),
    }

    check_string(obj.get("why"), &format!("{}.why", path), RATIONALE_MAX, report);
    check_string(obj.get("move"), &format!("{}.move", path), RATIONALE_MAX, report);

    match obj.get("tips") {
        None | Some(Value::Null) => {}
        Some(Value::Array(tips)) => {
            if tips.len() > TIPS_MAX {
                push(
                    &mut *report,
                    format!("{}.tips", path),
                    format!("must contain at most {} entries", TIPS_MAX),
                );
            }
            for (idx, tip) in tips.iter().enumerate() {
                check_string(
                    Some(tip),
                    &format!("{}.tips[{}]", path, idx),
                    TIP_MAX,
                    report,
                );
            }
        }
        Some(other) => {
            push_type_mismatch(report, &format!("{}.tips", path), "an array", Some(other))
        }
    }
}

/// Non-empty string no longer than `max` characters.
fn check_string(
    value: Option<&Value>,
    path: &str,
    max: usize,
    report: &mut Vec<FieldViolation>,
) {
    match value.and_then(Value::as_str) {
        Some(s) => {
            let len = s.chars().count();
            if len == 0 {
                push(&mut *report, path, "must not be empty".to_string());
            } else if len > max {
                push(
                    &mut *report,
                    path,
                    format!("must be at most {} characters, got {}", max, len),
                );
            }
        }
        None => push(&mut *report, path, "must be a string".to_string()),
    }
}

fn push(report: &mut Vec<FieldViolation>, field: impl Into<String>, message: String) {
    report.push(FieldViolation {
        field: field.into(),
        message,
    });
}

fn push_type_mismatch(
    report: &mut Vec<FieldViolation>,
    path: &str,
    expected: &str,
    actual: Option<&Value>,
) {
    let message = match actual {
        Some(v) => format!("must be {}, got {}", expected, json_type_name(v)),
        None => format!("must be {}", expected),
    };
    push(report, path, message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_itinerary_value() -> Value {
        json!({
            "title": "Two classic days",
            "summary": "A compact center-first plan with a day trip.",
            "days": [
                {
                    "dayNumber": 1,
                    "label": "Historic center",
                    "items": [
                        {
                            "time": "10:00",
                            "poiId": "hermitage",
                            "durationMin": 120,
                            "why": "The essential first stop.",
                            "move": "Start here, it anchors the day.",
                            "tips": ["Buy tickets online"]
                        },
                        {
                            "time": "13:00",
                            "poiId": "palace-square",
                            "durationMin": 30,
                            "why": "Right outside the museum.",
                            "move": "Step out onto the square."
                        }
                    ]
                }
            ],
            "alternatives": ["Swap the museum for a gallery if queues are long"]
        })
    }

    #[test]
    fn test_valid_itinerary_passes() {
        let itinerary = validate(&sample_itinerary_value()).unwrap();
        assert_eq!(itinerary.days.len(), 1);
        assert_eq!(itinerary.days[0].items[0].poi_id, "hermitage");
        // Absent tips default to empty.
        assert!(itinerary.days[0].items[1].tips.is_empty());
    }

    #[test]
    fn test_missing_title_reported() {
        let mut value = sample_itinerary_value();
        value.as_object_mut().unwrap().remove("title");
        let report = validate(&value).unwrap_err();
        assert!(report.iter().any(|v| v.field == "title"));
    }

    #[test]
    fn test_bad_time_reported_with_path() {
        let mut value = sample_itinerary_value();
        value["days"][0]["items"][0]["time"] = json!("9:5");
        let report = validate(&value).unwrap_err();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].field, "days[0].items[0].time");
        assert!(report[0].message.contains("HH:MM"));
    }

    #[test]
    fn test_duration_out_of_range() {
        let mut value = sample_itinerary_value();
        value["days"][0]["items"][1]["durationMin"] = json!(500);
        let report = validate(&value).unwrap_err();
        assert_eq!(report[0].field, "days[0].items[1].durationMin");
    }

    #[test]
    fn test_empty_days_rejected() {
        let mut value = sample_itinerary_value();
        value["days"] = json!([]);
        let report = validate(&value).unwrap_err();
        assert!(report.iter().any(|v| v.field == "days"));
    }

    #[test]
    fn test_too_many_alternatives() {
        let mut value = sample_itinerary_value();
        value["alternatives"] = json!(vec!["option"; ALTERNATIVES_MAX + 1]);
        let report = validate(&value).unwrap_err();
        assert!(report.iter().any(|v| v.field == "alternatives"));
    }

    #[test]
    fn test_non_object_rejected() {
        let report = validate(&json!("just text")).unwrap_err();
        assert_eq!(report[0].field, "$");
    }

    #[test]
    fn test_multiple_violations_all_reported() {
        let value = json!({
            "title": "",
            "summary": "ok",
            "days": [{"dayNumber": 9, "label": "Day", "items": []}]
        });
        let report = validate(&value).unwrap_err();
        let fields: Vec<_> = report.iter().map(|v| v.field.as_str()).collect();
        assert!(fields.contains(&"title"));
        assert!(fields.contains(&"days[0].dayNumber"));
    }

    #[test]
    fn test_movement_field_round_trips_as_move() {
        let itinerary = validate(&sample_itinerary_value()).unwrap();
        let value = serde_json::to_value(&itinerary).unwrap();
        assert_eq!(
            value["days"][0]["items"][0]["move"],
            "Start here, it anchors the day."
        );
    }
}
