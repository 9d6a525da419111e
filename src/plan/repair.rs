//! Best-effort reconstruction of a schema-conformant itinerary.
//!
//! Invoked only after strict validation rejects a successfully parsed value.
//! Every clamp, truncation and defaulting step is recorded in a trace so a
//! noisy model can be diagnosed from logs; the repaired value is re-validated
//! by the caller, and a second rejection is terminal for the request.

use crate::plan::itinerary::{
    ALTERNATIVES_MAX, ALTERNATIVE_MAX, DAYS_MAX, DURATION_MAX, DURATION_MIN, LABEL_MAX,
    RATIONALE_MAX, SUMMARY_MAX, TIPS_MAX, TIP_MAX, TITLE_MAX,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Map, Value};

/// Maximum POI identifier length accepted from the model.
pub const POI_ID_MAX: usize = 80;
/// Items kept per day during repair.
pub const ITEMS_PER_DAY_MAX: usize = 6;

const TITLE_FALLBACK: &str = "Itinerary";
const SUMMARY_FALLBACK: &str = "A personal route based on the selected interests.";
const WHY_FALLBACK: &str = "A good stop for this route.";
const MOVE_FALLBACK: &str = "Transfer within the city.";
const POI_ID_FALLBACK: &str = "palace-square";
const TIME_FALLBACK: &str = "10:00";
const DURATION_FALLBACK: i64 = 90;

/// One-or-two-digit hour and minute tokens with a loose separator.
static LOOSE_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})\s*[:.\- ]\s*(\d{1,2})$").unwrap());

/// Clamp a loosely-typed numeric value into `[min, max]`.
///
/// Accepts numbers and strings that parse to a finite number; anything else
/// takes the fallback. Fractions are rounded before clamping.
pub fn clamp_int(value: Option<&Value>, min: i64, max: i64, fallback: i64) -> i64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() => (n.round() as i64).clamp(min, max),
        _ => fallback,
    }
}

/// Coerce a value to a trimmed string capped at `max` characters.
///
/// Truncation cuts to `max - 1` characters, trims trailing whitespace and
/// appends a single ellipsis. Absent, empty and non-scalar values take the
/// fallback as-is.
pub fn trunc(value: Option<&Value>, max: usize, fallback: &str) -> String {
    let raw = match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => return fallback.to_string(),
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return fallback.to_string();
    }
    if trimmed.chars().count() <= max {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(max - 1).collect();
    format!("{}\u{2026}", cut.trim_end())
}

/// Normalize a time-of-day string to zero-padded `HH:MM`.
///
/// Accepts `:`, `.`, `-` or a space between one-or-two-digit tokens; hour and
/// minute are clamped independently. Non-empty strings that do not look like
/// a time at all pass through unchanged and are left for validation to
/// reject.
pub fn normalize_time(value: Option<&Value>) -> String {
    let raw = match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };
    if raw.is_empty() {
        return TIME_FALLBACK.to_string();
    }
    match LOOSE_TIME_RE.captures(&raw) {
        Some(caps) => {
            // One-or-two-digit captures always parse; the fallbacks are
            // unreachable but mirror the clamp defaults.
            let hh: i64 = caps[1].parse().unwrap_or(10);
            let mm: i64 = caps[2].parse().unwrap_or(0);
            format!("{:02}:{:02}", hh.clamp(0, 23), mm.clamp(0, 59))
        }
        None => raw,
    }
}

/// Repair a parsed-but-invalid value into the itinerary shape.
///
/// Non-object input passes through unchanged (and will fail validation
/// again). Returns the repaired value plus the trace of actions taken.
pub fn repair_shape(raw: &Value) -> (Value, Vec<String>) {
    let obj = match raw.as_object() {
        Some(obj) => obj,
        None => return (raw.clone(), Vec::new()),
    };

    let mut trace = Vec::new();

    let title = trunc_traced(obj.get("title"), TITLE_MAX, TITLE_FALLBACK, "title", &mut trace);
    let summary = trunc_traced(
        obj.get("summary"),
        SUMMARY_MAX,
        SUMMARY_FALLBACK,
        "summary",
        &mut trace,
    );

    let days_raw = match obj.get("days") {
        Some(Value::Array(days)) => days.as_slice(),
        _ => {
            trace.push("days: replaced with empty list".to_string());
            &[]
        }
    };
    if days_raw.len() > DAYS_MAX {
        trace.push(format!("days: dropped {} beyond cap", days_raw.len() - DAYS_MAX));
    }
    let days: Vec<Value> = days_raw
        .iter()
        .filter_map(Value::as_object)
        .take(DAYS_MAX)
        .enumerate()
        .map(|(idx, day)| repair_day(day, idx, &mut trace))
        .collect();

    let alternatives = repair_string_list(
        obj.get("alternatives"),
        ALTERNATIVE_MAX,
        ALTERNATIVES_MAX,
        "alternatives",
        &mut trace,
    );

    let repaired = json!({
        "title": title,
        "summary": summary,
        "days": days,
        "alternatives": alternatives,
    });
    (repaired, trace)
}

fn repair_day(day: &Map<String, Value>, idx: usize, trace: &mut Vec<String>) -> Value {
    let path = format!("days[{}]", idx);

    let items_raw = match day.get("items") {
        Some(Value::Array(items)) => items.as_slice(),
        _ => {
            trace.push(format!("{}.items: replaced with empty list", path));
            &[]
        }
    };
    let items: Vec<Value> = items_raw
        .iter()
        .filter_map(Value::as_object)
        .take(ITEMS_PER_DAY_MAX)
        .enumerate()
        .map(|(item_idx, item)| {
            repair_item(item, &format!("{}.items[{}]", path, item_idx), trace)
        })
        .collect();

    let day_number = clamp_traced(
        day.get("dayNumber"),
        1,
        DAYS_MAX as i64,
        idx as i64 + 1,
        &format!("{}.dayNumber", path),
        trace,
    );
    let label = trunc_traced(
        day.get("label"),
        LABEL_MAX,
        &format!("Day {}", idx + 1),
        &format!("{}.label", path),
        trace,
    );

    json!({
        "dayNumber": day_number,
        "label": label,
        "items": items,
    })
}

fn repair_item(item: &Map<String, Value>, path: &str, trace: &mut Vec<String>) -> Value {
    let time_in = item.get("time");
    let time = normalize_time(time_in);
    if time_in.and_then(Value::as_str).map(str::trim) != Some(time.as_str()) {
        trace.push(format!("{}.time: normalized to {}", path, time));
    }

    let tips = repair_string_list(item.get("tips"), TIP_MAX, TIPS_MAX, &format!("{}.tips", path), trace);

    json!({
        "time": time,
        "poiId": trunc_traced(
            item.get("poiId"),
            POI_ID_MAX,
            POI_ID_FALLBACK,
            &format!("{}.poiId", path),
            trace,
        ),
        "durationMin": clamp_traced(
            item.get("durationMin"),
            DURATION_MIN,
            DURATION_MAX,
            DURATION_FALLBACK,
            &format!("{}.durationMin", path),
            trace,
        ),
        "why": trunc_traced(
            item.get("why"),
            RATIONALE_MAX,
            WHY_FALLBACK,
            &format!("{}.why", path),
            trace,
        ),
        "move": trunc_traced(
            item.get("move"),
            RATIONALE_MAX,
            MOVE_FALLBACK,
            &format!("{}.move", path),
            trace,
        ),
        "tips": tips,
    })
}

fn repair_string_list(
    value: Option<&Value>,
    item_cap: usize,
    list_cap: usize,
    path: &str,
    trace: &mut Vec<String>,
) -> Vec<String> {
    let items = match value {
        Some(Value::Array(items)) => items.as_slice(),
        _ => return Vec::new(),
    };
    let kept: Vec<String> = items
        .iter()
        .map(|v| trunc(Some(v), item_cap, ""))
        .filter(|s| !s.is_empty())
        .take(list_cap)
        .collect();
    if kept.len() != items.len() {
        trace.push(format!(
            "{}: kept {} of {} entries",
            path,
            kept.len(),
            items.len()
        ));
    }
    kept
}

fn trunc_traced(
    value: Option<&Value>,
    max: usize,
    fallback: &str,
    path: &str,
    trace: &mut Vec<String>,
) -> String {
    let result = trunc(value, max, fallback);
    if value.and_then(Value::as_str).map(str::trim) != Some(result.as_str()) {
        trace.push(format!("{}: coerced or truncated", path));
    }
    result
}

fn clamp_traced(
    value: Option<&Value>,
    min: i64,
    max: i64,
    fallback: i64,
    path: &str,
    trace: &mut Vec<String>,
) -> i64 {
    let result = clamp_int(value, min, max, fallback);
    if value.and_then(Value::as_i64) != Some(result) {
        trace.push(format!("{}: set to {}", path, result));
    }
    result
}
