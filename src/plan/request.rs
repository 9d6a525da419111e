//! Trip-preference request validation.
//!
//! Incoming payloads are arbitrary JSON. [`TripRequest::from_value`] applies
//! the declared defaults for absent fields and collects every violation with
//! its field path, so a client gets the full picture in one round trip
//! instead of one error at a time.

use crate::catalog::Region;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Maximum length of the free-text notes field, in characters.
pub const NOTES_MAX_CHARS: usize = 500;

/// Which part of the catalog the trip draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BaseRegion {
    #[default]
    Spb,
    Lenobl,
    Both,
}

impl BaseRegion {
    /// The catalog region this filter selects, or `None` for "both".
    pub fn region(&self) -> Option<Region> {
        match self {
            BaseRegion::Spb => Some(Region::Spb),
            BaseRegion::Lenobl => Some(Region::Lenobl),
            BaseRegion::Both => None,
        }
    }
}

impl FromStr for BaseRegion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spb" => Ok(BaseRegion::Spb),
            "lenobl" => Ok(BaseRegion::Lenobl),
            "both" => Ok(BaseRegion::Both),
            _ => Err(format!("expected one of: spb, lenobl, both; got '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Relaxed,
    #[default]
    Normal,
    Active,
}

impl FromStr for Pace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relaxed" => Ok(Pace::Relaxed),
            "normal" => Ok(Pace::Normal),
            "active" => Ok(Pace::Active),
            _ => Err(format!(
                "expected one of: relaxed, normal, active; got '{}'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    Walk,
    #[default]
    Public,
    Car,
}

impl FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "walk" => Ok(Transport::Walk),
            "public" => Ok(Transport::Public),
            "car" => Ok(Transport::Car),
            _ => Err(format!("expected one of: walk, public, car; got '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    #[default]
    Any,
    Sun,
    Rain,
    Cold,
}

impl FromStr for Weather {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(Weather::Any),
            "sun" => Ok(Weather::Sun),
            "rain" => Ok(Weather::Rain),
            "cold" => Ok(Weather::Cold),
            _ => Err(format!(
                "expected one of: any, sun, rain, cold; got '{}'",
                s
            )),
        }
    }
}

/// Validated trip preferences. Immutable once constructed; lives for the
/// duration of a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub days: u8,
    pub base_region: BaseRegion,
    pub pace: Pace,
    pub transport: Transport,
    pub weather: Weather,
    pub interests: Vec<String>,
    pub notes: String,
}

impl Default for TripRequest {
    fn default() -> Self {
        Self {
            days: 2,
            base_region: BaseRegion::default(),
            pace: Pace::default(),
            transport: Transport::default(),
            weather: Weather::default(),
            interests: Vec::new(),
            notes: String::new(),
        }
    }
}

/// A single validation failure: which field and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl FieldViolation {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl TripRequest {
    /// Validate an untyped payload, applying defaults for absent fields.
    ///
    /// Returns every violation found rather than stopping at the first.
    pub fn from_value(payload: &Value) -> Result<Self, Vec<FieldViolation>> {
        let obj = match payload {
            Value::Object(map) => map,
            Value::Null => {
                return Ok(Self::default());
            }
            other => {
                return Err(vec![FieldViolation::new(
                    "$",
                    format!("expected a JSON object, got {}", json_type_name(other)),
                )]);
            }
        };

        let mut violations = Vec::new();
        let mut request = Self::default();

        match obj.get("days") {
            None | Some(Value::Null) => {}
            Some(v) => match v.as_i64() {
                Some(n) if (1..=3).contains(&n) => request.days = n as u8,
                Some(n) => {
                    violations.push(FieldViolation::new(
                        "days",
                        format!("must be between 1 and 3, got {}", n),
                    ));
                }
                None => {
                    violations.push(FieldViolation::new("days", "must be an integer"));
                }
            },
        }

        decode_enum(obj, "baseRegion", &mut violations, |r| request.base_region = r);
        decode_enum(obj, "pace", &mut violations, |p| request.pace = p);
        decode_enum(obj, "transport", &mut violations, |t| request.transport = t);
        decode_enum(obj, "weather", &mut violations, |w| request.weather = w);

        match obj.get("interests") {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => {
                for (idx, item) in items.iter().enumerate() {
                    match item.as_str() {
                        Some(s) => request.interests.push(s.to_string()),
                        None => violations.push(FieldViolation::new(
                            format!("interests[{}]", idx),
                            "must be a string",
                        )),
                    }
                }
            }
            Some(_) => {
                violations.push(FieldViolation::new("interests", "must be an array of strings"));
            }
        }

        match obj.get("notes") {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) => {
                if s.chars().count() > NOTES_MAX_CHARS {
                    violations.push(FieldViolation::new(
                        "notes",
                        format!("must be at most {} characters", NOTES_MAX_CHARS),
                    ));
                } else {
                    request.notes = s.clone();
                }
            }
            Some(_) => {
                violations.push(FieldViolation::new("notes", "must be a string"));
            }
        }

        if violations.is_empty() {
            Ok(request)
        } else {
            Err(violations)
        }
    }
}

fn decode_enum<T: FromStr<Err = String>>(
    obj: &serde_json::Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
    mut assign: impl FnMut(T),
) {
    match obj.get(field) {
        None | Some(Value::Null) => {}
        Some(Value::String(s)) => match s.parse::<T>() {
            Ok(parsed) => assign(parsed),
            Err(message) => violations.push(FieldViolation::new(field, message)),
        },
        Some(other) => {
            violations.push(FieldViolation::new(
                field,
                format!("must be a string, got {}", json_type_name(other)),
            ));
        }
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_payload_gets_defaults() {
        let request = TripRequest::from_value(&json!({})).unwrap();
        assert_eq!(request.days, 2);
        assert_eq!(request.base_region, BaseRegion::Spb);
        assert_eq!(request.pace, Pace::Normal);
        assert_eq!(request.transport, Transport::Public);
        assert_eq!(request.weather, Weather::Any);
        assert!(request.interests.is_empty());
        assert!(request.notes.is_empty());
    }

    #[test]
    fn test_full_payload() {
        let request = TripRequest::from_value(&json!({
            "days": 3,
            "baseRegion": "both",
            "pace": "active",
            "transport": "car",
            "weather": "rain",
            "interests": ["classic", "food"],
            "notes": "no museums on day one"
        }))
        .unwrap();
        assert_eq!(request.days, 3);
        assert_eq!(request.base_region, BaseRegion::Both);
        assert_eq!(request.pace, Pace::Active);
        assert_eq!(request.transport, Transport::Car);
        assert_eq!(request.weather, Weather::Rain);
        assert_eq!(request.interests, vec!["classic", "food"]);
        assert_eq!(request.notes, "no museums on day one");
    }

    #[test]
    fn test_days_out_of_range() {
        let err = TripRequest::from_value(&json!({"days": 5})).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err[0].field, "days");
        assert!(err[0].message.contains("between 1 and 3"));
    }

    #[test]
    fn test_days_not_integer() {
        let err = TripRequest::from_value(&json!({"days": 2.5})).unwrap_err();
        assert_eq!(err[0].field, "days");
        assert!(err[0].message.contains("integer"));
    }

    #[test]
    fn test_unknown_enum_value() {
        let err = TripRequest::from_value(&json!({"pace": "sprint"})).unwrap_err();
        assert_eq!(err[0].field, "pace");
        assert!(err[0].message.contains("sprint"));
    }

    #[test]
    fn test_notes_over_cap() {
        let long = "x".repeat(NOTES_MAX_CHARS + 1);
        let err = TripRequest::from_value(&json!({ "notes": long })).unwrap_err();
        assert_eq!(err[0].field, "notes");
    }

    #[test]
    fn test_collects_all_violations() {
        let err = TripRequest::from_value(&json!({
            "days": 0,
            "baseRegion": "mars",
            "interests": ["ok", 7]
        }))
        .unwrap_err();
        let fields: Vec<_> = err.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["days", "baseRegion", "interests[1]"]);
    }

    #[test]
    fn test_non_object_payload_rejected() {
        let err = TripRequest::from_value(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err[0].field, "$");
    }

    #[test]
    fn test_serializes_camel_case() {
        let request = TripRequest::default();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["baseRegion"], "spb");
        assert_eq!(value["days"], 2);
    }

    #[test]
    fn test_base_region_maps_to_catalog_region() {
        assert_eq!(BaseRegion::Spb.region(), Some(crate::catalog::Region::Spb));
        assert_eq!(
            BaseRegion::Lenobl.region(),
            Some(crate::catalog::Region::Lenobl)
        );
        assert_eq!(BaseRegion::Both.region(), None);
    }
}
