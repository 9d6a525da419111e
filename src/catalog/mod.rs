//! Static POI catalog.
//!
//! The catalog is a fixed, curated set of points of interest loaded once at
//! process start and shared read-only for the process lifetime. It backs two
//! things: candidate lists for prompt construction, and the post-validation
//! lookup that drops itinerary entries referencing unknown places.

mod data;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Geographic region a POI belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Saint Petersburg city proper.
    Spb,
    /// Leningrad oblast day-trip territory.
    Lenobl,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Spb => write!(f, "spb"),
            Region::Lenobl => write!(f, "lenobl"),
        }
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spb" => Ok(Region::Spb),
            "lenobl" => Ok(Region::Lenobl),
            _ => Err(format!("unknown region: {}", s)),
        }
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poi {
    /// Stable unique identifier, referenced by itinerary items.
    pub id: String,
    pub name: String,
    pub region: Region,
    pub lat: f64,
    pub lon: f64,
    /// Interest tags (free-form but drawn from a small curated vocabulary).
    pub tags: Vec<String>,
    /// One-line description shown to the model and the UI.
    pub short: String,
}

/// Immutable POI lookup table.
///
/// Invariant: every `id` is unique; `by_id` indexes exactly the entries of
/// `pois` in catalog order.
pub struct Catalog {
    pois: Vec<Poi>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build the catalog from the bundled seed dataset.
    pub fn bundled() -> Self {
        Self::from_pois(data::seed_pois())
    }

    fn from_pois(pois: Vec<Poi>) -> Self {
        let mut by_id = HashMap::with_capacity(pois.len());
        for (idx, poi) in pois.iter().enumerate() {
            let previous = by_id.insert(poi.id.clone(), idx);
            debug_assert!(previous.is_none(), "duplicate POI id: {}", poi.id);
        }
        Self { pois, by_id }
    }

    /// Look up a POI by identifier.
    pub fn get(&self, id: &str) -> Option<&Poi> {
        self.by_id.get(id).map(|&idx| &self.pois[idx])
    }

    /// All entries in catalog order.
    pub fn all(&self) -> &[Poi] {
        &self.pois
    }

    /// Entries whose region matches, in catalog order.
    pub fn in_region(&self, region: Region) -> Vec<&Poi> {
        self.pois.iter().filter(|p| p.region == region).collect()
    }

    pub fn len(&self) -> usize {
        self.pois.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }
}
