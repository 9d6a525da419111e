//! POI consistency filter.
//!
//! The correctness backstop against model hallucination: after validation,
//! any itinerary item whose `poiId` is not in the catalog is silently
//! dropped, and the POIs actually referenced are collected for the response.
//! Runs unconditionally on every validated itinerary.

use crate::catalog::{Catalog, Poi};
use crate::plan::itinerary::Itinerary;

/// Drop items referencing unknown POIs; return the referenced catalog
/// entries, deduplicated, in first-reference order.
pub fn retain_known_pois(itinerary: &mut Itinerary, catalog: &Catalog) -> Vec<Poi> {
    let mut referenced: Vec<String> = Vec::new();

    for day in &mut itinerary.days {
        day.items.retain(|item| {
            let known = catalog.get(&item.poi_id).is_some();
            if known && !referenced.iter().any(|id| id == &item.poi_id) {
                referenced.push(item.poi_id.clone());
            }
            known
        });
    }

    referenced
        .iter()
        .filter_map(|id| catalog.get(id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::itinerary::{Day, ItineraryItem};
    use std::collections::HashSet;

    fn item(poi_id: &str) -> ItineraryItem {
        ItineraryItem {
            time: "10:00".to_string(),
            poi_id: poi_id.to_string(),
            duration_min: 60,
            why: "why".to_string(),
            movement: "move".to_string(),
            tips: vec![],
        }
    }

    fn itinerary(poi_ids: &[&[&str]]) -> Itinerary {
        Itinerary {
            title: "t".to_string(),
            summary: "s".to_string(),
            days: poi_ids
                .iter()
                .enumerate()
                .map(|(idx, ids)| Day {
                    day_number: idx as u8 + 1,
                    label: format!("Day {}", idx + 1),
                    items: ids.iter().map(|id| item(id)).collect(),
                })
                .collect(),
            alternatives: vec![],
        }
    }

    #[test]
    fn test_drops_only_unknown_ids() {
        let catalog = Catalog::bundled();
        let mut plan = itinerary(&[
            &["hermitage", "narnia-wardrobe", "nevsky"],
            &["kazansky", "isaac", "atlantis"],
        ]);

        let pois = retain_known_pois(&mut plan, &catalog);

        assert_eq!(plan.days[0].items.len(), 2);
        assert_eq!(plan.days[1].items.len(), 2);
        assert_eq!(pois.len(), 4);
        for day in &plan.days {
            for item in &day.items {
                assert!(catalog.get(&item.poi_id).is_some());
            }
        }
    }

    #[test]
    fn test_pois_deduplicated_in_reference_order() {
        let catalog = Catalog::bundled();
        let mut plan = itinerary(&[&["nevsky", "hermitage", "nevsky"], &["hermitage"]]);

        let pois = retain_known_pois(&mut plan, &catalog);

        let ids: Vec<_> = pois.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["nevsky", "hermitage"]);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_all_unknown_leaves_empty_days() {
        let catalog = Catalog::bundled();
        let mut plan = itinerary(&[&["nowhere", "elsewhere"]]);

        let pois = retain_known_pois(&mut plan, &catalog);

        assert!(plan.days[0].items.is_empty());
        assert!(pois.is_empty());
    }
}
