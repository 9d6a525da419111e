//! Output formatting helpers for CLI commands

use crate::catalog::{Poi, Region};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;

/// Format POIs as a table
pub fn format_pois_table(pois: &[&Poi]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Name", "Region", "Tags", "Coordinates"]);

    for p in pois {
        let region_str = match p.region {
            Region::Spb => "spb".green().to_string(),
            Region::Lenobl => "lenobl".cyan().to_string(),
        };

        table.add_row(vec![
            Cell::new(&p.id),
            Cell::new(&p.name),
            Cell::new(region_str),
            Cell::new(p.tags.join(", ")),
            Cell::new(format!("{:.4}, {:.4}", p.lat, p.lon)),
        ]);
    }

    table.to_string()
}

/// Format POIs as JSON
pub fn format_pois_json(pois: &[&Poi]) -> String {
    serde_json::to_string_pretty(&json!({ "pois": pois })).unwrap()
}
