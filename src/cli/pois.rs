//! Pois command implementation

use crate::catalog::{Catalog, Poi, Region};
use crate::cli::{output, PoisArgs};
use anyhow::Context;

/// Handle the `pois` command: list the catalog, optionally filtered.
pub fn handle_pois(args: &PoisArgs, catalog: &Catalog) -> anyhow::Result<String> {
    let pois: Vec<&Poi> = match &args.region {
        Some(raw) => {
            let region: Region = raw
                .parse()
                .map_err(anyhow::Error::msg)
                .context("invalid --region")?;
            catalog.in_region(region)
        }
        None => catalog.all().iter().collect(),
    };

    Ok(if args.json {
        output::format_pois_json(&pois)
    } else {
        output::format_pois_table(&pois)
    })
}
