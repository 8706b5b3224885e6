//! Measurements command implementation

use crate::catalog::{load_json, save_json, DesignCatalog, MeasurementCatalog};
use crate::cli::MeasurementsArgs;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::enrich::{enrich_measurements, JsonTable, TableSource};
use crate::output::{format_saved, progress_line};
use crate::scan::scan_measurements;
use tracing::{info, warn};

/// Run the measurements command
///
/// `designs` short-circuits reading the design catalog from disk when the
/// caller has just built it.
pub fn run(
    args: MeasurementsArgs,
    config: &Config,
    designs: Option<&DesignCatalog>,
) -> Result<MeasurementCatalog> {
    let root = args
        .root
        .unwrap_or_else(|| config.scan.measurement_root.clone());
    let dst = args
        .output
        .unwrap_or_else(|| config.measurement_catalog_path());

    // The design catalog is optional: without it, no stacks are merged
    let loaded;
    let designs = match designs {
        Some(d) => Some(d),
        None => {
            let path = args
                .designs
                .unwrap_or_else(|| config.design_catalog_path());
            if path.exists() {
                loaded = load_json::<DesignCatalog>(&path)?;
                info!(path = %path.display(), records = loaded.len(), "Loaded design catalog");
                Some(&loaded)
            } else {
                warn!(path = %path.display(), "No design catalog; skipping stack merge");
                None
            }
        }
    };

    // The table is required once configured; failing to load it aborts
    let table = match args.table.or_else(|| config.lookup.table.clone()) {
        Some(path) => {
            let table = JsonTable::load(&path)?;
            info!(path = %path.display(), rows = table.len(), "Loaded process table");
            Some(table)
        }
        None => None,
    };

    let mut catalog = scan_measurements(&root, &mut |i, n, name| {
        println!("{}", progress_line(i, n, name));
    })?;

    enrich_measurements(
        &mut catalog,
        designs,
        table.as_ref().map(|t| t as &dyn TableSource),
        &config.lookup,
    );

    save_json(&dst, &catalog)?;
    println!("{}", format_saved("measurement", catalog.len(), &dst));

    Ok(catalog)
}
