//! Link command implementation

use crate::catalog::{load_json, save_json, DesignCatalog, MeasurementCatalog};
use crate::cli::LinkArgs;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::link::{link, LinkTable};
use crate::output::format_links;
use tracing::info;

/// Run the link command against catalogs on disk
pub fn run(args: LinkArgs, config: &Config) -> Result<LinkTable> {
    let designs_path = args
        .designs
        .unwrap_or_else(|| config.design_catalog_path());
    let measurements_path = args
        .measurements
        .unwrap_or_else(|| config.measurement_catalog_path());

    let designs: DesignCatalog = load_json(&designs_path)?;
    let measurements: MeasurementCatalog = load_json(&measurements_path)?;

    let dst = args.output.unwrap_or_else(|| config.link_table_path());
    write_links(&designs, &measurements, &dst, args.quiet)
}

/// Link two catalogs, persist the table and optionally print it
pub fn write_links(
    designs: &DesignCatalog,
    measurements: &MeasurementCatalog,
    dst: &std::path::Path,
    quiet: bool,
) -> Result<LinkTable> {
    let table = link(designs, measurements);
    save_json(dst, &table)?;

    info!(
        designs = designs.len(),
        measurements = measurements.len(),
        path = %dst.display(),
        "Link table written"
    );
    if !quiet {
        print!("{}", format_links(&table));
    }

    Ok(table)
}
