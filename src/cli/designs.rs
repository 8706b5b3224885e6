//! Designs command implementation

use crate::catalog::{save_json, DesignCatalog};
use crate::cli::DesignsArgs;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::output::{format_saved, progress_line};
use crate::scan::scan_designs;
use std::time::Instant;
use tracing::info;

/// Run the designs command
pub fn run(args: DesignsArgs, config: &Config) -> Result<DesignCatalog> {
    let root = args.root.unwrap_or_else(|| config.scan.design_root.clone());
    let dst = args.output.unwrap_or_else(|| config.design_catalog_path());

    let start = Instant::now();
    let catalog = scan_designs(&root, &mut |i, n, name| {
        println!("{}", progress_line(i, n, name));
    })?;

    save_json(&dst, &catalog)?;
    info!(
        records = catalog.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Design catalog written"
    );
    println!("{}", format_saved("design", catalog.len(), &dst));

    Ok(catalog)
}
