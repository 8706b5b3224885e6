//! Discover and extract catalogs from a scan root
//!
//! Records are extracted one file at a time, in discovery order. A file that
//! cannot be read aborts the scan; anything inside a readable file degrades
//! to empty values instead.

use crate::catalog::{
    dedup_by_containment, DesignCatalog, DesignRecord, MeasurementCatalog, MeasurementRecord,
};
use crate::core::config::{DESIGN_SUFFIX, MEASUREMENT_SUFFIX};
use crate::core::error::Result;
use crate::walker::FileWalker;
use std::path::{Path, PathBuf};
use tracing::info;

/// Called once per extracted record with `(index, total, name)`, 1-based
pub type Progress<'a> = &'a mut dyn FnMut(usize, usize, &str);

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Design file paths below `root` after the containment filter
pub fn design_paths(root: &Path) -> Vec<PathBuf> {
    let found = FileWalker::new(root, DESIGN_SUFFIX).walk();
    let discovered = found.len();
    let kept = dedup_by_containment(found);
    info!(
        root = %root.display(),
        discovered,
        kept = kept.len(),
        "Discovered design files"
    );
    kept
}

/// Build the design catalog for `root`
pub fn scan_designs(root: &Path, progress: Progress<'_>) -> Result<DesignCatalog> {
    let paths = design_paths(root);
    let total = paths.len();

    let mut catalog = DesignCatalog::new();
    for (i, path) in paths.iter().enumerate() {
        let record = DesignRecord::load(path)?;
        progress(i + 1, total, &display_name(path));
        catalog.insert(record);
    }
    Ok(catalog)
}

/// Build the measurement catalog for `root` (no containment filter)
pub fn scan_measurements(root: &Path, progress: Progress<'_>) -> Result<MeasurementCatalog> {
    let paths = FileWalker::new(root, MEASUREMENT_SUFFIX).walk();
    let total = paths.len();
    info!(root = %root.display(), discovered = total, "Discovered measurement files");

    let mut catalog = MeasurementCatalog::new();
    for (i, path) in paths.iter().enumerate() {
        let record = MeasurementRecord::load(path)?;
        progress(i + 1, total, &display_name(path));
        catalog.insert(record);
    }
    Ok(catalog)
}
