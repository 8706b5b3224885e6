//! Measurement enrichment before linking
//!
//! - design-stack merge: a measurement that names a cataloged design picks up
//!   the design's layers it does not already have
//! - piezo lookup: the process table supplies the measurement's piezo class
//! - version filter: optionally drop records the table marks as version one
//!   or below
//!
//! @module enrich

pub mod table;

pub use table::{piezo_from_name, JsonTable, TableRow, TableSource};

use crate::catalog::{DesignCatalog, MeasurementCatalog, MeasurementRecord};
use crate::core::config::LookupConfig;
use crate::stack::{StackValue, PIEZO_KEY};
use tracing::{debug, info};

/// Merge the referenced design's stack into `measurement`.
///
/// Entries the measurement already has are never overwritten. Returns
/// whether a design was found.
pub fn apply_design_stack(measurement: &mut MeasurementRecord, designs: &DesignCatalog) -> bool {
    if measurement.design_ref.is_empty() {
        return false;
    }
    match designs.get(&measurement.design_ref) {
        Some(design) => {
            measurement.stack.merge_missing(&design.stack);
            true
        }
        None => {
            debug!(
                design = %measurement.design_ref,
                "Referenced design file not in catalog"
            );
            false
        }
    }
}

/// Set the piezo entry from the table, or `default_piezo` when the table has
/// no row or no usable value
pub fn apply_piezo(
    measurement: &mut MeasurementRecord,
    source: &dyn TableSource,
    default_piezo: &str,
) {
    let piezo = source
        .fetch(measurement.lookup_key())
        .and_then(TableRow::piezo)
        .unwrap_or_else(|| default_piezo.to_string());
    measurement.stack.insert(PIEZO_KEY, StackValue::Text(piezo));
}

/// Whether a looked-up row allows the record to be kept.
///
/// Records without a row are kept; a row must carry a version above one.
pub fn passes_version_filter(row: Option<&TableRow>) -> bool {
    match row {
        None => true,
        Some(row) => row.version_number().is_some_and(|v| v > 1.0),
    }
}

/// Counters reported after enrichment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichStats {
    pub merged: usize,
    pub piezo_applied: usize,
    pub rejected: usize,
}

/// Enrich every measurement record of a catalog in place.
///
/// The process table is keyed by measurement names, so the version filter
/// drops measurement records only; `designs` is read, never filtered.
pub fn enrich_measurements(
    measurements: &mut MeasurementCatalog,
    designs: Option<&DesignCatalog>,
    source: Option<&dyn TableSource>,
    config: &LookupConfig,
) -> EnrichStats {
    let mut stats = EnrichStats::default();

    if let (Some(source), true) = (source, config.filter_by_version) {
        let before = measurements.len();
        measurements.retain(|m| passes_version_filter(source.fetch(m.lookup_key())));
        stats.rejected = before - measurements.len();
    }

    for (_, measurement) in measurements.iter_mut() {
        if let Some(designs) = designs {
            if apply_design_stack(measurement, designs) {
                stats.merged += 1;
            }
        }
        if let Some(source) = source {
            apply_piezo(measurement, source, &config.default_piezo);
            stats.piezo_applied += 1;
        }
    }

    info!(
        merged = stats.merged,
        piezo = stats.piezo_applied,
        rejected = stats.rejected,
        "Enriched measurement records"
    );
    stats
}
