//! Design-to-measurement linking
//!
//! A measurement record links to a design record when it names the design
//! file explicitly, or when the two stacks are equivalent under the design's
//! [`LayerProfile`]. Every match is kept: a design may link to zero, one or
//! many measurements, and a measurement may link to several designs.
//!
//! @module link

pub mod matcher;

pub use matcher::{is_same_stack, LayerProfile, MPS_LAYERS};

use crate::catalog::{Catalog, DesignCatalog, DesignRecord, MeasurementCatalog, MeasurementRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Measurements linked to one design record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Measurement file names in catalog order
    #[serde(rename = "rpar")]
    pub measurements: Vec<String>,
}

/// Link table keyed by design file name, in natural order
pub type LinkTable = Catalog<LinkEntry>;

/// Why a measurement was linked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkReason {
    /// The measurement names the design file
    Reference,
    /// The stacks are equivalent
    Stack,
}

/// Decide whether `measurement` belongs to `design`
pub fn link_reason(
    design_name: &str,
    design: &DesignRecord,
    measurement: &MeasurementRecord,
) -> Option<LinkReason> {
    if measurement.design_ref == design_name {
        return Some(LinkReason::Reference);
    }
    let profile = LayerProfile::for_design(design_name);
    if is_same_stack(profile, &design.stack, &measurement.stack) {
        return Some(LinkReason::Stack);
    }
    None
}

/// All measurements linked to one design, in catalog order
pub fn find_measurements(
    design_name: &str,
    design: &DesignRecord,
    measurements: &MeasurementCatalog,
) -> Vec<String> {
    measurements
        .iter()
        .filter_map(|(name, measurement)| {
            let reason = link_reason(design_name, design, measurement)?;
            debug!(design = design_name, measurement = name, ?reason, "Linked");
            Some(name.to_string())
        })
        .collect()
}

/// Link every design record to its measurements
pub fn link(designs: &DesignCatalog, measurements: &MeasurementCatalog) -> LinkTable {
    let mut table = LinkTable::new();
    for (name, design) in designs.iter() {
        let entry = LinkEntry {
            measurements: find_measurements(name, design, measurements),
        };
        table.insert_named(name.to_string(), entry);
    }
    table
}
