//! Stack equivalence
//!
//! Two stacks describe the same physical stack when every layer of interest
//! is either absent from both or present in both with equal values. Lookup
//! is loose (see [`StackRecord::get_containing`]).
//!
//! @module link/matcher

use crate::stack::StackRecord;

/// Layers compared for MPS design records, in comparison order
pub const MPS_LAYERS: &[&str] = &["Al", "Mo", "W", "LT", "SiO2"];

/// Name token selecting the MPS layer set
const MPS_TOKEN: &str = "mps";

/// Layer set used to compare a design record against measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerProfile {
    /// Compare the MPS layers
    Mps,
    /// No validated layer set; stacks never match
    Unvalidated,
}

impl LayerProfile {
    /// Choose the profile from a design file name
    pub fn for_design(name: &str) -> Self {
        if name.to_lowercase().contains(MPS_TOKEN) {
            Self::Mps
        } else {
            Self::Unvalidated
        }
    }

    pub fn layers(self) -> &'static [&'static str] {
        match self {
            Self::Mps => MPS_LAYERS,
            Self::Unvalidated => &[],
        }
    }
}

/// Whether `a` and `b` describe the same stack under `profile`.
///
/// A layer found on one side only, or with different values, vetoes the
/// match immediately. The result does not depend on argument order.
pub fn is_same_stack(profile: LayerProfile, a: &StackRecord, b: &StackRecord) -> bool {
    if profile == LayerProfile::Unvalidated {
        return false;
    }

    profile.layers().iter().all(|layer| {
        match (a.get_containing(layer), b.get_containing(layer)) {
            (None, None) => true,
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    })
}
