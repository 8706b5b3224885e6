//! Text extraction for design and measurement files
//!
//! Design files always carry a `(key=value/...)` list. Measurement files are
//! probed once for their layout; the chosen [`Layout`] variant then owns all
//! parsing rules for that file:
//! - `Common`: `key: value` lines in a `#common` section
//! - `ParameterRange`: quoted `#parameter` string and/or `#range` rows
//!
//! Extraction never fails. Unparsable values are dropped and missing
//! sections produce empty stacks or empty strings.
//!
//! @module extract

pub mod common;
pub mod design;
pub mod fixups;
pub mod parameter;

use crate::stack::{StackRecord, StackValue, PIEZO_KEY};
use parameter::Parameter;

const COMMON_MARKER: &str = "#common";
const PARAMETER_MARKER: &str = "#parameter";
const RANGE_MARKER: &str = "#range";

/// Characters kept when reading the left-most token of a common/range value
pub(crate) const LEFTMOST_ALLOWED: &[char] = &['.', '+', '-', 'e', 'E'];

/// Keep ASCII digits plus the listed characters
pub(crate) fn keep_numeric(token: &str, allowed: &[char]) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_digit() || allowed.contains(c))
        .collect()
}

/// Text layout of a file, chosen once by probing marker substrings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `#common` section of `key: value` lines
    Common,
    /// `#parameter` quoted string and/or `#range` rows
    ParameterRange { parameter: bool, range: bool },
    /// No section marker; the stack stays empty
    Empty,
}

impl Layout {
    /// Probe the text for section markers.
    ///
    /// `#common` takes precedence over the parameter/range sections. A
    /// parenthesized list outside any section is not read.
    pub fn detect(text: &str) -> Self {
        if text.contains(COMMON_MARKER) {
            return Self::Common;
        }

        let parameter = text.contains(PARAMETER_MARKER);
        let range = text.contains(RANGE_MARKER);
        if parameter || range {
            Self::ParameterRange { parameter, range }
        } else {
            Self::Empty
        }
    }

    /// Extract the design reference (possibly empty) and stack
    pub fn extract(self, text: &str) -> (String, StackRecord) {
        match self {
            Self::Common => common::extract(text),
            Self::ParameterRange { parameter, range } => {
                let mut design_ref = String::new();
                let mut stack = StackRecord::new();

                if parameter {
                    match parameter::extract_parameter(text) {
                        Some(Parameter::DesignRef(name)) => design_ref = name,
                        Some(Parameter::Stack(from_pairs)) => stack = from_pairs,
                        None => {}
                    }
                }
                // Range rows supersede anything read from the parameter list
                if range {
                    stack = parameter::extract_range(text);
                }

                (design_ref, stack)
            }
            Self::Empty => (String::new(), StackRecord::new()),
        }
    }
}

/// Fields extracted from a design file
#[derive(Debug, Clone, PartialEq)]
pub struct DesignExtract {
    pub tracking_id: String,
    pub tech_version: String,
    /// Layer stack, always including a `piezo` text entry
    pub stack: StackRecord,
}

/// Extract a design file; `file_name` feeds the known-patch fix-ups only
pub fn extract_design(file_name: &str, text: &str) -> DesignExtract {
    let header = design::parse_header(text);
    let mut stack = design::parenthetical_stack(text);

    let piezo = fixups::correct_piezo(file_name, header.piezo);
    stack.insert(PIEZO_KEY, StackValue::Text(piezo));

    DesignExtract {
        tracking_id: design::tracking_id(text),
        tech_version: header.tech_version,
        stack,
    }
}

/// Fields extracted from a measurement file
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementExtract {
    pub layout: Layout,
    /// Design file named by the measurement file, empty when absent
    pub design_ref: String,
    pub stack: StackRecord,
}

/// Extract a measurement file, dispatching on its detected layout
pub fn extract_measurement(text: &str) -> MeasurementExtract {
    let layout = Layout::detect(text);
    let (design_ref, stack) = layout.extract(text);
    MeasurementExtract {
        layout,
        design_ref,
        stack,
    }
}
