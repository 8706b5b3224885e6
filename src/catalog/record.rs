//! Design and measurement records
//!
//! @module catalog/record

use crate::core::error::{Error, Result};
use crate::extract::{extract_design, extract_measurement};
use crate::stack::StackRecord;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A cataloged record, identified by its file name
pub trait Record {
    /// Forward-slash path of the source file
    fn path(&self) -> &str;

    /// File name (last path component), the record's identity
    fn name(&self) -> &str {
        let path = self.path();
        path.rsplit('/').next().unwrap_or(path)
    }
}

/// A design (`.mpar`) file: the intended stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRecord {
    pub path: String,
    #[serde(rename = "id")]
    pub tracking_id: String,
    #[serde(rename = "tech_ver")]
    pub tech_version: String,
    pub stack: StackRecord,
}

/// A measurement (`.rpar`) file: parameters of fabricated devices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub path: String,
    /// Design file named by this measurement, empty when absent
    #[serde(rename = "mpar")]
    pub design_ref: String,
    pub stack: StackRecord,
}

fn posix_path(path: &Path) -> String {
    path.to_string_lossy()
        .replace(std::path::MAIN_SEPARATOR, "/")
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Read a source file as UTF-8
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::ReadFailed {
        path: path.to_path_buf(),
        source,
    })
}

impl DesignRecord {
    pub fn from_text(path: &Path, text: &str) -> Self {
        let extract = extract_design(&file_name(path), text);
        Self {
            path: posix_path(path),
            tracking_id: extract.tracking_id,
            tech_version: extract.tech_version,
            stack: extract.stack,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = read_source(path)?;
        Ok(Self::from_text(path, &text))
    }
}

impl MeasurementRecord {
    pub fn from_text(path: &Path, text: &str) -> Self {
        let extract = extract_measurement(text);
        tracing::debug!(
            path = %path.display(),
            layout = ?extract.layout,
            keys = extract.stack.len(),
            "Extracted measurement file"
        );
        Self {
            path: posix_path(path),
            design_ref: extract.design_ref,
            stack: extract.stack,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = read_source(path)?;
        Ok(Self::from_text(path, &text))
    }

    /// Identifier used against the process table: the name up to its first `.`
    pub fn lookup_key(&self) -> &str {
        let name = self.name();
        name.split('.').next().unwrap_or(name)
    }
}

impl Record for DesignRecord {
    fn path(&self) -> &str {
        &self.path
    }
}

impl Record for MeasurementRecord {
    fn path(&self) -> &str {
        &self.path
    }
}
