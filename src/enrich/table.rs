//! Process-table lookups
//!
//! Rows are keyed by record name and carry at least a `version` and
//! optionally a `piezo` column. The table is read from a JSON export (an
//! array of row objects); other columns are kept as-is.
//!
//! @module enrich/table

use crate::core::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

/// `LT42`, `lt360`: LT followed by two or three digits and no further digit
static LT_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)LT([0-9]{2,3})(?:[^0-9]|$)").unwrap());

/// One row of the process table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub name: String,
    #[serde(default)]
    pub version: Option<Value>,
    #[serde(default)]
    pub piezo: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TableRow {
    /// Version as a number; strings are parsed, anything else is `None`
    pub fn version_number(&self) -> Option<f64> {
        match self.version.as_ref()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Piezo from the `piezo` column, else derived from the row name
    pub fn piezo(&self) -> Option<String> {
        match self.piezo.as_deref().map(str::trim) {
            Some(p) if !p.is_empty() => Some(p.to_string()),
            _ => piezo_from_name(&self.name),
        }
    }
}

/// Derive `nn_LT` from the first `LTnn` token of a name
pub fn piezo_from_name(name: &str) -> Option<String> {
    LT_TOKEN
        .captures(name)
        .and_then(|c| c.get(1))
        .map(|m| format!("{}_LT", m.as_str()))
}

/// A source of process-table rows
pub trait TableSource {
    /// Row for a record identifier, if any
    fn fetch(&self, name: &str) -> Option<&TableRow>;
}

/// Table held in memory, loaded from a JSON export
#[derive(Debug, Clone, Default)]
pub struct JsonTable {
    rows: HashMap<String, TableRow>,
}

impl JsonTable {
    /// Load the export; a missing or malformed export aborts the run
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::TableError {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;
        let rows: Vec<TableRow> = serde_json::from_str(&content).map_err(|e| Error::TableError {
            message: format!("Invalid table export {}: {}", path.display(), e),
        })?;
        Ok(Self::from_rows(rows))
    }

    /// Build from rows; the first row of a name wins
    pub fn from_rows(rows: impl IntoIterator<Item = TableRow>) -> Self {
        let mut table = HashMap::new();
        for row in rows {
            table.entry(row.name.clone()).or_insert(row);
        }
        Self { rows: table }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl TableSource for JsonTable {
    fn fetch(&self, name: &str) -> Option<&TableRow> {
        self.rows.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn row(value: Value) -> TableRow {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_piezo_from_name() {
        assert_eq!(piezo_from_name("COMlib_LT42_x"), Some("42_LT".into()));
        assert_eq!(piezo_from_name("lt360"), Some("360_LT".into()));
        assert_eq!(piezo_from_name("LT0900"), None);
        assert_eq!(piezo_from_name("LT4"), None);
        assert_eq!(piezo_from_name("LT0900_LT36"), Some("36_LT".into()));
    }

    #[test]
    fn test_row_piezo_prefers_column() {
        let r = row(json!({"name": "COMlib_LT42", "piezo": "36_LT"}));
        assert_eq!(r.piezo(), Some("36_LT".into()));

        let r = row(json!({"name": "COMlib_LT42", "piezo": " "}));
        assert_eq!(r.piezo(), Some("42_LT".into()));

        let r = row(json!({"name": "COMlib"}));
        assert_eq!(r.piezo(), None);
    }

    #[test]
    fn test_version_number() {
        assert_eq!(row(json!({"name": "a", "version": 2})).version_number(), Some(2.0));
        assert_eq!(row(json!({"name": "a", "version": "2.5"})).version_number(), Some(2.5));
        assert_eq!(row(json!({"name": "a", "version": "n/a"})).version_number(), None);
        assert_eq!(row(json!({"name": "a", "version": null})).version_number(), None);
        assert_eq!(row(json!({"name": "a"})).version_number(), None);
    }

    #[test]
    fn test_load_keeps_extra_columns_and_first_row() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("comparams.json");
        std::fs::write(
            &path,
            r#"[{"name": "COMlib_15", "version": 3, "owner": "fab2"},
                {"name": "COMlib_15", "version": 1}]"#,
        )
        .unwrap();

        let table = JsonTable::load(&path).unwrap();
        assert_eq!(table.len(), 1);
        let r = table.fetch("COMlib_15").unwrap();
        assert_eq!(r.version_number(), Some(3.0));
        assert_eq!(r.extra["owner"], "fab2");
    }

    #[test]
    fn test_bad_export_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(JsonTable::load(&path), Err(Error::TableError { .. })));
        assert!(matches!(
            JsonTable::load(&temp.path().join("missing.json")),
            Err(Error::TableError { .. })
        ));
    }
}
