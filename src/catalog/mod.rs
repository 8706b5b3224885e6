//! Record catalogs
//!
//! A [`Catalog`] holds the records of one kind keyed by file name and kept
//! in natural order. It persists as a JSON object in that same order.
//!
//! @module catalog

pub mod dedup;
pub mod natural;
pub mod record;
pub mod storage;

pub use dedup::dedup_by_containment;
pub use natural::{natural_cmp, sort_natural};
pub use record::{DesignRecord, MeasurementRecord, Record};
pub use storage::{load_json, save_json};

use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

pub type DesignCatalog = Catalog<DesignRecord>;
pub type MeasurementCatalog = Catalog<MeasurementRecord>;

/// Naturally ordered records of one kind, keyed by file name
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<R> {
    entries: Vec<(String, R)>,
}

impl<R> Default for Catalog<R> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<R> Catalog<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under `name`, replacing a record of the same name.
    ///
    /// Names that compare equal under natural ordering keep insertion order.
    pub fn insert_named(&mut self, name: String, record: R) {
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = record;
            return;
        }
        let at = self
            .entries
            .partition_point(|(n, _)| natural_cmp(n, &name) != Ordering::Greater);
        self.entries.insert(at, (name, record));
    }

    pub fn get(&self, name: &str) -> Option<&R> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, r)| r)
    }

    /// Records in natural order of their names
    pub fn iter(&self) -> impl Iterator<Item = (&str, &R)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), r))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut R)> {
        self.entries.iter_mut().map(|(n, r)| (n.as_str(), r))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Drop the records for which `keep` returns false
    pub fn retain(&mut self, mut keep: impl FnMut(&R) -> bool) {
        self.entries.retain(|(_, r)| keep(r));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R: Record> Catalog<R> {
    /// Insert a record under its file name
    pub fn insert(&mut self, record: R) {
        self.insert_named(record.name().to_string(), record);
    }
}

impl<R: Record> FromIterator<R> for Catalog<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for record in iter {
            catalog.insert(record);
        }
        catalog
    }
}

impl<R: Serialize> Serialize for Catalog<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, record) in &self.entries {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}

impl<'de, R: DeserializeOwned> Deserialize<'de> for Catalog<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor<R>(PhantomData<R>);

        impl<'de, R: DeserializeOwned> Visitor<'de> for CatalogVisitor<R> {
            type Value = Catalog<R>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of file names to records")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Catalog<R>, A::Error> {
                let mut catalog = Catalog::new();
                while let Some((name, record)) = access.next_entry::<String, R>()? {
                    catalog.insert_named(name, record);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor(PhantomData))
    }
}
