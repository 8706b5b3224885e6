//! Layer stacks
//!
//! A stack maps layer or parameter names (`Mo`, `LT0900`, `piezo`, ...) to
//! values. Keys keep their original spelling and insertion order; lookups
//! that compare stacks go through [`StackRecord::get_containing`], which is
//! case-insensitive and substring-based.
//!
//! @module stack

mod value;

pub use value::{coerce_number, StackValue};

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Key under which the piezo class is stored
pub const PIEZO_KEY: &str = "piezo";

/// Insertion-ordered mapping from layer key to value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackRecord {
    entries: Vec<(String, StackValue)>,
}

impl StackRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite; an existing key keeps its position
    pub fn insert(&mut self, key: impl Into<String>, value: StackValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Exact-key lookup
    pub fn get(&self, key: &str) -> Option<&StackValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Value of the first key (in enumeration order) that contains `token`,
    /// ignoring case.
    ///
    /// This is a loose match: `LT` finds `LT0900`, `Al` finds `Al_top`.
    pub fn get_containing(&self, token: &str) -> Option<&StackValue> {
        let token = token.to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| k.to_lowercase().contains(&token))
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Merge `other` into `self`, keeping every entry `self` already has.
    ///
    /// Keys are compared exactly. New keys are appended in `other`'s order.
    pub fn merge_missing(&mut self, other: &StackRecord) {
        for (key, value) in other.iter() {
            if !self.contains_key(key) {
                self.entries.push((key.to_string(), value.clone()));
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StackValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, StackValue)> for StackRecord {
    fn from_iter<I: IntoIterator<Item = (K, StackValue)>>(iter: I) -> Self {
        let mut stack = StackRecord::new();
        for (key, value) in iter {
            stack.insert(key, value);
        }
        stack
    }
}

impl Serialize for StackRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StackRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StackVisitor;

        impl<'de> Visitor<'de> for StackVisitor {
            type Value = StackRecord;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of layer names to numbers or strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StackRecord, A::Error> {
                let mut stack = StackRecord::new();
                while let Some((key, value)) = access.next_entry::<String, StackValue>()? {
                    stack.insert(key, value);
                }
                Ok(stack)
            }
        }

        deserializer.deserialize_map(StackVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(entries: &[(&str, i64)]) -> StackRecord {
        entries
            .iter()
            .map(|(k, v)| (*k, StackValue::Int(*v)))
            .collect()
    }

    #[test]
    fn test_duplicate_key_overwrites_in_place() {
        let mut s = stack(&[("Mo", 140), ("Al", 400)]);
        s.insert("Mo", StackValue::Int(150));

        assert_eq!(s.len(), 2);
        assert_eq!(s.keys().collect::<Vec<_>>(), vec!["Mo", "Al"]);
        assert_eq!(s.get("Mo"), Some(&StackValue::Int(150)));
    }

    #[test]
    fn test_get_containing_is_case_insensitive_and_ordered() {
        let s = stack(&[("sio2_top", 800), ("LT0900", 900), ("lt_extra", 1)]);

        assert_eq!(s.get_containing("SiO2"), Some(&StackValue::Int(800)));
        assert_eq!(s.get_containing("LT"), Some(&StackValue::Int(900)));
        assert_eq!(s.get_containing("W"), None);
        assert_eq!(s.get("sio2"), None);
    }

    #[test]
    fn test_merge_missing_keeps_existing_values() {
        let mut measured = stack(&[("Mo", 150), ("fc", 2000)]);
        let design = stack(&[("Mo", 140), ("Al", 400)]);

        measured.merge_missing(&design);

        assert_eq!(measured.get("Mo"), Some(&StackValue::Int(150)));
        assert_eq!(measured.get("Al"), Some(&StackValue::Int(400)));
        assert_eq!(measured.keys().collect::<Vec<_>>(), vec!["Mo", "fc", "Al"]);
    }

    #[test]
    fn test_json_preserves_key_order() {
        let mut s = stack(&[("Mo", 140), ("Al", 400)]);
        s.insert(PIEZO_KEY, StackValue::text("42_LT"));

        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"Mo":140,"Al":400,"piezo":"42_LT"}"#);

        let back: StackRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
