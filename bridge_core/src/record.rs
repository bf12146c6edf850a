//! # Design Record
//!
//! An open key/value record that accumulates geometry, loads and clause
//! verdicts for one design session. Builders and clause checks each
//! contribute entries under their own subject prefix, so merges from
//! different contributors never collide:
//!
//! | Prefix            | Contributor                                  |
//! |-------------------|----------------------------------------------|
//! | `crash_barrier_`  | Edge barrier builders (metallic and rigid)   |
//! | `median_`         | Median builders                              |
//! | `railing_`        | Rigid barrier with railing                   |
//! | `road_kerb_`      | Clause 109.8.1 road kerb outline             |
//! | `safety_kerb_`    | Clause 109.8.3 safety kerb outline           |
//! | `design_life_`    | Table 104.1.3.4                              |
//! | `clause_`         | Clause verdicts                              |
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::record::DesignRecord;
//!
//! let mut record = DesignRecord::new();
//! record.insert("crash_barrier_height", 1050.0);
//! record.insert("crash_barrier_beam", "Double W-beam");
//!
//! assert_eq!(record.number("crash_barrier_height"), Some(1050.0));
//! assert_eq!(record.text("crash_barrier_beam"), Some("Double W-beam"));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single value stored in the design record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DesignValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl From<f64> for DesignValue {
    fn from(v: f64) -> Self {
        DesignValue::Number(v)
    }
}

impl From<u32> for DesignValue {
    fn from(v: u32) -> Self {
        DesignValue::Number(f64::from(v))
    }
}

impl From<bool> for DesignValue {
    fn from(v: bool) -> Self {
        DesignValue::Flag(v)
    }
}

impl From<&str> for DesignValue {
    fn from(v: &str) -> Self {
        DesignValue::Text(v.to_string())
    }
}

impl From<String> for DesignValue {
    fn from(v: String) -> Self {
        DesignValue::Text(v)
    }
}

impl std::fmt::Display for DesignValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DesignValue::Flag(b) => write!(f, "{}", b),
            DesignValue::Number(n) => write!(f, "{}", n),
            DesignValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Ordered mapping from namespaced keys to values.
///
/// Keys are kept sorted so printed and serialized records are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignRecord {
    entries: BTreeMap<String, DesignValue>,
}

impl DesignRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace one entry
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<DesignValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<DesignValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&DesignValue> {
        self.entries.get(key)
    }

    /// Numeric value of `key`, if present and numeric
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.entries.get(key) {
            Some(DesignValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Text value of `key`, if present and textual
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(DesignValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Boolean value of `key`, if present and boolean
    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.entries.get(key) {
            Some(DesignValue::Flag(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DesignValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys that start with `prefix`
    pub fn keys_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries.keys().map(String::as_str).filter(move |k| k.starts_with(prefix))
    }

    /// Copy every entry of `other` into this record.
    ///
    /// Only keys present in `other` are written; unrelated keys stay as they were.
    pub fn merge(&mut self, other: &DesignRecord) {
        for (k, v) in &other.entries {
            self.entries.insert(k.clone(), v.clone());
        }
    }

    /// Return a copy of this record with `other` merged in
    pub fn merged(&self, other: &DesignRecord) -> DesignRecord {
        let mut out = self.clone();
        out.merge(other);
        out
    }
}
