//! The set of countries the dataset covers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::CountryCode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRegistryEntry {
    pub code: CountryCode,
    pub display_name: String,
}

impl CountryRegistryEntry {
    pub fn new(code: CountryCode, display_name: impl Into<String>) -> Self {
        Self {
            code,
            display_name: display_name.into(),
        }
    }
}

/// Registry entries in load order, indexed by code.
///
/// Codes are unique; output records follow the insertion order.
#[derive(Debug, Clone, Default)]
pub struct CountryRegistry {
    entries: Vec<CountryRegistryEntry>,
    index: BTreeMap<CountryCode, usize>,
}

impl CountryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry. Returns `false` when the code is already present: the
    /// entry keeps its original position and takes the new display name.
    pub fn insert(&mut self, entry: CountryRegistryEntry) -> bool {
        if let Some(&idx) = self.index.get(&entry.code) {
            self.entries[idx].display_name = entry.display_name;
            return false;
        }
        self.index.insert(entry.code.clone(), self.entries.len());
        self.entries.push(entry);
        true
    }

    pub fn contains(&self, code: &CountryCode) -> bool {
        self.index.contains_key(code)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountryRegistryEntry> {
        self.entries.iter()
    }

    pub fn codes(&self) -> impl Iterator<Item = &CountryCode> {
        self.entries.iter().map(|entry| &entry.code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CountryRegistryEntry> for CountryRegistry {
    fn from_iter<I: IntoIterator<Item = CountryRegistryEntry>>(iter: I) -> Self {
        let mut registry = Self::new();
        for entry in iter {
            registry.insert(entry);
        }
        registry
    }
}

impl<'a> IntoIterator for &'a CountryRegistry {
    type Item = &'a CountryRegistryEntry;
    type IntoIter = std::slice::Iter<'a, CountryRegistryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
