// crates/postcode-core/src/model/index.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A string-keyed map that iterates in first-insertion order.
///
/// Entries live in one contiguous vector and a hash map points each key at
/// its slot. Overwriting a key replaces the value in place, so the key keeps
/// the position it was first inserted at.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderedIndex<T> {
    entries: Vec<(String, T)>,
    slots: HashMap<String, usize>,
}

impl<T> Default for OrderedIndex<T> {
    fn default() -> Self {
        OrderedIndex {
            entries: Vec::new(),
            slots: HashMap::new(),
        }
    }
}

impl<T> OrderedIndex<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `key`, returning the value it replaced.
    pub fn upsert(&mut self, key: String, value: T) -> Option<T> {
        match self.slots.get(&key).copied() {
            Some(slot) => Some(std::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.slots.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// O(1) exact lookup.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.slots.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(key, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<T: PartialEq> PartialEq for OrderedIndex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}
