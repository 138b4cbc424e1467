// crates/postcode-core/src/model/canonical.rs
use crate::text::fold_key;
use serde::{Deserialize, Serialize};

/// A state after normalization, independent of the source file shape.
///
/// `name` is trimmed but may be empty; such states survive parsing and are
/// dropped by [`merge_states`](super::merge::merge_states).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalState {
    pub name: String,
    /// Short state code such as `"SGR"`, empty when the source has none.
    pub code: String,
    pub cities: Vec<CanonicalCity>,
}

/// A city after normalization. Postcodes keep their source order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalCity {
    pub name: String,
    pub postcodes: Vec<String>,
}

impl CanonicalState {
    /// Identity used to detect the same state across source files.
    pub fn merge_key(&self) -> String {
        fold_key(&self.name)
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }
}

impl CanonicalCity {
    pub fn key(&self) -> String {
        fold_key(&self.name)
    }
}

/// Lightweight view of a merged state kept by the database for listings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSummary {
    pub name: String,
    pub code: String,
    pub city_count: usize,
}

impl From<&CanonicalState> for StateSummary {
    fn from(state: &CanonicalState) -> Self {
        StateSummary {
            name: state.name.clone(),
            code: state.code.clone(),
            city_count: state.city_count(),
        }
    }
}
