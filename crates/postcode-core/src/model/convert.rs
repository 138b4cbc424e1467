// crates/postcode-core/src/model/convert.rs
use crate::model::canonical::{CanonicalCity, CanonicalState};
use crate::raw::{CanonicalCityRaw, CanonicalStateRaw, CityRaw, RawSource, Scalar, StateRaw};
use serde_json::Value;

fn name_of(v: Option<Scalar>) -> String {
    v.map(|s| s.to_trimmed()).unwrap_or_default()
}

fn code_of(v: Option<Scalar>) -> String {
    v.map(|s| s.to_text()).unwrap_or_default()
}

fn postcodes_of(values: Vec<Option<Scalar>>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.map(|s| s.to_trimmed()).unwrap_or_default())
        .collect()
}

impl From<CityRaw> for CanonicalCity {
    fn from(raw: CityRaw) -> Self {
        CanonicalCity {
            name: name_of(raw.name),
            postcodes: postcodes_of(raw.postcode),
        }
    }
}

impl From<CanonicalCityRaw> for CanonicalCity {
    fn from(raw: CanonicalCityRaw) -> Self {
        CanonicalCity {
            name: name_of(raw.name),
            postcodes: postcodes_of(raw.postcodes),
        }
    }
}

impl From<StateRaw> for CanonicalState {
    fn from(raw: StateRaw) -> Self {
        CanonicalState {
            name: name_of(raw.name),
            code: code_of(raw.code),
            cities: raw
                .city
                .into_iter()
                .map(CanonicalCity::from)
                .collect(),
        }
    }
}

impl From<CanonicalStateRaw> for CanonicalState {
    fn from(raw: CanonicalStateRaw) -> Self {
        CanonicalState {
            name: name_of(raw.name),
            code: code_of(raw.code),
            cities: raw
                .cities
                .into_iter()
                .map(CanonicalCity::from)
                .collect(),
        }
    }
}

impl RawSource {
    /// **Standard Converter:** Raw -> Canonical.
    pub fn into_states(self) -> Vec<CanonicalState> {
        match self {
            RawSource::NestedPlural { state } => {
                state.into_iter().map(CanonicalState::from).collect()
            }
            RawSource::SingleState(single) => vec![CanonicalState {
                name: name_of(single.name),
                code: code_of(single.code),
                cities: single.city.into_iter().map(CanonicalCity::from).collect(),
            }],
            RawSource::Canonical { states } => {
                states.into_iter().map(CanonicalState::from).collect()
            }
        }
    }
}

/// Normalizes one parsed JSON document into canonical states.
///
/// `source` only labels log output. A document that matches none of the
/// accepted shapes yields an empty list: unrelated files in a data folder
/// must not abort the load.
pub fn normalize(data: Value, source: &str) -> Vec<CanonicalState> {
    if !data.is_object() {
        tracing::warn!(source, "skipping source: top level is not a JSON object");
        return Vec::new();
    }

    match serde_json::from_value::<RawSource>(data) {
        Ok(raw) => {
            let shape = raw.shape_name();
            let states = raw.into_states();
            tracing::debug!(source, shape, states = states.len(), "normalized source");
            states
        }
        Err(_) => {
            tracing::warn!(source, "skipping source: no recognized postcode layout");
            Vec::new()
        }
    }
}
