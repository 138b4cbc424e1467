// crates/postcode-core/src/raw.rs
//! Raw input structures as they come from the JSON source files.
//!
//! These mirror the external datasets and are not part of the public model.
//! Everything here is converted into [`crate::model::CanonicalState`] by
//! [`crate::model::convert`].

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A leaf value in the source data. Postcodes are published both as numbers
/// (`40000`) and as strings (`"01000"`), names are normally strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl Scalar {
    /// Text form of the value with surrounding whitespace removed.
    pub fn to_trimmed(&self) -> String {
        match self {
            Scalar::Text(s) => s.trim().to_owned(),
            Scalar::Number(n) => n.to_string(),
            Scalar::Flag(b) => b.to_string(),
        }
    }

    /// Text form of the value, whitespace preserved.
    pub fn to_text(&self) -> String {
        match self {
            Scalar::Text(s) => s.clone(),
            other => other.to_trimmed(),
        }
    }
}

/// Deserializes a key that must be present but may hold `null`.
///
/// A plain `Option<T>` field is silently `None` when the key is missing,
/// which would let any object pass as a single-state document.
fn required_nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

/// Deserializes an inner list that publishers sometimes fill with a blank.
///
/// A list is read element by element. `null`, `false`, `0`, `""`, `[]` and
/// `{}` stand for "no entries" and become an empty list. Any other non-list
/// value is an error, so the surrounding shape does not match.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| T::deserialize(item).map_err(D::Error::custom))
            .collect(),
        blank if is_blank(&blank) => Ok(Vec::new()),
        other => Err(D::Error::custom(format!("expected a list, found {other}"))),
    }
}

fn is_blank(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// City entry using the singular `postcode` key.
#[derive(Debug, Deserialize)]
pub struct CityRaw {
    #[serde(default)]
    pub name: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub postcode: Vec<Option<Scalar>>,
}

/// State entry using the singular `city` key.
#[derive(Debug, Deserialize)]
pub struct StateRaw {
    #[serde(default)]
    pub name: Option<Scalar>,
    #[serde(default)]
    pub code: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub city: Vec<CityRaw>,
}

/// A whole file holding exactly one state (`johor.json`, `kedah.json`, ...).
#[derive(Debug, Deserialize)]
pub struct SingleStateRaw {
    #[serde(deserialize_with = "required_nullable")]
    pub name: Option<Scalar>,
    #[serde(default)]
    pub code: Option<Scalar>,
    pub city: Vec<CityRaw>,
}

/// City entry using the canonical plural `postcodes` key.
#[derive(Debug, Deserialize)]
pub struct CanonicalCityRaw {
    #[serde(default)]
    pub name: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub postcodes: Vec<Option<Scalar>>,
}

/// State entry using the canonical plural `cities` key.
#[derive(Debug, Deserialize)]
pub struct CanonicalStateRaw {
    #[serde(default)]
    pub name: Option<Scalar>,
    #[serde(default)]
    pub code: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub cities: Vec<CanonicalCityRaw>,
}

/// The closed set of accepted document shapes.
///
/// Variants are tried in declaration order and the first one that
/// deserializes wins, so a document holding a `state` list is always read as
/// [`RawSource::NestedPlural`] even if it also looks like another shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawSource {
    /// `{"state": [{"name", "code", "city": [{"name", "postcode": [..]}]}]}`
    NestedPlural { state: Vec<StateRaw> },
    /// `{"name", "code", "city": [{"name", "postcode": [..]}]}`
    SingleState(SingleStateRaw),
    /// `{"states": [{"name", "code", "cities": [{"name", "postcodes": [..]}]}]}`
    Canonical { states: Vec<CanonicalStateRaw> },
}

impl RawSource {
    /// Short label of the matched shape, used in log output.
    pub fn shape_name(&self) -> &'static str {
        match self {
            RawSource::NestedPlural { .. } => "nested-plural",
            RawSource::SingleState(_) => "single-state",
            RawSource::Canonical { .. } => "canonical",
        }
    }
}
