// crates/postcode-core/src/model/records.rs
use crate::text::preview_list;
use serde::{Deserialize, Serialize, Serializer};

/// One indexed postcode with its city and state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostcodeRecord {
    pub postcode: String,
    pub city: String,
    pub state: String,
    pub state_code: String,
}

/// One indexed city with every postcode it was listed with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRecord {
    /// Display name as found in the source (trimmed).
    pub city: String,
    pub state: String,
    pub state_code: String,
    pub postcodes: Vec<String>,
}

impl PostcodeRecord {
    /// `"40100, Shah Alam, Selangor"`
    pub fn address_line(&self) -> String {
        format!("{}, {}, {}", self.postcode, self.city, self.state)
    }
}

impl CityRecord {
    /// `"Shah Alam, Selangor"`
    pub fn city_state_line(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    /// All postcodes joined with `", "`.
    pub fn postcode_list(&self) -> String {
        self.postcodes.join(", ")
    }

    /// At most `max` postcodes, with a `… (+N more)` tail when cut.
    pub fn postcode_preview(&self, max: usize) -> String {
        preview_list(&self.postcodes, max)
    }
}

/// Outcome of [`PostcodeSearch::validate_postcode`].
///
/// Serializes flat, as `{"valid": true, "postcode": .., "city": .., ...}` or
/// `{"valid": false, "postcode": ..}`.
///
/// [`PostcodeSearch::validate_postcode`]: crate::traits::PostcodeSearch::validate_postcode
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PostcodeValidation {
    Valid(PostcodeRecord),
    Invalid { postcode: String },
}

impl PostcodeValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, PostcodeValidation::Valid(_))
    }

    /// The trimmed postcode that was checked.
    pub fn postcode(&self) -> &str {
        match self {
            PostcodeValidation::Valid(rec) => &rec.postcode,
            PostcodeValidation::Invalid { postcode } => postcode,
        }
    }

    pub fn record(&self) -> Option<&PostcodeRecord> {
        match self {
            PostcodeValidation::Valid(rec) => Some(rec),
            PostcodeValidation::Invalid { .. } => None,
        }
    }
}

impl Serialize for PostcodeValidation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct View<'a> {
            valid: bool,
            postcode: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            city: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            state: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            state_code: Option<&'a str>,
        }

        let rec = self.record();
        View {
            valid: self.is_valid(),
            postcode: self.postcode(),
            city: rec.map(|r| r.city.as_str()),
            state: rec.map(|r| r.state.as_str()),
            state_code: rec.map(|r| r.state_code.as_str()),
        }
        .serialize(serializer)
    }
}
