//! postcode-core prelude: bring common types and traits into scope.

pub use crate::common::DbStats;
pub use crate::error::{PostcodeError, Result};
pub use crate::export::{write_city_csv, write_postcode_csv};
pub use crate::loader::CompressionMode;
pub use crate::model::{
    CityRecord, PostcodeDb, PostcodeRecord, PostcodeValidation, StateSummary,
};
pub use crate::text::fold_key;
pub use crate::traits::{PostcodeSearch, DEFAULT_SEARCH_LIMIT};
