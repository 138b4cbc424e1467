// crates/postcode-core/src/model/mod.rs
pub mod canonical;
pub mod convert;
pub mod db;
pub mod index;
pub mod merge;
pub mod records;
mod search;

pub use canonical::{CanonicalCity, CanonicalState, StateSummary};
pub use convert::normalize;
pub use db::PostcodeDb;
pub use index::OrderedIndex;
pub use merge::merge_states;
pub use records::{CityRecord, PostcodeRecord, PostcodeValidation};

/// File suffix used for snapshots written by the builder.
#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = ".bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = ".comp.bin";
