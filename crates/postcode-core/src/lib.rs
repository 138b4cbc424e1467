// crates/postcode-core/src/lib.rs
//! postcode-core
//! =============
//!
//! Offline Malaysian postcode database. Reads JSON sources in any of the
//! three known layouts, merges duplicate states across files and builds two
//! indexes: postcode -> [`PostcodeRecord`] and city -> [`CityRecord`].
//!
//! ```no_run
//! use postcode_core::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let db = PostcodeDb::load_from_path("data")?;
//!     if let Some(rec) = db.lookup_by_postcode("40100") {
//!         println!("{}", rec.address_line());
//!     }
//!     for name in db.search_cities("shah", DEFAULT_SEARCH_LIMIT) {
//!         println!("- {name}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod common;
pub mod error;
pub mod export;
pub mod loader;
pub mod model;
pub mod prelude;
// Shared Raw Input (only used by the normalizer)
#[doc(hidden)]
pub mod raw;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{PostcodeError, Result};
pub use crate::loader::CompressionMode;
pub use crate::model::{
    CanonicalCity, CanonicalState, CityRecord, PostcodeDb, PostcodeRecord, PostcodeValidation,
    StateSummary,
};
// Export the Search Trait (Crucial for users!)
pub use crate::traits::{PostcodeSearch, DEFAULT_SEARCH_LIMIT};
