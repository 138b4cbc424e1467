// crates/postcode-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`PostcodeSearch::stats`], these counts reflect the built
/// indexes, i.e. after duplicate states were merged and duplicate keys were
/// overwritten.
///
/// [`PostcodeSearch::stats`]: crate::traits::PostcodeSearch::stats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub states: usize,
    pub cities: usize,
    pub postcodes: usize,
    /// Postcode entries that replaced a different earlier record with the same
    /// postcode. A postcode repeated with the same city and state is not
    /// counted.
    pub replaced_postcodes: usize,
    /// City entries that replaced a different earlier record with the same
    /// city key.
    pub replaced_cities: usize,
}
