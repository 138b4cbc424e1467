// crates/postcode-core/src/traits.rs
use crate::common::DbStats;
use crate::model::{CityRecord, PostcodeRecord, PostcodeValidation, StateSummary};

/// Default number of names returned by [`PostcodeSearch::search_cities`]
/// when the caller has no preference.
pub const DEFAULT_SEARCH_LIMIT: usize = 80;

/// Read-only query surface over a built postcode database.
///
/// Every method is a pure read. Inputs are never rejected: any string is
/// accepted and an unknown postcode or city is reported as `None` (or as an
/// invalid [`PostcodeValidation`]), not as an error.
pub trait PostcodeSearch {
    fn stats(&self) -> DbStats;

    /// States in load order (merged when loaded from a folder).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use postcode_core::{PostcodeDb, PostcodeSearch};
    ///
    /// let db = PostcodeDb::load_from_path("data").unwrap();
    /// for state in db.states() {
    ///     println!("{} ({}) - {} cities", state.name, state.code, state.city_count);
    /// }
    /// ```
    fn states(&self) -> &[StateSummary];

    /// Checks whether `postcode` (trimmed) exists in the dataset.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use postcode_core::{PostcodeDb, PostcodeSearch};
    ///
    /// let db = PostcodeDb::load_from_path("data").unwrap();
    /// let res = db.validate_postcode(" 99999 ");
    /// if !res.is_valid() {
    ///     println!("{} is not a known postcode", res.postcode());
    /// }
    /// ```
    fn validate_postcode(&self, postcode: &str) -> PostcodeValidation;

    /// Exact lookup of a postcode after trimming.
    fn lookup_by_postcode(&self, postcode: &str) -> Option<&PostcodeRecord>;

    /// Exact lookup of a city name, ignoring case and surrounding whitespace.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use postcode_core::{PostcodeDb, PostcodeSearch};
    ///
    /// let db = PostcodeDb::load_from_path("data").unwrap();
    /// if let Some(city) = db.lookup_by_city("  SHAH ALAM ") {
    ///     println!("{}: {}", city.city_state_line(), city.postcode_list());
    /// }
    /// ```
    fn lookup_by_city(&self, city: &str) -> Option<&CityRecord>;

    /// Substring search over city keys.
    ///
    /// Matches the trimmed, lowercased `query` against each city key in
    /// index order and returns up to `limit` display names. The scan stops at
    /// the limit, so results follow index order, not relevance. A blank query
    /// returns nothing rather than every city.
    fn search_cities(&self, query: &str, limit: usize) -> Vec<&str>;

    /// Postcode records in index order.
    fn postcodes<'a>(&'a self) -> Box<dyn Iterator<Item = &'a PostcodeRecord> + 'a>;

    /// City records in index order.
    fn cities<'a>(&'a self) -> Box<dyn Iterator<Item = &'a CityRecord> + 'a>;
}
