// crates/postcode-core/src/model/db.rs
use crate::common::DbStats;
use crate::model::canonical::{CanonicalState, StateSummary};
use crate::model::index::OrderedIndex;
use crate::model::records::{CityRecord, PostcodeRecord};
use serde::{Deserialize, Serialize};

/// The master database struct.
///
/// Built once from merged canonical states and never mutated afterwards.
/// Both indexes are private; reads go through
/// [`PostcodeSearch`](crate::traits::PostcodeSearch).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostcodeDb {
    /// States in index-build order.
    pub(crate) states: Vec<StateSummary>,
    /// Postcode string -> record.
    pub(crate) postcodes: OrderedIndex<PostcodeRecord>,
    /// Trimmed lowercase city name -> record.
    pub(crate) cities: OrderedIndex<CityRecord>,
    pub(crate) stats: DbStats,
}

impl PostcodeDb {
    /// **Index Builder:** merged states -> postcode and city indexes.
    ///
    /// Walks states, then cities, then postcodes in their given order. A city
    /// or postcode key seen twice keeps the record written last, including
    /// repeats inside one state. Empty city keys and empty postcodes are
    /// skipped. The input is either the output of
    /// [`merge_states`](crate::model::merge::merge_states) or the states of a
    /// single source file, which may repeat a state name.
    pub fn from_states(states: Vec<CanonicalState>) -> Self {
        let mut postcodes = OrderedIndex::new();
        let mut cities = OrderedIndex::new();
        let mut stats = DbStats {
            states: states.len(),
            ..DbStats::default()
        };
        let summaries = states.iter().map(StateSummary::from).collect();

        for state in states {
            for city in state.cities {
                let city_key = city.key();

                for pc in &city.postcodes {
                    let pc = pc.trim();
                    if pc.is_empty() {
                        continue;
                    }
                    let rec = PostcodeRecord {
                        postcode: pc.to_owned(),
                        city: city.name.clone(),
                        state: state.name.clone(),
                        state_code: state.code.clone(),
                    };
                    if let Some(old) = postcodes.upsert(pc.to_owned(), rec) {
                        if postcodes.get(pc) != Some(&old) {
                            stats.replaced_postcodes += 1;
                            tracing::debug!(
                                postcode = pc,
                                from = %old.city,
                                to = %city.name,
                                "postcode overwritten"
                            );
                        }
                    }
                }

                if city_key.is_empty() {
                    continue;
                }
                let rec = CityRecord {
                    city: city.name,
                    state: state.name.clone(),
                    state_code: state.code.clone(),
                    postcodes: city.postcodes,
                };
                if let Some(old) = cities.upsert(city_key.clone(), rec) {
                    if cities.get(&city_key) != Some(&old) {
                        stats.replaced_cities += 1;
                        tracing::debug!(city = %old.city, from = %old.state, to = %state.name, "city overwritten");
                    }
                }
            }
        }

        stats.cities = cities.len();
        stats.postcodes = postcodes.len();

        PostcodeDb {
            states: summaries,
            postcodes,
            cities,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::canonical::CanonicalCity;

    fn city(name: &str, pcs: &[&str]) -> CanonicalCity {
        CanonicalCity {
            name: name.into(),
            postcodes: pcs.iter().map(|p| (*p).to_owned()).collect(),
        }
    }

    fn state(name: &str, code: &str, cities: Vec<CanonicalCity>) -> CanonicalState {
        CanonicalState {
            name: name.into(),
            code: code.into(),
            cities,
        }
    }

    #[test]
    fn builds_both_indexes() {
        let db = PostcodeDb::from_states(vec![state(
            "Perlis",
            "PLS",
            vec![city("Kangar", &["01000", "01007"]), city("Arau", &["02600"])],
        )]);

        assert_eq!(db.postcodes.len(), 3);
        assert_eq!(db.cities.len(), 2);
        let rec = db.postcodes.get("02600").unwrap();
        assert_eq!(rec.city, "Arau");
        assert_eq!(rec.state_code, "PLS");
        assert_eq!(db.cities.get("kangar").unwrap().postcodes, vec!["01000", "01007"]);
        assert_eq!(db.stats.states, 1);
    }

    #[test]
    fn later_entries_overwrite_earlier_ones() {
        let db = PostcodeDb::from_states(vec![
            state("Kedah", "KDH", vec![city("Bandar Baharu", &["09800"])]),
            state(
                "Pulau Pinang",
                "PNG",
                vec![city("Bandar Baharu", &["14300"]), city("Nibong Tebal", &["09800"])],
            ),
        ]);

        assert_eq!(db.postcodes.get("09800").unwrap().state, "Pulau Pinang");
        assert_eq!(db.cities.get("bandar baharu").unwrap().postcodes, vec!["14300"]);
        assert_eq!(db.stats.replaced_postcodes, 1);
        assert_eq!(db.stats.replaced_cities, 1);
        // overwritten key keeps its first slot
        assert_eq!(db.cities.iter().next().unwrap().0, "bandar baharu");
    }

    #[test]
    fn repeated_identical_entries_are_not_counted_as_overwrites() {
        let db = PostcodeDb::from_states(vec![
            state("Selangor", "SGR", vec![city("Shah Alam", &["40000", "40000"])]),
            state("Selangor", "SGR", vec![city("Shah Alam", &["40000", "40000"])]),
        ]);

        assert_eq!(db.postcodes.len(), 1);
        assert_eq!(db.stats.replaced_postcodes, 0);
        assert_eq!(db.stats.replaced_cities, 0);
    }

    #[test]
    fn empty_keys_are_not_indexed() {
        let db = PostcodeDb::from_states(vec![state(
            "Sabah",
            "",
            vec![city("", &["88000"]), city("Sandakan", &["", "  ", "90000"])],
        )]);

        assert_eq!(db.cities.len(), 1);
        assert!(db.postcodes.contains_key("88000"));
        assert_eq!(db.postcodes.len(), 2);
    }
}
