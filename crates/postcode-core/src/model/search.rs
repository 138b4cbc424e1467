// crates/postcode-core/src/model/search.rs
use crate::common::DbStats;
use crate::model::canonical::StateSummary;
use crate::model::db::PostcodeDb;
use crate::model::records::{CityRecord, PostcodeRecord, PostcodeValidation};
use crate::text::fold_key;
use crate::traits::PostcodeSearch;

impl PostcodeSearch for PostcodeDb {
    fn stats(&self) -> DbStats {
        self.stats
    }

    fn states(&self) -> &[StateSummary] {
        &self.states
    }

    fn validate_postcode(&self, postcode: &str) -> PostcodeValidation {
        let pc = postcode.trim();
        match self.postcodes.get(pc) {
            Some(rec) => PostcodeValidation::Valid(rec.clone()),
            None => PostcodeValidation::Invalid {
                postcode: pc.to_owned(),
            },
        }
    }

    fn lookup_by_postcode(&self, postcode: &str) -> Option<&PostcodeRecord> {
        self.postcodes.get(postcode.trim())
    }

    fn lookup_by_city(&self, city: &str) -> Option<&CityRecord> {
        self.cities.get(&fold_key(city))
    }

    fn search_cities(&self, query: &str, limit: usize) -> Vec<&str> {
        let q = fold_key(query);
        let mut out = Vec::new();
        if q.is_empty() || limit == 0 {
            return out;
        }

        for (key, rec) in self.cities.iter() {
            if key.contains(&q) {
                out.push(rec.city.as_str());
                if out.len() >= limit {
                    break;
                }
            }
        }
        out
    }

    fn postcodes<'a>(&'a self) -> Box<dyn Iterator<Item = &'a PostcodeRecord> + 'a> {
        Box::new(self.postcodes.values())
    }

    fn cities<'a>(&'a self) -> Box<dyn Iterator<Item = &'a CityRecord> + 'a> {
        Box::new(self.cities.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::canonical::{CanonicalCity, CanonicalState};

    fn db() -> PostcodeDb {
        PostcodeDb::from_states(vec![CanonicalState {
            name: "Selangor".into(),
            code: "SGR".into(),
            cities: vec![
                CanonicalCity {
                    name: "Shah Alam".into(),
                    postcodes: vec!["40000".into(), "40100".into()],
                },
                CanonicalCity {
                    name: "Petaling Jaya".into(),
                    postcodes: vec!["46000".into()],
                },
                CanonicalCity {
                    name: "Shah Berlin".into(),
                    postcodes: vec!["40999".into()],
                },
            ],
        }])
    }

    #[test]
    fn lookup_and_validate() {
        let db = db();
        let rec = db.lookup_by_postcode(" 40100 ").unwrap();
        assert_eq!(rec.postcode, "40100");
        assert_eq!(rec.city, "Shah Alam");

        assert!(db.validate_postcode("46000").is_valid());
        assert_eq!(
            db.validate_postcode(" 99999"),
            PostcodeValidation::Invalid {
                postcode: "99999".into()
            }
        );
        assert!(db.lookup_by_postcode("").is_none());
    }

    #[test]
    fn city_lookup_ignores_case_and_padding() {
        let db = db();
        assert_eq!(
            db.lookup_by_city("Shah Alam"),
            db.lookup_by_city("  SHAH ALAM ")
        );
        assert!(db.lookup_by_city("Shah").is_none());
    }

    #[test]
    fn search_respects_limit_and_order() {
        let db = db();
        assert_eq!(db.search_cities("shah", 1), vec!["Shah Alam"]);
        assert_eq!(db.search_cities("SHAH", 10), vec!["Shah Alam", "Shah Berlin"]);
        assert_eq!(db.search_cities("a", 2).len(), 2);
        assert!(db.search_cities("a", 0).is_empty());
        assert!(db.search_cities("", 10).is_empty());
        assert!(db.search_cities("   ", 10).is_empty());
        assert!(db.search_cities("kuching", 10).is_empty());
    }
}
