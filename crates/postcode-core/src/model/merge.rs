// crates/postcode-core/src/model/merge.rs
use crate::model::canonical::CanonicalState;
use std::collections::HashMap;

/// De-duplicates states coming from several source files.
///
/// States are keyed by [`CanonicalState::merge_key`]; an empty key is dropped.
/// When two states share a key the one with more cities is kept as a whole,
/// an equal count keeps the earlier one. The cities of the losing state are
/// not merged in. Each key keeps the position of its first occurrence.
pub fn merge_states<I>(states: I) -> Vec<CanonicalState>
where
    I: IntoIterator<Item = CanonicalState>,
{
    let mut merged: Vec<CanonicalState> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for state in states {
        let key = state.merge_key();
        if key.is_empty() {
            tracing::debug!(cities = state.city_count(), "dropping state without a name");
            continue;
        }

        match slots.get(&key).copied() {
            None => {
                slots.insert(key, merged.len());
                merged.push(state);
            }
            Some(slot) => {
                let current = &mut merged[slot];
                if state.city_count() > current.city_count() {
                    tracing::debug!(
                        state = %state.name,
                        kept = state.city_count(),
                        dropped = current.city_count(),
                        "duplicate state replaced by a more complete one"
                    );
                    *current = state;
                } else {
                    tracing::debug!(
                        state = %state.name,
                        kept = current.city_count(),
                        dropped = state.city_count(),
                        "duplicate state ignored"
                    );
                }
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::canonical::CanonicalCity;

    fn state(name: &str, cities: &[&str]) -> CanonicalState {
        CanonicalState {
            name: name.into(),
            code: String::new(),
            cities: cities
                .iter()
                .map(|c| CanonicalCity {
                    name: (*c).into(),
                    postcodes: Vec::new(),
                })
                .collect(),
        }
    }

    fn names(states: &[CanonicalState]) -> Vec<&str> {
        states.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn larger_duplicate_replaces_in_place() {
        let merged = merge_states(vec![
            state("Johor", &["Batu Pahat"]),
            state("Perlis", &["Kangar"]),
            state("JOHOR ", &["Johor Bahru", "Kluang"]),
        ]);

        assert_eq!(names(&merged), vec!["JOHOR ", "Perlis"]);
        assert_eq!(merged[0].city_count(), 2);
        assert!(merged[0].cities.iter().all(|c| c.name != "Batu Pahat"));
    }

    #[test]
    fn equal_or_smaller_duplicate_is_ignored() {
        let merged = merge_states(vec![
            state("Kedah", &["Alor Setar", "Sungai Petani"]),
            state("kedah", &["Jitra", "Kulim"]),
            state("Kedah", &["Langkawi"]),
        ]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].cities[0].name, "Alor Setar");
    }

    #[test]
    fn unnamed_states_are_dropped() {
        let merged = merge_states(vec![state("", &["Somewhere"]), state("Sabah", &[])]);
        assert_eq!(names(&merged), vec!["Sabah"]);
    }
}
