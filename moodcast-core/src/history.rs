use serde::{Deserialize, Serialize};

/// Most entries kept in the recent-search list.
pub const MAX_RECENT_SEARCHES: usize = 5;

/// What `add` does when the city is already in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    /// Leave the existing entry where it is. Repeat searches do not
    /// reshuffle the list; order reflects first insertion.
    #[default]
    KeepExisting,
    /// Move the existing entry back to the front (true LRU).
    MoveToFront,
}

/// Bounded, deduplicated, most-recent-first list of searched city names.
/// City names are compared case-sensitively, as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHistory {
    entries: Vec<String>,
    policy: DuplicatePolicy,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self { entries: Vec::new(), policy }
    }

    pub fn add(&mut self, city: &str) {
        if let Some(pos) = self.entries.iter().position(|e| e == city) {
            match self.policy {
                DuplicatePolicy::KeepExisting => return,
                DuplicatePolicy::MoveToFront => {
                    let existing = self.entries.remove(pos);
                    self.entries.insert(0, existing);
                    return;
                }
            }
        }

        self.entries.insert(0, city.to_string());
        self.entries.truncate(MAX_RECENT_SEARCHES);
    }

    pub fn list(&self) -> &[String] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first_and_bounded() {
        let mut history = SearchHistory::new();
        for city in ["A", "B", "C", "D", "E", "F"] {
            history.add(city);
        }

        assert_eq!(history.list(), ["F", "E", "D", "C", "B"]);
    }

    #[test]
    fn repeat_search_keeps_existing_position() {
        let mut history = SearchHistory::new();
        history.add("London");
        history.add("Tokyo");
        history.add("London");

        assert_eq!(history.list(), ["Tokyo", "London"]);
    }

    #[test]
    fn move_to_front_policy_reorders_on_repeat() {
        let mut history = SearchHistory::with_policy(DuplicatePolicy::MoveToFront);
        history.add("London");
        history.add("Tokyo");
        history.add("London");

        assert_eq!(history.list(), ["London", "Tokyo"]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn city_names_compare_case_sensitively() {
        let mut history = SearchHistory::new();
        history.add("london");
        history.add("London");

        assert_eq!(history.list(), ["London", "london"]);
    }

    #[test]
    fn never_exceeds_bound_or_duplicates() {
        let mut history = SearchHistory::new();
        for city in ["A", "B", "A", "C", "B", "D", "E", "F", "A", "G"] {
            history.add(city);

            assert!(history.len() <= MAX_RECENT_SEARCHES);
            let mut seen = history.list().to_vec();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), history.len(), "duplicate entry after adding {city}");
        }
    }

    #[test]
    fn clear_empties_the_list() {
        let mut history = SearchHistory::new();
        history.add("Paris");
        assert!(!history.is_empty());

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }
}
