//! Named saved searches.
//!
//! A saved search captures only the four shareable fields of a query (the
//! same subset that round-trips through URL parameters); the advanced
//! panel is session-local and is not saved. Saving under an existing name
//! replaces that entry.

use crate::error::{PrefsError, Result};
use crate::store::PrefStore;
use query::QueryState;
use serde::{Deserialize, Serialize};

/// Storage key for the saved-search payload (a JSON array of entries).
pub const SAVED_SEARCHES_KEY: &str = "saved_searches";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSearch {
    pub name: String,
    pub keyword: String,
    pub location: String,
    pub role: String,
    pub salary: String,
}

impl SavedSearch {
    /// Capture the shareable fields of `query` under `name`.
    pub fn capture(name: impl Into<String>, query: &QueryState) -> Self {
        Self {
            name: name.into(),
            keyword: query.keyword.clone(),
            location: query.location.clone(),
            role: query.role.clone(),
            salary: query.salary_band.clone(),
        }
    }

    /// Rebuild a query from this search; advanced filters start fresh.
    pub fn to_query(&self) -> QueryState {
        QueryState {
            keyword: self.keyword.clone(),
            location: self.location.clone(),
            role: self.role.clone(),
            salary_band: self.salary.clone(),
            advanced: Default::default(),
        }
    }
}

pub struct SavedSearches {
    entries: Vec<SavedSearch>,
    store: Box<dyn PrefStore>,
}

impl SavedSearches {
    /// Load persisted searches; missing or corrupt payloads degrade to an
    /// empty list with a warning.
    pub fn load(store: impl PrefStore + 'static) -> Self {
        let entries = match store.load(SAVED_SEARCHES_KEY) {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!("discarding corrupt saved-search payload: {err}");
                    Vec::new()
                }
            },
        };

        Self {
            entries,
            store: Box::new(store),
        }
    }

    pub fn list(&self) -> &[SavedSearch] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&SavedSearch> {
        self.entries.iter().find(|s| s.name == name)
    }

    /// Insert or replace by name, then persist.
    pub fn save(&mut self, search: SavedSearch) -> Result<()> {
        match self.entries.iter_mut().find(|s| s.name == search.name) {
            Some(existing) => *existing = search,
            None => self.entries.push(search),
        }
        self.persist()
    }

    /// Remove by name, persisting when something was removed. Returns
    /// whether an entry existed.
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        let before = self.entries.len();
        self.entries.retain(|s| s.name != name);
        if self.entries.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<()> {
        let payload =
            serde_json::to_string(&self.entries).map_err(|source| PrefsError::Encode {
                key: SAVED_SEARCHES_KEY.to_string(),
                source,
            })?;
        self.store.save(SAVED_SEARCHES_KEY, &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn react_remote() -> QueryState {
        let mut query = QueryState::new();
        query.keyword = "react".to_string();
        query.location = "Remote".to_string();
        query.role = "Engineer".to_string();
        query
    }

    #[test]
    fn test_capture_and_apply_round_trip() {
        let query = react_remote();
        let saved = SavedSearch::capture("remote react", &query);

        let applied = saved.to_query();
        assert_eq!(applied, query);
    }

    #[test]
    fn test_apply_resets_advanced_filters() {
        let mut query = react_remote();
        query.advanced.salary_min = "120".to_string();

        let applied = SavedSearch::capture("s", &query).to_query();
        assert!(applied.advanced.salary_min.is_empty());
        assert_eq!(applied.keyword, "react");
    }

    #[test]
    fn test_same_name_replaces() {
        let mut searches = SavedSearches::load(MemoryStore::new());
        searches
            .save(SavedSearch::capture("daily", &react_remote()))
            .unwrap();

        let mut other = QueryState::new();
        other.keyword = "python".to_string();
        searches
            .save(SavedSearch::capture("daily", &other))
            .unwrap();

        assert_eq!(searches.list().len(), 1);
        assert_eq!(searches.get("daily").unwrap().keyword, "python");
    }

    #[test]
    fn test_persists_across_loads() {
        let store = MemoryStore::new();
        let mut searches = SavedSearches::load(store.clone());
        searches
            .save(SavedSearch::capture("daily", &react_remote()))
            .unwrap();

        let reloaded = SavedSearches::load(store);
        assert_eq!(reloaded.get("daily").unwrap().keyword, "react");
    }

    #[test]
    fn test_remove_reports_membership() {
        let mut searches = SavedSearches::load(MemoryStore::new());
        searches
            .save(SavedSearch::capture("daily", &react_remote()))
            .unwrap();

        assert!(searches.remove("daily").unwrap());
        assert!(!searches.remove("daily").unwrap());
        assert!(searches.list().is_empty());
    }

    #[test]
    fn test_corrupt_payload_degrades_to_empty() {
        let store = MemoryStore::new();
        store.preload(SAVED_SEARCHES_KEY, "42");

        let searches = SavedSearches::load(store);
        assert!(searches.list().is_empty());
    }
}
