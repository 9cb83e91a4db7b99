//! The viewer's persisted bookmark set.
//!
//! Set semantics over job ids: present or absent, no duplicates, no order.
//! Loaded once at session start; every toggle persists synchronously so
//! the store is never observably stale within a session.

use crate::error::Result;
use crate::store::PrefStore;
use catalog::JobId;
use std::collections::HashSet;

/// Storage key for the bookmark payload (a JSON array of job ids).
pub const BOOKMARKS_KEY: &str = "bookmarked_jobs";

pub struct Bookmarks {
    ids: HashSet<JobId>,
    store: Box<dyn PrefStore>,
}

impl Bookmarks {
    /// Load the persisted set.
    ///
    /// Fails soft: a missing key or a payload that doesn't parse as an id
    /// array yields the empty set with a warning, never an error.
    pub fn load(store: impl PrefStore + 'static) -> Self {
        let ids = match store.load(BOOKMARKS_KEY) {
            None => HashSet::new(),
            Some(raw) => match serde_json::from_str::<Vec<JobId>>(&raw) {
                Ok(ids) => ids.into_iter().collect(),
                Err(err) => {
                    tracing::warn!("discarding corrupt bookmark payload: {err}");
                    HashSet::new()
                }
            },
        };

        Self {
            ids,
            store: Box::new(store),
        }
    }

    pub fn contains(&self, id: JobId) -> bool {
        self.ids.contains(&id)
    }

    /// Membership view for the engine's bookmark decoration.
    pub fn ids(&self) -> &HashSet<JobId> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Add the id if absent, remove it if present, and persist the result.
    ///
    /// Returns true when the job is bookmarked after the toggle. Toggling
    /// the same id twice restores the original membership.
    pub fn toggle(&mut self, id: JobId) -> Result<bool> {
        let now_bookmarked = if self.ids.contains(&id) {
            self.ids.remove(&id);
            false
        } else {
            self.ids.insert(id);
            true
        };
        self.persist()?;
        Ok(now_bookmarked)
    }

    fn persist(&self) -> Result<()> {
        // Sorted for a stable on-disk representation; readers only need
        // set equality.
        let mut ids: Vec<JobId> = self.ids.iter().copied().collect();
        ids.sort_unstable();

        let payload = serde_json::to_string(&ids).map_err(|source| {
            crate::error::PrefsError::Encode {
                key: BOOKMARKS_KEY.to_string(),
                source,
            }
        })?;
        self.store.save(BOOKMARKS_KEY, &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_missing_payload_is_empty_set() {
        let bookmarks = Bookmarks::load(MemoryStore::new());
        assert!(bookmarks.is_empty());
    }

    #[test]
    fn test_corrupt_payload_degrades_to_empty() {
        let store = MemoryStore::new();
        store.preload(BOOKMARKS_KEY, "{definitely not an id array");

        let bookmarks = Bookmarks::load(store);
        assert!(bookmarks.is_empty());
    }

    #[test]
    fn test_toggle_persists_every_mutation() {
        let store = MemoryStore::new();
        let view = store.clone();
        let mut bookmarks = Bookmarks::load(store);

        assert!(bookmarks.toggle(3).unwrap());
        assert!(bookmarks.toggle(1).unwrap());
        assert_eq!(view.load(BOOKMARKS_KEY).as_deref(), Some("[1,3]"));

        assert!(!bookmarks.toggle(3).unwrap());
        assert_eq!(view.load(BOOKMARKS_KEY).as_deref(), Some("[1]"));
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut bookmarks = Bookmarks::load(MemoryStore::new());
        bookmarks.toggle(7).unwrap();
        let before = bookmarks.ids().clone();

        bookmarks.toggle(42).unwrap();
        bookmarks.toggle(42).unwrap();
        assert_eq!(bookmarks.ids(), &before);
    }

    #[test]
    fn test_reload_round_trips_membership() {
        let store = MemoryStore::new();
        let mut bookmarks = Bookmarks::load(store.clone());
        bookmarks.toggle(2).unwrap();
        bookmarks.toggle(5).unwrap();

        let reloaded = Bookmarks::load(store);
        assert!(reloaded.contains(2));
        assert!(reloaded.contains(5));
        assert_eq!(reloaded.len(), 2);
    }
}
