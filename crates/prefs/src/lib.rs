//! # Prefs Crate
//!
//! Per-viewer state that outlives a session: the bookmark set and named
//! saved searches, persisted through an injected key-value port.
//!
//! ## Main Components
//!
//! - **store**: the `PrefStore` port plus file-backed and in-memory stores
//! - **bookmarks**: persisted job-id set with synchronous toggle
//! - **saved_searches**: named captures of the shareable query fields
//! - **error**: error types for persistence failures
//!
//! ## Design Note
//! Reads fail soft (missing or corrupt data becomes the empty state) so a
//! damaged preference file can never block searching; only writes surface
//! errors.

pub mod bookmarks;
pub mod error;
pub mod saved_searches;
pub mod store;

// Re-export main types
pub use bookmarks::{BOOKMARKS_KEY, Bookmarks};
pub use error::{PrefsError, Result};
pub use saved_searches::{SAVED_SEARCHES_KEY, SavedSearch, SavedSearches};
pub use store::{JsonFileStore, MemoryStore, PrefStore};
