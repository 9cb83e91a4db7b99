//! The catalog provider boundary.
//!
//! The search engine consumes an ordered posting list and nothing else; where
//! that list comes from (built-in seed data, a JSON file, eventually a
//! backend query) is hidden behind this trait.

use crate::error::Result;
use crate::types::JobPosting;

/// Supplies the full set of postings available to filter.
///
/// The returned order is meaningful: it is the feed order the engine
/// preserves under relevance sort. Providers may be called more than once
/// per session and should return the same catalog each time.
pub trait CatalogProvider: Send + Sync {
    fn list_postings(&self) -> Result<Vec<JobPosting>>;
}
