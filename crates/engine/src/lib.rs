//! # Engine Crate
//!
//! The QuickHire search core: multi-dimension filtering, sorting, and
//! bookmark reconciliation over an in-memory job catalog.
//!
//! ## Architecture
//! A search runs in three stages:
//! 1. Filters narrow the catalog, one dimension at a time (conjunctive AND)
//! 2. The sort comparator orders the survivors (stable; ties keep feed order)
//! 3. Each survivor is decorated with the viewer's bookmark state
//!
//! The whole pass is a pure, synchronous function over snapshots: the
//! engine never mutates a posting, never touches storage, and never awaits.
//! When the catalog or bookmark set changes, the caller re-invokes it.
//!
//! ## Example Usage
//! ```ignore
//! use engine::SearchEngine;
//! use query::QueryState;
//!
//! let engine = SearchEngine::new();
//! let mut query = QueryState::new();
//! query.keyword = "react".to_string();
//!
//! let matches = engine.search(postings, &query, bookmarks.ids())?;
//! for m in &matches {
//!     println!("{} {}", if m.bookmarked { "*" } else { " " }, m.posting.title);
//! }
//! ```

pub mod filters;
pub mod pipeline;
pub mod salary;
pub mod search;
pub mod sort;
pub mod traits;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export main types
pub use search::{JobMatch, SearchEngine};
pub use pipeline::FilterPipeline;
pub use traits::Filter;
