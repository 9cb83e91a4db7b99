//! The search engine: filter, sort, decorate.
//!
//! A search is a pure pass over in-memory inputs. The engine never awaits
//! its collaborators; whoever owns the catalog snapshot and bookmark set
//! re-invokes `search` when either changes.

use crate::pipeline::FilterPipeline;
use crate::sort;
use anyhow::Result;
use catalog::{JobId, JobPosting};
use query::QueryState;
use std::collections::HashSet;

/// A posting that survived filtering, decorated with the viewer's bookmark
/// state. Recomputed on every pass; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct JobMatch {
    pub posting: JobPosting,
    pub bookmarked: bool,
}

/// Combines a catalog snapshot, a query, and a bookmark set into an ordered
/// result list.
pub struct SearchEngine {
    pipeline: FilterPipeline,
}

impl SearchEngine {
    /// Engine with the standard ten-dimension pipeline.
    pub fn new() -> Self {
        Self {
            pipeline: FilterPipeline::standard(),
        }
    }

    /// Engine with a caller-assembled pipeline (mainly for tests).
    pub fn with_pipeline(pipeline: FilterPipeline) -> Self {
        Self { pipeline }
    }

    /// Run one filter pass.
    ///
    /// ## Algorithm
    /// 1. Narrow the catalog through every filter dimension
    /// 2. Sort survivors per the query's sort key (stable; ties keep feed order)
    /// 3. Decorate each survivor with `bookmarked = bookmarks.contains(id)`
    ///
    /// An empty catalog yields an empty result, not an error; malformed
    /// filter values have already degraded inside their dimensions.
    pub fn search(
        &self,
        catalog: Vec<JobPosting>,
        query: &QueryState,
        bookmarks: &HashSet<JobId>,
    ) -> Result<Vec<JobMatch>> {
        let mut survivors = self.pipeline.apply(catalog, query)?;
        sort::sort_postings(&mut survivors, query.advanced.sort);

        let matches: Vec<JobMatch> = survivors
            .into_iter()
            .map(|posting| JobMatch {
                bookmarked: bookmarks.contains(&posting.id),
                posting,
            })
            .collect();

        tracing::debug!("search produced {} matches", matches.len());
        Ok(matches)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::posting;

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        let engine = SearchEngine::new();
        let matches = engine
            .search(Vec::new(), &QueryState::new(), &HashSet::new())
            .unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_bookmark_decoration_is_per_result() {
        let engine = SearchEngine::new();
        let jobs = vec![posting(1, "Frontend Engineer"), posting(2, "Product Manager")];
        let bookmarks: HashSet<JobId> = [2].into_iter().collect();

        let matches = engine.search(jobs, &QueryState::new(), &bookmarks).unwrap();
        assert!(!matches[0].bookmarked);
        assert!(matches[1].bookmarked);
    }
}
