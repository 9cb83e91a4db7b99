//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filter dimensions to be applied to the posting list.

use anyhow::Result;
use catalog::JobPosting;
use query::QueryState;

/// One filter dimension of a search.
///
/// Dimensions compose conjunctively: a posting appears in the result only if
/// every filter in the pipeline keeps it. A dimension whose query field is
/// empty must pass the input through unchanged.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec<JobPosting> and return a filtered Vec
/// - This allows for efficient narrowing without unnecessary cloning
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter dimension to the surviving postings.
    ///
    /// # Arguments
    /// * `jobs` - The postings still in play (takes ownership)
    /// * `query` - The current search request
    ///
    /// # Returns
    /// * `Ok(Vec<JobPosting>)` - The postings that pass this dimension
    /// * `Err` - If filtering fails
    fn apply(&self, jobs: Vec<JobPosting>, query: &QueryState) -> Result<Vec<JobPosting>>;
}
