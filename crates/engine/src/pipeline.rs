//! The FilterPipeline orchestrates multiple filter dimensions.
//!
//! Dimensions compose conjunctively: each filter narrows the survivors of
//! the previous one, so a posting reaches the result only if every
//! dimension passes it.

use crate::filters::{
    CompanySizeFilter, ExperienceFilter, JobTypeFilter, KeywordFilter, LocationFilter,
    RemoteFilter, RoleFilter, SalaryBandFilter, SalaryRangeFilter, SkillsFilter,
};
use crate::traits::Filter;
use anyhow::Result;
use catalog::JobPosting;
use query::QueryState;

/// Chains filter dimensions into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(KeywordFilter)
///     .add_filter(RoleFilter);
///
/// let survivors = pipeline.apply(postings, &query)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Every search dimension, in evaluation order: the four shareable base
    /// fields first, then the advanced-panel dimensions.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(KeywordFilter)
            .add_filter(LocationFilter)
            .add_filter(RoleFilter)
            .add_filter(SalaryBandFilter)
            .add_filter(ExperienceFilter)
            .add_filter(JobTypeFilter)
            .add_filter(RemoteFilter)
            .add_filter(CompanySizeFilter)
            .add_filter(SkillsFilter)
            .add_filter(SalaryRangeFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the postings.
    ///
    /// # Arguments
    /// * `jobs` - The postings to filter
    /// * `query` - The current search request
    ///
    /// # Returns
    /// * `Ok(Vec<JobPosting>)` - The postings passing every dimension
    /// * `Err` - If any filter fails
    pub fn apply(&self, jobs: Vec<JobPosting>, query: &QueryState) -> Result<Vec<JobPosting>> {
        let mut current = jobs;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, query)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
