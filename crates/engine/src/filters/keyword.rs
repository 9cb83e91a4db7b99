//! Free-text keyword dimension.
//!
//! A posting matches when the keyword is a case-insensitive substring of
//! the title OR of any one of its skill tags.

use crate::traits::Filter;
use anyhow::Result;
use catalog::JobPosting;
use query::QueryState;

/// Case-insensitive substring match on title or skills.
pub struct KeywordFilter;

impl Filter for KeywordFilter {
    fn name(&self) -> &str {
        "KeywordFilter"
    }

    fn apply(&self, jobs: Vec<JobPosting>, query: &QueryState) -> Result<Vec<JobPosting>> {
        if query.keyword.is_empty() {
            return Ok(jobs);
        }
        let needle = query.keyword.to_lowercase();

        let filtered: Vec<JobPosting> = jobs
            .into_iter()
            .filter(|job| {
                job.title.to_lowercase().contains(&needle)
                    || job
                        .skills
                        .iter()
                        .any(|skill| skill.to_lowercase().contains(&needle))
            })
            .collect();
        Ok(filtered)
    }
}
