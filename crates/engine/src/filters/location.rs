//! Location dimension: case-insensitive substring match on the posting's
//! free-text location.

use crate::traits::Filter;
use anyhow::Result;
use catalog::JobPosting;
use query::QueryState;

pub struct LocationFilter;

impl Filter for LocationFilter {
    fn name(&self) -> &str {
        "LocationFilter"
    }

    fn apply(&self, jobs: Vec<JobPosting>, query: &QueryState) -> Result<Vec<JobPosting>> {
        if query.location.is_empty() {
            return Ok(jobs);
        }
        let needle = query.location.to_lowercase();

        let filtered: Vec<JobPosting> = jobs
            .into_iter()
            .filter(|job| job.location.to_lowercase().contains(&needle))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ids, posting};

    #[test]
    fn test_substring_match_on_location() {
        let mut sf = posting(1, "Backend API Developer");
        sf.location = "San Francisco".to_string();
        let mut ny = posting(2, "Product Manager");
        ny.location = "New York".to_string();

        let mut query = QueryState::new();
        query.location = "francisco".to_string();

        let filtered = LocationFilter.apply(vec![sf, ny], &query).unwrap();
        assert_eq!(ids(&filtered), vec![1]);
    }

    #[test]
    fn test_empty_location_passes_everything() {
        let jobs = vec![posting(1, "A"), posting(2, "B")];
        let filtered = LocationFilter.apply(jobs, &QueryState::new()).unwrap();
        assert_eq!(filtered.len(), 2);
    }
}
