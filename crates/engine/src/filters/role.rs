//! Role dimension: exact, case-sensitive equality against the posting's
//! role-category label.
//!
//! The query carries a raw string (it arrives from a URL parameter), so an
//! unknown or mis-cased role value is a filter that matches nothing rather
//! than a parse error.

use crate::traits::Filter;
use anyhow::Result;
use catalog::JobPosting;
use query::QueryState;

pub struct RoleFilter;

impl Filter for RoleFilter {
    fn name(&self) -> &str {
        "RoleFilter"
    }

    fn apply(&self, jobs: Vec<JobPosting>, query: &QueryState) -> Result<Vec<JobPosting>> {
        if query.role.is_empty() {
            return Ok(jobs);
        }

        let filtered: Vec<JobPosting> = jobs
            .into_iter()
            .filter(|job| job.role.as_str() == query.role)
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ids, posting};
    use catalog::RoleCategory;

    #[test]
    fn test_exact_role_match() {
        let engineer = posting(1, "Frontend Engineer");
        let mut manager = posting(2, "Product Manager");
        manager.role = RoleCategory::Manager;

        let mut query = QueryState::new();
        query.role = "Engineer".to_string();

        let filtered = RoleFilter.apply(vec![engineer, manager], &query).unwrap();
        assert_eq!(ids(&filtered), vec![1]);
    }

    #[test]
    fn test_role_match_is_case_sensitive() {
        let jobs = vec![posting(1, "Frontend Engineer")];
        let mut query = QueryState::new();
        query.role = "engineer".to_string();

        let filtered = RoleFilter.apply(jobs, &query).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_unknown_role_matches_nothing() {
        let jobs = vec![posting(1, "Frontend Engineer")];
        let mut query = QueryState::new();
        query.role = "Astronaut".to_string();

        let filtered = RoleFilter.apply(jobs, &query).unwrap();
        assert!(filtered.is_empty());
    }
}
