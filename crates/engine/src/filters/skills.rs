//! Required-skills dimension.
//!
//! ANY-match: a posting passes when at least one required skill appears in
//! its skill set. Requiring every skill would be stricter, but ANY is the
//! shipped contract and changing it would shrink live result sets.
//! Membership is exact and case-sensitive, unlike the keyword dimension.

use crate::traits::Filter;
use anyhow::Result;
use catalog::JobPosting;
use query::QueryState;

pub struct SkillsFilter;

impl Filter for SkillsFilter {
    fn name(&self) -> &str {
        "SkillsFilter"
    }

    fn apply(&self, jobs: Vec<JobPosting>, query: &QueryState) -> Result<Vec<JobPosting>> {
        let required = &query.advanced.skills;
        if required.is_empty() {
            return Ok(jobs);
        }

        let filtered: Vec<JobPosting> = jobs
            .into_iter()
            .filter(|job| required.iter().any(|skill| job.skills.contains(skill)))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ids, posting};

    #[test]
    fn test_any_match_keeps_partial_overlap() {
        let mut react = posting(1, "Frontend Engineer");
        react.skills = vec!["React".to_string(), "TypeScript".to_string()];
        let mut figma = posting(2, "UX Designer");
        figma.skills = vec!["Figma".to_string()];

        let mut query = QueryState::new();
        query.advanced.skills = vec!["React".to_string(), "AWS".to_string()];

        // Posting 1 has React but not AWS; ANY-match keeps it.
        let filtered = SkillsFilter.apply(vec![react, figma], &query).unwrap();
        assert_eq!(ids(&filtered), vec![1]);
    }

    #[test]
    fn test_disjoint_skills_excluded() {
        let mut job = posting(1, "Frontend Engineer");
        job.skills = vec!["React".to_string()];

        let mut query = QueryState::new();
        query.advanced.skills = vec!["Rust".to_string()];

        let filtered = SkillsFilter.apply(vec![job], &query).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let mut job = posting(1, "Frontend Engineer");
        job.skills = vec!["React".to_string()];

        let mut query = QueryState::new();
        query.advanced.skills = vec!["react".to_string()];

        let filtered = SkillsFilter.apply(vec![job], &query).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_empty_requirement_passes_everything() {
        let jobs = vec![posting(1, "A"), posting(2, "B")];
        let filtered = SkillsFilter.apply(jobs, &QueryState::new()).unwrap();
        assert_eq!(filtered.len(), 2);
    }
}
