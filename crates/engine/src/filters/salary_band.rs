//! Salary-band dimension: exact equality against the posting's precomputed
//! bracket label ("$50k+", "$100k+", "$150k+").
//!
//! This is a coarse label match, not a numeric comparison; the numeric
//! check is the advanced salary-range dimension.

use crate::traits::Filter;
use anyhow::Result;
use catalog::JobPosting;
use query::QueryState;

pub struct SalaryBandFilter;

impl Filter for SalaryBandFilter {
    fn name(&self) -> &str {
        "SalaryBandFilter"
    }

    fn apply(&self, jobs: Vec<JobPosting>, query: &QueryState) -> Result<Vec<JobPosting>> {
        if query.salary_band.is_empty() {
            return Ok(jobs);
        }

        let filtered: Vec<JobPosting> = jobs
            .into_iter()
            .filter(|job| job.salary_band.as_str() == query.salary_band)
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ids, posting};
    use catalog::SalaryBand;

    #[test]
    fn test_band_label_match() {
        let high = posting(1, "Frontend Engineer"); // $100k+ fixture default
        let mut low = posting(2, "Product Manager");
        low.salary_band = SalaryBand::From50k;

        let mut query = QueryState::new();
        query.salary_band = "$100k+".to_string();

        let filtered = SalaryBandFilter.apply(vec![high, low], &query).unwrap();
        assert_eq!(ids(&filtered), vec![1]);
    }

    #[test]
    fn test_empty_band_passes_everything() {
        let jobs = vec![posting(1, "A"), posting(2, "B")];
        let filtered = SalaryBandFilter.apply(jobs, &QueryState::new()).unwrap();
        assert_eq!(filtered.len(), 2);
    }
}
