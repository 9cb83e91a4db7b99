//! Numeric salary-range dimension (advanced panel).
//!
//! The contract is an inclusive-OR across the two bound checks, not a
//! min<=x<=max range test:
//!
//! - both bounds empty: every posting passes;
//! - otherwise a posting passes if (min is set AND its head key >= min) OR
//!   (max is set AND its tail key <= max).
//!
//! So with only one bound configured, the other side never fails anyone,
//! and with both configured a posting only needs to satisfy one side. A
//! bound with no digits in it fails its own branch and nothing else; a
//! posting whose salary string has no digits fails both branches. These are
//! the shipped semantics, reproduced deliberately.

use crate::salary;
use crate::traits::Filter;
use anyhow::Result;
use catalog::JobPosting;
use query::QueryState;

pub struct SalaryRangeFilter;

impl Filter for SalaryRangeFilter {
    fn name(&self) -> &str {
        "SalaryRangeFilter"
    }

    fn apply(&self, jobs: Vec<JobPosting>, query: &QueryState) -> Result<Vec<JobPosting>> {
        let min_raw = query.advanced.salary_min.as_str();
        let max_raw = query.advanced.salary_max.as_str();
        if min_raw.is_empty() && max_raw.is_empty() {
            return Ok(jobs);
        }

        let min = salary::parse_bound(min_raw);
        let max = salary::parse_bound(max_raw);

        let filtered: Vec<JobPosting> = jobs
            .into_iter()
            .filter(|job| {
                let min_ok = !min_raw.is_empty()
                    && matches!(
                        (min, salary::head_key(&job.salary)),
                        (Some(bound), Some(key)) if key >= bound
                    );
                let max_ok = !max_raw.is_empty()
                    && matches!(
                        (max, salary::tail_key(&job.salary)),
                        (Some(bound), Some(key)) if key <= bound
                    );
                min_ok || max_ok
            })
            .collect();
        Ok(filtered)
    }
}
