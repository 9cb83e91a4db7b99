//! Sort comparators applied after filtering.
//!
//! All sorts are stable, so postings that compare equal keep their catalog
//! (feed) order. Relevance is the identity: the catalog order IS the
//! relevance order.
//!
//! Both salary directions compare the head key of the salary display string
//! (its leading three digits); see `salary` for why the extraction looks
//! the way it does. A salary string without digits sorts as 0.

use crate::salary;
use catalog::JobPosting;
use query::SortKey;

/// Reorder `jobs` in place according to the requested sort key.
pub fn sort_postings(jobs: &mut [JobPosting], key: SortKey) {
    match key {
        SortKey::Relevance => {}
        SortKey::Date => jobs.sort_by(|a, b| b.posted.cmp(&a.posted)),
        SortKey::SalaryHigh => jobs.sort_by(|a, b| salary_key(b).cmp(&salary_key(a))),
        SortKey::SalaryLow => jobs.sort_by(|a, b| salary_key(a).cmp(&salary_key(b))),
        SortKey::Company => jobs.sort_by(|a, b| a.company.cmp(&b.company)),
    }
}

fn salary_key(job: &JobPosting) -> u64 {
    salary::head_key(&job.salary).unwrap_or(0)
}
