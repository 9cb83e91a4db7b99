//! Advanced exact-match dimensions: experience level, job type, remote
//! arrangement, and company size.
//!
//! These four arrive from the advanced-filter panel already typed, so each
//! filter is a straight equality check against an optional enum; `None`
//! means the dimension is unconstrained.

use crate::traits::Filter;
use anyhow::Result;
use catalog::JobPosting;
use query::QueryState;

pub struct ExperienceFilter;

impl Filter for ExperienceFilter {
    fn name(&self) -> &str {
        "ExperienceFilter"
    }

    fn apply(&self, jobs: Vec<JobPosting>, query: &QueryState) -> Result<Vec<JobPosting>> {
        let Some(want) = query.advanced.experience else {
            return Ok(jobs);
        };
        Ok(jobs.into_iter().filter(|job| job.experience == want).collect())
    }
}

pub struct JobTypeFilter;

impl Filter for JobTypeFilter {
    fn name(&self) -> &str {
        "JobTypeFilter"
    }

    fn apply(&self, jobs: Vec<JobPosting>, query: &QueryState) -> Result<Vec<JobPosting>> {
        let Some(want) = query.advanced.job_type else {
            return Ok(jobs);
        };
        Ok(jobs.into_iter().filter(|job| job.job_type == want).collect())
    }
}

pub struct RemoteFilter;

impl Filter for RemoteFilter {
    fn name(&self) -> &str {
        "RemoteFilter"
    }

    fn apply(&self, jobs: Vec<JobPosting>, query: &QueryState) -> Result<Vec<JobPosting>> {
        let Some(want) = query.advanced.remote else {
            return Ok(jobs);
        };
        Ok(jobs.into_iter().filter(|job| job.remote == want).collect())
    }
}

pub struct CompanySizeFilter;

impl Filter for CompanySizeFilter {
    fn name(&self) -> &str {
        "CompanySizeFilter"
    }

    fn apply(&self, jobs: Vec<JobPosting>, query: &QueryState) -> Result<Vec<JobPosting>> {
        let Some(want) = query.advanced.company_size else {
            return Ok(jobs);
        };
        Ok(jobs
            .into_iter()
            .filter(|job| job.company_size == want)
            .collect())
    }
}
