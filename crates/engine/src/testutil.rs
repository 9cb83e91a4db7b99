//! Shared fixtures for the engine's unit tests.

use catalog::{
    CompanySize, ExperienceLevel, JobId, JobPosting, JobType, RemoteOption, RoleCategory,
    SalaryBand,
};
use chrono::NaiveDate;

/// A mid-level remote engineering posting; tests overwrite the fields a
/// given dimension cares about.
pub(crate) fn posting(id: JobId, title: &str) -> JobPosting {
    JobPosting {
        id,
        title: title.to_string(),
        company: "Tech Solutions Inc.".to_string(),
        location: "Remote".to_string(),
        salary: "$100k - $130k".to_string(),
        skills: vec!["React".to_string()],
        role: RoleCategory::Engineer,
        salary_band: SalaryBand::From100k,
        experience: ExperienceLevel::Mid,
        job_type: JobType::FullTime,
        remote: RemoteOption::Remote,
        company_size: CompanySize::Medium,
        posted: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
    }
}

pub(crate) fn ids(jobs: &[JobPosting]) -> Vec<JobId> {
    jobs.iter().map(|j| j.id).collect()
}
