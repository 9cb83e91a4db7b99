//! Built-in sample catalog.
//!
//! Eight postings covering every role category, salary band, experience
//! level bucket, and remote arrangement, so the full filter surface can be
//! exercised without external data. Useful for demos and as test fixtures.

use crate::error::Result;
use crate::provider::CatalogProvider;
use crate::types::{
    CompanySize, ExperienceLevel, JobPosting, JobType, RemoteOption, RoleCategory, SalaryBand,
};
use chrono::NaiveDate;

/// Catalog provider backed by the built-in sample postings.
pub struct SeedCatalog;

impl CatalogProvider for SeedCatalog {
    fn list_postings(&self) -> Result<Vec<JobPosting>> {
        Ok(seed_postings())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid")
}

/// The sample postings, in feed order.
pub fn seed_postings() -> Vec<JobPosting> {
    vec![
        JobPosting {
            id: 1,
            title: "Frontend Engineer".to_string(),
            company: "Tech Solutions Inc.".to_string(),
            location: "Remote".to_string(),
            salary: "$100k - $130k".to_string(),
            skills: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "UI/UX".to_string(),
            ],
            role: RoleCategory::Engineer,
            salary_band: SalaryBand::From100k,
            experience: ExperienceLevel::Mid,
            job_type: JobType::FullTime,
            remote: RemoteOption::Remote,
            company_size: CompanySize::Medium,
            posted: date(2024, 6, 10),
        },
        JobPosting {
            id: 2,
            title: "Backend API Developer".to_string(),
            company: "NetHub Labs".to_string(),
            location: "San Francisco".to_string(),
            salary: "$120k - $150k".to_string(),
            skills: vec!["Node.js".to_string(), "API".to_string(), "SQL".to_string()],
            role: RoleCategory::Engineer,
            salary_band: SalaryBand::From100k,
            experience: ExperienceLevel::Senior,
            job_type: JobType::FullTime,
            remote: RemoteOption::Onsite,
            company_size: CompanySize::Startup,
            posted: date(2024, 6, 12),
        },
        JobPosting {
            id: 3,
            title: "Product Manager".to_string(),
            company: "BizGrowth".to_string(),
            location: "New York".to_string(),
            salary: "$95k - $115k".to_string(),
            skills: vec![
                "Agile".to_string(),
                "Leadership".to_string(),
                "Communication".to_string(),
            ],
            role: RoleCategory::Manager,
            salary_band: SalaryBand::From50k,
            experience: ExperienceLevel::Mid,
            job_type: JobType::FullTime,
            remote: RemoteOption::Hybrid,
            company_size: CompanySize::Large,
            posted: date(2024, 6, 8),
        },
        JobPosting {
            id: 4,
            title: "Senior Full Stack Engineer".to_string(),
            company: "StartupCo".to_string(),
            location: "Austin".to_string(),
            salary: "$140k - $170k".to_string(),
            skills: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "AWS".to_string(),
            ],
            role: RoleCategory::Engineer,
            salary_band: SalaryBand::From100k,
            experience: ExperienceLevel::Senior,
            job_type: JobType::FullTime,
            remote: RemoteOption::Remote,
            company_size: CompanySize::Startup,
            posted: date(2024, 6, 13),
        },
        JobPosting {
            id: 5,
            title: "UX Designer".to_string(),
            company: "Design Studio".to_string(),
            location: "Los Angeles".to_string(),
            salary: "$80k - $100k".to_string(),
            skills: vec![
                "Figma".to_string(),
                "Prototyping".to_string(),
                "User Research".to_string(),
            ],
            role: RoleCategory::Product,
            salary_band: SalaryBand::From50k,
            experience: ExperienceLevel::Mid,
            job_type: JobType::Contract,
            remote: RemoteOption::Hybrid,
            company_size: CompanySize::Small,
            posted: date(2024, 6, 11),
        },
        JobPosting {
            id: 6,
            title: "Engineering Manager".to_string(),
            company: "TechGiant".to_string(),
            location: "Seattle".to_string(),
            salary: "$180k - $220k".to_string(),
            skills: vec![
                "Leadership".to_string(),
                "Architecture".to_string(),
                "Mentoring".to_string(),
            ],
            role: RoleCategory::Manager,
            salary_band: SalaryBand::From150k,
            experience: ExperienceLevel::Lead,
            job_type: JobType::FullTime,
            remote: RemoteOption::Onsite,
            company_size: CompanySize::Large,
            posted: date(2024, 6, 9),
        },
        JobPosting {
            id: 7,
            title: "DevOps Engineer".to_string(),
            company: "CloudFirst".to_string(),
            location: "Denver".to_string(),
            salary: "$110k - $140k".to_string(),
            skills: vec![
                "Docker".to_string(),
                "Kubernetes".to_string(),
                "CI/CD".to_string(),
            ],
            role: RoleCategory::Engineer,
            salary_band: SalaryBand::From100k,
            experience: ExperienceLevel::Mid,
            job_type: JobType::FullTime,
            remote: RemoteOption::Remote,
            company_size: CompanySize::Medium,
            posted: date(2024, 6, 7),
        },
        JobPosting {
            id: 8,
            title: "Data Scientist".to_string(),
            company: "AI Corp".to_string(),
            location: "Boston".to_string(),
            salary: "$125k - $155k".to_string(),
            skills: vec![
                "Python".to_string(),
                "Machine Learning".to_string(),
                "Statistics".to_string(),
            ],
            role: RoleCategory::Engineer,
            salary_band: SalaryBand::From100k,
            experience: ExperienceLevel::Senior,
            job_type: JobType::FullTime,
            remote: RemoteOption::Hybrid,
            company_size: CompanySize::Medium,
            posted: date(2024, 6, 6),
        },
    ]
}
