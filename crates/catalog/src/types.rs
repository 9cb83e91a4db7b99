//! Core domain types for the job catalog.
//!
//! Every attribute that the search engine filters on exactly (role, salary
//! band, experience, job type, remote arrangement, company size) is a closed
//! enum rather than a free string, so adding a dimension is a compile-time
//! exhaustiveness change instead of a stringly-typed convention.
//!
//! Each enum serializes to the wire string the rest of the system matches
//! against ("full-time", "$100k+", ...); `as_str` exposes the same string
//! for in-memory comparisons.

use crate::error::CatalogError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a job posting, stable for the life of the catalog
pub type JobId = u32;

// =============================================================================
// Posting Attribute Enums
// =============================================================================

/// Broad role family a posting belongs to.
///
/// Matched with exact, case-sensitive equality against the query's role
/// filter, so the wire strings here are load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleCategory {
    Engineer,
    Manager,
    Product,
}

impl RoleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleCategory::Engineer => "Engineer",
            RoleCategory::Manager => "Manager",
            RoleCategory::Product => "Product",
        }
    }
}

impl FromStr for RoleCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Engineer" => Ok(RoleCategory::Engineer),
            "Manager" => Ok(RoleCategory::Manager),
            "Product" => Ok(RoleCategory::Product),
            _ => Err(CatalogError::InvalidValue {
                field: "role".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RoleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse salary bracket label shown in search dropdowns.
///
/// This is a label match, not a numeric comparison; the numeric comparison
/// lives in the advanced salary-range filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SalaryBand {
    #[serde(rename = "$50k+")]
    From50k,
    #[serde(rename = "$100k+")]
    From100k,
    #[serde(rename = "$150k+")]
    From150k,
}

impl SalaryBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryBand::From50k => "$50k+",
            SalaryBand::From100k => "$100k+",
            SalaryBand::From150k => "$150k+",
        }
    }
}

impl FromStr for SalaryBand {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "$50k+" => Ok(SalaryBand::From50k),
            "$100k+" => Ok(SalaryBand::From100k),
            "$150k+" => Ok(SalaryBand::From150k),
            _ => Err(CatalogError::InvalidValue {
                field: "salary_band".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SalaryBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seniority expected for the position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entry" => Ok(ExperienceLevel::Entry),
            "mid" => Ok(ExperienceLevel::Mid),
            "senior" => Ok(ExperienceLevel::Senior),
            "lead" => Ok(ExperienceLevel::Lead),
            _ => Err(CatalogError::InvalidValue {
                field: "experience".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employment arrangement for the position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Internship,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Freelance => "freelance",
            JobType::Internship => "internship",
        }
    }
}

impl FromStr for JobType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full-time" => Ok(JobType::FullTime),
            "part-time" => Ok(JobType::PartTime),
            "contract" => Ok(JobType::Contract),
            "freelance" => Ok(JobType::Freelance),
            "internship" => Ok(JobType::Internship),
            _ => Err(CatalogError::InvalidValue {
                field: "job_type".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the work happens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteOption {
    Remote,
    Hybrid,
    Onsite,
}

impl RemoteOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteOption::Remote => "remote",
            RemoteOption::Hybrid => "hybrid",
            RemoteOption::Onsite => "onsite",
        }
    }
}

impl FromStr for RemoteOption {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "remote" => Ok(RemoteOption::Remote),
            "hybrid" => Ok(RemoteOption::Hybrid),
            "onsite" => Ok(RemoteOption::Onsite),
            _ => Err(CatalogError::InvalidValue {
                field: "remote".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RemoteOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Headcount bucket of the hiring company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    Startup,
    Small,
    Medium,
    Large,
}

impl CompanySize {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Startup => "startup",
            CompanySize::Small => "small",
            CompanySize::Medium => "medium",
            CompanySize::Large => "large",
        }
    }
}

impl FromStr for CompanySize {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "startup" => Ok(CompanySize::Startup),
            "small" => Ok(CompanySize::Small),
            "medium" => Ok(CompanySize::Medium),
            "large" => Ok(CompanySize::Large),
            _ => Err(CatalogError::InvalidValue {
                field: "company_size".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// JobPosting
// =============================================================================

/// One advertised position.
///
/// Postings are read-only to the search core: filtering never mutates a
/// posting, and the per-viewer bookmarked flag is derived at result time
/// rather than stored here, so one catalog serves every viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub company: String,
    /// Free-text location ("Remote", "San Francisco", ...)
    pub location: String,
    /// Display string, e.g. "$100k - $130k"; the salary sort/range filters
    /// extract digits from this rather than using a structured amount
    pub salary: String,
    /// Skill tags; order carries no meaning
    pub skills: Vec<String>,
    pub role: RoleCategory,
    pub salary_band: SalaryBand,
    pub experience: ExperienceLevel,
    pub job_type: JobType,
    pub remote: RemoteOption,
    pub company_size: CompanySize,
    /// Calendar date the posting went live
    pub posted: NaiveDate,
}
