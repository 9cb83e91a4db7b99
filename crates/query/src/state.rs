//! The query-state model: one search request.
//!
//! Every filter field is optional; an empty or absent value means "no
//! constraint on this dimension" and must never exclude a posting. The model
//! is total over all string inputs: nothing here validates or rejects.

use catalog::{CompanySize, ExperienceLevel, JobType, RemoteOption};
use serde::{Deserialize, Serialize};

/// Result ordering requested for a search.
///
/// Unknown sort strings fall back to `Relevance` rather than erroring, so a
/// stale or hand-edited parameter never breaks a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Feed order, untouched
    #[default]
    Relevance,
    /// Most recent posting first
    Date,
    SalaryHigh,
    SalaryLow,
    /// Company name, ascending
    Company,
}

impl SortKey {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Date => "date",
            SortKey::SalaryHigh => "salary-high",
            SortKey::SalaryLow => "salary-low",
            SortKey::Company => "company",
        }
    }

    /// Permissive parse; anything unrecognized is `Relevance`.
    pub fn from_param(s: &str) -> Self {
        match s {
            "date" => SortKey::Date,
            "salary-high" => SortKey::SalaryHigh,
            "salary-low" => SortKey::SalaryLow,
            "company" => SortKey::Company,
            _ => SortKey::Relevance,
        }
    }
}

/// The advanced-filter panel structure.
///
/// Session-local by design: these fields do not round-trip through URL
/// parameters, only the four top-level `QueryState` strings do.
///
/// The exact-match dimensions are typed options; the salary bounds stay raw
/// strings because the engine reproduces the original digit-extraction
/// semantics, including how unparseable input behaves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedFilters {
    pub experience: Option<ExperienceLevel>,
    pub job_type: Option<JobType>,
    pub remote: Option<RemoteOption>,
    pub company_size: Option<CompanySize>,
    pub sort: SortKey,
    /// Required skills; ANY-match, a posting needs at least one
    pub skills: Vec<String>,
    /// Minimum salary, numeric-ish free text ("100", "$100k", ...)
    pub salary_min: String,
    pub salary_max: String,
}

/// One search request: the shareable base fields plus advanced filters.
///
/// `role` and `salary_band` are kept as raw strings rather than catalog
/// enums: they arrive from URL parameters, and an unknown value must behave
/// as a filter that matches nothing, not as a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    /// Free-text keyword, matched against title and skills
    pub keyword: String,
    /// Free-text location substring
    pub location: String,
    /// Exact role-category label ("Engineer", "Manager", "Product")
    pub role: String,
    /// Exact salary-band label ("$50k+", "$100k+", "$150k+")
    pub salary_band: String,
    pub advanced: AdvancedFilters,
}

impl QueryState {
    /// The all-empty, default-sort state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear-filters action: restore every field, including the advanced
    /// panel and sort key, to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
