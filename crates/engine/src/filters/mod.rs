//! Filter implementations for the search pipeline.
//!
//! One module per dimension; `FilterPipeline::standard()` wires them all
//! together in evaluation order.

pub mod attributes;
pub mod keyword;
pub mod location;
pub mod role;
pub mod salary_band;
pub mod salary_range;
pub mod skills;

// Re-export for convenience
pub use attributes::{CompanySizeFilter, ExperienceFilter, JobTypeFilter, RemoteFilter};
pub use keyword::KeywordFilter;
pub use location::LocationFilter;
pub use role::RoleFilter;
pub use salary_band::SalaryBandFilter;
pub use salary_range::SalaryRangeFilter;
pub use skills::SkillsFilter;
