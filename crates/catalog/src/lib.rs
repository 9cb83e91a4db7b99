//! # Catalog Crate
//!
//! Domain types and data sources for the QuickHire job catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (JobPosting, attribute enums, JobId)
//! - **provider**: The CatalogProvider boundary trait
//! - **seed**: Built-in sample postings for demos and tests
//! - **loader**: JSON file catalog provider
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{CatalogProvider, JsonCatalog, SeedCatalog};
//!
//! let postings = SeedCatalog.list_postings()?;
//! println!("{} postings in the feed", postings.len());
//!
//! // Or load from a file
//! let postings = JsonCatalog::new("data/jobs.json").list_postings()?;
//! ```

// Public modules
pub mod error;
pub mod loader;
pub mod provider;
pub mod seed;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use loader::JsonCatalog;
pub use provider::CatalogProvider;
pub use seed::{SeedCatalog, seed_postings};
pub use types::{
    CompanySize, ExperienceLevel, JobId, JobPosting, JobType, RemoteOption, RoleCategory,
    SalaryBand,
};
