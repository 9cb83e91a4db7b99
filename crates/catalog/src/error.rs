//! Error types for the catalog crate.

use crate::types::JobId;
use thiserror::Error;

/// Errors that can occur while loading or validating a job catalog.
///
/// Only catalog loading can fail; once a catalog is in memory the search
/// core treats it as read-only and never raises.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file contents were not a valid posting list
    #[error("catalog file {path} is not a valid posting list: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A field held a value outside its fixed set (e.g. an unknown job type)
    #[error("invalid value for {field}: {value:?}")]
    InvalidValue { field: String, value: String },

    /// Two postings shared an identifier; ids must be unique per catalog
    #[error("duplicate job id {0} in catalog")]
    DuplicateId(JobId),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
