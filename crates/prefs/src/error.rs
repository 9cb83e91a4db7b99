//! Error types for the prefs crate.
//!
//! Only writes can fail here. Reads fail soft by contract: a missing or
//! corrupt payload degrades to the empty state so preferences never block
//! a search.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrefsError {
    /// The backing store could not persist a payload
    #[error("failed to persist {key}: {source}")]
    Save {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded for storage
    #[error("failed to encode {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, PrefsError>;
