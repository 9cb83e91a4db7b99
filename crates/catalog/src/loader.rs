//! JSON file catalog loading.
//!
//! A catalog file is a JSON array of postings using the wire-string enum
//! representation, e.g.:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "title": "Frontend Engineer",
//!     "company": "Tech Solutions Inc.",
//!     "location": "Remote",
//!     "salary": "$100k - $130k",
//!     "skills": ["React", "TypeScript"],
//!     "role": "Engineer",
//!     "salary_band": "$100k+",
//!     "experience": "mid",
//!     "job_type": "full-time",
//!     "remote": "remote",
//!     "company_size": "medium",
//!     "posted": "2024-06-10"
//!   }
//! ]
//! ```

use crate::error::{CatalogError, Result};
use crate::provider::CatalogProvider;
use crate::types::{JobId, JobPosting};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Catalog provider backed by a JSON posting file.
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogProvider for JsonCatalog {
    fn list_postings(&self) -> Result<Vec<JobPosting>> {
        let path = self.path.display().to_string();

        let raw = fs::read_to_string(&self.path).map_err(|source| CatalogError::Read {
            path: path.clone(),
            source,
        })?;

        let postings: Vec<JobPosting> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.clone(),
                source,
            })?;

        // Ids must be unique within a catalog; everything downstream
        // (bookmarks, result decoration) keys on them.
        let mut seen: HashSet<JobId> = HashSet::with_capacity(postings.len());
        for posting in &postings {
            if !seen.insert(posting.id) {
                return Err(CatalogError::DuplicateId(posting.id));
            }
        }

        tracing::debug!("loaded {} postings from {}", postings.len(), path);
        Ok(postings)
    }
}
