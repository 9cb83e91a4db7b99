//! # Query Crate
//!
//! The query-state model for QuickHire searches: what the user is asking
//! for, held in one explicit struct, with translation to and from the
//! URL-shaped parameter set for the shareable subset of fields.
//!
//! ## Main Components
//!
//! - **state**: `QueryState`, `AdvancedFilters`, `SortKey`
//! - **params**: permissive parse/emit for the four shareable parameters
//!
//! ## Design Note
//! Filters are a fixed struct rather than an open string map so that adding
//! a dimension is a compile-time change everywhere that consumes queries.
//! Parsing never rejects: malformed input degrades to "no constraint".

pub mod params;
pub mod state;

// Re-export main types
pub use params::{PARAM_KEYWORD, PARAM_LOCATION, PARAM_ROLE, PARAM_SALARY};
pub use state::{AdvancedFilters, QueryState, SortKey};
