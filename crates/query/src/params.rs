//! URL-parameter translation for the shareable subset of `QueryState`.
//!
//! Only four fields are link-shareable: `keyword`, `location`, `role`, and
//! `salary`. Parsing is permissive and total: missing parameters become
//! empty strings, unknown parameters are ignored, and nothing ever fails.
//! Emission is the inverse, producing a parameter only when the value is
//! non-empty after trimming, so an empty field and an absent parameter are
//! the same state.

use crate::state::QueryState;
use std::collections::HashMap;

pub const PARAM_KEYWORD: &str = "keyword";
pub const PARAM_LOCATION: &str = "location";
pub const PARAM_ROLE: &str = "role";
pub const PARAM_SALARY: &str = "salary";

impl QueryState {
    /// Build a query from already-decoded URL parameters.
    ///
    /// Advanced filters are session-local and never arrive this way; they
    /// stay at their defaults.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let field = |key: &str| params.get(key).cloned().unwrap_or_default();

        Self {
            keyword: field(PARAM_KEYWORD),
            location: field(PARAM_LOCATION),
            role: field(PARAM_ROLE),
            salary_band: field(PARAM_SALARY),
            advanced: Default::default(),
        }
    }

    /// Emit the shareable parameters for this query.
    ///
    /// Pair order is not significant; callers that need a query string can
    /// join the pairs however they like.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        for (key, value) in [
            (PARAM_KEYWORD, &self.keyword),
            (PARAM_LOCATION, &self.location),
            (PARAM_ROLE, &self.role),
            (PARAM_SALARY, &self.salary_band),
        ] {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                params.push((key, trimmed.to_string()));
            }
        }
        params
    }
}
