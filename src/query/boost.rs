//! Boost wrapper.

use serde::{Deserialize, Serialize};

use crate::query::query::Query;

/// A query whose score is multiplied by a boost factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostQuery {
    query: Box<Query>,
    boost: f32,
}

impl BoostQuery {
    /// Wrap `query` with `boost`.
    pub fn new(query: Query, boost: f32) -> Self {
        BoostQuery {
            query: Box::new(query),
            boost,
        }
    }

    /// Get the wrapped query.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Get the boost factor.
    pub fn boost(&self) -> f32 {
        self.boost
    }

    /// Render as `(query)^boost`.
    pub fn to_string_with_field(&self, default_field: &str) -> String {
        format!(
            "({})^{:?}",
            self.query.to_string_with_field(default_field),
            self.boost
        )
    }
}
