//! Single-term leaf.

use serde::{Deserialize, Serialize};

use crate::query::field_prefix;

/// Exact match of one analyzed term in one field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermQuery {
    field: String,
    term: String,
}

impl TermQuery {
    /// `term` is taken as-is; analysis happened upstream.
    pub fn new<F, T>(field: F, term: T) -> Self
    where
        F: Into<String>,
        T: Into<String>,
    {
        TermQuery {
            field: field.into(),
            term: term.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn to_string_with_field(&self, default_field: &str) -> String {
        format!("{}{}", field_prefix(&self.field, default_field), self.term)
    }
}
