//! Queries that expand to many terms at search time.
//!
//! These are leaves of the query tree: the parser builds them from wildcard,
//! prefix, fuzzy and regular expression syntax without tokenizing the text.

use serde::{Deserialize, Serialize};

use crate::query::field_prefix;

/// Largest edit distance a fuzzy query supports.
pub const MAX_EDITS: u32 = 2;

/// A wildcard pattern where `*` matches any sequence and `?` one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildcardQuery {
    field: String,
    pattern: String,
}

impl WildcardQuery {
    /// Create a wildcard query.
    pub fn new<F: Into<String>, P: Into<String>>(field: F, pattern: P) -> Self {
        WildcardQuery {
            field: field.into(),
            pattern: pattern.into(),
        }
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn to_string_with_field(&self, default_field: &str) -> String {
        format!("{}{}", field_prefix(&self.field, default_field), self.pattern)
    }
}

/// Matches terms starting with a prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixQuery {
    field: String,
    prefix: String,
}

impl PrefixQuery {
    /// Create a prefix query; `prefix` excludes the trailing `*`.
    pub fn new<F: Into<String>, P: Into<String>>(field: F, prefix: P) -> Self {
        PrefixQuery {
            field: field.into(),
            prefix: prefix.into(),
        }
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn to_string_with_field(&self, default_field: &str) -> String {
        format!("{}{}*", field_prefix(&self.field, default_field), self.prefix)
    }
}

/// Matches terms within an edit distance of a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyQuery {
    field: String,
    term: String,
    max_edits: u32,
    prefix_length: u32,
}

impl FuzzyQuery {
    /// Create a fuzzy query. `max_edits` is capped at [`MAX_EDITS`].
    pub fn new<F: Into<String>, T: Into<String>>(field: F, term: T, max_edits: u32) -> Self {
        FuzzyQuery {
            field: field.into(),
            term: term.into(),
            max_edits: max_edits.min(MAX_EDITS),
            prefix_length: 0,
        }
    }

    /// Require the first `prefix_length` characters to match exactly.
    pub fn with_prefix_length(mut self, prefix_length: u32) -> Self {
        self.prefix_length = prefix_length;
        self
    }

    /// Convert a similarity from query syntax into an edit distance.
    ///
    /// Values of 1 or more are edit counts; values below 1 are a similarity
    /// ratio relative to the term length.
    pub fn similarity_to_edits(min_similarity: f32, term_len: usize) -> u32 {
        if min_similarity >= 1.0 {
            (min_similarity as u32).min(MAX_EDITS)
        } else if min_similarity == 0.0 {
            0
        } else {
            (((1.0 - min_similarity as f64) * term_len as f64) as u32).min(MAX_EDITS)
        }
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Get the maximum edit distance.
    pub fn max_edits(&self) -> u32 {
        self.max_edits
    }

    /// Get the exact-match prefix length.
    pub fn prefix_length(&self) -> u32 {
        self.prefix_length
    }

    pub fn to_string_with_field(&self, default_field: &str) -> String {
        format!(
            "{}{}~{}",
            field_prefix(&self.field, default_field),
            self.term,
            self.max_edits
        )
    }
}

/// Matches terms against a regular expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexpQuery {
    field: String,
    regexp: String,
}

impl RegexpQuery {
    /// Create a regexp query.
    pub fn new<F: Into<String>, R: Into<String>>(field: F, regexp: R) -> Self {
        RegexpQuery {
            field: field.into(),
            regexp: regexp.into(),
        }
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the regular expression.
    pub fn regexp(&self) -> &str {
        &self.regexp
    }

    pub fn to_string_with_field(&self, default_field: &str) -> String {
        format!("{}/{}/", field_prefix(&self.field, default_field), self.regexp)
    }
}
