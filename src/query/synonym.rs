//! Synonym query: several alternative terms at one position.

use serde::{Deserialize, Serialize};

use crate::query::field_prefix;

/// A query matching any one of several terms that share a position.
///
/// Terms keep the order in which the analyzer emitted them, but two synonym
/// queries are equal when their fields match and their terms form the same
/// set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynonymQuery {
    field: String,
    terms: Vec<String>,
}

impl SynonymQuery {
    /// Create a synonym query. Duplicate terms are dropped.
    pub fn new<F, I, T>(field: F, terms: I) -> Self
    where
        F: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for term in terms {
            let term = term.into();
            if !unique.contains(&term) {
                unique.push(term);
            }
        }

        SynonymQuery {
            field: field.into(),
            terms: unique,
        }
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the terms in emission order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    fn sorted_terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.terms.iter().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }

    /// Render as `Synonym(a b)` with the terms sorted.
    pub fn to_string_with_field(&self, default_field: &str) -> String {
        let prefix = field_prefix(&self.field, default_field);
        let terms: Vec<String> = self
            .sorted_terms()
            .into_iter()
            .map(|term| format!("{prefix}{term}"))
            .collect();
        format!("Synonym({})", terms.join(" "))
    }
}

impl PartialEq for SynonymQuery {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.sorted_terms() == other.sorted_terms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_equality() {
        let a = SynonymQuery::new("field", vec!["dogs", "dog"]);
        let b = SynonymQuery::new("field", vec!["dog", "dogs"]);
        let c = SynonymQuery::new("other", vec!["dog", "dogs"]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.terms(), &["dogs".to_string(), "dog".to_string()]);
    }

    #[test]
    fn test_to_string_sorts_terms() {
        let query = SynonymQuery::new("field", vec!["guinea", "cavy"]);

        assert_eq!(query.to_string_with_field("field"), "Synonym(cavy guinea)");
        assert_eq!(query.to_string_with_field("x"), "Synonym(field:cavy field:guinea)");
    }

    #[test]
    fn test_duplicates_dropped() {
        let query = SynonymQuery::new("field", vec!["a", "b", "a"]);
        assert_eq!(query.terms().len(), 2);
    }
}
