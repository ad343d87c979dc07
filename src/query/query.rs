//! The query tree type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::query::boolean::{BooleanQuery, Occur};
use crate::query::boost::BoostQuery;
use crate::query::multi_term::{FuzzyQuery, PrefixQuery, RegexpQuery, WildcardQuery};
use crate::query::phrase::{MultiPhraseQuery, PhraseQuery};
use crate::query::range::{NumericRangeQuery, TermRangeQuery};
use crate::query::synonym::SynonymQuery;
use crate::query::term::TermQuery;

/// A compiled query.
///
/// Equality is structural. Synonym queries compare their terms as sets;
/// boolean queries compare their clauses in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Query {
    /// A single term.
    Term(TermQuery),
    /// Alternatives at one position.
    Synonym(SynonymQuery),
    /// An exact (or sloppy) phrase.
    Phrase(PhraseQuery),
    /// A phrase with several alternatives at some positions.
    MultiPhrase(MultiPhraseQuery),
    /// A combination of clauses.
    Boolean(BooleanQuery),
    /// A query with a score multiplier.
    Boost(BoostQuery),
    /// A `*`/`?` pattern.
    Wildcard(WildcardQuery),
    /// A term prefix.
    Prefix(PrefixQuery),
    /// Terms within an edit distance.
    Fuzzy(FuzzyQuery),
    /// A regular expression.
    Regexp(RegexpQuery),
    /// A lexicographic term range.
    TermRange(TermRangeQuery),
    /// A numeric range.
    NumericRange(NumericRangeQuery),
    /// Matches every document.
    MatchAllDocs,
}

impl Query {
    /// Wrap this query with a boost.
    pub fn boosted(self, boost: f32) -> Query {
        Query::Boost(BoostQuery::new(self, boost))
    }

    /// Get the field this query targets, if it targets exactly one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Query::Term(q) => Some(q.field()),
            Query::Synonym(q) => Some(q.field()),
            Query::Phrase(q) => Some(q.field()),
            Query::MultiPhrase(q) => Some(q.field()),
            Query::Boost(q) => q.query().field(),
            Query::Wildcard(q) => Some(q.field()),
            Query::Prefix(q) => Some(q.field()),
            Query::Fuzzy(q) => Some(q.field()),
            Query::Regexp(q) => Some(q.field()),
            Query::TermRange(q) => Some(q.field()),
            Query::NumericRange(q) => Some(q.field()),
            Query::Boolean(_) | Query::MatchAllDocs => None,
        }
    }

    /// Get the boolean query, if this is one.
    pub fn as_boolean(&self) -> Option<&BooleanQuery> {
        match self {
            Query::Boolean(q) => Some(q),
            _ => None,
        }
    }

    /// Render this query in query syntax.
    ///
    /// Field prefixes equal to `default_field` are omitted.
    pub fn to_string_with_field(&self, default_field: &str) -> String {
        match self {
            Query::Term(q) => q.to_string_with_field(default_field),
            Query::Synonym(q) => q.to_string_with_field(default_field),
            Query::Phrase(q) => q.to_string_with_field(default_field),
            Query::MultiPhrase(q) => q.to_string_with_field(default_field),
            Query::Boolean(q) => q.to_string_with_field(default_field),
            Query::Boost(q) => q.to_string_with_field(default_field),
            Query::Wildcard(q) => q.to_string_with_field(default_field),
            Query::Prefix(q) => q.to_string_with_field(default_field),
            Query::Fuzzy(q) => q.to_string_with_field(default_field),
            Query::Regexp(q) => q.to_string_with_field(default_field),
            Query::TermRange(q) => q.to_string_with_field(default_field),
            Query::NumericRange(q) => q.to_string_with_field(default_field),
            Query::MatchAllDocs => "*:*".to_string(),
        }
    }

    /// Count the clauses of a boolean query with the given occur.
    pub fn count_occur(&self, occur: Occur) -> usize {
        self.as_boolean()
            .map(|q| q.clauses().iter().filter(|c| c.occur == occur).count())
            .unwrap_or(0)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with_field(""))
    }
}

macro_rules! impl_from_query {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Query {
                fn from(query: $ty) -> Self {
                    Query::$variant(query)
                }
            }
        )*
    };
}

impl_from_query!(
    Term(TermQuery),
    Synonym(SynonymQuery),
    Phrase(PhraseQuery),
    MultiPhrase(MultiPhraseQuery),
    Boolean(BooleanQuery),
    Boost(BoostQuery),
    Wildcard(WildcardQuery),
    Prefix(PrefixQuery),
    Fuzzy(FuzzyQuery),
    Regexp(RegexpQuery),
    TermRange(TermRangeQuery),
    NumericRange(NumericRangeQuery),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::boolean::BooleanClause;

    #[test]
    fn test_display_keeps_fields() {
        let query: Query = TermQuery::new("title", "hello").into();
        assert_eq!(query.to_string(), "title:hello");
        assert_eq!(query.to_string_with_field("title"), "hello");
        assert_eq!(query.field(), Some("title"));
    }

    #[test]
    fn test_boosted_boolean() {
        let mut boolean = BooleanQuery::new();
        boolean.add_should(TermQuery::new("field", "a").into());
        boolean.add_must(TermQuery::new("field", "b").into());
        let query = Query::from(boolean).boosted(2.0);

        assert_eq!(query.to_string_with_field("field"), "(a +b)^2.0");
        assert_eq!(query.field(), None);
    }

    #[test]
    fn test_count_occur() {
        let mut boolean = BooleanQuery::new();
        boolean.add_clause(BooleanClause::must(TermQuery::new("f", "a").into()));
        boolean.add_clause(BooleanClause::must_not(TermQuery::new("f", "b").into()));
        boolean.add_clause(BooleanClause::must(TermQuery::new("f", "c").into()));
        let query = Query::Boolean(boolean);

        assert_eq!(query.count_occur(Occur::Must), 2);
        assert_eq!(query.count_occur(Occur::Should), 0);
    }

    #[test]
    fn test_json_round_trip() {
        let query = Query::from(SynonymQuery::new("field", vec!["dogs", "dog"])).boosted(2.0);

        let json = serde_json::to_string(&query).unwrap();
        let decoded: Query = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, query);
        assert!(json.contains("\"type\":\"boost\""));
    }
}
