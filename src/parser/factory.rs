//! Replaceable construction of leaf queries.
//!
//! The compiler never builds a leaf query directly; it asks a
//! [`QueryFactory`]. Every method has a default, so an implementation only
//! overrides what it wants to change, for example rejecting fuzzy queries or
//! analyzing quoted text with a more precise analyzer:
//!
//! ```
//! use synparse::error::{Result, SynparseError};
//! use synparse::parser::factory::QueryFactory;
//! use synparse::parser::field_query::FieldQueryBuilder;
//! use synparse::query::Query;
//!
//! struct NoFuzzy;
//!
//! impl QueryFactory for NoFuzzy {
//!     fn fuzzy_query(
//!         &self,
//!         _builder: &FieldQueryBuilder<'_>,
//!         _field: &str,
//!         _term: &str,
//!         _min_similarity: f32,
//!     ) -> Result<Query> {
//!         Err(SynparseError::unsupported("Fuzzy queries not allowed"))
//!     }
//! }
//! ```

use crate::error::{Result, SynparseError};
use crate::parser::date;
use crate::parser::field_query::FieldQueryBuilder;
use crate::query::{
    FuzzyQuery, NumericRangeQuery, PrefixQuery, Query, RegexpQuery, TermRangeQuery, WildcardQuery,
};

/// Strategy for building the queries of field atoms.
pub trait QueryFactory: Send + Sync {
    /// Query for analyzed text; `quoted` marks phrase text. `None` means
    /// the text contributes nothing.
    fn field_query(
        &self,
        builder: &FieldQueryBuilder<'_>,
        field: &str,
        text: &str,
        quoted: bool,
    ) -> Result<Option<Query>> {
        builder.field_query(field, text, quoted)
    }

    /// Query for a pattern with `*` or `?`.
    fn wildcard_query(&self, builder: &FieldQueryBuilder<'_>, field: &str, pattern: &str) -> Result<Query> {
        wildcard_query(builder, field, pattern)
    }

    /// Query for a term with a trailing `*`, given without it.
    fn prefix_query(&self, builder: &FieldQueryBuilder<'_>, field: &str, prefix: &str) -> Result<Query> {
        prefix_query(builder, field, prefix)
    }

    /// Query for `term~N`.
    fn fuzzy_query(
        &self,
        builder: &FieldQueryBuilder<'_>,
        field: &str,
        term: &str,
        min_similarity: f32,
    ) -> Result<Query> {
        fuzzy_query(builder, field, term, min_similarity)
    }

    /// Query for `/regexp/`.
    fn regexp_query(&self, builder: &FieldQueryBuilder<'_>, field: &str, regexp: &str) -> Result<Query> {
        regexp_query(builder, field, regexp)
    }

    /// Query for a range; a `None` bound is open.
    fn range_query(
        &self,
        builder: &FieldQueryBuilder<'_>,
        field: &str,
        lower: Option<&str>,
        upper: Option<&str>,
        include_lower: bool,
        include_upper: bool,
    ) -> Result<Query> {
        range_query(builder, field, lower, upper, include_lower, include_upper)
    }
}

/// The factory used when none is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultQueryFactory;

impl QueryFactory for DefaultQueryFactory {}

fn check_leading_wildcard(builder: &FieldQueryBuilder<'_>, text: &str) -> Result<()> {
    if !builder.config().allow_leading_wildcard && (text.starts_with('*') || text.starts_with('?')) {
        return Err(SynparseError::syntax(format!(
            "'*' or '?' not allowed as first character in WildcardQuery: '{text}'"
        )));
    }
    Ok(())
}

/// Default wildcard construction.
///
/// `*:*` matches all documents. Text between wildcards is normalized;
/// wildcards and escapes are kept as written.
pub fn wildcard_query(builder: &FieldQueryBuilder<'_>, field: &str, pattern: &str) -> Result<Query> {
    if field == "*" && pattern == "*" {
        return Ok(Query::MatchAllDocs);
    }
    check_leading_wildcard(builder, pattern)?;

    let mut normalized = String::with_capacity(pattern.len());
    let mut chunk = String::new();
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        match c {
            '*' | '?' | '\\' => {
                if !chunk.is_empty() {
                    normalized.push_str(&builder.normalize(field, &chunk)?);
                    chunk.clear();
                }
                normalized.push(c);
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        normalized.push(escaped);
                    }
                }
            }
            _ => chunk.push(c),
        }
    }
    if !chunk.is_empty() {
        normalized.push_str(&builder.normalize(field, &chunk)?);
    }

    Ok(WildcardQuery::new(field, normalized).into())
}

/// Default prefix construction; the prefix is normalized.
pub fn prefix_query(builder: &FieldQueryBuilder<'_>, field: &str, prefix: &str) -> Result<Query> {
    check_leading_wildcard(builder, prefix)?;
    let prefix = builder.normalize(field, prefix)?;
    Ok(PrefixQuery::new(field, prefix).into())
}

/// Default fuzzy construction.
///
/// The similarity becomes an edit distance relative to the normalized
/// term's length.
pub fn fuzzy_query(
    builder: &FieldQueryBuilder<'_>,
    field: &str,
    term: &str,
    min_similarity: f32,
) -> Result<Query> {
    let term = builder.normalize(field, term)?;
    let max_edits = FuzzyQuery::similarity_to_edits(min_similarity, term.chars().count());
    Ok(FuzzyQuery::new(field, term, max_edits)
        .with_prefix_length(builder.config().fuzzy_prefix_length)
        .into())
}

/// Default regexp construction; the expression is not normalized.
pub fn regexp_query(_builder: &FieldQueryBuilder<'_>, field: &str, regexp: &str) -> Result<Query> {
    Ok(RegexpQuery::new(field, regexp).into())
}

/// Default range construction.
///
/// Numeric fields parse both bounds as numbers. Otherwise, when the field
/// has a date resolution, bounds that parse as dates are converted; the
/// remaining bounds are normalized if `analyze_range_terms` is set.
pub fn range_query(
    builder: &FieldQueryBuilder<'_>,
    field: &str,
    lower: Option<&str>,
    upper: Option<&str>,
    include_lower: bool,
    include_upper: bool,
) -> Result<Query> {
    let config = builder.config();

    if let Some(numeric_type) = config.numeric_fields.get(field) {
        let lower = lower.map(|text| numeric_type.parse(text)).transpose()?;
        let upper = upper.map(|text| numeric_type.parse(text)).transpose()?;
        let query = NumericRangeQuery::new(field, *numeric_type, lower, upper, include_lower, include_upper)?;
        return Ok(query.into());
    }

    let resolution = config.date_resolution_for(field);
    let convert = |text: &str, inclusive_upper: bool| -> Result<String> {
        if let Some(converted) =
            resolution.and_then(|res| date::convert_bound(text, res, inclusive_upper))
        {
            return Ok(converted);
        }
        if config.analyze_range_terms {
            builder.normalize(field, text)
        } else {
            Ok(text.to_string())
        }
    };

    let lower = lower.map(|text| convert(text, false)).transpose()?;
    let upper = upper.map(|text| convert(text, include_upper)).transpose()?;

    Ok(TermRangeQuery::new(field, lower, upper, include_lower, include_upper).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::StandardAnalyzer;
    use crate::parser::config::QueryParserConfig;
    use crate::parser::date::DateResolution;
    use crate::query::NumericType;

    fn with_builder<F: FnOnce(&FieldQueryBuilder<'_>)>(config: QueryParserConfig, f: F) {
        let analyzer = StandardAnalyzer::new().unwrap();
        let builder = FieldQueryBuilder::new(&analyzer, &config);
        f(&builder);
    }

    #[test]
    fn test_wildcard_normalizes_chunks() {
        with_builder(QueryParserConfig::default(), |builder| {
            let query = wildcard_query(builder, "field", "Te?T*s").unwrap();
            assert_eq!(query, WildcardQuery::new("field", "te?t*s").into());

            let query = wildcard_query(builder, "*", "*").unwrap();
            assert_eq!(query, Query::MatchAllDocs);
        });
    }

    #[test]
    fn test_leading_wildcard() {
        with_builder(QueryParserConfig::default(), |builder| {
            let result = wildcard_query(builder, "field", "*ea");
            assert!(matches!(result, Err(SynparseError::Syntax(_))));
        });

        let config = QueryParserConfig {
            allow_leading_wildcard: true,
            ..Default::default()
        };
        with_builder(config, |builder| {
            assert!(wildcard_query(builder, "field", "*ea").is_ok());
        });
    }

    #[test]
    fn test_prefix_and_fuzzy() {
        with_builder(QueryParserConfig::default(), |builder| {
            let query = prefix_query(builder, "field", "GUI").unwrap();
            assert_eq!(query, PrefixQuery::new("field", "gui").into());

            let query = fuzzy_query(builder, "field", "Guinea", 2.0).unwrap();
            assert_eq!(query, FuzzyQuery::new("field", "guinea", 2).into());
        });
    }

    #[test]
    fn test_regexp_not_normalized() {
        with_builder(QueryParserConfig::default(), |builder| {
            let query = regexp_query(builder, "field", "Gu.*A").unwrap();
            assert_eq!(query, RegexpQuery::new("field", "Gu.*A").into());
        });
    }

    #[test]
    fn test_numeric_range() {
        let mut config = QueryParserConfig::default();
        config.set_numeric_field("price", NumericType::Integer);

        with_builder(config, |builder| {
            let query = range_query(builder, "price", Some("10"), None, true, true).unwrap();
            assert!(matches!(query, Query::NumericRange(_)));

            let result = range_query(builder, "price", Some("abc"), Some("10"), true, true);
            assert!(matches!(result, Err(SynparseError::AmbiguousRange(_))));

            let result = range_query(builder, "price", Some("20"), Some("10"), true, true);
            assert!(matches!(result, Err(SynparseError::AmbiguousRange(_))));
        });
    }

    #[test]
    fn test_date_range() {
        let mut config = QueryParserConfig::default();
        config.set_field_date_resolution("date", DateResolution::Day);

        with_builder(config, |builder| {
            let query = range_query(builder, "date", Some("1/1/2005"), Some("1/4/2005"), true, true).unwrap();
            assert_eq!(
                query,
                TermRangeQuery::new("date", Some("20050101".into()), Some("20050104".into()), true, true).into()
            );

            let query = range_query(builder, "date", Some("abc"), None, true, true).unwrap();
            assert_eq!(query, TermRangeQuery::new("date", Some("abc".into()), None, true, true).into());
        });
    }

    #[test]
    fn test_analyze_range_terms() {
        let config = QueryParserConfig {
            analyze_range_terms: true,
            ..Default::default()
        };
        with_builder(config, |builder| {
            let query = range_query(builder, "field", Some("A"), Some("Z"), true, false).unwrap();
            assert_eq!(query.to_string(), "field:[a TO z}");
        });

        with_builder(QueryParserConfig::default(), |builder| {
            let query = range_query(builder, "field", Some("A"), Some("Z"), true, false).unwrap();
            assert_eq!(query.to_string(), "field:[A TO Z}");
        });
    }
}
