//! Query trees produced by the query parser.
//!
//! A [`Query`] is a plain owned value: it can be cloned, compared
//! structurally, serialized and rendered back to query syntax with
//! [`Query::to_string_with_field`].

pub mod boolean;
pub mod boost;
pub mod multi_term;
pub mod phrase;
#[allow(clippy::module_inception)]
pub mod query;
pub mod range;
pub mod synonym;
pub mod term;

pub use self::boolean::{BooleanClause, BooleanQuery, BooleanQueryBuilder, Occur};
pub use self::boost::BoostQuery;
pub use self::multi_term::{FuzzyQuery, PrefixQuery, RegexpQuery, WildcardQuery};
pub use self::phrase::{MultiPhraseQuery, PhraseQuery};
pub use self::query::Query;
pub use self::range::{NumericRangeQuery, NumericType, NumericValue, TermRangeQuery};
pub use self::synonym::SynonymQuery;
pub use self::term::TermQuery;

/// Write the `field:` prefix unless `field` is the default field.
pub(crate) fn field_prefix(field: &str, default_field: &str) -> String {
    if field == default_field {
        String::new()
    } else {
        format!("{field}:")
    }
}
