//! Boolean query for combining multiple queries.

use serde::{Deserialize, Serialize};

use crate::query::query::Query;

/// Occurrence requirements for boolean clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occur {
    /// The clause must match (equivalent to AND).
    Must,
    /// The clause should match (equivalent to OR).
    Should,
    /// The clause must not match (equivalent to NOT).
    MustNot,
}

impl Occur {
    /// The prefix used in query syntax: `+`, `-` or nothing.
    pub fn symbol(&self) -> &'static str {
        match self {
            Occur::Must => "+",
            Occur::Should => "",
            Occur::MustNot => "-",
        }
    }
}

/// A clause in a boolean query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanClause {
    /// The query for this clause.
    pub query: Query,
    /// The occurrence requirement.
    pub occur: Occur,
}

impl BooleanClause {
    /// Create a new boolean clause.
    pub fn new(query: Query, occur: Occur) -> Self {
        BooleanClause { query, occur }
    }

    /// Create a MUST clause.
    pub fn must(query: Query) -> Self {
        BooleanClause::new(query, Occur::Must)
    }

    /// Create a SHOULD clause.
    pub fn should(query: Query) -> Self {
        BooleanClause::new(query, Occur::Should)
    }

    /// Create a MUST_NOT clause.
    pub fn must_not(query: Query) -> Self {
        BooleanClause::new(query, Occur::MustNot)
    }

    /// Whether the clause is prohibited.
    pub fn is_prohibited(&self) -> bool {
        self.occur == Occur::MustNot
    }
}

/// A boolean query that combines multiple queries with boolean logic.
///
/// Clause order is significant for equality.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BooleanQuery {
    clauses: Vec<BooleanClause>,
}

impl BooleanQuery {
    /// Create a new empty boolean query.
    pub fn new() -> Self {
        BooleanQuery {
            clauses: Vec::new(),
        }
    }

    /// Create a boolean query from clauses.
    pub fn from_clauses(clauses: Vec<BooleanClause>) -> Self {
        BooleanQuery { clauses }
    }

    /// Add a clause to this boolean query.
    pub fn add_clause(&mut self, clause: BooleanClause) {
        self.clauses.push(clause);
    }

    /// Add a MUST clause.
    pub fn add_must(&mut self, query: Query) {
        self.add_clause(BooleanClause::must(query));
    }

    /// Add a SHOULD clause.
    pub fn add_should(&mut self, query: Query) {
        self.add_clause(BooleanClause::should(query));
    }

    /// Add a MUST_NOT clause.
    pub fn add_must_not(&mut self, query: Query) {
        self.add_clause(BooleanClause::must_not(query));
    }

    /// Get the clauses.
    pub fn clauses(&self) -> &[BooleanClause] {
        &self.clauses
    }

    /// Consume the query and return its clauses.
    pub fn into_clauses(self) -> Vec<BooleanClause> {
        self.clauses
    }

    /// Check if the query has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Render as `+a -b c`; nested boolean queries are parenthesized.
    ///
    /// `Should` clauses carry no prefix, so the output parses back to the
    /// same occurs under the OR default operator only.
    pub fn to_string_with_field(&self, default_field: &str) -> String {
        self.clauses
            .iter()
            .map(|clause| {
                let inner = clause.query.to_string_with_field(default_field);
                match clause.query {
                    Query::Boolean(_) => format!("{}({inner})", clause.occur.symbol()),
                    _ => format!("{}{inner}", clause.occur.symbol()),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Builder for creating boolean queries.
#[derive(Debug, Default)]
pub struct BooleanQueryBuilder {
    query: BooleanQuery,
}

impl BooleanQueryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a MUST clause.
    pub fn must(mut self, query: Query) -> Self {
        self.query.add_must(query);
        self
    }

    /// Add a SHOULD clause.
    pub fn should(mut self, query: Query) -> Self {
        self.query.add_should(query);
        self
    }

    /// Add a MUST_NOT clause.
    pub fn must_not(mut self, query: Query) -> Self {
        self.query.add_must_not(query);
        self
    }

    /// Build the boolean query.
    pub fn build(self) -> BooleanQuery {
        self.query
    }
}
