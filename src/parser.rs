//! Query parsing and compilation.
//!
//! ```text
//! query string ─ syntax ─▶ QueryTree ─ stitcher ─▶ segments
//!                                                    │
//!                 token_stream ◀─ field_query ◀──────┘
//!                      │
//!                   position ─▶ field_query ─▶ assembly ─▶ Query
//! ```

pub mod assembly;
pub mod ast;
pub mod config;
pub mod date;
pub mod factory;
pub mod field_query;
pub mod position;
pub mod query_parser;
pub mod stitcher;
pub mod syntax;
pub mod token_stream;

pub use self::ast::{AtomKind, Clause, Conjunction, FieldAtom, Group, Modifier, Node, QueryTree};
pub use self::config::{Operator, QueryParserConfig};
pub use self::factory::{DefaultQueryFactory, QueryFactory};
pub use self::field_query::FieldQueryBuilder;
pub use self::query_parser::{QueryParser, QueryParserBuilder};
