//! # synparse
//!
//! A synonym-aware query parser. Query strings in Lucene's classic syntax
//! are analyzed field by field and compiled into query trees whose shape
//! follows the analyzer's token graph: single terms, synonym queries,
//! phrases, multi-phrases and boolean combinations.
//!
//! ## Features
//!
//! - Full classic query syntax: fields, phrases, boosts, ranges, wildcards,
//!   fuzzy terms, regular expressions and boolean operators
//! - Multi-word synonyms outside quotes when whitespace splitting is off
//! - Pluggable analyzers, per-field analysis and replaceable query factories
//! - Query trees that render back to query syntax and serialize to JSON
//!
//! ```
//! use std::sync::Arc;
//! use synparse::analysis::analyzer::StandardAnalyzer;
//! use synparse::analysis::synonym::SynonymMap;
//! use synparse::parser::QueryParser;
//!
//! let mut synonyms = SynonymMap::new();
//! synonyms.add_mapping("dogs", ["dog"]);
//! let analyzer = StandardAnalyzer::with_synonyms(synonyms).unwrap();
//! let parser = QueryParser::new("body", Arc::new(analyzer));
//!
//! let query = parser.parse("+dogs -cats").unwrap();
//! assert_eq!(query.to_string_with_field("body"), "+Synonym(dog dogs) -cats");
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod parser;
pub mod query;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
