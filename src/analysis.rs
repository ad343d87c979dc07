//! Text analysis used by the query parser.
//!
//! A small analysis toolkit: tokenizers, token filters (including a synonym
//! graph filter) and analyzers built from them. The query parser consumes any
//! [`Analyzer`](analyzer::Analyzer); these implementations make the parser
//! usable on its own.

pub mod analyzer;
pub mod synonym;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
