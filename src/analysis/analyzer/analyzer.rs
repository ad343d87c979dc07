//! The analyzer interface the query parser compiles against.
//!
//! ```text
//! field text ─▶ Tokenizer ─▶ Filter ... Filter ─▶ tokens ─▶ QueryParser
//! ```
//!
//! Any type producing a position graph can stand in for the pipeline:
//!
//! ```
//! use synparse::analysis::analyzer::Analyzer;
//! use synparse::analysis::token::{Token, TokenStream};
//! use synparse::error::Result;
//!
//! /// Emits each character as its own position.
//! struct CharAnalyzer;
//!
//! impl Analyzer for CharAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         let tokens: Vec<Token> = text
//!             .chars()
//!             .enumerate()
//!             .map(|(i, c)| Token::new(c.to_string(), i))
//!             .collect();
//!         Ok(Box::new(tokens.into_iter()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "char"
//!     }
//!
//!     fn as_any(&self) -> &dyn std::any::Any {
//!         self
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub trait Analyzer: Send + Sync {
    /// Turn field text into a token graph.
    ///
    /// A token with `position_increment == 0` is an alternative for the
    /// previous position; `position_length > 1` marks a multi-word synonym.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Rewrite a single untokenized term (wildcard chunk, prefix, fuzzy term
    /// or range bound). Identity unless overridden.
    fn normalize(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }

    fn name(&self) -> &'static str;

    /// Downcasting hook, used to find a
    /// [`PerFieldAnalyzer`](super::PerFieldAnalyzer) behind a trait object.
    fn as_any(&self) -> &dyn std::any::Any;
}
