//! Tokenizers split raw field text into positioned tokens.
//!
//! The query parser never calls a tokenizer directly; analyzers own one and
//! run filters over its output.
//!
//! ```
//! use synparse::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
//!
//! let words: Vec<String> = WhitespaceTokenizer::new()
//!     .tokenize("guinea  pig")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(words, ["guinea", "pig"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Splits text into tokens at consecutive positions starting from zero.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Short identifier used in logs and analyzer names.
    fn name(&self) -> &'static str;
}

pub mod regex;
pub mod unicode_word;
pub mod whitespace;
pub mod whole;

pub use self::regex::RegexTokenizer;
pub use self::unicode_word::UnicodeWordTokenizer;
pub use self::whitespace::WhitespaceTokenizer;
pub use self::whole::WholeTokenizer;
