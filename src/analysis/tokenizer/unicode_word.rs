//! Tokenizer over Unicode word boundaries (UAX #29).
//!
//! Ideographic text comes out one character per token, so a query such as
//! `中国` analyzes to two positions without a dictionary segmenter.
//!
//! ```
//! use synparse::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
//!
//! let words: Vec<String> = UnicodeWordTokenizer::new()
//!     .tokenize("Hello, 中国")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(words, ["Hello", "中", "国"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Emits word segments and drops punctuation and whitespace.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .unicode_word_indices()
            .enumerate()
            .map(|(position, (start, word))| Token::from_span(text, position, start, start + word.len()))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
