//! Single-token tokenizer for identifier-like fields.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Emits the whole input as one token, or nothing for empty input.
///
/// Backs [`KeywordAnalyzer`](crate::analysis::analyzer::KeywordAnalyzer), so
/// `id:X-1` in a query matches the literal `X-1`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WholeTokenizer;

impl WholeTokenizer {
    pub fn new() -> Self {
        WholeTokenizer
    }
}

impl Tokenizer for WholeTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let token = (!text.is_empty()).then(|| Token::new(text, 0).with_offsets(0, text.len()));
        Ok(Box::new(token.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whole"
    }
}
