//! Whitespace tokenizer.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Splits on Unicode whitespace and keeps everything else, punctuation
/// included.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut word_start = None;

        for (offset, c) in text.char_indices().chain(std::iter::once((text.len(), ' '))) {
            match word_start {
                Some(start) if c.is_whitespace() => {
                    tokens.push(Token::from_span(text, tokens.len(), start, offset));
                    word_start = None;
                }
                None if !c.is_whitespace() => word_start = Some(offset),
                _ => {}
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
