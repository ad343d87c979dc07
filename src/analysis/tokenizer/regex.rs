//! Tokenizer that emits regex matches.

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, SynparseError};

const WORD_PATTERN: &str = r"\w+";

/// Every non-overlapping match of the pattern becomes a token; text between
/// matches is discarded.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    regex: Regex,
}

impl RegexTokenizer {
    /// Tokenizer matching runs of word characters (`\w+`).
    pub fn new() -> Result<Self> {
        Self::with_pattern(WORD_PATTERN)
    }

    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            SynparseError::analysis(format!("Invalid tokenizer pattern '{pattern}': {e}"))
        })?;
        Ok(RegexTokenizer { regex })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("word pattern is valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .regex
            .find_iter(text)
            .enumerate()
            .map(|(position, m)| Token::from_span(text, position, m.start(), m.end()))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
