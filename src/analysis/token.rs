//! Tokens produced by analyzers.
//!
//! A token is one term of the analyzer's output graph. Alternatives stacked
//! on the same position carry `position_increment == 0`; a token standing in
//! for several input words (a multi-word synonym) carries a
//! `position_length` greater than one.
//!
//! ```text
//! "guinea pig" with cavy => guinea pig
//!
//!   guinea  inc=1 len=1
//!   cavy    inc=0 len=2
//!   pig     inc=1 len=1
//! ```
//!
//! # Examples
//!
//! ```
//! use synparse::analysis::token::Token;
//!
//! let token = Token::new("dog", 0).with_position_increment(0);
//! assert!(token.is_stacked());
//! assert_eq!(token.position_length, 1);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A term emitted by an analyzer, with its position-graph attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Term text.
    pub text: String,

    /// Position assigned by the tokenizer (0-based).
    pub position: usize,

    /// Byte offset of the first character in the analyzed text.
    pub start_offset: usize,

    /// Byte offset one past the last character in the analyzed text.
    pub end_offset: usize,

    /// Distance from the previous token's position. Zero stacks this token on
    /// the previous one; values above one leave holes.
    pub position_increment: usize,

    /// Number of positions this token covers.
    pub position_length: usize,

    /// Set by filters that want the token dropped but its position kept.
    pub stopped: bool,

    pub token_type: Option<TokenType>,
}

/// Coarse classification of a token's text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    Word,
    Number,
    /// Han, kana or hangul.
    Ideograph,
    /// Injected by the synonym filter.
    Synonym,
    Other,
}

impl TokenType {
    /// Classify `text` by its characters.
    pub fn of(text: &str) -> TokenType {
        if text.is_empty() {
            TokenType::Other
        } else if text.chars().any(is_ideograph) {
            TokenType::Ideograph
        } else if text.chars().all(|c| c.is_ascii_digit()) {
            TokenType::Number
        } else if text.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
            TokenType::Word
        } else {
            TokenType::Other
        }
    }
}

fn is_ideograph(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{30FF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{AC00}'..='\u{D7AF}')
}

impl Token {
    /// A token at `position` with increment and length of one.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            position_increment: 1,
            position_length: 1,
            stopped: false,
            token_type: None,
        }
    }

    /// Builds a token for `text[start..end]`, classifying it.
    pub fn from_span(text: &str, position: usize, start: usize, end: usize) -> Self {
        let word = &text[start..end];
        Token::new(word, position)
            .with_offsets(start, end)
            .with_token_type(TokenType::of(word))
    }

    pub fn with_offsets(mut self, start: usize, end: usize) -> Self {
        self.start_offset = start;
        self.end_offset = end;
        self
    }

    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }

    pub fn with_position_length(mut self, length: usize) -> Self {
        self.position_length = length;
        self
    }

    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = Some(token_type);
        self
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// True when this token shares the previous token's position.
    pub fn is_stacked(&self) -> bool {
        self.position_increment == 0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A stream of tokens, consumed once.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_defaults() {
        let token = Token::new("guinea", 3);

        assert_eq!(token.position, 3);
        assert_eq!(token.position_increment, 1);
        assert_eq!(token.position_length, 1);
        assert!(!token.is_stacked());
        assert!(!token.is_stopped());
    }

    #[test]
    fn test_from_span() {
        let text = "old guinea pig";
        let token = Token::from_span(text, 1, 4, 10);

        assert_eq!(token.text, "guinea");
        assert_eq!(token.start_offset, 4);
        assert_eq!(token.end_offset, 10);
        assert_eq!(token.token_type, Some(TokenType::Word));
    }

    #[test]
    fn test_multi_word_synonym_attributes() {
        let cavy = Token::new("cavy", 0)
            .with_position_increment(0)
            .with_position_length(2)
            .with_token_type(TokenType::Synonym);

        assert!(cavy.is_stacked());
        assert_eq!(cavy.position_length, 2);
        assert_eq!(cavy.to_string(), "cavy");
    }

    #[test]
    fn test_token_type_of() {
        assert_eq!(TokenType::of("e-mail"), TokenType::Word);
        assert_eq!(TokenType::of("2005"), TokenType::Number);
        assert_eq!(TokenType::of("国"), TokenType::Ideograph);
        assert_eq!(TokenType::of("ねこ"), TokenType::Ideograph);
        assert_eq!(TokenType::of("a+b"), TokenType::Other);
        assert_eq!(TokenType::of(""), TokenType::Other);
    }
}
