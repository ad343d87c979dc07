//! Stop word filter.
//!
//! A removed word leaves a hole in the position graph: its increment is
//! carried onto the next surviving token, which is how a phrase such as
//! `"hello the world"` keeps `world` two positions after `hello`.
//!
//! ```
//! use synparse::analysis::token::Token;
//! use synparse::analysis::token_filter::{Filter, StopFilter};
//!
//! let tokens = vec![Token::new("hello", 0), Token::new("the", 1), Token::new("world", 2)];
//! let kept: Vec<Token> = StopFilter::new()
//!     .filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(kept.len(), 2);
//! assert_eq!(kept[1].position_increment, 2);
//! ```

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

static ENGLISH_STOP_WORDS: LazyLock<Arc<AHashSet<String>>> = LazyLock::new(|| {
    Arc::new(
        [
            "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into",
            "is", "it", "no", "not", "of", "on", "or", "such", "that", "the", "their", "then",
            "there", "these", "they", "this", "to", "was", "will", "with",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
    )
});

/// Drops stop words, or with `mark_only` flags them as stopped.
#[derive(Clone, Debug)]
pub struct StopFilter {
    words: Arc<AHashSet<String>>,
    mark_only: bool,
}

impl StopFilter {
    /// English stop word list.
    pub fn new() -> Self {
        StopFilter {
            words: Arc::clone(&ENGLISH_STOP_WORDS),
            mark_only: false,
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
            mark_only: false,
        }
    }

    /// Keep stop words in the stream with `stopped` set instead of removing
    /// them. The query parser drops them either way.
    pub fn mark_only(mut self, mark_only: bool) -> Self {
        self.mark_only = mark_only;
        self
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        if self.mark_only {
            let words = Arc::clone(&self.words);
            return Ok(Box::new(tokens.map(move |token| {
                if words.contains(&token.text) { token.stop() } else { token }
            })));
        }

        let mut kept: Vec<Token> = Vec::new();
        let mut hole = 0;
        for token in tokens {
            if self.is_stop_word(&token.text) {
                hole += token.position_increment;
                continue;
            }
            let increment = token.position_increment + hole;
            hole = 0;
            kept.push(token.with_position_increment(increment));
        }

        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
