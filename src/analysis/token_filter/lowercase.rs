//! Lowercasing filter.
//!
//! ```
//! use synparse::analysis::token::Token;
//! use synparse::analysis::token_filter::{Filter, LowercaseFilter};
//!
//! let tokens = vec![Token::new("Guinea", 0), Token::new("PIG", 1)];
//! let words: Vec<String> = LowercaseFilter::new()
//!     .filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(words, ["guinea", "pig"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Lowercases token text. Stopped tokens are left alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|mut token| {
            if !token.is_stopped() && token.text.chars().any(char::is_uppercase) {
                token.text = token.text.to_lowercase();
            }
            token
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }

    fn is_normalizing(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_stopped_tokens_untouched() {
        let tokens = vec![Token::new("Straße", 0), Token::new("THE", 1).stop()];

        let result: Vec<Token> = LowercaseFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].text, "straße");
        assert_eq!(result[1].text, "THE");
    }

    #[test]
    fn test_is_normalizing() {
        assert!(LowercaseFilter::new().is_normalizing());
    }
}
