//! Analyzer for fields matched verbatim.
//!
//! ```
//! use synparse::analysis::analyzer::{Analyzer, KeywordAnalyzer};
//!
//! let tokens: Vec<_> = KeywordAnalyzer::new().analyze("SKU 12-B").unwrap().collect();
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].text, "SKU 12-B");
//! ```

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::{Tokenizer, WholeTokenizer};
use crate::error::Result;

/// One token per input, no case folding. `normalize` is the identity.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeywordAnalyzer {
    tokenizer: WholeTokenizer,
}

impl KeywordAnalyzer {
    pub fn new() -> Self {
        KeywordAnalyzer::default()
    }
}

impl Analyzer for KeywordAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.tokenizer.tokenize(text)
    }

    fn name(&self) -> &'static str {
        "keyword"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
