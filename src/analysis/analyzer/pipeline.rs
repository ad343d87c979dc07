//! Tokenizer plus filter chain.
//!
//! ```
//! use std::sync::Arc;
//!
//! use synparse::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use synparse::analysis::token_filter::{LowercaseFilter, StopFilter};
//! use synparse::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(["and"])))
//!     .with_name("title");
//!
//! let words: Vec<String> = analyzer.analyze("Cats AND Dogs").unwrap().map(|t| t.text).collect();
//! assert_eq!(words, ["cats", "dogs"]);
//! assert_eq!(analyzer.normalize("DOG*").unwrap(), "dog*");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    label: String,
}

impl PipelineAnalyzer {
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            label: tokenizer.name().to_string(),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Append a filter; filters run in insertion order.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Label shown in `Debug` output and logs.
    pub fn with_name<S: Into<String>>(mut self, label: S) -> Self {
        self.label = label.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.filters
            .iter()
            .try_fold(self.tokenizer.tokenize(text)?, |tokens, filter| filter.filter(tokens))
    }

    /// Runs `text` as one token through the normalizing filters only.
    fn normalize(&self, text: &str) -> Result<String> {
        let seed: TokenStream = Box::new(std::iter::once(Token::new(text, 0)));
        let mut tokens = self
            .filters
            .iter()
            .filter(|f| f.is_normalizing())
            .try_fold(seed, |tokens, filter| filter.filter(tokens))?;

        Ok(tokens.next().map_or_else(|| text.to_string(), |token| token.text))
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filters: Vec<&str> = self.filters.iter().map(|f| f.name()).collect();
        f.debug_struct("PipelineAnalyzer")
            .field("label", &self.label)
            .field("tokenizer", &self.tokenizer.name())
            .field("filters", &filters)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::synonym::SynonymMap;
    use crate::analysis::token_filter::{LowercaseFilter, StopFilter, SynonymGraphFilter};
    use crate::analysis::tokenizer::WhitespaceTokenizer;

    fn synonym_pipeline() -> PipelineAnalyzer {
        let mut synonyms = SynonymMap::new();
        synonyms.add_mapping("guinea pig", ["cavy"]);
        synonyms.add_mapping("dogs", ["dog"]);

        PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::from_words(["the"])))
            .add_filter(Arc::new(SynonymGraphFilter::new(synonyms, true)))
    }

    #[test]
    fn test_filters_run_in_order() {
        let tokens: Vec<Token> = synonym_pipeline().analyze("The Guinea Pig").unwrap().collect();
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();

        assert_eq!(words, ["guinea", "cavy", "pig"]);
        assert_eq!(tokens[0].position_increment, 2);
        assert_eq!(tokens[1].position_length, 2);
    }

    #[test]
    fn test_normalize_skips_stop_and_synonym_filters() {
        let analyzer = synonym_pipeline();

        assert_eq!(analyzer.normalize("DoGs*").unwrap(), "dogs*");
        assert_eq!(analyzer.normalize("THE").unwrap(), "the");
    }

    #[test]
    fn test_label_defaults_to_tokenizer() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()));
        assert_eq!(analyzer.label(), "whitespace");
        assert!(format!("{analyzer:?}").contains("whitespace"));
    }
}
