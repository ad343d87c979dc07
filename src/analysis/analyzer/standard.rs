//! Default analyzer for full-text fields.
//!
//! Words are lowercased and English stop words removed (leaving position
//! holes). An optional [`SynonymMap`] stacks synonyms on the remaining words.
//!
//! ```
//! use synparse::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Hello the World").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[1].text, "world");
//! assert_eq!(tokens[1].position_increment, 2);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::synonym::SynonymMap;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{LowercaseFilter, StopFilter, SynonymGraphFilter};
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::error::Result;

/// Lowercase, stop words, optional synonyms, over a pluggable tokenizer.
#[derive(Clone, Debug)]
pub struct StandardAnalyzer {
    pipeline: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Word-character tokenizer, no synonyms.
    pub fn new() -> Result<Self> {
        Ok(Self::from_tokenizer(Arc::new(RegexTokenizer::new()?), None))
    }

    /// Word-character tokenizer with synonym expansion; originals are kept.
    pub fn with_synonyms(synonyms: SynonymMap) -> Result<Self> {
        Ok(Self::from_tokenizer(Arc::new(RegexTokenizer::new()?), Some(synonyms)))
    }

    pub fn from_tokenizer(tokenizer: Arc<dyn Tokenizer>, synonyms: Option<SynonymMap>) -> Self {
        let mut pipeline = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::new()));
        if let Some(synonyms) = synonyms.filter(|s| !s.is_empty()) {
            pipeline = pipeline.add_filter(Arc::new(SynonymGraphFilter::new(synonyms, true)));
        }

        StandardAnalyzer {
            pipeline: pipeline.with_name("standard"),
        }
    }

    pub fn pipeline(&self) -> &PipelineAnalyzer {
        &self.pipeline
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::from_tokenizer(Arc::new(RegexTokenizer::default()), None)
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.pipeline.analyze(text)
    }

    fn normalize(&self, text: &str) -> Result<String> {
        self.pipeline.normalize(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
