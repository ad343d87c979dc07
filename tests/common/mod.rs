//! Mock analyzers shared by the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use synparse::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use synparse::analysis::synonym::SynonymMap;
use synparse::analysis::token::{Token, TokenStream};
use synparse::analysis::token_filter::{LowercaseFilter, SynonymGraphFilter};
use synparse::analysis::tokenizer::WhitespaceTokenizer;
use synparse::error::Result;

/// Whitespace tokenizer and lowercasing, no synonyms.
pub fn plain_analyzer() -> Arc<dyn Analyzer> {
    Arc::new(
        PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("plain"),
    )
}

/// Adds `dog` for `dogs` and `cavy` for `guinea pig`, keeping originals.
pub fn synonym_analyzer() -> Arc<dyn Analyzer> {
    let mut synonyms = SynonymMap::new();
    synonyms.add_mapping("dogs", ["dog"]);
    synonyms.add_mapping("guinea pig", ["cavy"]);

    Arc::new(
        PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(SynonymGraphFilter::new(synonyms, true)))
            .with_name("mock_synonym"),
    )
}

/// One token per character; `国` gets `國` stacked on it.
pub struct CjkSynonymAnalyzer;

impl Analyzer for CjkSynonymAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        for (position, c) in text.chars().filter(|c| !c.is_whitespace()).enumerate() {
            tokens.push(Token::new(c.to_string(), position));
            if c == '国' {
                tokens.push(Token::new("國", position).with_position_increment(0));
            }
        }
        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "mock_cjk_synonym"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Drops `stop` and splits `phrase` into `phrase1 phrase2`.
pub struct PhraseSplittingAnalyzer;

impl Analyzer for PhraseSplittingAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        for word in text.split_whitespace().map(str::to_lowercase) {
            match word.as_str() {
                "stop" => {}
                "phrase" => {
                    tokens.push(Token::new("phrase1", tokens.len()));
                    tokens.push(Token::new("phrase2", tokens.len()));
                }
                _ => tokens.push(Token::new(word.clone(), tokens.len())),
            }
        }
        Ok(Box::new(tokens.into_iter()))
    }

    fn normalize(&self, text: &str) -> Result<String> {
        Ok(text.to_lowercase())
    }

    fn name(&self) -> &'static str {
        "phrase_splitting"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
