//! Adapter between the compiler and the analyzer.

use crate::analysis::analyzer::{Analyzer, PerFieldAnalyzer};
use crate::analysis::token::Token;
use crate::error::{Result, SynparseError};

/// Runs the analyzer for a field and collects its tokens.
///
/// When the analyzer is a [`PerFieldAnalyzer`], the analyzer registered for
/// the field is used; otherwise the analyzer itself handles every field.
pub struct TokenStreamAdapter<'a> {
    analyzer: &'a dyn Analyzer,
}

impl<'a> TokenStreamAdapter<'a> {
    pub fn new(analyzer: &'a dyn Analyzer) -> Self {
        TokenStreamAdapter { analyzer }
    }

    fn analyzer_for(&self, field: &str) -> &'a dyn Analyzer {
        match self.analyzer.as_any().downcast_ref::<PerFieldAnalyzer>() {
            Some(per_field) => per_field.analyzer_for(field).as_ref(),
            None => self.analyzer,
        }
    }

    /// Analyze `text` for `field`.
    ///
    /// Stopped tokens are left out and their position increments move to the
    /// next kept token, so gaps survive. An empty result means the text
    /// contributes nothing.
    pub fn analyze(&self, field: &str, text: &str) -> Result<Vec<Token>> {
        let analyzer = self.analyzer_for(field);
        let stream = analyzer.analyze(text).map_err(|e| {
            analysis_error(e, || {
                format!("analyzer '{}' failed on field '{field}'", analyzer.name())
            })
        })?;

        let mut tokens = Vec::new();
        let mut carried = 0;
        for token in stream {
            if token.is_stopped() {
                carried += token.position_increment;
                continue;
            }
            let increment = token.position_increment + carried;
            carried = 0;
            tokens.push(token.with_position_increment(increment));
        }

        Ok(tokens)
    }

    /// Normalize a term that is not tokenized (wildcard, prefix, fuzzy or
    /// range text) with the field's analyzer.
    pub fn normalize(&self, field: &str, text: &str) -> Result<String> {
        let analyzer = self.analyzer_for(field);
        analyzer.normalize(text).map_err(|e| {
            analysis_error(e, || {
                format!(
                    "analyzer '{}' failed to normalize '{text}' on field '{field}'",
                    analyzer.name()
                )
            })
        })
    }
}

/// Analysis errors pass through as they are; anything else becomes one,
/// prefixed with `context`.
fn analysis_error(err: SynparseError, context: impl FnOnce() -> String) -> SynparseError {
    match err {
        SynparseError::Analysis(_) => err,
        other => SynparseError::analysis(format!("{}: {other}", context())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::analysis::analyzer::{KeywordAnalyzer, StandardAnalyzer};
    use crate::analysis::token::TokenStream;

    struct StoppingAnalyzer;

    impl Analyzer for StoppingAnalyzer {
        fn analyze(&self, _text: &str) -> Result<TokenStream> {
            Ok(Box::new(
                vec![
                    Token::new("a", 0),
                    Token::new("the", 1).stop(),
                    Token::new("b", 2),
                ]
                .into_iter(),
            ))
        }

        fn name(&self) -> &'static str {
            "stopping"
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    /// Fails with an analysis error when `analysis` is set, otherwise with
    /// a generic one.
    struct FailingAnalyzer {
        analysis: bool,
    }

    impl Analyzer for FailingAnalyzer {
        fn analyze(&self, _text: &str) -> Result<TokenStream> {
            if self.analysis {
                Err(SynparseError::analysis("unbalanced input"))
            } else {
                Err(SynparseError::other("boom"))
            }
        }

        fn name(&self) -> &'static str {
            "failing"
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    #[test]
    fn test_stopped_tokens_carry_increment() {
        let analyzer = StoppingAnalyzer;
        let tokens = TokenStreamAdapter::new(&analyzer).analyze("f", "a the b").unwrap();

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert_eq!(tokens[1].position_increment, 2);
    }

    #[test]
    fn test_per_field_dispatch() {
        let mut analyzer = PerFieldAnalyzer::new(Arc::new(StandardAnalyzer::new().unwrap()));
        analyzer.add_analyzer("id", Arc::new(KeywordAnalyzer::new()));
        let adapter = TokenStreamAdapter::new(&analyzer);

        assert_eq!(adapter.analyze("body", "Hello World").unwrap().len(), 2);
        assert_eq!(adapter.analyze("id", "Hello World").unwrap().len(), 1);
        assert_eq!(adapter.normalize("body", "HeLLo").unwrap(), "hello");
        assert_eq!(adapter.normalize("id", "HeLLo").unwrap(), "HeLLo");
    }

    #[test]
    fn test_analyzer_failure() {
        let analyzer = FailingAnalyzer { analysis: false };
        let result = TokenStreamAdapter::new(&analyzer).analyze("f", "x");

        match result {
            Err(SynparseError::Analysis(msg)) => {
                assert_eq!(msg, "analyzer 'failing' failed on field 'f': Error: boom")
            }
            other => panic!("expected an analysis error, got {other:?}"),
        }
    }

    #[test]
    fn test_analysis_error_passes_through() {
        let analyzer = FailingAnalyzer { analysis: true };
        let result = TokenStreamAdapter::new(&analyzer).analyze("f", "x");

        match result {
            Err(SynparseError::Analysis(msg)) => assert_eq!(msg, "unbalanced input"),
            other => panic!("expected an analysis error, got {other:?}"),
        }
    }
}
