//! Field-keyed analyzer dispatch.

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Routes each field to its own analyzer, falling back to a default.
///
/// The query parser recognizes this type behind `dyn Analyzer` and analyzes
/// `id:ABC-1` with the `id` analyzer. Used directly as an [`Analyzer`], it
/// behaves like the default.
///
/// ```
/// use std::sync::Arc;
///
/// use synparse::analysis::analyzer::{Analyzer, KeywordAnalyzer, PerFieldAnalyzer, StandardAnalyzer};
///
/// let mut analyzer = PerFieldAnalyzer::new(Arc::new(StandardAnalyzer::new().unwrap()));
/// analyzer.add_analyzer("id", Arc::new(KeywordAnalyzer::new()));
///
/// assert_eq!(analyzer.analyzer_for("id").name(), "keyword");
/// assert_eq!(analyzer.analyzer_for("body").name(), "standard");
/// ```
#[derive(Clone)]
pub struct PerFieldAnalyzer {
    default: Arc<dyn Analyzer>,
    fields: AHashMap<String, Arc<dyn Analyzer>>,
}

impl PerFieldAnalyzer {
    pub fn new(default: Arc<dyn Analyzer>) -> Self {
        PerFieldAnalyzer {
            default,
            fields: AHashMap::new(),
        }
    }

    /// Register `analyzer` for `field`, replacing any earlier one.
    pub fn add_analyzer(&mut self, field: impl Into<String>, analyzer: Arc<dyn Analyzer>) {
        self.fields.insert(field.into(), analyzer);
    }

    pub fn analyzer_for(&self, field: &str) -> &Arc<dyn Analyzer> {
        self.fields.get(field).unwrap_or(&self.default)
    }

    pub fn default_analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.default
    }
}

impl Analyzer for PerFieldAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.default.analyze(text)
    }

    fn normalize(&self, text: &str) -> Result<String> {
        self.default.normalize(text)
    }

    fn name(&self) -> &'static str {
        "per_field"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl std::fmt::Debug for PerFieldAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut fields: Vec<(&str, &str)> = self
            .fields
            .iter()
            .map(|(field, analyzer)| (field.as_str(), analyzer.name()))
            .collect();
        fields.sort_unstable();

        f.debug_struct("PerFieldAnalyzer")
            .field("default", &self.default.name())
            .field("fields", &fields)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::{KeywordAnalyzer, StandardAnalyzer};

    fn analyzer() -> PerFieldAnalyzer {
        let mut analyzer = PerFieldAnalyzer::new(Arc::new(StandardAnalyzer::new().unwrap()));
        analyzer.add_analyzer("id", Arc::new(KeywordAnalyzer::new()));
        analyzer
    }

    #[test]
    fn test_dispatch_by_field() {
        let analyzer = analyzer();

        let body: Vec<String> = analyzer
            .analyzer_for("body")
            .analyze("Hello World")
            .unwrap()
            .map(|t| t.text)
            .collect();
        assert_eq!(body, ["hello", "world"]);

        let id: Vec<String> = analyzer
            .analyzer_for("id")
            .analyze("Hello World")
            .unwrap()
            .map(|t| t.text)
            .collect();
        assert_eq!(id, ["Hello World"]);
    }

    #[test]
    fn test_trait_methods_use_default() {
        let analyzer = analyzer();

        assert_eq!(analyzer.analyze("Hello World").unwrap().count(), 2);
        assert_eq!(analyzer.normalize("HeLLo*").unwrap(), "hello*");
        assert_eq!(analyzer.default_analyzer().name(), "standard");
    }

    #[test]
    fn test_debug_lists_fields() {
        assert_eq!(
            format!("{:?}", analyzer()),
            r#"PerFieldAnalyzer { default: "standard", fields: [("id", "keyword")] }"#
        );
    }
}
