//! Analyzers: the query parser's only view of text analysis.
//!
//! [`PerFieldAnalyzer`] lets each field pick its own pipeline.

pub mod analyzer;
pub mod keyword;
pub mod per_field;
pub mod pipeline;
pub mod standard;

pub use self::analyzer::Analyzer;
pub use self::keyword::KeywordAnalyzer;
pub use self::per_field::PerFieldAnalyzer;
pub use self::pipeline::PipelineAnalyzer;
pub use self::standard::StandardAnalyzer;
