//! The query parser: query syntax in, [`Query`] out.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::analysis::analyzer::Analyzer;
use crate::error::{Result, SynparseError};
use crate::parser::assembly::BooleanAssembler;
use crate::parser::ast::{AtomKind, Clause, FieldAtom, Node, QueryTree};
use crate::parser::config::{Operator, QueryParserConfig};
use crate::parser::date::DateResolution;
use crate::parser::factory::{DefaultQueryFactory, QueryFactory};
use crate::parser::field_query::{FieldQueryBuilder, apply_slop};
use crate::parser::stitcher::{self, Segment};
use crate::parser::syntax;
use crate::query::{BooleanQuery, NumericType, Query};

/// Compiles query strings, or raw query trees, into queries.
///
/// Analysis decides the shape of each field atom: a word the analyzer
/// expands into synonyms becomes a synonym query, a quoted text becomes a
/// phrase or multi-phrase query, and so on. A parser holds no per-call state
/// and can be shared between threads.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use synparse::analysis::analyzer::StandardAnalyzer;
/// use synparse::analysis::synonym::SynonymMap;
/// use synparse::parser::QueryParser;
///
/// let mut synonyms = SynonymMap::new();
/// synonyms.add_mapping("guinea pig", ["cavy"]);
/// let analyzer = StandardAnalyzer::with_synonyms(synonyms).unwrap();
///
/// let parser = QueryParser::builder(Arc::new(analyzer))
///     .default_field("body")
///     .split_on_whitespace(false)
///     .build()
///     .unwrap();
///
/// let query = parser.parse("guinea pig").unwrap();
/// assert_eq!(query.to_string_with_field("body"), "Synonym(cavy guinea) pig");
/// ```
#[derive(Clone)]
pub struct QueryParser {
    config: QueryParserConfig,
    analyzer: Arc<dyn Analyzer>,
    factory: Arc<dyn QueryFactory>,
}

impl QueryParser {
    /// Create a parser with default settings.
    pub fn new<S: Into<String>>(default_field: S, analyzer: Arc<dyn Analyzer>) -> Self {
        Self::with_config(QueryParserConfig::new(default_field), analyzer)
    }

    /// Create a parser from a configuration.
    ///
    /// The configuration is validated when a query is compiled.
    pub fn with_config(config: QueryParserConfig, analyzer: Arc<dyn Analyzer>) -> Self {
        QueryParser {
            config,
            analyzer,
            factory: Arc::new(DefaultQueryFactory),
        }
    }

    /// Start building a parser.
    pub fn builder(analyzer: Arc<dyn Analyzer>) -> QueryParserBuilder {
        QueryParserBuilder::new(analyzer)
    }

    /// Replace the query factory.
    pub fn with_factory(mut self, factory: Arc<dyn QueryFactory>) -> Self {
        self.factory = factory;
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &QueryParserConfig {
        &self.config
    }

    /// Get the analyzer.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Get the default field.
    pub fn default_field(&self) -> &str {
        &self.config.default_field
    }

    /// Parse a query string.
    ///
    /// Blank input gives an empty boolean query.
    pub fn parse(&self, query_str: &str) -> Result<Query> {
        self.parse_field(&self.config.default_field, query_str)
    }

    /// Parse a query string with `field` as the default field.
    pub fn parse_field(&self, field: &str, query_str: &str) -> Result<Query> {
        debug!(query = query_str, field, "parsing query");
        let tree = syntax::parse_query(query_str)?;
        self.compile_field(field, &tree)
    }

    /// Compile a raw query tree.
    pub fn compile(&self, tree: &QueryTree) -> Result<Query> {
        self.compile_field(&self.config.default_field, tree)
    }

    fn compile_field(&self, field: &str, tree: &QueryTree) -> Result<Query> {
        self.config.validate()?;

        let builder = FieldQueryBuilder::new(self.analyzer.as_ref(), &self.config);
        let query = self
            .compile_level(&builder, &tree.clauses, field)?
            .unwrap_or_else(|| BooleanQuery::new().into());

        trace!(query = %query, "compiled query");
        Ok(query)
    }

    fn compile_level(
        &self,
        builder: &FieldQueryBuilder<'_>,
        clauses: &[Clause],
        field: &str,
    ) -> Result<Option<Query>> {
        let mut assembler = BooleanAssembler::new(self.config.default_operator);

        for segment in stitcher::stitch(clauses, self.config.split_on_whitespace) {
            match segment {
                Segment::Run(text) => {
                    debug!(field, text = %text, "analyzing stitched words together");
                    let query = self.factory.field_query(builder, field, &text, false)?;
                    assembler.add_multi_term_clauses(query);
                }
                Segment::Clause(clause) => {
                    let query = self.compile_node(builder, &clause.node, field)?;
                    assembler.add_clause(clause.conjunction, clause.modifier, query);
                }
            }
        }

        Ok(assembler.finish())
    }

    fn compile_node(
        &self,
        builder: &FieldQueryBuilder<'_>,
        node: &Node,
        field: &str,
    ) -> Result<Option<Query>> {
        match node {
            Node::Group(group) => {
                let field = group.field.as_deref().unwrap_or(field);
                let query = self.compile_level(builder, &group.tree.clauses, field)?;
                Ok(handle_boost(query, group.boost))
            }
            Node::Atom(atom) => {
                let field = atom.field.as_deref().unwrap_or(field);
                let query = self
                    .compile_atom(builder, atom, field)
                    .inspect_err(|e| debug!(field, error = %e, "query construction rejected"))?;
                Ok(handle_boost(query, atom.boost))
            }
        }
    }

    fn compile_atom(
        &self,
        builder: &FieldQueryBuilder<'_>,
        atom: &FieldAtom,
        field: &str,
    ) -> Result<Option<Query>> {
        let factory = self.factory.as_ref();

        match &atom.kind {
            AtomKind::Term(text) | AtomKind::BareOperator(text) => {
                factory.field_query(builder, field, text, false)
            }
            AtomKind::Phrase { text, slop } => {
                let query = factory.field_query(builder, field, text, true)?;
                Ok(match slop {
                    Some(slop) => query.map(|q| apply_slop(q, *slop)),
                    None => query,
                })
            }
            AtomKind::Wildcard(pattern) => factory.wildcard_query(builder, field, pattern).map(Some),
            AtomKind::Prefix(prefix) => factory.prefix_query(builder, field, prefix).map(Some),
            AtomKind::Fuzzy { term, similarity } => {
                let min_similarity = self.fuzzy_similarity(*similarity)?;
                factory
                    .fuzzy_query(builder, field, term, min_similarity)
                    .map(Some)
            }
            AtomKind::Regexp(regexp) => factory.regexp_query(builder, field, regexp).map(Some),
            AtomKind::Range {
                lower,
                upper,
                include_lower,
                include_upper,
            } => factory
                .range_query(
                    builder,
                    field,
                    lower.as_deref(),
                    upper.as_deref(),
                    *include_lower,
                    *include_upper,
                )
                .map(Some),
        }
    }

    fn fuzzy_similarity(&self, similarity: Option<f32>) -> Result<f32> {
        let Some(similarity) = similarity else {
            return Ok(self.config.fuzzy_min_sim);
        };

        if similarity < 0.0 {
            return Err(SynparseError::syntax(
                "Minimum similarity for a FuzzyQuery has to be between 0.0 and 1.0, or a whole number of edits",
            ));
        }
        if similarity >= 1.0 && similarity.fract() != 0.0 {
            return Err(SynparseError::syntax(format!(
                "Fractional edit distances are not allowed: {similarity}"
            )));
        }
        Ok(similarity)
    }
}

fn handle_boost(query: Option<Query>, boost: Option<f32>) -> Option<Query> {
    match (query, boost) {
        (Some(query), Some(boost)) => Some(query.boosted(boost)),
        (query, _) => query,
    }
}

impl std::fmt::Debug for QueryParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryParser")
            .field("config", &self.config)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

/// Builder for [`QueryParser`].
pub struct QueryParserBuilder {
    config: QueryParserConfig,
    analyzer: Arc<dyn Analyzer>,
    factory: Arc<dyn QueryFactory>,
}

impl QueryParserBuilder {
    /// Create a builder with default settings.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        QueryParserBuilder {
            config: QueryParserConfig::default(),
            analyzer,
            factory: Arc::new(DefaultQueryFactory),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: QueryParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default field.
    pub fn default_field<S: Into<String>>(mut self, field: S) -> Self {
        self.config.default_field = field.into();
        self
    }

    /// Set the default operator.
    pub fn default_operator(mut self, operator: Operator) -> Self {
        self.config.default_operator = operator;
        self
    }

    pub fn split_on_whitespace(mut self, split: bool) -> Self {
        self.config.split_on_whitespace = split;
        self
    }

    pub fn auto_generate_phrase_queries(mut self, enabled: bool) -> Self {
        self.config.auto_generate_phrase_queries = enabled;
        self
    }

    /// Set the default phrase slop.
    pub fn phrase_slop(mut self, slop: u32) -> Self {
        self.config.phrase_slop = slop;
        self
    }

    pub fn fuzzy_min_sim(mut self, min_similarity: f32) -> Self {
        self.config.fuzzy_min_sim = min_similarity;
        self
    }

    pub fn fuzzy_prefix_length(mut self, prefix_length: u32) -> Self {
        self.config.fuzzy_prefix_length = prefix_length;
        self
    }

    pub fn allow_leading_wildcard(mut self, allow: bool) -> Self {
        self.config.allow_leading_wildcard = allow;
        self
    }

    pub fn analyze_range_terms(mut self, analyze: bool) -> Self {
        self.config.analyze_range_terms = analyze;
        self
    }

    /// Set the date resolution for all fields.
    pub fn date_resolution(mut self, resolution: DateResolution) -> Self {
        self.config.date_resolution = Some(resolution);
        self
    }

    /// Set the date resolution for one field.
    pub fn field_date_resolution<S: Into<String>>(mut self, field: S, resolution: DateResolution) -> Self {
        self.config.set_field_date_resolution(field, resolution);
        self
    }

    /// Mark a field as numeric.
    pub fn numeric_field<S: Into<String>>(mut self, field: S, numeric_type: NumericType) -> Self {
        self.config.set_numeric_field(field, numeric_type);
        self
    }

    /// Set the query factory.
    pub fn factory(mut self, factory: Arc<dyn QueryFactory>) -> Self {
        self.factory = factory;
        self
    }

    /// Build the parser, validating the configuration.
    pub fn build(self) -> Result<QueryParser> {
        self.config.validate()?;
        Ok(QueryParser {
            config: self.config,
            analyzer: self.analyzer,
            factory: self.factory,
        })
    }
}
