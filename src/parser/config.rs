//! Configuration for the query parser.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SynparseError};
use crate::parser::date::DateResolution;
use crate::query::boolean::Occur;
use crate::query::range::NumericType;

/// The operator applied between clauses that have no explicit operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Unmarked clauses are optional.
    #[default]
    Or,
    /// Unmarked clauses are required.
    And,
}

impl Operator {
    /// The occur given to an unmarked clause under this operator.
    pub fn occur(&self) -> Occur {
        match self {
            Operator::Or => Occur::Should,
            Operator::And => Occur::Must,
        }
    }
}

/// Configuration for [`QueryParser`](crate::parser::QueryParser).
///
/// # Example
///
/// ```
/// use synparse::parser::config::{Operator, QueryParserConfig};
///
/// let mut config = QueryParserConfig::new("body");
/// config.default_operator = Operator::And;
/// config.split_on_whitespace = false;
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParserConfig {
    /// Field used by clauses without a field qualifier.
    pub default_field: String,

    /// Operator between clauses without an explicit operator.
    pub default_operator: Operator,

    /// Analyze each whitespace-separated word on its own.
    ///
    /// When false, runs of plain adjacent words are analyzed together so
    /// multi-word synonyms are found outside quotes.
    pub split_on_whitespace: bool,

    /// Build phrase queries from unquoted text that analyzes to several
    /// positions.
    pub auto_generate_phrase_queries: bool,

    /// Slop for phrases without an explicit `~N`.
    pub phrase_slop: u32,

    /// Similarity for `term~` without a number.
    pub fuzzy_min_sim: f32,

    /// Exact-match prefix length for fuzzy queries.
    pub fuzzy_prefix_length: u32,

    /// Allow `*` or `?` as the first character of a wildcard or prefix term.
    pub allow_leading_wildcard: bool,

    /// Normalize range bounds with the field's analyzer.
    pub analyze_range_terms: bool,

    /// Date resolution for range bounds on any field.
    pub date_resolution: Option<DateResolution>,

    /// Per-field date resolutions, overriding `date_resolution`.
    pub field_date_resolutions: HashMap<String, DateResolution>,

    /// Fields whose range bounds are numbers.
    pub numeric_fields: HashMap<String, NumericType>,
}

impl Default for QueryParserConfig {
    fn default() -> Self {
        QueryParserConfig {
            default_field: "field".to_string(),
            default_operator: Operator::Or,
            split_on_whitespace: true,
            auto_generate_phrase_queries: false,
            phrase_slop: 0,
            fuzzy_min_sim: 2.0,
            fuzzy_prefix_length: 0,
            allow_leading_wildcard: false,
            analyze_range_terms: false,
            date_resolution: None,
            field_date_resolutions: HashMap::new(),
            numeric_fields: HashMap::new(),
        }
    }
}

impl QueryParserConfig {
    /// Create a configuration with the given default field.
    pub fn new<S: Into<String>>(default_field: S) -> Self {
        QueryParserConfig {
            default_field: default_field.into(),
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file. Missing keys take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: QueryParserConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the settings do not contradict each other.
    pub fn validate(&self) -> Result<()> {
        if self.auto_generate_phrase_queries && !self.split_on_whitespace {
            return Err(SynparseError::invalid_config(
                "auto_generate_phrase_queries requires split_on_whitespace",
            ));
        }
        if self.fuzzy_min_sim < 0.0 {
            return Err(SynparseError::invalid_config(
                "fuzzy_min_sim must not be negative",
            ));
        }
        Ok(())
    }

    /// The date resolution that applies to `field`, if any.
    pub fn date_resolution_for(&self, field: &str) -> Option<DateResolution> {
        self.field_date_resolutions
            .get(field)
            .copied()
            .or(self.date_resolution)
    }

    /// Set the date resolution for one field.
    pub fn set_field_date_resolution<S: Into<String>>(&mut self, field: S, resolution: DateResolution) {
        self.field_date_resolutions.insert(field.into(), resolution);
    }

    /// Mark a field as numeric.
    pub fn set_numeric_field<S: Into<String>>(&mut self, field: S, numeric_type: NumericType) {
        self.numeric_fields.insert(field.into(), numeric_type);
    }
}
