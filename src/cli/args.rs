//! Command line argument parsing for the synparse CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::parser::config::Operator;

/// synparse - A synonym-aware query parser
#[derive(Parser, Debug, Clone)]
#[command(name = "synparse")]
#[command(about = "Compile Lucene-style query syntax into query trees")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SynparseArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SynparseArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }

    /// Log filter directive for the verbosity level.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity() {
            0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Parse a query and print the compiled query
    Parse(ParseArgs),
}

/// Arguments for parsing a query
#[derive(Parser, Debug, Clone)]
pub struct ParseArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// JSON configuration file; command line options override it
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Field for clauses without a field qualifier
    #[arg(short = 'd', long)]
    pub default_field: Option<String>,

    /// Operator between clauses without an explicit operator
    #[arg(short, long)]
    pub operator: Option<OperatorArg>,

    /// Analyze runs of adjacent words together so multi-word synonyms match
    #[arg(long)]
    pub no_split_on_whitespace: bool,

    /// Default slop for phrases
    #[arg(long)]
    pub phrase_slop: Option<u32>,

    /// Fields analyzed as a single keyword (repeatable)
    #[arg(short, long = "keyword-field", value_name = "FIELD")]
    pub keyword_fields: Vec<String>,

    /// Synonym file: a JSON array of equivalence groups
    #[arg(short, long, value_name = "SYNONYM_FILE")]
    pub synonyms: Option<PathBuf>,

    /// Tokenizer for analyzed fields
    #[arg(short, long, default_value = "word")]
    pub tokenizer: TokenizerArg,
}

/// Tokenizer choices for the default analyzer
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenizerArg {
    /// Runs of word characters
    Word,
    /// Unicode word boundaries; ideographs become one token each
    Unicode,
    /// Whitespace-separated, punctuation kept
    Whitespace,
}

/// Default operator as given on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperatorArg {
    Or,
    And,
}

impl From<OperatorArg> for Operator {
    fn from(arg: OperatorArg) -> Self {
        match arg {
            OperatorArg::Or => Operator::Or,
            OperatorArg::And => Operator::And,
        }
    }
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Query syntax
    Human,
    /// JSON query tree
    Json,
}
