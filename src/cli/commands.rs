//! Command implementations for the synparse CLI.

use std::sync::Arc;

use tracing::info;

use crate::analysis::analyzer::{Analyzer, KeywordAnalyzer, PerFieldAnalyzer, StandardAnalyzer};
use crate::analysis::synonym::SynonymMap;
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer};
use crate::cli::args::{Command, ParseArgs, SynparseArgs, TokenizerArg};
use crate::cli::output::{ParseResult, output_result};
use crate::error::Result;
use crate::parser::{QueryParser, QueryParserConfig};

/// Execute a CLI command.
pub fn execute_command(args: SynparseArgs) -> Result<()> {
    match &args.command {
        Command::Parse(parse_args) => parse_query(parse_args, &args),
    }
}

/// Build the parser configuration from the config file and overrides.
pub fn build_config(args: &ParseArgs) -> Result<QueryParserConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "loading parser configuration");
            QueryParserConfig::from_file(path)?
        }
        None => QueryParserConfig::default(),
    };

    if let Some(field) = &args.default_field {
        config.default_field = field.clone();
    }
    if let Some(operator) = args.operator {
        config.default_operator = operator.into();
    }
    if args.no_split_on_whitespace {
        config.split_on_whitespace = false;
    }
    if let Some(slop) = args.phrase_slop {
        config.phrase_slop = slop;
    }

    config.validate()?;
    Ok(config)
}

/// Build the analyzer: a standard analyzer over the chosen tokenizer, with
/// synonyms when a synonym file is given, and keyword analyzers for the
/// listed fields.
pub fn build_analyzer(args: &ParseArgs) -> Result<Arc<dyn Analyzer>> {
    let tokenizer: Arc<dyn Tokenizer> = match args.tokenizer {
        TokenizerArg::Word => Arc::new(RegexTokenizer::new()?),
        TokenizerArg::Unicode => Arc::new(UnicodeWordTokenizer::new()),
        TokenizerArg::Whitespace => Arc::new(WhitespaceTokenizer::new()),
    };
    let synonyms = match &args.synonyms {
        Some(path) => {
            let synonyms = SynonymMap::load_from_file(path)?;
            info!(path = %path.display(), "loaded synonyms");
            Some(synonyms)
        }
        None => None,
    };
    let default: Arc<dyn Analyzer> = Arc::new(StandardAnalyzer::from_tokenizer(tokenizer, synonyms));

    if args.keyword_fields.is_empty() {
        return Ok(default);
    }

    let keyword: Arc<dyn Analyzer> = Arc::new(KeywordAnalyzer::new());
    let mut analyzer = PerFieldAnalyzer::new(default);
    for field in &args.keyword_fields {
        analyzer.add_analyzer(field.clone(), Arc::clone(&keyword));
    }
    Ok(Arc::new(analyzer))
}

/// Parse a query and print the result.
fn parse_query(args: &ParseArgs, cli_args: &SynparseArgs) -> Result<()> {
    let config = build_config(args)?;
    let analyzer = build_analyzer(args)?;
    let parser = QueryParser::with_config(config, analyzer);

    let query = parser.parse(&args.query)?;
    let result = ParseResult {
        input: args.query.clone(),
        default_field: parser.default_field().to_string(),
        rendered: query.to_string_with_field(parser.default_field()),
        query,
    };

    output_result(&result, cli_args)
}
