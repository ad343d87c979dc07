//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SynparseArgs};
use crate::error::Result;
use crate::query::Query;

/// Result structure for the parse command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseResult {
    pub input: String,
    pub default_field: String,
    pub rendered: String,
    pub query: Query,
}

/// Output a result in the specified format.
pub fn output_result(result: &ParseResult, args: &SynparseArgs) -> Result<()> {
    println!("{}", format_result(result, args)?);
    Ok(())
}

/// Format a result in the specified format.
pub fn format_result(result: &ParseResult, args: &SynparseArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(format_human(result, args)),
        OutputFormat::Json => format_json(result, args),
    }
}

fn format_human(result: &ParseResult, args: &SynparseArgs) -> String {
    if args.verbosity() > 1 {
        format!(
            "Input:         {}\nDefault field: {}\nQuery:         {}",
            result.input, result.default_field, result.rendered
        )
    } else {
        result.rendered.clone()
    }
}

fn format_json(result: &ParseResult, args: &SynparseArgs) -> Result<String> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
