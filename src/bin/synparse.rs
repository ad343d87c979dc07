//! synparse CLI binary.

use std::process;

use clap::Parser;
use synparse::cli::{args::*, commands::*};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = SynparseArgs::parse();

    // RUST_LOG wins over the verbosity flags.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
