//! CLI entry point for the shredded image reconstruction tool

use clap::Parser;
use unshred::io::cli::{Cli, FileProcessor};
use unshred::io::logging::init_logging;

fn main() -> unshred::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
