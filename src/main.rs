//! CLI entry point for the flood-fill benchmark

use clap::Parser;
use floodbench::io::cli::{BenchmarkRunner, Cli};
use floodbench::io::logging;

// Allow print for the final report
#[allow(clippy::print_stdout)]
fn main() -> floodbench::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    let mut runner = BenchmarkRunner::new(cli);
    let report = runner.run()?;
    print!("{report}");
    Ok(())
}
