//! CLI entry point for the rectangle-dissection solver

use clap::Parser;
use mondrian::io::cli::{Cli, SolveRunner};

fn main() -> mondrian::Result<()> {
    let cli = Cli::parse();
    let runner = SolveRunner::new(cli);
    runner.run()
}
