//! Command-line interface for the shelfshare community board.

mod cli;

use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}
