//! CLI entrypoint for `adopt-equatable`.

use adopt_equatable::cli::Args;
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    adopt_equatable::logging::init();
    let args = Args::parse();
    adopt_equatable::run(&args).map_err(color_eyre::eyre::Report::from)
}
