//! Runs any selection of the pattern demos.
//!
//! Run with: cargo run --bin patterns -- [OPTIONS] [DEMO]...

use clap::Parser;
use colored::Colorize;
use design_patterns::cli::Args;
use design_patterns::config::RunConfig;
use design_patterns::{logging, runner, Result, Stdout};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    match try_main(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: &Args) -> Result<()> {
    let loaded = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    let config = args.apply(loaded);
    colored::control::set_override(config.color);

    logging::init(args.verbose, args.quiet, config.color)?;

    runner::run(&config, &mut Stdout);
    Ok(())
}
