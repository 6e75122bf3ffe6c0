//! Tracing subscriber setup for the binaries.
//!
//! The snippets only emit events. Logs always go to stderr so stdout carries
//! nothing but demo output. `RUST_LOG` overrides the verbosity flags.

use crate::error::{PatternError, Result};
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init(verbose: u8, quiet: bool, color: bool) -> Result<()> {
    let level = derive_level(verbose, quiet);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("design_patterns={level}")));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(use_ansi(color, std::io::stderr().is_terminal()))
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| PatternError::Logging(e.to_string()))
}

fn use_ansi(color: bool, is_terminal: bool) -> bool {
    color && is_terminal
}

fn derive_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
