//! Command-line arguments for the `patterns` runner.

use crate::config::RunConfig;
use crate::demo::Demo;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Runs the selected pattern demos in order (all of them when none are given).
#[derive(Debug, Default, Clone, PartialEq, Eq, Parser)]
#[command(name = "patterns", version)]
pub struct Args {
    /// Demos to run, e.g. `strategy` or `abstract-factory`.
    #[arg(value_name = "DEMO")]
    pub demos: Vec<Demo>,

    /// Read settings from a TOML file.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not print a header before each demo.
    #[arg(long = "no-headers")]
    pub no_headers: bool,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Only log errors"
    )]
    pub quiet: bool,
}

impl Args {
    /// Overlays command-line choices on a loaded configuration.
    pub fn apply(&self, mut config: RunConfig) -> RunConfig {
        if !self.demos.is_empty() {
            config.demos = self.demos.clone();
        }
        if self.no_headers {
            config.headers = false;
        }
        if self.no_color {
            config.color = false;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("patterns").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(parse(&[]).unwrap(), Args::default());
    }

    #[test]
    fn test_positional_demos_keep_order() {
        let args = parse(&["facade", "command", "facade"]).unwrap();
        assert_eq!(args.demos, vec![Demo::Facade, Demo::Command, Demo::Facade]);
    }

    #[test]
    fn test_flags() {
        let args = parse(&["--no-headers", "--no-color", "-q", "strategy"]).unwrap();
        assert!(args.no_headers);
        assert!(args.no_color);
        assert!(args.quiet);
        assert_eq!(args.demos, vec![Demo::Strategy]);
    }

    #[test]
    fn test_verbosity_stacks() {
        assert_eq!(parse(&["-v"]).unwrap().verbose, 1);
        assert_eq!(parse(&["-vv"]).unwrap().verbose, 2);
        assert_eq!(parse(&["-v", "-vv"]).unwrap().verbose, 3);
        assert_eq!(parse(&["--verbose"]).unwrap().verbose, 1);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let err = parse(&["-vq"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let err = parse(&["-v", "--quiet"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_config_forms() {
        let spaced = parse(&["--config", "run.toml"]).unwrap();
        let joined = parse(&["--config=run.toml"]).unwrap();
        let short = parse(&["-c", "run.toml"]).unwrap();
        assert_eq!(spaced.config, Some(PathBuf::from("run.toml")));
        assert_eq!(spaced, joined);
        assert_eq!(spaced, short);
    }

    #[test]
    fn test_config_without_path() {
        let err = parse(&["--config"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_unknown_option() {
        let err = parse(&["--fast"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_unknown_demo() {
        let err = parse(&["observer"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("observer"));
    }

    #[test]
    fn test_help_is_generated() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_command_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_apply_overrides_config() {
        let args = parse(&["builder", "--no-headers"]).unwrap();
        let config = args.apply(RunConfig::default());
        assert_eq!(config.demos, vec![Demo::Builder]);
        assert!(!config.headers);
        assert!(config.color);
    }

    #[test]
    fn test_apply_no_color() {
        let args = parse(&["--no-color"]).unwrap();
        assert!(!args.apply(RunConfig::default()).color);
    }

    #[test]
    fn test_apply_without_demos_keeps_config_list() {
        let loaded = RunConfig {
            demos: vec![Demo::Adapter, Demo::Decorator],
            headers: true,
            color: true,
        };
        let config = Args::default().apply(loaded.clone());
        assert_eq!(config, loaded);
    }
}
