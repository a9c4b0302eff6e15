// src/cli.rs

//! Command-line arguments for the `shovelcat` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "shovelcat")]
#[command(about = "Search for and evaluate closed-form expressions of physical constants")]
#[command(version)]
pub struct Cli {
    #[arg(long, short, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Print reports as JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the built-in studies
    Studies,

    /// Run a built-in study
    Study {
        /// Study name, see `shovelcat studies`
        name: String,
    },

    /// Evaluate one formula against a target
    Eval {
        /// Formula text, e.g. "pi * phi^(-4*pi)"
        formula: String,

        /// Constant to compare against
        #[arg(long, default_value = "alpha", conflicts_with = "value")]
        target: String,

        /// Explicit value to compare against
        #[arg(long)]
        value: Option<f64>,
    },

    /// Search a × e^b × φ^c × π^d for the target
    Search {
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Overrides the configured tolerance
        #[arg(long)]
        tolerance: Option<f64>,

        /// Overrides the configured number of hits
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Search e^(±φ^(aπ + b)) for the target
    Nested {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Solve the headline forms exactly for α
    Solve,

    /// Check the standard identities; exits with status 1 on failure
    Check,

    /// Evaluate the toy models
    Models,

    /// Derive the age and size of the universe from h_info
    Universe,

    /// Estimate how often a random target is matched by the product grid
    Significance {
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long, default_value = "10000")]
        samples: usize,

        #[arg(long, default_value = "42")]
        seed: u64,

        /// Match tolerance; defaults to the configured product tolerance
        #[arg(long)]
        tolerance: Option<f64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["shovelcat", "search", "--limit", "5", "--json"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Search { limit, config, tolerance } => {
                assert_eq!(limit, Some(5));
                assert!(config.is_none());
                assert!(tolerance.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn eval_target_and_value_conflict() {
        let result = Cli::try_parse_from(["shovelcat", "eval", "pi", "--target", "e", "--value", "1"]);
        assert!(result.is_err());
    }
}
