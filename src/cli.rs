//! Command-line interface built on clap.
//!
//! Defines [`Cli`] with the [`Command`] subcommands (run, demo, table) and the
//! global flags (--machines, --rate, --config, --json, --verbose).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Orders the demo command schedules.
pub const DEMO_ORDERS: [u64; 11] = [50, 100, 200, 20, 10, 30, 1000, 500, 800, 80, 70];

/// tapesched: tape-automaton order intake with greedy machine scheduling.
#[derive(Debug, Parser)]
#[command(name = "tapesched", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Number of production machines (overrides the config file).
    #[arg(long, global = true)]
    pub machines: Option<usize>,

    /// Order units processed per unit of time (overrides the config file).
    #[arg(long, global = true)]
    pub rate: Option<f64>,

    /// Path to a TOML config file. Defaults to ./tapesched.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the schedule as JSON.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Enable per-step debug logging.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Schedule the given orders.
    Run {
        /// Order sizes, in arrival order.
        orders: Vec<u64>,

        /// JSON array or TOML `orders = [...]` file with order sizes.
        #[arg(long, conflicts_with_all = ["orders", "tape"])]
        file: Option<PathBuf>,

        /// Raw tape such as `#50#100B`, run as-is.
        #[arg(long, conflicts_with = "orders")]
        tape: Option<String>,
    },

    /// Schedule the built-in sample orders.
    Demo,

    /// Print the automaton's transition table.
    Table,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_run_with_orders() {
        let cli = Cli::parse_from(["tapesched", "run", "50", "100", "7"]);
        match cli.command {
            Command::Run { orders, file, tape } => {
                assert_eq!(orders, vec![50, 100, 7]);
                assert!(file.is_none());
                assert!(tape.is_none());
            }
            _ => panic!("expected Run command"),
        }
    }

    #[test]
    fn cli_parses_global_flags() {
        let cli = Cli::parse_from([
            "tapesched",
            "--machines",
            "3",
            "--rate",
            "2.5",
            "--json",
            "--verbose",
            "demo",
        ]);
        assert!(cli.verbose);
        assert!(cli.json);
        assert_eq!(cli.machines, Some(3));
        assert_eq!(cli.rate, Some(2.5));
        assert!(matches!(cli.command, Command::Demo));
    }

    #[test]
    fn cli_parses_raw_tape() {
        let cli = Cli::parse_from(["tapesched", "run", "--tape", "#5#6B"]);
        match cli.command {
            Command::Run { tape, .. } => assert_eq!(tape.as_deref(), Some("#5#6B")),
            _ => panic!("expected Run command"),
        }
    }

    #[test]
    fn cli_rejects_orders_with_file() {
        let result = Cli::try_parse_from(["tapesched", "run", "5", "--file", "orders.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_rejects_negative_order() {
        assert!(Cli::try_parse_from(["tapesched", "run", "--", "-5"]).is_err());
    }

    #[test]
    fn cli_verify() {
        Cli::command().debug_assert();
    }
}
