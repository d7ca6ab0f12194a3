//! Command-line interface: argument parsing and the resulting run
//! configuration.
//!
//! Parses with `clap`'s derive API: a `solve <player> [flags]` shape,
//! plus a `bench` subcommand for repeated timed runs.

use clap::{Args, Parser, Subcommand};
use std::time::Duration;

/// `-h` is claimed by `--height`, so (unlike a typical clap program)
/// this CLI's subcommands disable the automatic short help flag;
/// `--help` (long form) still works.
#[derive(Parser, Debug)]
#[command(name = "flood-it", about = "Solvers for the single-player Flood-It puzzle")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a board and play it out with the named player.
    Solve(SolveArgs),
    /// Play many randomly generated boards with the named player and
    /// report timing statistics.
    Bench(BenchArgs),
}

#[derive(Args, Debug)]
#[command(disable_help_flag = true)]
pub struct SolveArgs {
    /// One of: random, greedy, kurt, graph.
    pub player: String,

    #[arg(short = 'w', long, default_value_t = 10)]
    pub width: usize,

    #[arg(short = 'h', long, default_value_t = 10)]
    pub height: usize,

    #[arg(short = 'c', long, default_value_t = 5)]
    pub colors: u8,

    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Seconds to sleep between rendered frames.
    #[arg(short = 'd', long)]
    pub delay: Option<f64>,

    /// Print region ids, colors, and adjacency lists before solving.
    #[arg(long)]
    pub debug_graph: bool,
}

#[derive(Parser, Debug)]
#[command(disable_help_flag = true)]
pub struct BenchArgs {
    pub player: String,

    #[arg(short = 'w', long, default_value_t = 10)]
    pub width: usize,

    #[arg(short = 'h', long, default_value_t = 10)]
    pub height: usize,

    #[arg(short = 'c', long, default_value_t = 5)]
    pub colors: u8,

    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = 100)]
    pub count: usize,
}

impl SolveArgs {
    pub fn delay_duration(&self) -> Option<Duration> {
        self.delay.map(Duration::from_secs_f64)
    }
}
