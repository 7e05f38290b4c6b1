use std::process;

use clap::{Parser, Subcommand};

mod commands;

/// Top-level CLI argument parser for the `mf` command
#[derive(Parser)]
#[command(
    name = "mf",
    about = "metafib — meta-Fibonacci sequences and their structural lemmas",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the `mf` CLI
#[derive(Subcommand)]
enum Commands {
    /// Print the minimal initial conditions for V_{s,j}
    Ics {
        /// The s parameter (a non-negative multiple of j)
        s: i64,
        /// The j parameter (at least 1)
        j: i64,
    },
    /// Compute a V_{s,j} sequence from its minimal initial conditions
    Compute {
        /// The s parameter (a non-negative multiple of j)
        s: i64,
        /// The j parameter (at least 1)
        j: i64,
        /// Number of terms to compute
        #[arg(short, long, default_value_t = 100)]
        terms: usize,
        /// Stop at the first non-slow step, tolerating buffer overruns
        #[arg(long)]
        only_if_slow: bool,
    },
    /// Compute V_{s,j}, derive its frequency sequence, and run the lemma battery
    Check {
        /// The s parameter (a non-negative multiple of j)
        s: i64,
        /// The j parameter (at least 1)
        j: i64,
        /// Number of terms to compute before checking
        #[arg(short, long, default_value_t = 400)]
        terms: usize,
        /// Output format: text (default) or json
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Compute Conway's sequence A(n) = A(A(n-1)) + A(n - A(n-1))
    Conway {
        /// Number of terms to compute
        #[arg(short, long, default_value_t = 100)]
        terms: usize,
    },
    /// Apply the psi transform to a slow sequence
    Psi {
        /// The j parameter (at least 1)
        j: i64,
        /// Terms of the slow input sequence
        #[arg(required = true, num_args = 1..)]
        terms: Vec<i64>,
    },
}

/// Dispatch a parsed CLI subcommand to its handler
fn run_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Ics { s, j } => commands::ics::run(s, j),
        Commands::Compute {
            s,
            j,
            terms,
            only_if_slow,
        } => commands::compute::run(s, j, terms, only_if_slow),
        Commands::Check { s, j, terms, format } => commands::check::run(s, j, terms, &format),
        Commands::Conway { terms } => commands::conway::run(terms),
        Commands::Psi { j, terms } => commands::psi::run(j, &terms),
    }
}

/// Entry point: parse CLI arguments and run the selected subcommand
fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_command(cli.command) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
