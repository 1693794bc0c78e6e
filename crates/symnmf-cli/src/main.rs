//! SymNMF command line host
//!
//! # Commands
//!
//! - `symnmf <goal> <file>`: print the `sym`, `ddg` or `norm` matrix of a point set,
//!   or its `symnmf` factor (with `--k`)
//! - `symnmf analyze <k> <file>`: compare SymNMF and k-means by silhouette score
//!
//! Results go to stdout with four decimals. Any failure prints one line to stderr
//! and exits with status 1.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use symnmf::decomp::SymNmfConfig;
use symnmf::{analyze, run_goal, Goal, RunOptions};

mod error;
mod input;
mod logging;
mod output;

use error::CliError;

/// SymNMF graph clustering
#[derive(Parser)]
#[command(name = "symnmf")]
#[command(version)]
#[command(about = "Graph clustering by symmetric non-negative matrix factorization")]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Cluster with SymNMF and k-means and print both silhouette scores
    Analyze {
        /// Number of clusters
        k: usize,
        /// Point file: one comma-separated point per line
        file: PathBuf,
        /// Seed for the initial factor and k-means seeding
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Matrix to print: sym, ddg, norm or symnmf
    #[arg(required = true)]
    goal: Option<String>,

    /// Point file: one comma-separated point per line
    #[arg(required = true)]
    file: Option<PathBuf>,

    /// Number of clusters (required by the symnmf goal)
    #[arg(long)]
    k: Option<usize>,

    /// Seed for the initial factor
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Iteration budget
    #[arg(long)]
    max_iter: Option<usize>,

    /// Convergence threshold on the total squared change
    #[arg(long)]
    tol: Option<f64>,

    /// Damping factor in (0, 1]
    #[arg(long)]
    beta: Option<f64>,
}

impl RunArgs {
    fn config(&self) -> SymNmfConfig {
        let mut config = SymNmfConfig::default();
        if let Some(max_iter) = self.max_iter {
            config = config.with_max_iter(max_iter);
        }
        if let Some(tol) = self.tol {
            config = config.with_tol(tol);
        }
        if let Some(beta) = self.beta {
            config = config.with_beta(beta);
        }
        config
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also arrive here
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    logging::init_tracing(&logging::LogConfig::from_env(cli.verbose))
        .context("failed to initialize logging")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Analyze { k, file, seed }) => {
            let points = input::read_points(&file)?;
            let analysis = analyze(&points, k, seed, &SymNmfConfig::default())
                .context("analysis failed")?;
            output::write_scores(&mut out, &analysis)?;
        }
        None => run_goal_command(&cli.run, &mut out)?,
    }

    Ok(())
}

fn run_goal_command<W: Write>(args: &RunArgs, out: &mut W) -> anyhow::Result<()> {
    let (goal, file) = match (&args.goal, &args.file) {
        (Some(goal), Some(file)) => (goal, file),
        _ => anyhow::bail!("usage: symnmf <goal> <file>"),
    };

    let goal: Goal = goal.parse().map_err(CliError::from)?;
    if goal.requires_rank() && args.k.is_none() {
        return Err(CliError::MissingRank(goal).into());
    }

    let points = input::read_points(file)?;
    let options = RunOptions {
        k: args.k,
        seed: args.seed,
        config: args.config(),
    };
    let matrix = run_goal(goal, &points, &options)
        .map_err(CliError::from)
        .with_context(|| format!("goal '{}' failed", goal))?;

    output::write_matrix(out, &matrix)?;
    Ok(())
}
