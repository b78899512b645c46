//! Yeardle Solver - CLI
//!
//! Computes optimal Yeardle strategies: the best first guess for a set of
//! candidate years, full decision trees, and sweeps over growing ranges.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use yeardle_solver::{
    commands::{
        CandidateRanges, SweepRow, analyze_candidates, build_tree, parse_candidates, run_sweep,
        verify_strategy,
    },
    core::Feedback,
    output::{
        formatters::format_tree, print_analysis_result, print_sweep_row, print_sweep_summary,
        print_tree_result, print_verify_report,
    },
    solver::{DecisionTree, Solver},
};

#[derive(Parser)]
#[command(
    name = "yeardle_solver",
    about = "Optimal worst-case strategies for Yeardle-style banded feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Worker threads for parallel verification (default: all cores)
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Best first guess and score for a candidate set (e.g. "0-725" or "3,10-20")
    Analyze {
        /// Candidate set
        candidates: String,
    },

    /// Print the full decision tree for a candidate set
    Tree {
        /// Candidate set
        candidates: String,
    },

    /// Analyze ranges [0, n] for growing n
    Sweep {
        /// First n to analyze
        #[arg(short, long, default_value = "0")]
        from: i32,

        /// Last n to analyze (runs until interrupted when omitted)
        #[arg(long)]
        to: Option<i32>,

        /// Print the decision tree for every range
        #[arg(long)]
        trees: bool,
    },

    /// Play every candidate through its decision tree and check the score
    Verify {
        /// Candidate set
        candidates: String,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to build thread pool")?;
    }

    // One solver for the whole run, so every command shares its cache
    let mut solver = Solver::new();

    match cli.command {
        Commands::Analyze { candidates } => run_analyze_command(&mut solver, &candidates),
        Commands::Tree { candidates } => run_tree_command(&mut solver, &candidates),
        Commands::Sweep { from, to, trees } => run_sweep_command(&mut solver, from, to, trees),
        Commands::Verify { candidates } => run_verify_command(&mut solver, &candidates),
    }
}

fn run_analyze_command(solver: &mut Solver, candidates: &str) -> Result<()> {
    let candidates = parse_candidates(candidates).map_err(|e| anyhow::anyhow!(e))?;
    let result = analyze_candidates(solver, &candidates);
    print_analysis_result(&result);
    Ok(())
}

fn run_tree_command(solver: &mut Solver, candidates: &str) -> Result<()> {
    let candidates = parse_candidates(candidates).map_err(|e| anyhow::anyhow!(e))?;
    let result = build_tree(solver, &candidates);
    print_tree_result(&result);
    Ok(())
}

fn run_sweep_command(solver: &mut Solver, from: i32, to: Option<i32>, trees: bool) -> Result<()> {
    if from < 0 {
        anyhow::bail!("--from must be non-negative, got {from}");
    }

    let on_row = |solver: &mut Solver, row: &SweepRow| {
        if trees {
            let tree = DecisionTree::build(solver, &row.candidates);
            print!("{}", format_tree(&tree));
            println!("# Cache size: {}\n", solver.cache_len());
        } else {
            print_sweep_row(row);
        }
    };

    let summary = match to {
        Some(to) => {
            if to < from {
                anyhow::bail!("--to ({to}) must not be below --from ({from})");
            }
            if to > Feedback::MAX_DISTANCE {
                anyhow::bail!(
                    "--to ({to}) exceeds the largest feedback distance ({})",
                    Feedback::MAX_DISTANCE
                );
            }
            let count = usize::try_from(to - from + 1).context("Range count overflow")?;
            run_sweep(solver, CandidateRanges::starting_at(from).take(count), on_row)
        }
        None => run_sweep(
            solver,
            CandidateRanges::starting_at(from)
                .take_while(|r| r.highest() <= Some(Feedback::MAX_DISTANCE)),
            on_row,
        ),
    };

    print_sweep_summary(&summary);
    Ok(())
}

fn run_verify_command(solver: &mut Solver, candidates: &str) -> Result<()> {
    let candidates = parse_candidates(candidates).map_err(|e| anyhow::anyhow!(e))?;
    let report = verify_strategy(solver, &candidates);
    print_verify_report(&report);

    if report.is_consistent() {
        Ok(())
    } else {
        anyhow::bail!("Strategy verification failed")
    }
}
