//! `FlatKnn` CLI - Brute-force k-NN search driver for fvecs datasets
//!
//! Usage:
//!   `flatknn search base.fvecs query.fvecs -k 10 --strategy binary-heap`
//!   `flatknn compare base.fvecs query.fvecs -k 10`
//!   `flatknn info base.fvecs`

mod fvecs;
mod run;

use clap::{Parser, Subcommand, ValueEnum};
use flatknn_core::{FlatknnConfig, SelectorStrategy};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "flatknn")]
#[command(
    author,
    version,
    about = "FlatKnn CLI - Exact brute-force k-nearest-neighbor search"
)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a flatknn.toml configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// CLI selector strategy option
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum StrategyArg {
    SortedList,
    #[default]
    BinaryHeap,
    StdHeap,
}

impl From<StrategyArg> for SelectorStrategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::SortedList => SelectorStrategy::SortedList,
            StrategyArg::BinaryHeap => SelectorStrategy::BinaryHeap,
            StrategyArg::StdHeap => SelectorStrategy::StdHeap,
        }
    }
}

/// Result file format
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
enum FormatArg {
    /// One `i: l1, l2, ...` line per query
    #[default]
    Text,
    /// JSON array with labels and distances
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the k nearest neighbors for a batch of queries
    Search {
        /// Candidate vectors file (fvecs)
        points: PathBuf,

        /// Query vectors file (fvecs)
        queries: PathBuf,

        /// Number of nearest neighbors per query
        #[arg(short, env = "FLATKNN_K")]
        k: Option<usize>,

        /// Selection structure strategy
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,

        /// Maximum number of queries taken from the query file
        #[arg(short, long)]
        limit: Option<usize>,

        /// Directory for the result file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Result file format
        #[arg(long, value_enum, default_value = "text")]
        format: FormatArg,

        /// Process queries in parallel instead of one at a time
        #[arg(long)]
        parallel: bool,

        /// Disable the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Run every strategy over the same queries and compare results and latency
    Compare {
        /// Candidate vectors file (fvecs)
        points: PathBuf,

        /// Query vectors file (fvecs)
        queries: PathBuf,

        /// Number of nearest neighbors per query
        #[arg(short)]
        k: Option<usize>,

        /// Maximum number of queries taken from the query file
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show vector count, dimension and size of an fvecs file
    Info {
        /// fvecs file to inspect
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => FlatknnConfig::load_from_path(path)?,
        None => FlatknnConfig::load()?,
    };

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Search {
            points,
            queries,
            k,
            strategy,
            limit,
            output,
            format,
            parallel,
            no_progress,
        } => {
            let settings = run::SearchRun {
                points,
                queries,
                k: k.unwrap_or(config.search.k),
                strategy: strategy.map_or(config.search.strategy, Into::into),
                limit: limit.unwrap_or(config.search.max_queries),
                output_dir: output.unwrap_or_else(|| PathBuf::from(&config.data.output_dir)),
                json: format == FormatArg::Json,
                parallel,
                show_progress: !no_progress,
            };
            run::run_search(&settings)
        }
        Commands::Compare {
            points,
            queries,
            k,
            limit,
        } => run::run_compare(
            &points,
            &queries,
            k.unwrap_or(config.search.k),
            limit.unwrap_or(config.search.max_queries),
        ),
        Commands::Info { file } => run::run_info(&file),
    }
}
