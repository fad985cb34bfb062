//! sifferdrill CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "sifferdrill", version, about = "Swedish number listening drill")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a single answer
    Evaluate {
        /// Lesson id (see `sifferdrill lessons`)
        #[arg(long)]
        lesson: String,

        /// Target value, e.g. "123" or "0415|1615"
        #[arg(long)]
        target: String,

        /// Target atoms (comma-separated). Derived from the target when omitted
        #[arg(long)]
        atoms: Option<String>,

        /// The learner's answer
        #[arg(long, allow_hyphen_values = true)]
        input: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate lesson questions as JSON lines
    Generate {
        /// Lesson id (defaults to the configured lesson)
        #[arg(long)]
        lesson: Option<String>,

        /// Number of questions
        #[arg(long)]
        count: Option<usize>,

        /// Seed for reproducible questions
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Practice a lesson, reading answers from stdin
    Practice {
        /// Lesson id (defaults to the configured lesson)
        #[arg(long)]
        lesson: Option<String>,

        /// Number of questions
        #[arg(long)]
        count: Option<usize>,

        /// Seed for reproducible questions
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show completed lessons and the practice streak
    Stats {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Run drill-set cases and check their expectations
    Run {
        /// Path to .toml drill set or directory
        #[arg(long)]
        drill_set: PathBuf,

        /// Output directory (defaults to the configured output_dir)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Exit code 1 if any case contradicts its expectation
        #[arg(long)]
        fail_on_mismatch: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate drill-set TOML files
    Validate {
        /// Path to drill set file or directory
        #[arg(long)]
        drill_set: PathBuf,
    },

    /// List available lessons
    Lessons,

    /// Create starter config and example drill set
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sifferdrill=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Evaluate {
            lesson,
            target,
            atoms,
            input,
            json,
        } => commands::evaluate::execute(lesson, target, atoms, input, json),
        Commands::Generate {
            lesson,
            count,
            seed,
            config,
        } => commands::generate::execute(lesson, count, seed, config),
        Commands::Practice {
            lesson,
            count,
            seed,
            config,
        } => commands::practice::execute(lesson, count, seed, config),
        Commands::Stats { config } => commands::stats::execute(config),
        Commands::Run {
            drill_set,
            output,
            fail_on_mismatch,
            config,
        } => commands::run::execute(drill_set, output, fail_on_mismatch, config),
        Commands::Validate { drill_set } => commands::validate::execute(drill_set),
        Commands::Lessons => commands::lessons::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
