//! satmath CLI — interactive SAT-style math practice.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use satmath_core::config::OutputFormat;

mod quiz;

#[derive(Parser)]
#[command(name = "satmath", version, about = "SAT-style math practice quizzes")]
struct Cli {
    /// Number of questions to ask (prompts interactively if omitted)
    #[arg(long, short = 'c')]
    count: Option<usize>,

    /// Include algebra-style problems (solve for x) in the quiz
    #[arg(long)]
    include_algebra: bool,

    /// Auto-answer questions with the correct answer (useful for testing)
    #[arg(long)]
    auto: bool,

    /// Seed for reproducible problem sets
    #[arg(long)]
    seed: Option<u64>,

    /// Results file (default: sat_math_results.csv)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Results format: csv, json, all
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Wrong entries allowed per guided step before asking directly
    #[arg(long)]
    max_step_attempts: Option<u32>,

    /// Print a per-kind breakdown table after the quiz
    #[arg(long)]
    breakdown: bool,

    /// Never save results
    #[arg(long)]
    no_save: bool,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let args = quiz::QuizArgs {
        count: cli.count,
        include_algebra: cli.include_algebra,
        auto: cli.auto,
        seed: cli.seed,
        output: cli.output,
        format: cli.format,
        max_step_attempts: cli.max_step_attempts,
        breakdown: cli.breakdown,
        save: !cli.no_save,
        config: cli.config,
    };

    if let Err(e) = quiz::execute(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
