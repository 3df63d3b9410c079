//! The quiz flow: configure, run the session, offer to save.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use satmath_core::config::{load_config_from, OutputFormat, TutorConfig};
use satmath_core::guided::StepPolicy;
use satmath_core::session::{SessionConfig, SessionLog, SessionRunner};
use satmath_core::statistics::SessionSummary;
use satmath_core::terminal::StdTerminal;
use satmath_core::traits::Terminal;
use satmath_report::{save_json, write_csv_report};

/// Command-line options after parsing.
#[derive(Debug)]
pub struct QuizArgs {
    pub count: Option<usize>,
    pub include_algebra: bool,
    pub auto: bool,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub max_step_attempts: Option<u32>,
    pub breakdown: bool,
    pub save: bool,
    pub config: Option<PathBuf>,
}

pub fn execute(args: QuizArgs) -> Result<()> {
    let mut config = load_config_from(args.config.as_deref())?;
    if let Some(output) = args.output {
        config.output = output;
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    if let Some(max) = args.max_step_attempts {
        config.max_step_attempts = Some(max);
    }
    config.validate()?;

    let mut term = StdTerminal::stdio();
    term.say("Welcome to SAT Math Tutor!")?;
    term.say("")?;

    let num_questions = match args.count {
        Some(n) => n,
        None => {
            let raw = term.ask("How many questions do you want to try? ")?;
            raw.trim()
                .parse::<usize>()
                .with_context(|| format!("invalid question count: '{}'", raw.trim()))?
        }
    };

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let session = SessionConfig {
        num_questions,
        include_algebra: args.include_algebra,
        algebra_share: config.algebra_share,
        auto: args.auto,
        tolerance: config.tolerance,
        step_policy: StepPolicy {
            tolerance: config.step_tolerance,
            max_attempts: config.max_step_attempts,
        },
    };
    let mut runner = SessionRunner::new(rng, session);
    let log = runner.run(&mut term)?;

    if args.breakdown {
        print_breakdown(&log.summary());
    }

    if !args.save {
        return Ok(());
    }

    let save = match runner.confirm_save(&mut term, format_label(config.format)) {
        Ok(save) => save,
        // EOF at the confirmation counts as "no"
        Err(e) if e.is_input_closed() => false,
        Err(e) => return Err(e.into()),
    };
    if save {
        for path in persist(&log, &config)? {
            term.say(&format!("Results saved to {}", path.display()))?;
        }
    }

    Ok(())
}

fn format_label(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Csv => "CSV",
        OutputFormat::Json => "JSON",
        OutputFormat::All => "CSV and JSON",
    }
}

/// Write the log in the configured format(s). JSON output always uses a
/// `.json` extension next to the configured path.
fn persist(log: &SessionLog, config: &TutorConfig) -> Result<Vec<PathBuf>> {
    let csv_path = config.output.clone();
    let json_path = json_path_for(&config.output);
    let mut written = Vec::new();

    if matches!(config.format, OutputFormat::Csv | OutputFormat::All) {
        write_csv_report(log, &csv_path)?;
        written.push(csv_path);
    }
    if matches!(config.format, OutputFormat::Json | OutputFormat::All) {
        save_json(log, &json_path)?;
        written.push(json_path);
    }
    tracing::info!(session = %log.id, files = written.len(), "results saved");
    Ok(written)
}

fn json_path_for(output: &Path) -> PathBuf {
    output.with_extension("json")
}

fn print_breakdown(summary: &SessionSummary) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Kind", "Attempted", "Correct", "Accuracy", "Avg Time"]);

    for (kind, stats) in &summary.per_kind {
        table.add_row(vec![
            Cell::new(kind),
            Cell::new(stats.attempted),
            Cell::new(stats.correct),
            Cell::new(format!("{:.1}%", stats.accuracy() * 100.0)),
            Cell::new(format!("{:.1}s", stats.mean_duration_secs())),
        ]);
    }
    table.add_row(vec![
        Cell::new("total"),
        Cell::new(summary.attempted),
        Cell::new(summary.correct),
        Cell::new(format!("{:.1}%", summary.accuracy() * 100.0)),
        Cell::new(""),
    ]);

    eprintln!("\n{table}");
}
