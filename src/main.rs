use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use u_timetable::config::LayoutConfig;
use u_timetable::models::{filter_for_week, LessonItem};
use u_timetable::validation::validate_input;

/// Lays out timetable lessons as week-grid blocks.
///
/// Example:
///   timetable-layout --lessons lessons.json --config layout.yaml --week 3 --pretty
#[derive(Debug, Parser)]
#[command(
    name = "timetable-layout",
    about = "Lay out timetable lessons as positioned week-grid blocks",
    long_about = None,
)]
struct Cli {
    /// Lessons JSON file (array or `{"data":{"lessons":[...]}}`), `-` for stdin.
    #[arg(short = 'l', long = "lessons", default_value = "-")]
    lessons: PathBuf,

    /// Path to the YAML layout configuration file.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Only lay out lessons that run in this teaching week.
    #[arg(short = 'w', long = "week")]
    week: Option<u32>,

    /// Run input validation and log every problem found.
    #[arg(long = "validate", default_value_t = false)]
    validate: bool,

    /// Print the full report (laid-out and dropped lessons).
    #[arg(long = "report", default_value_t = false)]
    report: bool,

    /// Pretty-print the JSON output.
    #[arg(long = "pretty", default_value_t = false)]
    pretty: bool,
}

/// Accepted shapes of the lessons file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LessonsDocument {
    Bare(Vec<LessonItem>),
    Envelope { data: LessonsData },
}

#[derive(Debug, Deserialize)]
struct LessonsData {
    lessons: Vec<LessonItem>,
}

impl LessonsDocument {
    fn into_lessons(self) -> Vec<LessonItem> {
        match self {
            LessonsDocument::Bare(lessons) => lessons,
            LessonsDocument::Envelope { data } => data.lessons,
        }
    }
}

fn main() {
    // Logs go to stderr so stdout stays pure JSON.
    // Level is controlled by RUST_LOG (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => LayoutConfig::load_from_file(path)
            .with_context(|| format!("Failed to load layout configuration: {}", path.display()))?,
        None => {
            info!("No layout configuration provided, using built-in defaults");
            LayoutConfig::default()
        }
    };
    let engine = config.build().context("Invalid layout configuration")?;
    let schedule = config.schedule();

    let mut lessons = read_lessons(&cli.lessons)?;
    info!(count = lessons.len(), "Lessons loaded");

    if let Some(week) = cli.week {
        lessons = filter_for_week(&lessons, week);
        info!(week, count = lessons.len(), "Filtered to teaching week");
    }

    if cli.validate {
        match validate_input(&lessons, Some(schedule.slots()), engine.time_parsing()) {
            Ok(()) => info!("Validation passed"),
            Err(errors) => {
                warn!("Validation found {} problem(s):", errors.len());
                for e in &errors {
                    warn!("  {}", e);
                }
            }
        }
    }

    let report = engine.layout_with_report(&lessons, Some(schedule.slots()));
    if !report.is_complete() {
        warn!(
            laid_out = report.lessons.len(),
            dropped = report.dropped.len(),
            "Some lessons could not be placed"
        );
    }

    let mut out = std::io::stdout().lock();
    if cli.report {
        write_json(&mut out, &report, cli.pretty)
    } else {
        write_json(&mut out, &report.lessons, cli.pretty)
    }
}

fn read_lessons(path: &Path) -> Result<Vec<LessonItem>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Cannot read lessons from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open lessons file: {}", path.display()))?
    };

    let document: LessonsDocument = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse lessons JSON: {}", path.display()))?;
    Ok(document.into_lessons())
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
