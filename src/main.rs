// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use tirgul::rng::{RandomSource, SeededSource, SystemSource};
use tirgul::{generate_exercises, Article};

/// CLI wrapper for log levels to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// tirgul - Hebrew literacy exercise generator
///
/// Turns one Hebrew news article into four graded practice exercises
/// (reading, comprehension, writing, vocabulary) and prints them as JSON.
#[derive(Parser, Debug)]
#[command(name = "tirgul")]
#[command(version = "0.1.0")]
#[command(about = "Generate Hebrew literacy exercises from a news article")]
#[command(long_about = "tirgul analyzes one Hebrew news article and generates four graded
practice exercises, one per skill topic, printed as a JSON array.

EXAMPLES:
    tirgul --title 'הכלב ניצח' --body 'הכלב התאמן קשה. כולם שמחו.'
    tirgul --input article.json --pretty
    tirgul --input article.json --seed 42       # reproducible output
    tirgul --title '...' --body '...' --interest 'מסי'")]
struct CommandLineOptions {
    /// Article headline (required unless --input is given)
    #[arg(short, long, conflicts_with = "input")]
    title: Option<String>,

    /// Article body text
    #[arg(short, long, requires = "title")]
    body: Option<String>,

    /// Interest label anchoring the subject
    #[arg(long)]
    interest: Option<String>,

    /// Article identifier used to derive item ids
    #[arg(long, default_value = "article")]
    id: String,

    /// Read the article from a JSON file instead of flags
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Seed the random source for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Custom logger writing colored lines to stderr
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();
    if let Some(cmd_log_level) = &cli.log_level {
        log::set_max_level(cmd_log_level.clone().into());
    }

    let article = load_article(&cli)?;
    debug!("Loaded article '{}' ({} chars)", article.id, article.body.len());

    let mut rng: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => {
            info!("Using seeded random source ({})", seed);
            Box::new(SeededSource::new(seed))
        }
        None => Box::new(SystemSource::new()),
    };

    let items = generate_exercises(&article, rng.as_mut())?;
    info!("Generated {} exercises for article '{}'", items.len(), article.id);

    let output = if cli.pretty {
        serde_json::to_string_pretty(&items)?
    } else {
        serde_json::to_string(&items)?
    };
    println!("{}", output);

    Ok(())
}

/// Build the article from --input or from the title/body flags
fn load_article(cli: &CommandLineOptions) -> Result<Article> {
    if let Some(path) = &cli.input {
        let file = File::open(path)
            .with_context(|| format!("Failed to open article file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let mut article: Article = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse article file: {}", path.display()))?;
        if article.interest.is_none() {
            article.interest = cli.interest.clone();
        }
        return Ok(article);
    }

    let title = cli
        .title
        .clone()
        .ok_or_else(|| anyhow!("Either --input or --title/--body is required"))?;
    let body = cli.body.clone().unwrap_or_default();

    Ok(Article {
        id: cli.id.clone(),
        title,
        body,
        interest: cli.interest.clone(),
    })
}
