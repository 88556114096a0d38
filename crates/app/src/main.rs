mod logging;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::Dataset;
use services::{AppServices, Clock};
use storage::dataset::{load_questions, parse_questions};
use ui::{App, UiApp, build_app_context};

const BUNDLED_QUESTIONS: &str = include_str!("../assets/questions.json");
const DEFAULT_DB_URL: &str = "sqlite://flashcards.sqlite3";
const MEMORY_DB_URL: &str = "sqlite::memory:";

#[derive(Debug)]
enum ArgsError {
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Parser, Debug)]
#[command(name = "flashcards")]
#[command(about = "Flashcard study app with a category wheel")]
#[command(version)]
struct Args {
    /// Question dataset (JSON array). Uses the bundled sample when omitted.
    #[arg(long, env = "FLASHCARDS_QUESTIONS", value_name = "PATH")]
    questions: Option<PathBuf>,

    /// SQLite URL holding the wheel-to-study handoff slot
    #[arg(long = "db", env = "FLASHCARDS_DB_URL", default_value = DEFAULT_DB_URL, value_name = "URL")]
    db_url: String,

    /// Log at debug level
    #[arg(long)]
    verbose: bool,
}

struct DesktopApp {
    services: Arc<AppServices>,
}

impl UiApp for DesktopApp {
    fn services(&self) -> Arc<AppServices> {
        Arc::clone(&self.services)
    }
}

fn normalize_sqlite_url(raw: &str) -> Result<String, ArgsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: raw.to_string(),
        });
    }
    if trimmed == MEMORY_DB_URL || trimmed.starts_with("sqlite://") {
        return Ok(trimmed.to_string());
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    Ok(format!("sqlite://{}", absolute.display()))
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == MEMORY_DB_URL {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn load_dataset(questions: Option<&Path>) -> Result<Dataset, Box<dyn std::error::Error>> {
    let dataset = match questions {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading questions");
            load_questions(path)?
        }
        None => parse_questions(BUNDLED_QUESTIONS)?,
    };
    tracing::info!(
        questions = dataset.len(),
        categories = dataset.categories().len(),
        "dataset ready"
    );
    Ok(dataset)
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = load_dataset(args.questions.as_deref())?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    let db_url = normalize_sqlite_url(&args.db_url)?;
    prepare_sqlite_file(&db_url)?;
    let services = AppServices::new_sqlite(&db_url, Clock::default_clock(), Arc::new(dataset)).await?;
    tracing::info!(db = %db_url, "handoff storage ready");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services: Arc::new(services),
    });
    let context = build_app_context(&app);

    // Explicitly disable always-on-top; some tao dev setups default to it on macOS.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Flashcards")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(err) = run(args).await {
        // At this layer (binary glue), printing once is fine.
        tracing::error!(error = %err, "startup failed");
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_and_full_urls_pass_through() {
        assert_eq!(normalize_sqlite_url("sqlite::memory:").unwrap(), "sqlite::memory:");
        assert_eq!(
            normalize_sqlite_url(" sqlite:///tmp/cards.db ").unwrap(),
            "sqlite:///tmp/cards.db"
        );
    }

    #[test]
    fn relative_paths_become_absolute() {
        let url = normalize_sqlite_url("sqlite:data/cards.db").unwrap();
        let path = url.strip_prefix("sqlite://").unwrap();
        assert!(Path::new(path).is_absolute());
        assert!(path.ends_with("data/cards.db"));
    }

    #[test]
    fn blank_url_is_rejected() {
        assert!(normalize_sqlite_url("   ").is_err());
    }

    #[test]
    fn bundled_dataset_parses() {
        let dataset = parse_questions(BUNDLED_QUESTIONS).unwrap();
        assert!(!dataset.is_empty());
        assert!(dataset.categories().len() > 1);
    }

    #[test]
    fn args_accept_flags() {
        let args = Args::try_parse_from([
            "flashcards",
            "--db",
            "sqlite::memory:",
            "--questions",
            "deck.json",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(args.db_url, "sqlite::memory:");
        assert_eq!(args.questions.as_deref(), Some(Path::new("deck.json")));
        assert!(args.verbose);
    }
}
