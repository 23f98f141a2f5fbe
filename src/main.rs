//! recall - CLI
//!
//! Show or edit notes stored per project.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use recall::commands::{self, ShowOutcome};
use recall::display::{self, Renderer};
use recall::editor::CommandEditor;
use recall::store::{self, DirStatus, FileStore, ProjectStore};
use recall::{document::storage_path, Settings};
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "recall")]
#[command(version, about = "Recall project knowledge from the command line")]
#[command(after_help = "Examples:
  recall myApp
  recall myApp database
  recall myApp myClass myFunction
  recall --edit myApp deployment
  recall myApp deployment --edit")]
struct Cli {
    /// Project name
    project: Option<String>,

    /// Key path inside the project, outermost first
    keys: Vec<String>,

    /// Open the entry in the configured editor
    #[arg(long, requires = "project")]
    edit: bool,

    /// Print the entry as JSON
    #[arg(long, conflicts_with = "edit")]
    json: bool,

    /// Initialize ./.recall for project-local storage
    #[arg(long, conflicts_with_all = ["edit", "json", "project", "init_global"])]
    init: bool,

    /// Initialize ~/.recall and its settings file
    #[arg(long, conflicts_with_all = ["edit", "json", "project"])]
    init_global: bool,
}

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing (stderr, so stdout stays clean for output)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = Settings::load();
    if settings.loaded_from.is_none() && Settings::default_path().is_some_and(|p| !p.exists()) {
        eprintln!("Settings file not found. Run `recall --init-global` to create default settings.");
        eprintln!("Using default settings.");
        eprintln!();
    }

    if cli.init {
        return run_init_local();
    }
    if cli.init_global {
        return run_init_global();
    }

    let Some(project) = cli.project.as_deref() else {
        Cli::command().print_help()?;
        println!();
        println!("Settings: Editor={}", settings.editor);
        return Ok(());
    };

    let store = FileStore::discover()?;
    if cli.edit {
        run_edit(&settings, &store, project, &cli.keys)
    } else {
        run_show(&settings, &store, project, &cli.keys, cli.json)
    }
}

fn run_show(
    settings: &Settings,
    store: &FileStore,
    project: &str,
    keys: &[String],
    json: bool,
) -> Result<()> {
    let outcome = commands::lookup(store, project, keys);
    let mut stdout = std::io::stdout().lock();

    if json {
        display::render_json(&mut stdout, project, keys, &outcome)?;
    } else {
        Renderer::from_settings(settings).render_show(&mut stdout, project, keys, &outcome)?;
    }
    stdout.flush()?;

    if outcome == ShowOutcome::ProjectNotFound {
        tracing::debug!("Looked for {}", store.location(project).display());
    }
    Ok(())
}

fn run_edit(settings: &Settings, store: &FileStore, project: &str, keys: &[String]) -> Result<()> {
    if keys.is_empty() {
        println!("[INFO] Editing general info for project: {}", project);
    } else {
        println!(
            "[INFO] Editing project: {}, key: {} (using {})",
            project,
            storage_path(keys),
            settings.editor
        );
    }
    println!("[INFO] Edit the content between infoShort:, infoLong:, and example: sections");

    let editor = CommandEditor::new(settings.editor.clone());
    let outcome = commands::edit_key(store, &editor, project, keys)
        .with_context(|| format!("Editing {} failed, nothing was saved", project))?;

    println!("[INFO] Saved changes to {}", outcome.location.display());
    Ok(())
}

fn run_init_local() -> Result<()> {
    println!("[INFO] Initializing local recall directory at ./.recall/...");
    match store::init_local(std::path::Path::new("."))? {
        DirStatus::Created(path) => println!("[INFO] Created {} directory", path.display()),
        DirStatus::AlreadyExists(path) => {
            println!("[INFO] Local recall directory already exists at {}", path.display())
        }
    }
    Ok(())
}

fn run_init_global() -> Result<()> {
    let dir = store::global_dir()?;
    let result = store::init_global(&dir)?;

    match &result.dir {
        DirStatus::Created(path) => println!("[INFO] Created {} directory", path.display()),
        DirStatus::AlreadyExists(path) => println!(
            "[INFO] Global recall directory already exists at {}",
            path.display()
        ),
    }
    match &result.settings {
        DirStatus::Created(path) => {
            println!("[INFO] Created default settings file at {}", path.display())
        }
        DirStatus::AlreadyExists(path) => println!(
            "[INFO] Global settings file already exists at {}",
            path.display()
        ),
    }
    Ok(())
}
