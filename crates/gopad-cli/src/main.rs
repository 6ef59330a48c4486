use anyhow::Context;
use clap::{Parser, Subcommand};
use gopad_lsp_core::{complete_at, hover, registry};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod completer;
mod settings;

use completer::{CompletionEntry, HoverEntry};
use settings::SettingsStore;

/// gopad - Go editor intelligence from the command line
#[derive(Parser)]
#[command(name = "gopad")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query Go completions and hover docs, and manage editor settings")]
struct Cli {
    /// Log filter for stderr (defaults to RUST_LOG, then "warn")
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List completion candidates for a cursor position on one line
    Complete {
        /// Text of the line containing the cursor
        #[arg(long)]
        line: String,
        /// Cursor column in characters (defaults to end of line)
        #[arg(long)]
        column: Option<usize>,
        /// Re-rank against the typed word, as an editor would
        #[arg(long)]
        filter: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show hover documentation for an identifier
    Hover {
        /// Identifier to look up
        identifier: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List known packages
    Packages {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or change editor settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current settings
    Show,
    /// Print the settings file location
    Path,
    /// Print the auto-detected Go executable
    Detect,
    /// Set the Go executable (must run `go version` successfully)
    SetGoPath { path: PathBuf },
    /// Set the workspace folder
    SetWorkspace { folder: PathBuf },
}

#[derive(Serialize)]
struct PackageSummary<'a> {
    name: &'a str,
    functions: usize,
    constants: usize,
    variables: usize,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let result = match cli.command {
        Commands::Complete {
            line,
            column,
            filter,
            json,
        } => complete_command(&line, column, filter, json),
        Commands::Hover { identifier, json } => hover_command(&identifier, json),
        Commands::Packages { json } => packages_command(json),
        Commands::Config { action } => config_command(action),
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn init_logging(log_level: Option<&str>) {
    let filter = log_level
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("Error serializing JSON")?;
    println!("{}", json);
    Ok(())
}

fn complete_command(
    line: &str,
    column: Option<usize>,
    filter: bool,
    json: bool,
) -> anyhow::Result<()> {
    let column = column.unwrap_or_else(|| line.chars().count());
    let candidates = complete_at(registry(), line, column);
    tracing::debug!(count = candidates.len(), column, "Completion candidates");

    let word = completer::typed_word(line, &candidates);
    let shown = if filter {
        completer::rank(&candidates, &word)
    } else {
        candidates.iter().collect()
    };
    let entries: Vec<CompletionEntry> = shown.into_iter().map(CompletionEntry::from).collect();

    if json {
        return print_json(&entries);
    }

    if entries.is_empty() {
        println!("No completions");
        return Ok(());
    }

    for entry in &entries {
        println!(
            "{:<10} {:<14} {}",
            entry.kind,
            entry.label,
            entry.detail.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn hover_command(identifier: &str, json: bool) -> anyhow::Result<()> {
    let result = hover(registry(), identifier).map(HoverEntry::from);

    match (result, json) {
        (result, true) => print_json(&result),
        (Some(entry), false) => {
            for block in &entry.contents {
                println!("{}", block);
            }
            Ok(())
        }
        (None, false) => {
            println!("No hover information for '{}'", identifier);
            Ok(())
        }
    }
}

fn packages_command(json: bool) -> anyhow::Result<()> {
    let summaries: Vec<PackageSummary> = registry()
        .packages()
        .iter()
        .map(|p| PackageSummary {
            name: p.name(),
            functions: p.functions().count(),
            constants: p.constants().count(),
            variables: p.variables().count(),
        })
        .collect();

    if json {
        return print_json(&summaries);
    }

    for summary in &summaries {
        println!(
            "{:<10} {} functions, {} constants, {} variables",
            summary.name, summary.functions, summary.constants, summary.variables
        );
    }
    Ok(())
}

fn config_command(action: ConfigAction) -> anyhow::Result<()> {
    let store = SettingsStore::open_default()?;

    match action {
        ConfigAction::Show => print_json(&store.load()?),
        ConfigAction::Path => {
            println!("{}", store.path().display());
            Ok(())
        }
        ConfigAction::Detect => {
            match settings::detect_go_path() {
                Some(path) => println!("{}", path.display()),
                None => println!("Go not found"),
            }
            Ok(())
        }
        ConfigAction::SetGoPath { path } => {
            let saved = store
                .set_go_path(&path)
                .with_context(|| format!("Could not set Go path in {}", store.path().display()))?;
            tracing::info!(go_path = %saved.go_path, "Go path updated");
            print_json(&saved)
        }
        ConfigAction::SetWorkspace { folder } => {
            let saved = store.set_workspace_folder(&folder).with_context(|| {
                format!("Could not set workspace in {}", store.path().display())
            })?;
            print_json(&saved)
        }
    }
}
