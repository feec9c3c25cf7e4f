//! series-editor CLI entry point.
//!
//! Replays a script of footer events against an in-memory series store and
//! prints the resulting footer and series as JSON.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Handle;

use series_editor::domain::Series;
use series_editor::editor::{Action, FooterView, HostAction, Selection, SeriesEditorFooter};
use series_editor::infra::app_config::{self, AppConfig};
use series_editor::infra::backend::MemoryBackend;
use series_editor::infra::script::{ScriptEvent, parse_script};

#[derive(Parser, Debug)]
#[command(name = "series-editor")]
#[command(version)]
#[command(about = "Bulk-edit footer for a series list", long_about = None)]
struct Args {
    /// Config file (defaults to SERIES_EDITOR_CONFIG_PATH or the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a JSON list of footer events
    Run {
        /// Script file, `-` for stdin
        script: PathBuf,
    },

    /// Write a starter config
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Serialize)]
struct RunReport {
    footer: FooterView,
    series: Vec<Series>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match args.command {
        Commands::Run { script } => {
            let config = match &args.config {
                Some(path) => app_config::load_config_from(path)?,
                None => app_config::load_config(),
            };
            let events = read_script(&script)?;
            let report = run_script(&config, events).await;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::InitConfig { force } => {
            let path = args.config.clone().unwrap_or_else(app_config::config_path);
            if path.exists() && !force {
                bail!("{} already exists, pass --force to overwrite", path.display());
            }
            let sample = AppConfig::sample();
            match &args.config {
                Some(path) => app_config::save_config_to(path, &sample)?,
                None => app_config::save_config(&sample)?,
            }
            log::info!("Wrote config to {}", path.display());
        }
    }

    Ok(())
}

fn read_script(path: &Path) -> Result<Vec<ScriptEvent>> {
    let contents = if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin()).context("Failed to read script from stdin")?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?
    };
    parse_script(&contents).context("Invalid script")
}

async fn run_script(config: &AppConfig, events: Vec<ScriptEvent>) -> RunReport {
    let backend = Arc::new(MemoryBackend::new(config.series.clone()));
    let mut footer = SeriesEditorFooter::new(backend.clone(), Handle::current(), config);

    for event in events {
        log::debug!("event: {event:?}");
        footer.dispatch(Action::from(event));
        footer.settle().await;
        drop_deleted_from_selection(&mut footer, &backend);
    }

    RunReport {
        footer: footer.view(),
        series: backend.series(),
    }
}

/// Plays the host's part after a delete: deleted series leave the selection.
fn drop_deleted_from_selection(footer: &mut SeriesEditorFooter, backend: &MemoryBackend) {
    let selection = &footer.state.host.selection;
    if selection.series_ids.iter().all(|id| backend.contains(*id)) {
        return;
    }
    let remaining = Selection::new(
        selection
            .series_ids
            .iter()
            .copied()
            .filter(|id| backend.contains(*id)),
    );
    footer.dispatch(Action::Host(HostAction::SelectionChanged(remaining)));
}
