//! Runs the tool group lifecycle against an in-memory host.
//!
//! Usage:
//!
//! ```text
//! toolshed [--config <path>] [--capacity <n>] [QUERY]...
//! ```
//!
//! Start-up registers the resource templates and the initial groups. Each
//! query (the positional arguments, or stdin lines when there are none) is
//! classified and its group preloaded. Progress is logged to stderr.

use camino::Utf8PathBuf;
use clap::Parser;
use mockable::DefaultClock;
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use toolshed::config::{SettingsError, ToolshedSettings};
use toolshed::logging::{DEFAULT_LOG_LEVEL, init_subscriber};
use toolshed::tool_groups::{
    adapters::{InMemoryToolHost, catalog::default_registry, default_resources},
    domain::{GroupCapacity, GroupName, ToolGroupDomainError},
    services::{BootstrapError, GroupLifecycleManager, bootstrap},
};
use tracing::{debug, error, info};

type Manager = GroupLifecycleManager<InMemoryToolHost, DefaultClock>;

/// Tool group lifecycle runner.
#[derive(Parser, Debug)]
#[command(name = "toolshed", about = "Loads tool groups on demand")]
struct Cli {
    /// JSON settings file.
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Maximum active groups (overrides settings and environment).
    #[arg(long)]
    capacity: Option<usize>,

    /// Queries to classify; read from stdin when omitted.
    queries: Vec<String>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("invalid built-in catalog: {0}")]
    Catalog(#[from] ToolGroupDomainError),
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
    #[error("failed to read queries from stdin: {0}")]
    Stdin(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = match resolve_settings(&cli) {
        Ok(settings) => settings,
        Err(err) => {
            let _installed = init_subscriber(DEFAULT_LOG_LEVEL);
            error!(error = %err, "invalid settings");
            return ExitCode::FAILURE;
        }
    };
    if !init_subscriber(&settings.log_level) {
        debug!("tracing subscriber already installed");
    }

    match run(&cli.queries, &settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "toolshed failed");
            ExitCode::FAILURE
        }
    }
}

fn resolve_settings(cli: &Cli) -> Result<ToolshedSettings, CliError> {
    let mut settings =
        ToolshedSettings::load(cli.config.as_deref(), |key| std::env::var(key).ok())?;
    if let Some(capacity) = cli.capacity {
        settings.capacity = GroupCapacity::new(capacity).map_err(SettingsError::from)?;
    }
    Ok(settings)
}

async fn run(queries: &[String], settings: &ToolshedSettings) -> Result<(), CliError> {
    let manager = Manager::new(
        Arc::new(default_registry()?),
        Arc::new(InMemoryToolHost::new()),
        Arc::new(DefaultClock),
        settings.capacity,
    );
    let resources = default_resources()?;
    bootstrap(&manager, &resources, &settings.initial_groups).await?;

    if queries.is_empty() {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await.map_err(CliError::Stdin)? {
            handle_query(&manager, &line).await;
        }
    } else {
        for query in queries {
            handle_query(&manager, query).await;
        }
    }
    Ok(())
}

async fn handle_query(manager: &Manager, query: &str) {
    if query.trim().is_empty() {
        return;
    }
    let outcome = manager.suggest_and_load_groups(query).await;
    let active = manager.get_active_groups().await;
    info!(
        query,
        outcome = ?outcome,
        active = ?active.iter().map(GroupName::as_str).collect::<Vec<_>>(),
        "handled query"
    );
}
