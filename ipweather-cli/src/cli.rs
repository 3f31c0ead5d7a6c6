use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};
use ipweather_core::{Config, CycleOutcome, FetchPipeline, MemoryView, Scheduler};

use crate::output::format_report;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "ipweather", version, about = "Weather at your IP location, refreshed every minute")]
pub struct Cli {
    /// Read configuration from this file instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Keep refreshing and print the widget after every cycle (default).
    Watch,

    /// Run a single cycle and print the result.
    Once,

    /// Interactively set service endpoints and refresh period.
    Configure,

    /// Print the location of the configuration file.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config_path = match self.config {
            Some(path) => path,
            None => Config::config_file_path()?,
        };

        match self.command.unwrap_or(Command::Watch) {
            Command::Watch => {
                let config = Config::load_from(&config_path)?;
                watch(config).await
            }
            Command::Once => {
                let config = Config::load_from(&config_path)?;
                once(config).await
            }
            Command::Configure => configure(&config_path),
            Command::ConfigPath => {
                println!("{}", config_path.display());
                Ok(())
            }
        }
    }
}

async fn watch(config: Config) -> anyhow::Result<()> {
    let view = Arc::new(MemoryView::page());
    let pipeline = Arc::new(FetchPipeline::new(Arc::new(config), Arc::clone(&view)));
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    let handle = Scheduler::new(pipeline).with_reporter(tx).start();

    loop {
        tokio::select! {
            report = rx.recv() => match report {
                Some(report) => print!("{}", format_report(&view, &report)),
                None => break,
            },
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl-C")?;
                tracing::info!("stopping weather refresh");
                break;
            }
        }
    }

    handle.stop();
    Ok(())
}

async fn once(config: Config) -> anyhow::Result<()> {
    let view = Arc::new(MemoryView::page());
    let pipeline = FetchPipeline::new(Arc::new(config), Arc::clone(&view));

    let report = pipeline.run_cycle().await;
    print!("{}", format_report(&view, &report));

    match report.outcome {
        CycleOutcome::Content => Ok(()),
        CycleOutcome::Failure => bail!("Weather service returned unusable data"),
        CycleOutcome::Stalled => bail!("No successful response from the weather services"),
    }
}

fn configure(path: &std::path::Path) -> anyhow::Result<()> {
    let current = Config::load_from(path)?;

    let service_host = Text::new("Service host:")
        .with_default(&current.service_host)
        .with_help_message("Serves both the /ip/ and /weather/ endpoints")
        .prompt()
        .context("Failed to read service host")?;

    let icon_base_url = Text::new("Icon base URL:")
        .with_default(&current.icon_base_url)
        .prompt()
        .context("Failed to read icon base URL")?;

    let refresh_period_ms = CustomType::<u64>::new("Refresh period (ms):")
        .with_default(current.refresh_period_ms)
        .with_error_message("Please enter a whole number of milliseconds")
        .prompt()
        .context("Failed to read refresh period")?;

    let config = apply_answers(current, &service_host, icon_base_url, refresh_period_ms)?;
    config.save_to(path)?;

    println!("Saved configuration to {}", path.display());
    Ok(())
}

/// Folds the prompted answers into `current`, rejecting anything `watch` could not load.
fn apply_answers(
    current: Config,
    service_host: &str,
    icon_base_url: String,
    refresh_period_ms: u64,
) -> anyhow::Result<Config> {
    let config = Config {
        service_host: service_host.trim_end_matches('/').to_string(),
        icon_base_url,
        refresh_period_ms,
        ..current
    };
    config.validate().context("Configuration not saved")?;

    Ok(config)
}
