//! FreshCast CLI
//!
//! Demand forecasts, production plans and business advice for a small bakery.

use anyhow::{Context, Result};
use clap::Parser;
use freshcast_core::error::exit_codes;
use freshcast_core::{Config, FreshCastError, Orchestrator, SeasonalForecaster};
use std::sync::Arc;

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON and MCP
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<FreshCastError>()
        .map(FreshCastError::exit_code)
        .unwrap_or(exit_codes::GENERAL_ERROR)
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = Config::resolve_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    if let Some(history) = cli.history {
        config.forecast.history_path = Some(history);
    }

    let format = cli.format;
    match cli.command {
        Commands::Route(args) => commands::route::run(args, format),
        Commands::Ask(args) => commands::ask::run(args, &build_orchestrator(&config)?, format).await,
        Commands::Forecast(args) => {
            commands::forecast::run(args, &build_orchestrator(&config)?, format).await
        }
        Commands::Materials(args) => {
            commands::plan::run_materials(args, &build_orchestrator(&config)?, format).await
        }
        Commands::Summary(args) => {
            commands::plan::run_summary(args, &build_orchestrator(&config)?, format).await
        }
        Commands::Supplier(args) => commands::supplier::run(args, &config, format).await,
        Commands::Config(args) => commands::config::run(args, &config, &config_path, format),
        Commands::Mcp => freshcast_mcp::start_server(&build_orchestrator(&config)?).await,
    }
}

/// Train the forecasting engine from the configured history and wire it to
/// the router and assistant
fn build_orchestrator(config: &Config) -> Result<Orchestrator> {
    let forecast = &config.forecast;
    let engine = match &forecast.history_path {
        Some(path) => SeasonalForecaster::from_csv(path, forecast.interval_z)
            .with_context(|| format!("loading sales history from {}", path.display()))?,
        None => {
            tracing::info!("No sales history configured; forecasts are unavailable");
            SeasonalForecaster::new(forecast.interval_z)
        }
    };
    Ok(Orchestrator::from_config(config, Arc::new(engine))?)
}
