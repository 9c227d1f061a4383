//! Config command

use crate::app::{ConfigAction, ConfigArgs, OutputFormat};
use anyhow::Result;
use freshcast_core::{Config, FreshCastError};
use std::path::Path;

pub fn run(args: ConfigArgs, config: &Config, path: &Path, format: OutputFormat) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
                OutputFormat::Cli => print!("{}", serde_yaml::to_string(config)?),
            }
            if config.assistant.api_key.is_none() {
                eprintln!("Note: no assistant API key set; advice questions are unavailable");
            }
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(FreshCastError::InvalidInput(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ))
                .into());
            }
            Config::default().save_to(path)?;
            println!("Wrote default configuration to {}", path.display());
        }
        ConfigAction::Path => println!("{}", path.display()),
    }
    Ok(())
}
