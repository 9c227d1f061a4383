//! Production planning commands

use super::horizon;
use crate::app::{HorizonArgs, OutputFormat};
use crate::output;
use anyhow::Result;
use freshcast_core::Orchestrator;

pub async fn run_materials(
    args: HorizonArgs,
    orchestrator: &Orchestrator,
    format: OutputFormat,
) -> Result<()> {
    let days = horizon(args.days, orchestrator)?;
    let materials = orchestrator.materials(days).await?;
    print!("{}", output::format_materials(&materials, days, format));
    Ok(())
}

pub async fn run_summary(
    args: HorizonArgs,
    orchestrator: &Orchestrator,
    format: OutputFormat,
) -> Result<()> {
    let days = horizon(args.days, orchestrator)?;
    let summaries = orchestrator.weekly_summary(days).await?;
    print!("{}", output::format_summary(&summaries, days, format));
    Ok(())
}
