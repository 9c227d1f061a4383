//! Forecast command

use super::horizon;
use crate::app::{ForecastArgs, OutputFormat};
use crate::output;
use anyhow::Result;
use freshcast_core::{Orchestrator, Product};

pub async fn run(args: ForecastArgs, orchestrator: &Orchestrator, format: OutputFormat) -> Result<()> {
    let product: Product = args.product.parse()?;
    let days = horizon(args.days, orchestrator)?;

    let forecast = orchestrator.product_forecast(product, days).await?;
    print!("{}", output::format_forecast(&forecast, format));
    Ok(())
}
