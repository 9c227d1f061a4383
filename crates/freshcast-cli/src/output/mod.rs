//! Output formatters

pub mod json;
pub mod terminal;

use crate::app::OutputFormat;
use freshcast_core::{Answer, MaterialRequirements, ProductForecast, ProductSummary, RoutingDecision};

pub fn format_decision(decision: &RoutingDecision, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_value(decision),
        OutputFormat::Cli => terminal::format_decision(decision),
    }
}

pub fn format_answer(answer: &Answer, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_value(answer),
        OutputFormat::Cli => terminal::format_answer(answer),
    }
}

pub fn format_forecast(forecast: &ProductForecast, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_value(forecast),
        OutputFormat::Cli => terminal::format_forecast(forecast),
    }
}

pub fn format_materials(
    materials: &MaterialRequirements,
    horizon_days: u32,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Json => json::format_materials(materials, horizon_days),
        OutputFormat::Cli => terminal::format_materials(materials, horizon_days),
    }
}

pub fn format_summary(
    summaries: &[ProductSummary],
    horizon_days: u32,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Json => json::format_summary(summaries, horizon_days),
        OutputFormat::Cli => terminal::format_summary(summaries, horizon_days),
    }
}
