//! JSON output formatter

use freshcast_core::{MaterialRequirements, ProductSummary};
use serde::Serialize;

pub fn format_value<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string()) + "\n"
}

pub fn format_materials(materials: &MaterialRequirements, horizon_days: u32) -> String {
    format_value(&serde_json::json!({
        "days": horizon_days,
        "materials": materials.listing(),
    }))
}

pub fn format_summary(summaries: &[ProductSummary], horizon_days: u32) -> String {
    let total: u64 = summaries.iter().map(|s| s.total_production).sum();
    format_value(&serde_json::json!({
        "days": horizon_days,
        "products": summaries,
        "total_production": total,
    }))
}
