//! MCP tool definitions and handlers

use crate::protocol::*;
use anyhow::Result;
use freshcast_core::orchestrator::{render_materials, render_product_forecast, render_summary};
use freshcast_core::MAX_HORIZON_DAYS;
use freshcast_core::{Orchestrator, Product};
use serde_json::Value;

fn days_schema() -> Value {
    serde_json::json!({
        "type": "integer",
        "description": format!("Forecast horizon in days (1-{})", MAX_HORIZON_DAYS),
        "minimum": 1,
        "maximum": MAX_HORIZON_DAYS
    })
}

pub fn route_tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: "route".to_string(),
        description: "Classify a bakery question and show which capabilities would answer it"
            .to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "question": {
                    "type": "string",
                    "description": "Operator question in plain English"
                }
            },
            "required": ["question"]
        }),
    }
}

pub fn ask_tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: "ask".to_string(),
        description: "Answer a bakery question using forecasts and the business assistant"
            .to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "question": {
                    "type": "string",
                    "description": "Operator question in plain English"
                }
            },
            "required": ["question"]
        }),
    }
}

pub fn forecast_tool_definition() -> ToolDefinition {
    let products: Vec<&str> = Product::ALL.iter().map(|p| p.as_str()).collect();
    ToolDefinition {
        name: "forecast".to_string(),
        description: "Demand forecast and recommended production for one product".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "product": {
                    "type": "string",
                    "description": "Product name",
                    "enum": products
                },
                "days": days_schema()
            },
            "required": ["product"]
        }),
    }
}

pub fn materials_tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: "materials".to_string(),
        description: "Raw materials needed to cover recommended production".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "days": days_schema()
            }
        }),
    }
}

pub fn summary_tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: "summary".to_string(),
        description: "Production summary for every forecast product".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "days": days_schema()
            }
        }),
    }
}

fn required_str<'a>(args: &'a Value, key: &str) -> Result<&'a str> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow::anyhow!("Missing {}", key))
}

fn days_arg(args: &Value, default: u32) -> Result<u32> {
    let Some(value) = args.get("days") else {
        return Ok(default);
    };
    let days = value
        .as_u64()
        .ok_or_else(|| anyhow::anyhow!("days must be a positive integer"))?;
    if days == 0 || days > MAX_HORIZON_DAYS as u64 {
        anyhow::bail!("days must be between 1 and {}", MAX_HORIZON_DAYS);
    }
    Ok(days as u32)
}

pub async fn handle_route(orchestrator: &Orchestrator, args: Value) -> Result<ToolResult> {
    let question = required_str(&args, "question")?;
    let decision = orchestrator.route(question);

    let mut summary = format!(
        "Query type: {} (confidence {:.2})",
        decision.query_type, decision.confidence
    );
    if let Some(product) = decision.product {
        summary.push_str(&format!("\nProduct: {}", product.display_name()));
    }
    summary.push_str(&format!(
        "\nHorizon: {} days\nForecast engine: {}\nAssistant: {}",
        decision.horizon_days,
        if decision.use_forecast_engine { "yes" } else { "no" },
        if decision.use_assistant { "yes" } else { "no" },
    ));

    Ok(ToolResult::text(summary, serde_json::to_value(&decision)?))
}

pub async fn handle_ask(orchestrator: &Orchestrator, args: Value) -> Result<ToolResult> {
    let question = required_str(&args, "question")?;
    let answer = orchestrator.answer(question).await;
    let structured = serde_json::to_value(&answer)?;
    Ok(ToolResult::text(answer.text, structured))
}

pub async fn handle_forecast(orchestrator: &Orchestrator, args: Value) -> Result<ToolResult> {
    let product: Product = required_str(&args, "product")?.parse()?;
    let days = days_arg(&args, orchestrator.default_horizon())?;

    let forecast = orchestrator.product_forecast(product, days).await?;
    Ok(ToolResult::text(
        render_product_forecast(&forecast),
        serde_json::to_value(&forecast)?,
    ))
}

pub async fn handle_materials(orchestrator: &Orchestrator, args: Value) -> Result<ToolResult> {
    let days = days_arg(&args, orchestrator.default_horizon())?;

    let materials = orchestrator.materials(days).await?;
    let structured = serde_json::json!({
        "days": days,
        "materials": materials.listing(),
    });
    Ok(ToolResult::text(render_materials(&materials, days), structured))
}

pub async fn handle_summary(orchestrator: &Orchestrator, args: Value) -> Result<ToolResult> {
    let days = days_arg(&args, orchestrator.default_horizon())?;

    let summaries = orchestrator.weekly_summary(days).await?;
    let structured = serde_json::json!({
        "days": days,
        "products": summaries,
    });
    Ok(ToolResult::text(render_summary(&summaries, days), structured))
}
