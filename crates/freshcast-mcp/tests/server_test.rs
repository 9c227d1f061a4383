//! Integration tests for the MCP server over an in-memory transport

use chrono::{Duration, NaiveDate};
use freshcast_core::{
    BusinessAssistant, Orchestrator, Product, QueryRouter, SalesRecord, SeasonalForecaster,
};
use freshcast_mcp::tools::*;
use freshcast_mcp::McpServer;
use serde_json::{json, Value};
use std::sync::Arc;

fn orchestrator() -> Orchestrator {
    let start = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
    let records: Vec<SalesRecord> = (0..14)
        .flat_map(|i| {
            let date = start + Duration::days(i);
            [
                SalesRecord {
                    date,
                    product: Product::Croissant,
                    sales: 50.0,
                },
                SalesRecord {
                    date,
                    product: Product::Muffin,
                    sales: 30.0,
                },
            ]
        })
        .collect();
    let mut engine = SeasonalForecaster::default();
    engine.train(&records);

    Orchestrator::new(
        QueryRouter::bakery().unwrap(),
        Arc::new(engine),
        Arc::new(BusinessAssistant::unconfigured()),
    )
}

async fn exchange(orchestrator: &Orchestrator, requests: &[Value]) -> Vec<Value> {
    let input: String = requests.iter().map(|r| format!("{}\n", r)).collect();
    exchange_raw(orchestrator, &input).await
}

async fn exchange_raw(orchestrator: &Orchestrator, input: &str) -> Vec<Value> {
    let mut output = Vec::new();
    McpServer::new(orchestrator)
        .serve(tokio::io::BufReader::new(input.as_bytes()), &mut output)
        .await
        .unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_initialize_and_list_tools() {
    let orchestrator = orchestrator();
    let responses = exchange(
        &orchestrator,
        &[
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
        ],
    )
    .await;

    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "freshcast");
    let names: Vec<&str> = responses[1]["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["route", "ask", "forecast", "materials", "summary"]);
}

#[tokio::test]
async fn test_protocol_errors() {
    let orchestrator = orchestrator();
    let responses = exchange_raw(
        &orchestrator,
        "not json\n\n{\"jsonrpc\":\"2.0\",\"id\":7,\"method\":\"resources/list\"}\n",
    )
    .await;

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["error"]["code"], -32700);
    assert_eq!(responses[1]["error"]["code"], -32601);
    assert_eq!(responses[1]["id"], 7);
}

#[tokio::test]
async fn test_tools_call_forecast() {
    let orchestrator = orchestrator();
    let responses = exchange(
        &orchestrator,
        &[json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": {"name": "forecast", "arguments": {"product": "croissant", "days": 3}}
        })],
    )
    .await;

    let result = &responses[0]["result"];
    assert!(result.get("isError").is_none());
    assert_eq!(result["structuredContent"]["summary"]["total_demand"], 150);
    assert!(result["content"][0]["text"]
        .as_str()
        .unwrap()
        .contains("Croissant"));
}

#[tokio::test]
async fn test_unknown_tool_is_tool_error() {
    let orchestrator = orchestrator();
    let responses = exchange(
        &orchestrator,
        &[json!({
            "jsonrpc": "2.0",
            "id": 4,
            "method": "tools/call",
            "params": {"name": "bake", "arguments": {}}
        })],
    )
    .await;

    assert_eq!(responses[0]["result"]["isError"], true);
}

#[tokio::test]
async fn test_route_tool() {
    let result = handle_route(
        &orchestrator(),
        json!({"question": "Where can I buy cheap flour?"}),
    )
    .await
    .unwrap();
    let structured = result.structured_content.unwrap();
    assert_eq!(structured["query_type"], "supplier_info");
    assert_eq!(structured["use_forecast_engine"], false);
    assert_eq!(structured["use_assistant"], true);
}

#[tokio::test]
async fn test_unknown_product_rejected() {
    let err = handle_forecast(&orchestrator(), json!({"product": "bagel"}))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("bagel"));
}

#[tokio::test]
async fn test_summary_and_materials_tools() {
    let orchestrator = orchestrator();

    let summary = handle_summary(&orchestrator, json!({"days": 7}))
        .await
        .unwrap()
        .structured_content
        .unwrap();
    let products = summary["products"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["product"], "Croissant");
    assert_eq!(products[1]["total_production"], 210);

    let materials = handle_materials(&orchestrator, json!({}))
        .await
        .unwrap()
        .structured_content
        .unwrap();
    assert_eq!(materials["days"], 7);
    assert!(!materials["materials"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_ask_degrades_without_assistant() {
    let result = handle_ask(
        &orchestrator(),
        json!({"question": "Any tips for pricing sourdough?"}),
    )
    .await
    .unwrap();
    let structured = result.structured_content.unwrap();
    assert_eq!(structured["failures"][0]["capability"], "assistant");
}
