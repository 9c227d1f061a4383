//! Terminal output formatter

use freshcast_core::orchestrator::{render_materials, render_summary};
use freshcast_core::{Answer, MaterialRequirements, ProductForecast, ProductSummary, RoutingDecision};

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

pub fn format_decision(decision: &RoutingDecision) -> String {
    let product = decision
        .product
        .map(|p| p.display_name())
        .unwrap_or("-");
    format!(
        "Query type:      {}\n\
         Confidence:      {:.2}\n\
         Product:         {}\n\
         Horizon:         {} days\n\
         Forecast engine: {}\n\
         Assistant:       {}\n",
        decision.query_type,
        decision.confidence,
        product,
        decision.horizon_days,
        yes_no(decision.use_forecast_engine),
        yes_no(decision.use_assistant),
    )
}

pub fn format_answer(answer: &Answer) -> String {
    let mut output = answer.text.trim_end().to_string();
    output.push('\n');
    output
}

pub fn format_forecast(forecast: &ProductForecast) -> String {
    let summary = &forecast.summary;
    let mut output = format!(
        "{} - next {} days\n\n",
        forecast.product.display_name(),
        forecast.horizon_days
    );
    output.push_str(&format!("{:<12} {:>8} {:>10}\n", "Date", "Demand", "Production"));
    for day in &forecast.daily {
        output.push_str(&format!(
            "{:<12} {:>8} {:>10}\n",
            day.date.format("%a %m-%d").to_string(),
            day.expected_demand,
            day.recommended_production
        ));
    }
    output.push_str(&format!(
        "{:<12} {:>8} {:>10}\n\nDaily average: {:.1} units\n",
        "Total", summary.total_demand, summary.total_production, summary.daily_average
    ));
    output
}

pub fn format_materials(materials: &MaterialRequirements, horizon_days: u32) -> String {
    if materials.is_empty() {
        return format!("No raw materials needed for the next {} days.\n", horizon_days);
    }
    render_materials(materials, horizon_days)
}

pub fn format_summary(summaries: &[ProductSummary], horizon_days: u32) -> String {
    if summaries.is_empty() {
        return "No products have forecasting models.\n".to_string();
    }
    render_summary(summaries, horizon_days)
}
