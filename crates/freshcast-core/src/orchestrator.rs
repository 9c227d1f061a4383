//! Question answering across the forecasting engine and the assistant
//!
//! The router decides which capabilities to call. Selected capabilities run
//! concurrently; a failure in one is turned into a fallback line and never
//! hides the other's answer.

use crate::catalog::Product;
use crate::config::Config;
use crate::error::{FreshCastError, Result};
use crate::forecast::{
    compute_inventory, compute_materials, summarize, ForecastEngine, InventoryRecommendation,
    MaterialRequirements, ProductSummary, RecipeTable, ServiceLevel,
};
use crate::llm::{Assistant, BusinessAssistant};
use crate::router::{QueryRouter, QueryType, RoutingDecision};
use crate::MAX_HORIZON_DAYS;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shown when neither capability produced any text
pub const NO_ANSWER_MESSAGE: &str =
    "I'm not sure how to answer that. Try asking about forecasts, inventory needs, raw materials, or business advice!";

/// Heading placed before assistant text that follows a forecast answer
pub const ADDITIONAL_INSIGHT_HEADING: &str = "Additional insight:";

/// Downstream capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ForecastEngine,
    Assistant,
}

/// A selected capability that did not answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityFailure {
    pub capability: Capability,
    pub message: String,
}

/// Final answer to an operator question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    pub decision: RoutingDecision,
    pub used_forecast_engine: bool,
    pub used_assistant: bool,
    pub failures: Vec<CapabilityFailure>,
}

/// Forecast and production plan for a single product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductForecast {
    pub product: Product,
    pub horizon_days: u32,
    pub summary: ProductSummary,
    pub daily: Vec<InventoryRecommendation>,
}

pub struct Orchestrator {
    router: QueryRouter,
    engine: Arc<dyn ForecastEngine>,
    assistant: Arc<dyn Assistant>,
    recipes: RecipeTable,
    service_level: ServiceLevel,
    default_horizon_days: u32,
}

impl Orchestrator {
    pub fn new(
        router: QueryRouter,
        engine: Arc<dyn ForecastEngine>,
        assistant: Arc<dyn Assistant>,
    ) -> Self {
        Self {
            router,
            engine,
            assistant,
            recipes: RecipeTable::bakery(),
            service_level: ServiceLevel::default(),
            default_horizon_days: crate::DEFAULT_HORIZON_DAYS,
        }
    }

    /// Build from configuration around an already trained engine
    pub fn from_config(config: &Config, engine: Arc<dyn ForecastEngine>) -> Result<Self> {
        let assistant = BusinessAssistant::from_config(&config.assistant)?;
        Ok(Self::new(QueryRouter::bakery()?, engine, Arc::new(assistant))
            .with_recipes(config.recipes.clone())
            .with_service_level(config.forecast.service_level)
            .with_default_horizon(config.forecast.default_horizon_days))
    }

    pub fn with_recipes(mut self, recipes: RecipeTable) -> Self {
        self.recipes = recipes;
        self
    }

    pub fn with_service_level(mut self, service_level: ServiceLevel) -> Self {
        self.service_level = service_level;
        self
    }

    pub fn with_default_horizon(mut self, days: u32) -> Self {
        self.default_horizon_days = days;
        self
    }

    /// Horizon for summaries and materials when the caller gives none
    pub fn default_horizon(&self) -> u32 {
        self.default_horizon_days
    }

    pub fn route(&self, question: &str) -> RoutingDecision {
        self.router.route(question)
    }

    /// Answer a free-text question
    pub async fn answer(&self, question: &str) -> Answer {
        let decision = self.router.route(question);

        let forecast = async {
            if decision.use_forecast_engine {
                Some(self.forecast_answer(&decision).await)
            } else {
                None
            }
        };
        let assistant = async {
            if decision.use_assistant {
                Some(self.assistant.query(question, None).await)
            } else {
                None
            }
        };
        let (forecast, assistant) = tokio::join!(forecast, assistant);

        let mut failures = Vec::new();
        let forecast_text = forecast.map(|result| {
            result.unwrap_or_else(|e| {
                tracing::warn!("Forecasting engine failed for '{}': {}", question, e);
                let message = forecast_fallback(&e);
                failures.push(CapabilityFailure {
                    capability: Capability::ForecastEngine,
                    message: message.clone(),
                });
                message
            })
        });
        let assistant_text = assistant.map(|result| {
            result.unwrap_or_else(|e| {
                tracing::warn!("Assistant failed for '{}': {}", question, e);
                let message = assistant_fallback(&e);
                failures.push(CapabilityFailure {
                    capability: Capability::Assistant,
                    message: message.clone(),
                });
                message
            })
        });

        Answer {
            text: merge_answers(forecast_text, assistant_text),
            used_forecast_engine: decision.use_forecast_engine,
            used_assistant: decision.use_assistant,
            decision,
            failures,
        }
    }

    async fn forecast_answer(&self, decision: &RoutingDecision) -> Result<String> {
        let horizon = decision.horizon_days;
        if decision.query_type == QueryType::RawMaterials {
            let materials = self.materials(horizon).await?;
            return Ok(render_materials(&materials, horizon));
        }
        match decision.product {
            Some(product) => {
                let forecast = self.product_forecast(product, horizon).await?;
                Ok(render_product_forecast(&forecast))
            }
            None => {
                let summaries = self.weekly_summary(horizon).await?;
                Ok(render_summary(&summaries, horizon))
            }
        }
    }

    /// Forecast and production plan for one product
    pub async fn product_forecast(&self, product: Product, horizon_days: u32) -> Result<ProductForecast> {
        check_horizon(horizon_days)?;
        let points = self.engine.predict(product, horizon_days).await?;
        let daily = compute_inventory(&points, self.service_level);
        Ok(ProductForecast {
            product,
            horizon_days,
            summary: summarize(product, &daily),
            daily,
        })
    }

    /// Production summary for every product with a model
    pub async fn weekly_summary(&self, horizon_days: u32) -> Result<Vec<ProductSummary>> {
        check_horizon(horizon_days)?;
        if !self.engine.is_trained() {
            return Err(FreshCastError::NotTrained);
        }
        let forecasts = futures::future::try_join_all(
            self.engine
                .products()
                .into_iter()
                .map(|product| self.product_forecast(product, horizon_days)),
        )
        .await?;
        Ok(forecasts.into_iter().map(|f| f.summary).collect())
    }

    /// Raw materials needed to cover recommended production
    pub async fn materials(&self, horizon_days: u32) -> Result<MaterialRequirements> {
        let summaries = self.weekly_summary(horizon_days).await?;
        let totals = summaries
            .into_iter()
            .map(|s| (s.product, s.total_production));
        Ok(compute_materials(totals, &self.recipes))
    }
}

fn check_horizon(horizon_days: u32) -> Result<()> {
    if horizon_days == 0 || horizon_days > MAX_HORIZON_DAYS {
        return Err(FreshCastError::InvalidInput(format!(
            "horizon must be between 1 and {} days, got {}",
            MAX_HORIZON_DAYS, horizon_days
        )));
    }
    Ok(())
}

fn forecast_fallback(error: &FreshCastError) -> String {
    match error {
        FreshCastError::NotTrained => {
            "Forecasts are unavailable: no sales history has been loaded.".to_string()
        }
        FreshCastError::ModelNotFound(product) => {
            format!("No forecasting model is available for {}.", product)
        }
        FreshCastError::InvalidInput(_) => format!(
            "Forecasts cover at most {} days. Try asking about a shorter period.",
            MAX_HORIZON_DAYS
        ),
        other => format!("The forecasting engine could not answer ({}).", other),
    }
}

fn assistant_fallback(error: &FreshCastError) -> String {
    match error {
        FreshCastError::AssistantUnavailable => {
            "The assistant is not configured. Set FRESHCAST_LLM_API_KEY to enable advice questions."
                .to_string()
        }
        other => format!("The assistant could not answer right now ({}).", other),
    }
}

/// Forecast text first, assistant text after it under a heading
pub fn merge_answers(forecast: Option<String>, assistant: Option<String>) -> String {
    match (forecast, assistant) {
        (Some(f), Some(a)) => format!("{}\n\n{}\n{}", f, ADDITIONAL_INSIGHT_HEADING, a),
        (Some(text), None) | (None, Some(text)) if !text.trim().is_empty() => text,
        _ => NO_ANSWER_MESSAGE.to_string(),
    }
}

pub fn render_product_forecast(forecast: &ProductForecast) -> String {
    format!(
        "Forecast for {} (next {} days):\n\n\
         • Expected demand: {} units\n\
         • Recommended production: {} units\n\
         • Daily average: {:.1} units\n",
        forecast.product.display_name(),
        forecast.horizon_days,
        forecast.summary.total_demand,
        forecast.summary.total_production,
        forecast.summary.daily_average
    )
}

pub fn render_summary(summaries: &[ProductSummary], horizon_days: u32) -> String {
    let mut text = format!("Production summary (next {} days):\n\n", horizon_days);
    for summary in summaries {
        text.push_str(&format!(
            "• {}: {} units\n",
            summary.product.display_name(),
            summary.total_production
        ));
    }
    text
}

pub fn render_materials(materials: &MaterialRequirements, horizon_days: u32) -> String {
    let mut text = format!("Raw materials needed (next {} days):\n\n", horizon_days);
    for row in materials.listing() {
        text.push_str(&format!(
            "• {}: {:.2} kg\n",
            capitalize(&row.material),
            row.quantity_kg
        ));
    }
    text
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::ForecastPoint;
    use async_trait::async_trait;
    use chrono::{Duration, NaiveDate};

    /// Flat forecast of 100 units with an upper bound of 120
    struct FlatEngine {
        products: Vec<Product>,
    }

    #[async_trait]
    impl ForecastEngine for FlatEngine {
        async fn predict(&self, product: Product, horizon_days: u32) -> Result<Vec<ForecastPoint>> {
            if !self.products.contains(&product) {
                return Err(FreshCastError::ModelNotFound(product.to_string()));
            }
            let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
            Ok((0..horizon_days as i64)
                .map(|i| ForecastPoint {
                    date: start + Duration::days(i),
                    point_estimate: 100.0,
                    lower_bound: 80.0,
                    upper_bound: 120.0,
                })
                .collect())
        }

        fn products(&self) -> Vec<Product> {
            self.products.clone()
        }

        fn is_trained(&self) -> bool {
            true
        }

        fn model_name(&self) -> &str {
            "flat"
        }
    }

    struct EchoAssistant;

    #[async_trait]
    impl Assistant for EchoAssistant {
        async fn query(&self, question: &str, _context: Option<&str>) -> Result<String> {
            Ok(format!("advice on: {}", question))
        }

        fn is_configured(&self) -> bool {
            true
        }
    }

    fn orchestrator(assistant: Arc<dyn Assistant>) -> Orchestrator {
        let engine = FlatEngine {
            products: vec![Product::Croissant, Product::Donut],
        };
        Orchestrator::new(QueryRouter::bakery().unwrap(), Arc::new(engine), assistant)
            .with_service_level(ServiceLevel::new(0.5).unwrap())
    }

    #[tokio::test]
    async fn test_product_forecast_answer() {
        let answer = orchestrator(Arc::new(EchoAssistant))
            .answer("How many croissants for 3 days?")
            .await;
        assert!(answer.used_forecast_engine);
        assert!(!answer.used_assistant);
        assert!(answer.failures.is_empty());
        assert!(answer.text.contains("Forecast for Croissant (next 3 days)"));
        assert!(answer.text.contains("Expected demand: 300 units"));
        assert!(answer.text.contains("Recommended production: 330 units"));
    }

    #[tokio::test]
    async fn test_materials_answer() {
        let answer = orchestrator(Arc::new(EchoAssistant))
            .answer("What raw materials should I order?")
            .await;
        // 7 days × 110 units = 770 of each product
        assert!(answer.text.contains("Raw materials needed (next 7 days)"));
        assert!(answer.text.contains("• Flour: 169.40 kg"));
        assert!(answer.text.contains("• Sugar: 46.20 kg"));
    }

    #[tokio::test]
    async fn test_summary_answer_without_product() {
        let answer = orchestrator(Arc::new(EchoAssistant))
            .answer("Check stock levels for next week")
            .await;
        assert!(answer.text.contains("Production summary (next 7 days)"));
        assert!(answer.text.contains("• Croissant: 770 units"));
        assert!(answer.text.contains("• Donut: 770 units"));
    }

    #[tokio::test]
    async fn test_assistant_answer() {
        let answer = orchestrator(Arc::new(EchoAssistant))
            .answer("Where can I buy cheap flour?")
            .await;
        assert!(answer.used_assistant);
        assert_eq!(answer.text, "advice on: Where can I buy cheap flour?");
    }

    #[tokio::test]
    async fn test_unconfigured_assistant_falls_back() {
        let answer = orchestrator(Arc::new(BusinessAssistant::unconfigured()))
            .answer("Should I open on Sundays?")
            .await;
        assert_eq!(answer.failures.len(), 1);
        assert_eq!(answer.failures[0].capability, Capability::Assistant);
        assert!(answer.text.contains("not configured"));
    }

    #[tokio::test]
    async fn test_missing_model_falls_back() {
        let answer = orchestrator(Arc::new(EchoAssistant))
            .answer("How many muffins tomorrow?")
            .await;
        assert_eq!(answer.failures[0].capability, Capability::ForecastEngine);
        assert_eq!(answer.text, "No forecasting model is available for Muffin.");
    }

    #[tokio::test]
    async fn test_long_horizon_routes_but_is_not_forecast() {
        let orchestrator = orchestrator(Arc::new(EchoAssistant));
        let answer = orchestrator.answer("How many croissants for 400 days?").await;
        assert_eq!(answer.decision.horizon_days, 400);
        assert_eq!(answer.failures[0].capability, Capability::ForecastEngine);
        assert!(answer.text.contains("at most 365 days"));

        let err = orchestrator.weekly_summary(0).await.unwrap_err();
        assert!(matches!(err, FreshCastError::InvalidInput(_)));
    }

    #[test]
    fn test_merge_answers() {
        assert_eq!(
            merge_answers(Some("numbers".into()), Some("advice".into())),
            "numbers\n\nAdditional insight:\nadvice"
        );
        assert_eq!(merge_answers(None, Some("advice".into())), "advice");
        assert_eq!(merge_answers(None, None), NO_ANSWER_MESSAGE);
        assert_eq!(merge_answers(Some("  ".into()), None), NO_ANSWER_MESSAGE);
    }
}
