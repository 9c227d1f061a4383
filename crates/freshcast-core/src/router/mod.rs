//! Question routing
//!
//! Decides, from unstructured operator questions, which capability should
//! answer (forecasting engine or language assistant), which product and
//! horizon the question refers to, and how confident that decision is.

mod classifier;
mod extractor;
mod selector;
mod vocabulary;

pub use classifier::{Classification, Classifier, Rule, RULES};
pub use extractor::{extract_horizon, extract_product};
pub use selector::{select_capabilities, Capabilities};
pub use vocabulary::{KeywordGroup, Vocabulary};

use crate::catalog::Product;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of question being asked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    /// How much of a product will sell
    ForecastDemand,
    /// How much to produce or keep in stock
    InventoryNeeds,
    /// Ingredients to buy for upcoming production
    RawMaterials,
    /// Operational or strategic advice
    BusinessAdvice,
    /// Where and how to source materials
    SupplierInfo,
    /// Anything else
    GeneralQuestion,
}

impl QueryType {
    pub const ALL: [QueryType; 6] = [
        QueryType::ForecastDemand,
        QueryType::InventoryNeeds,
        QueryType::RawMaterials,
        QueryType::BusinessAdvice,
        QueryType::SupplierInfo,
        QueryType::GeneralQuestion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::ForecastDemand => "forecast_demand",
            QueryType::InventoryNeeds => "inventory_needs",
            QueryType::RawMaterials => "raw_materials",
            QueryType::BusinessAdvice => "business_advice",
            QueryType::SupplierInfo => "supplier_info",
            QueryType::GeneralQuestion => "general_question",
        }
    }

    /// Capabilities that answer this kind of question
    pub fn capabilities(&self) -> Capabilities {
        select_capabilities(*self)
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Routing decision for a single question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingDecision {
    pub query_type: QueryType,

    /// Confidence in the classification (0.0 - 1.0)
    pub confidence: f64,

    /// Product the question refers to, if any
    pub product: Option<Product>,

    /// Forecast horizon in days (>= 1)
    pub horizon_days: u32,

    pub use_forecast_engine: bool,
    pub use_assistant: bool,

    /// Question as received, kept for logging
    pub original_query: String,
}

/// Single entry point composing classification, extraction and selection
#[derive(Debug, Clone)]
pub struct QueryRouter {
    classifier: Classifier,
}

impl QueryRouter {
    /// Create a router over the given vocabulary
    pub fn new(vocabulary: Vocabulary) -> Result<Self> {
        Ok(Self {
            classifier: Classifier::new(vocabulary)?,
        })
    }

    /// Router with the built-in bakery vocabulary
    pub fn bakery() -> Result<Self> {
        Self::new(Vocabulary::bakery())
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Route a question. Never fails: unrecognised input degrades to a
    /// low-confidence general question.
    pub fn route(&self, question: &str) -> RoutingDecision {
        let classification = self.classifier.classify(question);
        let product = extract_product(question);
        let horizon_days = extract_horizon(question);
        let capabilities = classification.query_type.capabilities();

        tracing::debug!(
            "Routed '{}' → type={}, confidence={:.2}, rule={}, product={:?}, horizon={}d",
            question,
            classification.query_type,
            classification.confidence,
            classification.rule.unwrap_or("keyword-score"),
            product,
            horizon_days
        );

        RoutingDecision {
            query_type: classification.query_type,
            confidence: classification.confidence,
            product,
            horizon_days,
            use_forecast_engine: capabilities.forecast_engine,
            use_assistant: capabilities.assistant,
            original_query: question.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> QueryRouter {
        QueryRouter::bakery().unwrap()
    }

    #[test]
    fn test_route_croissant_quantity() {
        let decision = router().route("How many croissants do we need for next week?");
        assert_eq!(decision.query_type, QueryType::ForecastDemand);
        assert_eq!(decision.confidence, 0.90);
        assert_eq!(decision.product, Some(Product::Croissant));
        assert_eq!(decision.horizon_days, 7);
        assert!(decision.use_forecast_engine);
        assert!(!decision.use_assistant);
    }

    #[test]
    fn test_route_raw_materials() {
        let decision = router().route("What raw materials should I order?");
        assert_eq!(decision.query_type, QueryType::RawMaterials);
        assert_eq!(decision.confidence, 0.85);
        assert_eq!(decision.product, None);
        assert_eq!(decision.horizon_days, 7);
        assert!(decision.use_forecast_engine);
    }

    #[test]
    fn test_route_supplier() {
        let decision = router().route("Where can I buy cheap flour?");
        assert_eq!(decision.query_type, QueryType::SupplierInfo);
        assert_eq!(decision.confidence, 0.90);
        assert!(decision.use_assistant);
        assert!(!decision.use_forecast_engine);
    }

    #[test]
    fn test_route_should_i_before_production() {
        let decision = router().route("Should I increase production for the holidays?");
        assert_eq!(decision.query_type, QueryType::BusinessAdvice);
        assert_eq!(decision.confidence, 0.85);
    }

    #[test]
    fn test_route_should_i_where_to_buy() {
        let decision = router().route("Should I check where to buy cheaper butter?");
        assert_eq!(decision.query_type, QueryType::SupplierInfo);
        assert_eq!(decision.confidence, 0.90);
        assert!(decision.use_assistant);
    }

    #[test]
    fn test_route_long_horizon() {
        let decision = router().route("Sourdough demand over 13 months");
        assert_eq!(decision.horizon_days, 390);
    }

    #[test]
    fn test_route_empty_question() {
        let decision = router().route("");
        assert_eq!(decision.query_type, QueryType::GeneralQuestion);
        assert_eq!(decision.confidence, 0.50);
        assert_eq!(decision.product, None);
        assert_eq!(decision.horizon_days, 7);
        assert!(decision.use_assistant);
        assert_eq!(decision.original_query, "");
    }

    #[test]
    fn test_route_inventory_with_product_and_tomorrow() {
        let decision = router().route("What's our inventory needs for sandwiches tomorrow?");
        assert_eq!(decision.query_type, QueryType::InventoryNeeds);
        assert_eq!(decision.confidence, 0.80);
        assert_eq!(decision.product, Some(Product::Sandwich));
        assert_eq!(decision.horizon_days, 1);
    }

    #[test]
    fn test_route_is_repeatable() {
        let router = router();
        let question = "Production forecast for donuts this week";
        assert_eq!(router.route(question), router.route(question));
    }

    #[test]
    fn test_decision_serializes_snake_case() {
        let decision = router().route("How many muffins for 3 days?");
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["query_type"], "forecast_demand");
        assert_eq!(json["product"], "Muffin");
        assert_eq!(json["horizon_days"], 3);
    }
}
