//! FreshCast Core Library
//!
//! Demand forecasting and operator question answering for a small bakery.
//!
//! # Features
//! - Rule-based routing of free-text questions to the forecasting engine or the assistant
//! - Product and time-horizon extraction from natural language
//! - Production recommendations with uncertainty-based safety stock
//! - Raw-material planning from a static recipe table
//! - OpenAI-compatible language assistant for advice and supplier questions

pub mod catalog;
pub mod config;
pub mod error;
pub mod forecast;
pub mod llm;
pub mod orchestrator;
pub mod router;

pub use catalog::Product;
pub use config::{AssistantConfig, Config, ForecastConfig};
pub use error::{Error, FreshCastError, Result};
pub use forecast::{
    compute_inventory, compute_materials, summarize, ForecastEngine, ForecastPoint,
    InventoryRecommendation, MaterialQuantity, MaterialRequirements, ProductSummary,
    RecipeTable, SalesRecord, SeasonalForecaster, ServiceLevel,
};
pub use llm::{Assistant, BusinessAssistant, ChatMessage, HttpChatClient, LLMClient};
pub use orchestrator::{Answer, CapabilityFailure, Orchestrator, ProductForecast};
pub use router::{
    Capabilities, Classification, Classifier, QueryRouter, QueryType, RoutingDecision,
    Vocabulary,
};

/// Default horizon when a question names no time period
pub const DEFAULT_HORIZON_DAYS: u32 = 7;

/// Longest horizon the planner forecasts. Longer requests are rejected
/// rather than shortened.
pub const MAX_HORIZON_DAYS: u32 = 365;

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "freshcast";
