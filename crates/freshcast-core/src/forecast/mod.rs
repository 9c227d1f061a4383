//! Demand forecasting
//!
//! The forecasting engine is consumed through [`ForecastEngine`]. Everything
//! downstream of its output (production recommendations, summaries, raw
//! material totals) is pure and lives in [`inventory`] and [`materials`].

pub mod inventory;
pub mod materials;
mod seasonal;

pub use inventory::{
    compute_inventory, summarize, InventoryRecommendation, ProductSummary, ServiceLevel,
};
pub use materials::{compute_materials, MaterialQuantity, MaterialRequirements, RecipeTable};
pub use seasonal::{read_history, SalesRecord, SeasonalForecaster, DEFAULT_INTERVAL_Z};

use crate::catalog::Product;
use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,

    /// Expected demand (>= 0)
    pub point_estimate: f64,

    pub lower_bound: f64,
    pub upper_bound: f64,
}

/// Demand forecasting engine
#[async_trait]
pub trait ForecastEngine: Send + Sync {
    /// Forecast the next `horizon_days` days for a product, one point per
    /// day in chronological order.
    ///
    /// Fails with `NotTrained` before training and `ModelNotFound` when the
    /// product has no model.
    async fn predict(&self, product: Product, horizon_days: u32) -> Result<Vec<ForecastPoint>>;

    /// Products that have a trained model
    fn products(&self) -> Vec<Product>;

    /// Whether training has happened
    fn is_trained(&self) -> bool;

    /// Get model name
    fn model_name(&self) -> &str;
}
