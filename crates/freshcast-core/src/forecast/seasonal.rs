//! Day-of-week baseline forecaster trained from sales history

use super::{ForecastEngine, ForecastPoint};
use crate::catalog::Product;
use crate::error::{FreshCastError, Result};
use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Default width of the uncertainty interval, in standard deviations
pub const DEFAULT_INTERVAL_Z: f64 = 1.96;

/// One row of sales history. Extra CSV columns are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub product: Product,
    pub sales: f64,
}

/// Read a sales history CSV with `date,product,sales` columns
pub fn read_history(path: impl AsRef<Path>) -> Result<Vec<SalesRecord>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

#[derive(Debug, Clone)]
struct WeekdayProfile {
    mean: [f64; 7],
    std_dev: [f64; 7],
    last_date: NaiveDate,
}

impl WeekdayProfile {
    fn fit(rows: &[&SalesRecord]) -> Option<Self> {
        let last_date = rows.iter().map(|r| r.date).max()?;

        let mut buckets: [Vec<f64>; 7] = Default::default();
        for row in rows {
            buckets[row.date.weekday().num_days_from_monday() as usize].push(row.sales);
        }

        let all: Vec<f64> = rows.iter().map(|r| r.sales).collect();
        let (overall_mean, overall_std) = mean_and_std(&all);

        let mut mean = [overall_mean; 7];
        let mut std_dev = [overall_std; 7];
        for (day, values) in buckets.iter().enumerate() {
            if !values.is_empty() {
                (mean[day], std_dev[day]) = mean_and_std(values);
            }
        }

        Some(Self {
            mean,
            std_dev,
            last_date,
        })
    }
}

fn mean_and_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// Baseline engine: per-product day-of-week mean with a normal interval
#[derive(Debug, Clone)]
pub struct SeasonalForecaster {
    models: HashMap<Product, WeekdayProfile>,
    trained: bool,
    interval_z: f64,
}

impl SeasonalForecaster {
    pub fn new(interval_z: f64) -> Self {
        Self {
            models: HashMap::new(),
            trained: false,
            interval_z,
        }
    }

    /// Train from a history CSV
    pub fn from_csv(path: impl AsRef<Path>, interval_z: f64) -> Result<Self> {
        let records = read_history(path.as_ref())?;
        let mut forecaster = Self::new(interval_z);
        forecaster.train(&records);
        Ok(forecaster)
    }

    /// Fit one model per product present in the history. Returns the number
    /// of models.
    pub fn train(&mut self, records: &[SalesRecord]) -> usize {
        let mut by_product: HashMap<Product, Vec<&SalesRecord>> = HashMap::new();
        for record in records {
            by_product.entry(record.product).or_default().push(record);
        }

        self.models = by_product
            .into_iter()
            .filter_map(|(product, rows)| {
                tracing::debug!("Training model for {} on {} rows", product, rows.len());
                WeekdayProfile::fit(&rows).map(|profile| (product, profile))
            })
            .collect();
        self.trained = true;

        tracing::info!("Trained {} forecasting models", self.models.len());
        self.models.len()
    }

    fn forecast(&self, product: Product, horizon_days: u32) -> Result<Vec<ForecastPoint>> {
        if !self.trained {
            return Err(FreshCastError::NotTrained);
        }
        let profile = self
            .models
            .get(&product)
            .ok_or_else(|| FreshCastError::ModelNotFound(product.to_string()))?;
        if horizon_days == 0 {
            return Err(FreshCastError::InvalidInput(
                "horizon must be at least one day".to_string(),
            ));
        }

        let points = (1..=horizon_days as i64)
            .map(|offset| {
                let date = profile.last_date + Duration::days(offset);
                let day = date.weekday().num_days_from_monday() as usize;
                let spread = self.interval_z * profile.std_dev[day];
                let point_estimate = profile.mean[day].max(0.0);
                ForecastPoint {
                    date,
                    point_estimate,
                    lower_bound: (point_estimate - spread).max(0.0),
                    upper_bound: point_estimate + spread,
                }
            })
            .collect();

        Ok(points)
    }
}

impl Default for SeasonalForecaster {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_Z)
    }
}

#[async_trait]
impl ForecastEngine for SeasonalForecaster {
    async fn predict(&self, product: Product, horizon_days: u32) -> Result<Vec<ForecastPoint>> {
        self.forecast(product, horizon_days)
    }

    fn products(&self) -> Vec<Product> {
        Product::ALL
            .into_iter()
            .filter(|p| self.models.contains_key(p))
            .collect()
    }

    fn is_trained(&self) -> bool {
        self.trained
    }

    fn model_name(&self) -> &str {
        "seasonal-weekday"
    }
}
