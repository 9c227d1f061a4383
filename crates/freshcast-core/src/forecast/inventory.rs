//! Production recommendations from forecasts

use super::ForecastPoint;
use crate::catalog::Product;
use crate::error::{FreshCastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Share of the forecast uncertainty covered by safety stock, in (0, 1]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ServiceLevel(f64);

impl ServiceLevel {
    pub fn new(value: f64) -> Result<Self> {
        if value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(FreshCastError::Config(format!(
                "service level must be in (0, 1], got {}",
                value
            )))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for ServiceLevel {
    fn default() -> Self {
        Self(0.95)
    }
}

impl TryFrom<f64> for ServiceLevel {
    type Error = FreshCastError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ServiceLevel> for f64 {
    fn from(level: ServiceLevel) -> Self {
        level.0
    }
}

/// Production recommendation for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecommendation {
    pub date: NaiveDate,
    pub expected_demand: u64,
    pub recommended_production: u64,
}

/// Per-product totals over a horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub product: Product,
    pub total_demand: u64,
    pub total_production: u64,
    pub daily_average: f64,
}

/// One recommendation per forecast point, order preserved.
///
/// Production is expected demand plus the service-level share of the gap to
/// the upper bound, so it never falls below expected demand.
pub fn compute_inventory(
    points: &[ForecastPoint],
    service_level: ServiceLevel,
) -> Vec<InventoryRecommendation> {
    points
        .iter()
        .map(|point| {
            let estimate = point.point_estimate.max(0.0);
            let uncertainty = (point.upper_bound - estimate).max(0.0);
            InventoryRecommendation {
                date: point.date,
                expected_demand: estimate.round() as u64,
                recommended_production: (estimate + uncertainty * service_level.value()).round()
                    as u64,
            }
        })
        .collect()
}

/// Totals and daily average for a product's recommendations
pub fn summarize(product: Product, recommendations: &[InventoryRecommendation]) -> ProductSummary {
    let total_demand: u64 = recommendations.iter().map(|r| r.expected_demand).sum();
    let total_production: u64 = recommendations
        .iter()
        .map(|r| r.recommended_production)
        .sum();
    let daily_average = if recommendations.is_empty() {
        0.0
    } else {
        total_demand as f64 / recommendations.len() as f64
    };

    ProductSummary {
        product,
        total_demand,
        total_production,
        daily_average,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(day: u32, estimate: f64, lower: f64, upper: f64) -> ForecastPoint {
        ForecastPoint {
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            point_estimate: estimate,
            lower_bound: lower,
            upper_bound: upper,
        }
    }

    #[test]
    fn test_service_level_bounds() {
        assert!(ServiceLevel::new(0.0).is_err());
        assert!(ServiceLevel::new(1.2).is_err());
        assert!(ServiceLevel::new(f64::NAN).is_err());
        assert_eq!(ServiceLevel::new(1.0).unwrap().value(), 1.0);
        assert_eq!(ServiceLevel::default().value(), 0.95);
    }

    #[test]
    fn test_compute_inventory() {
        let points = vec![point(1, 40.2, 30.0, 50.2), point(2, 10.6, 5.0, 14.6)];
        let recs = compute_inventory(&points, ServiceLevel::default());

        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].date, points[0].date);
        assert_eq!(recs[0].expected_demand, 40);
        // 40.2 + 10 * 0.95 = 49.7
        assert_eq!(recs[0].recommended_production, 50);
        assert_eq!(recs[1].expected_demand, 11);
        // 10.6 + 4 * 0.95 = 14.4
        assert_eq!(recs[1].recommended_production, 14);
    }

    #[test]
    fn test_production_never_below_demand() {
        // Upper bound below the estimate contributes no safety stock
        let points = vec![point(1, 20.0, 10.0, 15.0)];
        let recs = compute_inventory(&points, ServiceLevel::default());
        assert_eq!(recs[0].recommended_production, recs[0].expected_demand);
    }

    #[test]
    fn test_empty_forecast() {
        assert!(compute_inventory(&[], ServiceLevel::default()).is_empty());
        let summary = summarize(Product::Muffin, &[]);
        assert_eq!(summary.total_demand, 0);
        assert_eq!(summary.daily_average, 0.0);
    }

    #[test]
    fn test_summarize() {
        let points = vec![
            point(1, 30.0, 20.0, 40.0),
            point(2, 34.0, 24.0, 44.0),
        ];
        let recs = compute_inventory(&points, ServiceLevel::new(0.5).unwrap());
        let summary = summarize(Product::Croissant, &recs);
        assert_eq!(summary.total_demand, 64);
        assert_eq!(summary.total_production, 35 + 39);
        assert_eq!(summary.daily_average, 32.0);
    }
}
