//! Product and time-horizon extraction

use crate::catalog::Product;
use crate::DEFAULT_HORIZON_DAYS;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PERIOD_RE: Regex = Regex::new(r"([0-9]+)\s*(day|week|month)").unwrap();
}

/// First product (in catalog order) mentioned in the question
pub fn extract_product(question: &str) -> Option<Product> {
    let lowered = question.to_lowercase();
    Product::ALL.into_iter().find(|product| {
        product
            .aliases()
            .iter()
            .any(|alias| lowered.contains(alias))
    })
}

/// Horizon in days, at least one. Counts too large for `u32` saturate.
pub fn extract_horizon(question: &str) -> u32 {
    let lowered = question.to_lowercase();

    if lowered.contains("today") || lowered.contains("tomorrow") {
        return 1;
    }
    if lowered.contains("next week") || lowered.contains("this week") {
        return 7;
    }
    if lowered.contains("next month") {
        return 30;
    }

    let Some(caps) = PERIOD_RE.captures(&lowered) else {
        return DEFAULT_HORIZON_DAYS;
    };

    // Digits only, so a parse failure means overflow
    let count = caps[1].parse::<u32>().unwrap_or(u32::MAX);
    let unit_days = match &caps[2] {
        "week" => 7,
        "month" => 30,
        _ => 1,
    };

    count.saturating_mul(unit_days).max(1)
}
