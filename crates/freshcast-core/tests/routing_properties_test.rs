//! Property tests for question routing and material planning

use freshcast_core::forecast::DEFAULT_INTERVAL_Z;
use freshcast_core::router::extract_horizon;
use freshcast_core::{
    compute_inventory, compute_materials, ForecastPoint, Product, QueryRouter, QueryType,
    RecipeTable, ServiceLevel,
};
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

fn any_product() -> impl Strategy<Value = Product> {
    prop::sample::select(Product::ALL.to_vec())
}

fn question_words() -> impl Strategy<Value = String> {
    let words = vec![
        "how", "many", "much", "croissants", "donut", "cinnamon roll", "what", "do", "we",
        "should", "i", "need", "order", "flour", "eggs", "stock", "production", "where", "buy",
        "recommend", "tomorrow", "next", "week", "month", "3", "days", "0", "weeks", "tips",
        "price", "quality", "recipe", "hello", "?",
    ];
    prop::collection::vec(prop::sample::select(words), 0..12).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn confidence_is_a_probability(question in ".{0,200}") {
        let router = QueryRouter::bakery().unwrap();
        let decision = router.route(&question);
        prop_assert!((0.0..=1.0).contains(&decision.confidence));
        prop_assert!(decision.use_forecast_engine || decision.use_assistant);
    }

    #[test]
    fn general_question_only_from_tie(question in question_words()) {
        let router = QueryRouter::bakery().unwrap();
        let decision = router.route(&question);
        if decision.query_type == QueryType::GeneralQuestion {
            prop_assert_eq!(decision.confidence, 0.50);
        }
    }

    #[test]
    fn horizon_is_positive(question in question_words()) {
        let router = QueryRouter::bakery().unwrap();
        let decision = router.route(&question);
        prop_assert!(decision.horizon_days >= 1);
    }

    #[test]
    fn counted_horizon_is_not_capped(count in 1u32..2_000, unit in 0usize..3) {
        let (word, days) = [("days", 1), ("weeks", 7), ("months", 30)][unit];
        let question = format!("How many muffins for the coming {} {}?", count, word);
        prop_assert_eq!(extract_horizon(&question), count * days);
    }

    #[test]
    fn routing_is_repeatable(question in question_words()) {
        let router = QueryRouter::bakery().unwrap();
        prop_assert_eq!(router.route(&question), router.route(&question));
    }

    #[test]
    fn inventory_preserves_length_and_order(
        estimates in prop::collection::vec((0.0f64..500.0, 0.0f64..100.0), 0..30),
        level in 0.01f64..=1.0,
    ) {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let points: Vec<ForecastPoint> = estimates
            .iter()
            .enumerate()
            .map(|(i, (estimate, spread))| ForecastPoint {
                date: start + Duration::days(i as i64),
                point_estimate: *estimate,
                lower_bound: (estimate - spread).max(0.0),
                upper_bound: estimate + spread,
            })
            .collect();

        let recs = compute_inventory(&points, ServiceLevel::new(level).unwrap());
        prop_assert_eq!(recs.len(), points.len());
        for (rec, point) in recs.iter().zip(&points) {
            prop_assert_eq!(rec.date, point.date);
            prop_assert!(rec.recommended_production >= rec.expected_demand);
        }
    }

    #[test]
    fn materials_ignore_input_order(
        (totals, shuffled) in prop::collection::vec((any_product(), 0u64..10_000), 0..10)
            .prop_flat_map(|totals| (Just(totals.clone()), Just(totals).prop_shuffle())),
    ) {
        let recipes = RecipeTable::bakery();
        prop_assert_eq!(
            compute_materials(totals, &recipes),
            compute_materials(shuffled, &recipes)
        );
    }
}

#[test]
fn default_interval_is_95_percent() {
    assert_eq!(DEFAULT_INTERVAL_Z, 1.96);
}
