//! Keyword tables used by the classifier

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Named group of keywords
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordGroup {
    pub category: String,
    pub keywords: Vec<String>,
}

impl KeywordGroup {
    pub fn new(category: &str, keywords: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Number of keywords contained in the (lower-cased) text
    pub fn hits(&self, lowered: &str) -> usize {
        self.keywords
            .iter()
            .filter(|keyword| lowered.contains(keyword.as_str()))
            .count()
    }
}

/// Read-only vocabulary consulted by the classifier.
///
/// All entries are lower case. A keyword listed in several groups is counted
/// once per group during fallback scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Forecast, demand, inventory, materials, quantity and time terms
    pub data_keywords: Vec<KeywordGroup>,

    /// Supplier, advice, quality and recipe-substitution terms
    pub knowledge_keywords: Vec<KeywordGroup>,

    /// Things a "how many / how much" question can be about
    pub quantity_subjects: Vec<String>,

    /// Words marking a needs question as a raw-material question
    pub ingredient_words: Vec<String>,

    /// Production, inventory and stock terms
    pub stock_words: Vec<String>,
}

impl Vocabulary {
    /// Vocabulary for the bakery product line
    pub fn bakery() -> Self {
        let ingredient_words: Vec<String> = ["ingredient", "material", "flour", "egg"]
            .iter()
            .map(|w| w.to_string())
            .collect();

        let quantity_subjects = Product::ALL
            .iter()
            .flat_map(|product| product.aliases().iter().map(|a| a.to_string()))
            .chain(ingredient_words.iter().cloned())
            .collect();

        Self {
            data_keywords: vec![
                KeywordGroup::new(
                    "forecast",
                    &["forecast", "predict", "prediction", "expect", "anticipated"],
                ),
                KeywordGroup::new("demand", &["demand", "need", "sales", "sell", "sold"]),
                KeywordGroup::new(
                    "inventory",
                    &["inventory", "stock", "produce", "production", "make", "bake"],
                ),
                KeywordGroup::new(
                    "materials",
                    &["material", "ingredient", "flour", "eggs", "butter", "sugar"],
                ),
                KeywordGroup::new("quantity", &["how many", "how much", "quantity", "amount"]),
                KeywordGroup::new(
                    "time",
                    &["today", "tomorrow", "next week", "this week", "next", "week", "day"],
                ),
            ],
            knowledge_keywords: vec![
                KeywordGroup::new(
                    "supplier",
                    &["supplier", "buy", "purchase", "vendor", "where", "cheap", "price"],
                ),
                KeywordGroup::new(
                    "advice",
                    &["should i", "recommend", "suggest", "advice", "tips", "help", "how to"],
                ),
                KeywordGroup::new(
                    "quality",
                    &["quality", "fresh", "store", "storage", "shelf life"],
                ),
                KeywordGroup::new("recipe", &["recipe", "substitute", "alternative", "replace"]),
            ],
            quantity_subjects,
            ingredient_words,
            stock_words: ["production", "inventory", "stock"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }

    /// Fallback score against the data/operations vocabulary
    pub fn data_score(&self, lowered: &str) -> usize {
        self.data_keywords.iter().map(|g| g.hits(lowered)).sum()
    }

    /// Fallback score against the knowledge/advice vocabulary
    pub fn knowledge_score(&self, lowered: &str) -> usize {
        self.knowledge_keywords.iter().map(|g| g.hits(lowered)).sum()
    }

    pub fn mentions_ingredient(&self, lowered: &str) -> bool {
        self.ingredient_words.iter().any(|w| lowered.contains(w.as_str()))
    }

    pub fn mentions_stock(&self, lowered: &str) -> bool {
        self.stock_words.iter().any(|w| lowered.contains(w.as_str()))
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::bakery()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_keywords_count_per_group() {
        let vocab = Vocabulary::bakery();
        // "material" (materials) and "next", "next week", "week" (time)
        assert_eq!(vocab.data_score("material for next week"), 4);
    }

    #[test]
    fn test_knowledge_score() {
        let vocab = Vocabulary::bakery();
        // "supplier", "cheap", "quality"
        assert_eq!(vocab.knowledge_score("a cheap supplier with quality"), 3);
        assert_eq!(vocab.knowledge_score(""), 0);
    }

    #[test]
    fn test_quantity_subjects_cover_products_and_ingredients() {
        let vocab = Vocabulary::bakery();
        assert!(vocab.quantity_subjects.contains(&"croissant".to_string()));
        assert!(vocab.quantity_subjects.contains(&"cinnamon roll".to_string()));
        assert!(vocab.quantity_subjects.contains(&"ingredient".to_string()));
    }
}
