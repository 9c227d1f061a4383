//! Rule-based intent classifier
//!
//! An ordered list of high-precision pattern rules is evaluated first; the
//! first rule that fires decides the query type. When none fires, keyword
//! hits against the data and knowledge vocabularies decide, and a tie falls
//! through to [`QueryType::GeneralQuestion`].

use super::{QueryType, Vocabulary};
use crate::error::Result;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NEEDS_RE: Regex = Regex::new(r"what.*(do|should).*(we|i).*(need|order)").unwrap();
    static ref WHERE_TO_BUY_RE: Regex = Regex::new(r"where.*(buy|find|purchase|get)").unwrap();
}

/// Confidence when the data vocabulary outscores the knowledge vocabulary
pub const DATA_FALLBACK_CONFIDENCE: f64 = 0.60;

/// Confidence when the knowledge vocabulary outscores the data vocabulary
pub const KNOWLEDGE_FALLBACK_CONFIDENCE: f64 = 0.60;

/// Confidence of the tie result
pub const TIE_CONFIDENCE: f64 = 0.50;

/// Classifier output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub query_type: QueryType,

    /// Confidence (0.0 - 1.0)
    pub confidence: f64,

    /// Name of the pattern rule that fired, `None` for keyword scoring
    pub rule: Option<&'static str>,
}

/// A single pattern rule
pub struct Rule {
    pub name: &'static str,
    pub confidence: f64,
    matcher: fn(&Classifier, &str) -> Option<QueryType>,
}

impl Rule {
    /// Evaluate against lower-cased input
    pub fn apply(&self, classifier: &Classifier, lowered: &str) -> Option<Classification> {
        (self.matcher)(classifier, lowered).map(|query_type| Classification {
            query_type,
            confidence: self.confidence,
            rule: Some(self.name),
        })
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("confidence", &self.confidence)
            .finish()
    }
}

/// Questions opening with this are advice requests even when they mention
/// stock vocabulary
const ADVICE_PREFIX: &str = "should i";

/// Pattern rules in evaluation order. First match wins.
pub static RULES: [Rule; 5] = [
    Rule {
        name: "quantity",
        confidence: 0.90,
        matcher: quantity_rule,
    },
    Rule {
        name: "needs",
        confidence: 0.85,
        matcher: needs_rule,
    },
    Rule {
        name: "stock",
        confidence: 0.80,
        matcher: stock_rule,
    },
    Rule {
        name: "where-to-buy",
        confidence: 0.90,
        matcher: where_to_buy_rule,
    },
    Rule {
        name: "advice",
        confidence: 0.85,
        matcher: advice_rule,
    },
];

fn quantity_rule(classifier: &Classifier, lowered: &str) -> Option<QueryType> {
    classifier
        .quantity_re
        .as_ref()
        .filter(|re| re.is_match(lowered))
        .map(|_| QueryType::ForecastDemand)
}

fn needs_rule(classifier: &Classifier, lowered: &str) -> Option<QueryType> {
    if !NEEDS_RE.is_match(lowered) {
        return None;
    }
    if classifier.vocabulary.mentions_ingredient(lowered) {
        Some(QueryType::RawMaterials)
    } else {
        Some(QueryType::InventoryNeeds)
    }
}

fn stock_rule(classifier: &Classifier, lowered: &str) -> Option<QueryType> {
    if lowered.starts_with(ADVICE_PREFIX) {
        return None;
    }
    classifier
        .vocabulary
        .mentions_stock(lowered)
        .then_some(QueryType::InventoryNeeds)
}

fn where_to_buy_rule(_: &Classifier, lowered: &str) -> Option<QueryType> {
    WHERE_TO_BUY_RE
        .is_match(lowered)
        .then_some(QueryType::SupplierInfo)
}

fn advice_rule(_: &Classifier, lowered: &str) -> Option<QueryType> {
    (lowered.starts_with(ADVICE_PREFIX) || lowered.contains("recommend"))
        .then_some(QueryType::BusinessAdvice)
}

/// Intent classifier over an injected vocabulary
#[derive(Debug, Clone)]
pub struct Classifier {
    vocabulary: Vocabulary,
    /// `None` when the vocabulary has nothing to quantify
    quantity_re: Option<Regex>,
}

impl Classifier {
    /// Build a classifier, compiling the quantity pattern from the vocabulary
    pub fn new(vocabulary: Vocabulary) -> Result<Self> {
        let subjects: Vec<String> = vocabulary
            .quantity_subjects
            .iter()
            .map(|s| regex::escape(&s.to_lowercase()))
            .collect();
        let quantity_re = if subjects.is_empty() {
            None
        } else {
            Some(Regex::new(&format!(
                r"how (many|much).*?({})",
                subjects.join("|")
            ))?)
        };

        Ok(Self {
            vocabulary,
            quantity_re,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Classify a question. Any input, including the empty string, yields a
    /// result.
    pub fn classify(&self, question: &str) -> Classification {
        let lowered = question.to_lowercase();

        if let Some(hit) = RULES.iter().find_map(|rule| rule.apply(self, &lowered)) {
            return hit;
        }

        self.score_keywords(&lowered)
    }

    /// Fallback: compare keyword hits of the two vocabularies
    fn score_keywords(&self, lowered: &str) -> Classification {
        let data = self.vocabulary.data_score(lowered);
        let knowledge = self.vocabulary.knowledge_score(lowered);

        let (query_type, confidence) = if data > knowledge {
            (QueryType::ForecastDemand, DATA_FALLBACK_CONFIDENCE)
        } else if knowledge > data {
            (QueryType::BusinessAdvice, KNOWLEDGE_FALLBACK_CONFIDENCE)
        } else {
            (QueryType::GeneralQuestion, TIE_CONFIDENCE)
        };

        Classification {
            query_type,
            confidence,
            rule: None,
        }
    }
}
