//! Product catalog
//!
//! The bakery sells a fixed, closed set of products. Canonical names match the
//! product column of the sales history files.

use crate::error::{FreshCastError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product sold by the bakery
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Product {
    Croissant,
    Baguette,
    Sourdough,
    Sandwich,
    Donut,
    Muffin,
    CinnamonRoll,
}

impl Product {
    /// All products in extraction order
    pub const ALL: [Product; 7] = [
        Product::Croissant,
        Product::Baguette,
        Product::Sourdough,
        Product::Sandwich,
        Product::Donut,
        Product::Muffin,
        Product::CinnamonRoll,
    ];

    /// Canonical name as it appears in sales history
    pub fn as_str(&self) -> &'static str {
        match self {
            Product::Croissant => "Croissant",
            Product::Baguette => "Baguette",
            Product::Sourdough => "Sourdough",
            Product::Sandwich => "Sandwich",
            Product::Donut => "Donut",
            Product::Muffin => "Muffin",
            Product::CinnamonRoll => "Cinnamon_Roll",
        }
    }

    /// Human-readable name for answers
    pub fn display_name(&self) -> &'static str {
        match self {
            Product::CinnamonRoll => "Cinnamon Roll",
            other => other.as_str(),
        }
    }

    /// Lower-case spellings matched inside free text.
    ///
    /// Singular stems, so plurals ("croissants") match too.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Product::Croissant => &["croissant"],
            Product::Baguette => &["baguette"],
            Product::Sourdough => &["sourdough"],
            Product::Sandwich => &["sandwich"],
            Product::Donut => &["donut"],
            Product::Muffin => &["muffin"],
            Product::CinnamonRoll => &[
                "cinnamon roll",
                "cinnamon_roll",
                "cinnamon-roll",
                "cinnamonroll",
            ],
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Product {
    type Err = FreshCastError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        Product::ALL
            .into_iter()
            .find(|product| product.aliases().contains(&normalized.as_str()))
            .ok_or_else(|| FreshCastError::UnknownProduct(s.to_string()))
    }
}

impl TryFrom<String> for Product {
    type Error = FreshCastError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Product> for String {
    fn from(product: Product) -> Self {
        product.as_str().to_string()
    }
}
