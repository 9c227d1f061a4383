//! Raw-material planning from production totals

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kilograms of each material per 100 units of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeTable(BTreeMap<Product, BTreeMap<String, f64>>);

impl RecipeTable {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Recipes for the bakery product line
    pub fn bakery() -> Self {
        let mut table = Self::new();
        table.insert(Product::Croissant, &[("flour", 12.0), ("butter", 8.0), ("eggs", 15.0)]);
        table.insert(Product::Baguette, &[("flour", 15.0), ("butter", 0.0), ("eggs", 0.0)]);
        table.insert(Product::Sourdough, &[("flour", 18.0), ("butter", 2.0), ("eggs", 0.0)]);
        table.insert(
            Product::Sandwich,
            &[
                ("flour", 8.0),
                ("butter", 3.0),
                ("eggs", 10.0),
                ("meat", 5.0),
                ("vegetables", 3.0),
            ],
        );
        table.insert(
            Product::Donut,
            &[("flour", 10.0), ("butter", 5.0), ("eggs", 12.0), ("sugar", 6.0)],
        );
        table.insert(
            Product::Muffin,
            &[("flour", 11.0), ("butter", 4.0), ("eggs", 10.0), ("sugar", 5.0)],
        );
        table.insert(
            Product::CinnamonRoll,
            &[("flour", 12.0), ("butter", 6.0), ("eggs", 8.0), ("sugar", 7.0)],
        );
        table
    }

    /// Set the recipe for a product, replacing any previous one
    pub fn insert(&mut self, product: Product, materials: &[(&str, f64)]) {
        let recipe = materials
            .iter()
            .map(|(name, kg)| (name.to_string(), *kg))
            .collect();
        self.0.insert(product, recipe);
    }

    pub fn recipe(&self, product: Product) -> Option<&BTreeMap<String, f64>> {
        self.0.get(&product)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for RecipeTable {
    fn default() -> Self {
        Self::bakery()
    }
}

/// Total kilograms per material
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialRequirements(BTreeMap<String, f64>);

/// Presentation row of a materials listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialQuantity {
    pub material: String,
    pub quantity_kg: f64,
}

impl MaterialRequirements {
    /// Unrounded total for a material
    pub fn get(&self, material: &str) -> Option<f64> {
        self.0.get(material).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, kg)| (name.as_str(), *kg))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rows rounded to 2 decimals, largest quantity first (ties by name)
    pub fn listing(&self) -> Vec<MaterialQuantity> {
        let mut rows: Vec<MaterialQuantity> = self
            .0
            .iter()
            .map(|(material, kg)| MaterialQuantity {
                material: material.clone(),
                quantity_kg: (kg * 100.0).round() / 100.0,
            })
            .collect();
        rows.sort_by(|a, b| {
            b.quantity_kg
                .total_cmp(&a.quantity_kg)
                .then_with(|| a.material.cmp(&b.material))
        });
        rows
    }
}

/// Sum raw-material needs over all products.
///
/// Products are accumulated in catalog order whatever the input order, so the
/// result is identical for any permutation of the input. Products without a
/// recipe contribute nothing.
pub fn compute_materials<I>(production_totals: I, recipes: &RecipeTable) -> MaterialRequirements
where
    I: IntoIterator<Item = (Product, u64)>,
{
    let mut by_product: BTreeMap<Product, u64> = BTreeMap::new();
    for (product, units) in production_totals {
        *by_product.entry(product).or_insert(0) += units;
    }

    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for (product, units) in by_product {
        let Some(recipe) = recipes.recipe(product) else {
            tracing::debug!("No recipe for {}, skipping", product);
            continue;
        };
        for (material, kg_per_100) in recipe {
            *totals.entry(material.clone()).or_insert(0.0) += (units as f64 / 100.0) * kg_per_100;
        }
    }

    MaterialRequirements(totals)
}
