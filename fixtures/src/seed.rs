//! Seed-file loading for fixture products
//!
//! Seed files are JSON arrays of product records. Records may omit the id,
//! price, and stock fields; missing values are filled in before the product
//! is created.

use std::path::Path;

use common::error::Result;
use common::model::Product;
use common::money::{precision, Price};
use rand::Rng;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

/// A product record as it appears in a seed file
#[derive(Debug, Clone, Deserialize)]
pub struct ProductSeed {
    /// Optional fixed ID; a fresh one is generated when absent
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Display name (required)
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Optional price; a random whole-dollar amount is used when absent
    #[serde(default)]
    pub price: Option<Price>,
    /// Optional stock; a random unit count is used when absent
    #[serde(default)]
    pub stock: Option<i32>,
}

impl ProductSeed {
    /// Turn the seed into a full product, filling missing fields
    ///
    /// A missing price becomes a random amount in 1..=100 whole dollars,
    /// a missing stock a random count in 1..=50 units. A seed without an id
    /// gets the freshly generated one from `Product::new`.
    pub fn into_product<R: Rng>(self, rng: &mut R) -> Product {
        // Seed files may carry more decimal places than prices use
        let price = precision::round_money(self.price.unwrap_or_else(|| {
            let dollars: i64 = rng.gen_range(1..=100);
            Decimal::from(dollars)
        }));
        let stock = self.stock.unwrap_or_else(|| rng.gen_range(1..=50));

        let mut product = Product::new(self.name, self.description, self.category, price, stock);
        if let Some(id) = self.id {
            product.id = id;
        }

        product
    }
}

/// Read and parse a seed file
pub async fn load_seeds(path: impl AsRef<Path>) -> Result<Vec<ProductSeed>> {
    let contents = tokio::fs::read_to_string(path.as_ref()).await?;
    let seeds = serde_json::from_str(&contents)?;
    Ok(seeds)
}
