//! Product models and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Price;

/// Product model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Optional long-form description
    pub description: Option<String>,
    /// Optional category slug (e.g. "accessories")
    pub category: Option<String>,
    /// Unit price
    pub price: Price,
    /// Units currently in stock
    pub stock: i32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product with a fresh ID and current timestamps
    pub fn new(
        name: String,
        description: Option<String>,
        category: Option<String>,
        price: Price,
        stock: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            category,
            price,
            stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the product has any units left
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}
