use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::Error;
use crate::model::{Order, OrderStatus, Product};

/// Database model for the products table
///
/// Prices are stored as text and parsed into Decimal at the edge.
#[derive(Debug, Clone, FromRow)]
pub struct DbProduct {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: String,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<DbProduct> for Product {
    type Error = Error;

    fn try_from(row: DbProduct) -> Result<Self, Self::Error> {
        let price = Decimal::from_str(&row.price)
            .map_err(|e| Error::Internal(format!("Invalid price format: {}", e)))?;

        Ok(Product {
            id: row.id,
            name: row.name,
            description: row.description,
            category: row.category,
            price,
            stock: row.stock,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Database model for the orders table
///
/// Product references are stored inline as a UUID array; the status column
/// holds the OrderStatus name in lowercase.
#[derive(Debug, Clone, FromRow)]
pub struct DbOrder {
    pub id: Uuid,
    pub buyer_email: String,
    pub product_ids: Vec<Uuid>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<DbOrder> for Order {
    type Error = Error;

    fn try_from(row: DbOrder) -> Result<Self, Self::Error> {
        let status = OrderStatus::from_str(&row.status)?;

        Ok(Order {
            id: row.id,
            buyer_email: row.buyer_email,
            product_ids: row.product_ids,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
