//! Order models and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order has been received but not yet fulfilled
    Pending,
    /// Order has been fulfilled
    Completed,
    /// Order has been cancelled
    Cancelled,
}

impl OrderStatus {
    /// Lowercase name used by the orders table status column
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(crate::error::Error::ValidationError(format!(
                "Unknown order status: {}",
                other
            ))),
        }
    }
}

/// Order model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID
    pub id: Uuid,
    /// Buyer's email address
    pub buyer_email: String,
    /// Products in the order; a product ID may appear more than once
    pub product_ids: Vec<Uuid>,
    /// Current status
    pub status: OrderStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Create a new pending order with a fresh ID and current timestamps
    pub fn new(buyer_email: String, product_ids: Vec<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            buyer_email,
            product_ids,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Number of line items (repeated products count once each)
    pub fn item_count(&self) -> usize {
        self.product_ids.len()
    }

    /// Check if the order is still open (not completed or cancelled)
    pub fn is_open(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}
