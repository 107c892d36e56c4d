//! Order service implementation

use std::sync::Arc;

use common::error::{Error, Result, ErrorExt};
use common::model::{Order, OrderStatus};
use tracing::info;
use uuid::Uuid;

use crate::repository::{OrderRepository, InMemoryOrderRepository, PostgresOrderRepository};

/// Order service for managing customer orders
pub struct OrderService {
    /// Repository for order data
    repo: Arc<dyn OrderRepository>,
}

/// Repository Type
pub enum RepositoryType {
    /// In-memory repository
    InMemory,
    /// PostgreSQL repository
    Postgres(Option<String>),
}

impl OrderService {
    /// Create a new order service backed by an in-memory repository
    pub fn new() -> Self {
        Self {
            repo: Arc::new(InMemoryOrderRepository::new()),
        }
    }

    /// Create a new order service with a specific repository type
    pub async fn with_repository(repo_type: RepositoryType) -> Result<Self> {
        let repo: Arc<dyn OrderRepository> = match repo_type {
            RepositoryType::InMemory => {
                Arc::new(InMemoryOrderRepository::new())
            },
            RepositoryType::Postgres(database_url) => {
                Arc::new(PostgresOrderRepository::new(database_url).await?)
            }
        };

        Ok(Self { repo })
    }

    /// Create a new order service with a configuration
    pub async fn with_config(config: &crate::config::OrderServiceConfig) -> Result<Self> {
        let repo: Arc<dyn OrderRepository> = Arc::new(
            PostgresOrderRepository::with_config(config).await?
        );

        Ok(Self { repo })
    }

    /// Create a new order
    pub async fn create_order(&self, order: Order) -> Result<Order> {
        info!("Creating order for {}", order.buyer_email);

        validate_order(&order)?;

        self.repo.create_order(order).await
    }

    /// Get an order by ID
    pub async fn get_order(&self, id: Uuid) -> Result<Option<Order>> {
        self.repo.get_order(id).await
    }

    /// List all orders
    pub async fn list_orders(&self) -> Result<Vec<Order>> {
        self.repo.list_orders().await
    }

    /// Mark an order as completed
    pub async fn complete_order(&self, id: Uuid) -> Result<Order> {
        info!("Completing order: {}", id);
        self.repo.update_status(id, OrderStatus::Completed).await
    }

    /// Mark an order as cancelled
    pub async fn cancel_order(&self, id: Uuid) -> Result<Order> {
        info!("Cancelling order: {}", id);
        self.repo.update_status(id, OrderStatus::Cancelled).await
    }

    /// Delete an order by ID
    pub async fn delete_order(&self, id: Uuid) -> Result<()> {
        info!("Deleting order: {}", id);

        let removed = self.repo.delete_order(id).await
            .with_context(|| format!("Failed to delete order {}", id))?;

        if !removed {
            return Err(Error::OrderNotFound(id.to_string()));
        }

        Ok(())
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate an order before it reaches the repository
fn validate_order(order: &Order) -> Result<()> {
    if order.product_ids.is_empty() {
        return Err(Error::InvalidOrder("Order must reference at least one product".to_string()));
    }

    let email = order.buyer_email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(Error::InvalidOrder(format!(
            "Buyer email is not valid: {}",
            order.buyer_email
        )));
    }

    Ok(())
}
