//! Repository for order data

use async_trait::async_trait;
use common::db::models::DbOrder;
use common::error::{Error, Result};
use common::model::{Order, OrderStatus};
use dashmap::DashMap;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::{debug, info};
use uuid::Uuid;

/// Order repository trait defining the interface for order storage
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Create a new order
    async fn create_order(&self, order: Order) -> Result<Order>;

    /// Get an order by ID
    async fn get_order(&self, id: Uuid) -> Result<Option<Order>>;

    /// List all orders
    async fn list_orders(&self) -> Result<Vec<Order>>;

    /// Update the status of an order
    async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<Order>;

    /// Delete an order by ID, returning whether a record was removed
    async fn delete_order(&self, id: Uuid) -> Result<bool>;
}

/// In-memory repository for order data
pub struct InMemoryOrderRepository {
    /// Orders by ID
    pub orders: DashMap<Uuid, Order>,
}

impl InMemoryOrderRepository {
    /// Create a new in-memory order repository
    pub fn new() -> Self {
        Self {
            orders: DashMap::new(),
        }
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create_order(&self, order: Order) -> Result<Order> {
        self.orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn get_order(&self, id: Uuid) -> Result<Option<Order>> {
        Ok(self.orders.get(&id).map(|o| o.clone()))
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        Ok(self.orders.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<Order> {
        let mut entry = self.orders.get_mut(&id)
            .ok_or_else(|| Error::OrderNotFound(id.to_string()))?;

        entry.status = status;
        entry.updated_at = chrono::Utc::now();
        Ok(entry.clone())
    }

    async fn delete_order(&self, id: Uuid) -> Result<bool> {
        Ok(self.orders.remove(&id).is_some())
    }
}

/// PostgreSQL repository for order data
pub struct PostgresOrderRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PostgresOrderRepository {
    /// Create a new PostgreSQL order repository
    pub async fn new(database_url: Option<String>) -> Result<Self> {
        let url = match database_url {
            Some(url) => url,
            None => std::env::var("DATABASE_URL")
                .map_err(|_| Error::ConfigurationError("DATABASE_URL must be set".to_string()))?,
        };

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await
            .map_err(Error::Database)?;

        info!("Connected to PostgreSQL database");

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL order repository with configuration
    pub async fn with_config(config: &crate::config::OrderServiceConfig) -> Result<Self> {
        info!("Connecting to PostgreSQL database with pool size: {}", config.db_pool_size);

        let pool = PgPoolOptions::new()
            .max_connections(config.db_pool_size)
            .connect(&config.database_url)
            .await
            .map_err(Error::Database)?;

        info!("Connected to PostgreSQL database");

        Ok(Self { pool })
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn create_order(&self, order: Order) -> Result<Order> {
        debug!("Creating order in database: {}", order.id);

        sqlx::query(
            "INSERT INTO orders (id, buyer_email, product_ids, status)
             VALUES ($1, $2, $3, $4)"
        )
        .bind(order.id)
        .bind(&order.buyer_email)
        .bind(&order.product_ids)
        .bind(order.status.as_str())
        .execute(&self.pool)
        .await?;

        Ok(order)
    }

    async fn get_order(&self, id: Uuid) -> Result<Option<Order>> {
        debug!("Getting order from database: {}", id);

        let row = sqlx::query_as::<_, DbOrder>(
            "SELECT id, buyer_email, product_ids, status, created_at, updated_at
             FROM orders
             WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Order::try_from).transpose()
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        debug!("Listing all orders from database");

        let rows = sqlx::query_as::<_, DbOrder>(
            "SELECT id, buyer_email, product_ids, status, created_at, updated_at
             FROM orders
             ORDER BY created_at"
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Order::try_from).collect()
    }

    async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<Order> {
        debug!("Updating order status in database: {} -> {}", id, status.as_str());

        let result = sqlx::query(
            "UPDATE orders SET status = $2, updated_at = now() WHERE id = $1"
        )
        .bind(id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::OrderNotFound(id.to_string()));
        }

        self.get_order(id).await?
            .ok_or_else(|| Error::OrderNotFound(id.to_string()))
    }

    async fn delete_order(&self, id: Uuid) -> Result<bool> {
        debug!("Deleting order from database: {}", id);

        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
