//! Repository for product data

use async_trait::async_trait;
use common::db::models::DbProduct;
use common::error::{Error, Result};
use common::model::Product;
use dashmap::DashMap;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::{debug, info};
use uuid::Uuid;

/// Product repository trait defining the interface for catalog storage
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product
    async fn create_product(&self, product: Product) -> Result<Product>;

    /// Get a product by ID
    async fn get_product(&self, id: Uuid) -> Result<Option<Product>>;

    /// List all products
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Update an existing product
    async fn update_product(&self, product: Product) -> Result<Product>;

    /// Delete a product by ID, returning whether a record was removed
    async fn delete_product(&self, id: Uuid) -> Result<bool>;
}

/// In-memory repository for product data
pub struct InMemoryProductRepository {
    /// Products by ID
    pub products: DashMap<Uuid, Product>,
}

impl InMemoryProductRepository {
    /// Create a new in-memory product repository
    pub fn new() -> Self {
        Self {
            products: DashMap::new(),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create_product(&self, product: Product) -> Result<Product> {
        self.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn get_product(&self, id: Uuid) -> Result<Option<Product>> {
        Ok(self.products.get(&id).map(|p| p.clone()))
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn update_product(&self, product: Product) -> Result<Product> {
        if !self.products.contains_key(&product.id) {
            return Err(Error::ProductNotFound(product.id.to_string()));
        }

        self.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn delete_product(&self, id: Uuid) -> Result<bool> {
        Ok(self.products.remove(&id).is_some())
    }
}

/// PostgreSQL repository for product data
pub struct PostgresProductRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PostgresProductRepository {
    /// Create a new PostgreSQL product repository
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

    /// Create a new PostgreSQL product repository with configuration
    pub async fn with_config(config: &crate::config::CatalogServiceConfig) -> Result<Self> {
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
impl ProductRepository for PostgresProductRepository {
    async fn create_product(&self, product: Product) -> Result<Product> {
        debug!("Creating product in database: {}", product.id);

        sqlx::query(
            "INSERT INTO products (id, name, description, category, price, stock)
             VALUES ($1, $2, $3, $4, $5, $6)"
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.category)
        .bind(product.price.to_string())
        .bind(product.stock)
        .execute(&self.pool)
        .await?;

        Ok(product)
    }

    async fn get_product(&self, id: Uuid) -> Result<Option<Product>> {
        debug!("Getting product from database: {}", id);

        let row = sqlx::query_as::<_, DbProduct>(
            "SELECT id, name, description, category, price, stock, created_at, updated_at
             FROM products
             WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Product::try_from).transpose()
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        debug!("Listing all products from database");

        let rows = sqlx::query_as::<_, DbProduct>(
            "SELECT id, name, description, category, price, stock, created_at, updated_at
             FROM products
             ORDER BY created_at"
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn update_product(&self, product: Product) -> Result<Product> {
        debug!("Updating product in database: {}", product.id);

        let result = sqlx::query(
            "UPDATE products
             SET name = $2, description = $3, category = $4, price = $5, stock = $6,
                 updated_at = now()
             WHERE id = $1"
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.category)
        .bind(product.price.to_string())
        .bind(product.stock)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::ProductNotFound(product.id.to_string()));
        }

        Ok(product)
    }

    async fn delete_product(&self, id: Uuid) -> Result<bool> {
        debug!("Deleting product from database: {}", id);

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
