//! Catalog service implementation

use std::sync::Arc;

use common::error::{Error, Result, ErrorExt};
use common::model::Product;
use common::money::Price;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::repository::{ProductRepository, InMemoryProductRepository, PostgresProductRepository};

/// Catalog service for managing the product inventory
pub struct CatalogService {
    /// Repository for product data
    repo: Arc<dyn ProductRepository>,
}

/// Repository Type
pub enum RepositoryType {
    /// In-memory repository
    InMemory,
    /// PostgreSQL repository
    Postgres(Option<String>),
}

impl CatalogService {
    /// Create a new catalog service backed by an in-memory repository
    pub fn new() -> Self {
        Self {
            repo: Arc::new(InMemoryProductRepository::new()),
        }
    }

    /// Create a new catalog service with a specific repository type
    pub async fn with_repository(repo_type: RepositoryType) -> Result<Self> {
        let repo: Arc<dyn ProductRepository> = match repo_type {
            RepositoryType::InMemory => {
                Arc::new(InMemoryProductRepository::new())
            },
            RepositoryType::Postgres(database_url) => {
                Arc::new(PostgresProductRepository::new(database_url).await?)
            }
        };

        Ok(Self { repo })
    }

    /// Create a new catalog service with a configuration
    pub async fn with_config(config: &crate::config::CatalogServiceConfig) -> Result<Self> {
        let repo: Arc<dyn ProductRepository> = Arc::new(
            PostgresProductRepository::with_config(config).await?
        );

        Ok(Self { repo })
    }

    /// Create a new product
    pub async fn create_product(&self, product: Product) -> Result<Product> {
        info!("Creating product: {}", product.name);

        validate_product(&product)?;

        self.repo.create_product(product).await
    }

    /// Get a product by ID
    pub async fn get_product(&self, id: Uuid) -> Result<Option<Product>> {
        self.repo.get_product(id).await
    }

    /// List all products in the catalog
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        self.repo.list_products().await
    }

    /// Update an existing product
    pub async fn update_product(&self, product: Product) -> Result<Product> {
        info!("Updating product: {}", product.id);

        validate_product(&product)?;

        self.repo.update_product(product).await
    }

    /// Change the price of an existing product
    pub async fn update_price(&self, id: Uuid, price: Price) -> Result<Product> {
        let mut product = self.repo.get_product(id).await
            .with_context(|| format!("Failed to retrieve product {}", id))?
            .ok_or_else(|| Error::ProductNotFound(id.to_string()))?;

        product.price = price;
        product.updated_at = chrono::Utc::now();

        validate_product(&product)?;

        self.repo.update_product(product).await
    }

    /// Delete a product by ID
    pub async fn delete_product(&self, id: Uuid) -> Result<()> {
        info!("Deleting product: {}", id);

        let removed = self.repo.delete_product(id).await
            .with_context(|| format!("Failed to delete product {}", id))?;

        if !removed {
            return Err(Error::ProductNotFound(id.to_string()));
        }

        Ok(())
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a product before it reaches the repository
fn validate_product(product: &Product) -> Result<()> {
    if product.name.trim().is_empty() {
        return Err(Error::InvalidProduct("Product name must not be empty".to_string()));
    }

    if product.price <= Decimal::ZERO {
        return Err(Error::InvalidProduct(format!(
            "Product price must be positive, got {}",
            product.price
        )));
    }

    if product.stock < 0 {
        return Err(Error::InvalidProduct(format!(
            "Product stock must not be negative, got {}",
            product.stock
        )));
    }

    Ok(())
}
