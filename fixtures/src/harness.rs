//! Fixture harness driving the catalog and order services
//!
//! The harness records every identifier it creates so the same run can tear
//! everything down again. Orders are removed before products so no order is
//! ever left referencing a deleted product.

use std::path::Path;
use std::sync::Arc;

use catalog_service::CatalogService;
use chrono::Utc;
use common::error::{Error, Result};
use common::model::Order;
use order_service::OrderService;
use rand::Rng;
use tracing::info;
use uuid::Uuid;

use crate::seed::load_seeds;

/// Maximum number of product references in a randomized order
const MAX_ORDER_PRODUCTS: usize = 10;

/// Test-fixture harness over the catalog and order services
pub struct FixtureHarness {
    catalog: Arc<CatalogService>,
    orders: Arc<OrderService>,
    /// Product IDs created by this harness, in creation order
    product_ids: Vec<Uuid>,
    /// Order IDs created by this harness, in creation order
    order_ids: Vec<Uuid>,
}

impl FixtureHarness {
    /// Create a harness over the given services
    pub fn new(catalog: Arc<CatalogService>, orders: Arc<OrderService>) -> Self {
        Self {
            catalog,
            orders,
            product_ids: Vec::new(),
            order_ids: Vec::new(),
        }
    }

    /// Product IDs created so far
    pub fn product_ids(&self) -> &[Uuid] {
        &self.product_ids
    }

    /// Order IDs created so far
    pub fn order_ids(&self) -> &[Uuid] {
        &self.order_ids
    }

    /// Load the seed file and create every product in it
    ///
    /// Returns the number of products created. Seed records missing a price
    /// or id have those filled in before creation.
    pub async fn setup_test_data(&mut self, seed_path: impl AsRef<Path>) -> Result<usize> {
        info!("Loading test products...");

        let seeds = load_seeds(seed_path).await?;

        for seed in seeds {
            let product = {
                let mut rng = rand::thread_rng();
                seed.into_product(&mut rng)
            };

            let created = self.catalog.create_product(product).await?;
            self.product_ids.push(created.id);
        }

        info!("Test products loaded successfully ({} products)", self.product_ids.len());
        Ok(self.product_ids.len())
    }

    /// Create a single randomized test order
    ///
    /// Picks 1..=10 products with replacement from the created products, so
    /// an order may reference the same product more than once. Fails fast
    /// when no products have been loaded.
    pub async fn create_test_order(&mut self) -> Result<Order> {
        if self.product_ids.is_empty() {
            return Err(Error::NoFixtureProducts);
        }

        let product_ids = {
            let mut rng = rand::thread_rng();
            let count = rng.gen_range(1..=MAX_ORDER_PRODUCTS);
            (0..count)
                .map(|_| self.product_ids[rng.gen_range(0..self.product_ids.len())])
                .collect::<Vec<_>>()
        };

        let buyer_email = format!("test{}@example.com", Utc::now().timestamp_millis());
        let order = Order::new(buyer_email, product_ids);

        let created = self.orders.create_order(order).await?;
        self.order_ids.push(created.id);
        Ok(created)
    }

    /// Create several randomized test orders
    pub async fn create_test_orders(&mut self, count: usize) -> Result<Vec<Order>> {
        let mut orders = Vec::with_capacity(count);
        for _ in 0..count {
            orders.push(self.create_test_order().await?);
        }
        Ok(orders)
    }

    /// Delete every record created by this harness
    ///
    /// Orders first, then products. After a successful run both id lists are
    /// empty and calling this again is a no-op.
    pub async fn cleanup_test_data(&mut self) -> Result<()> {
        info!("Cleaning up test orders...");
        for order_id in &self.order_ids {
            self.orders.delete_order(*order_id).await?;
        }
        self.order_ids.clear();

        info!("Cleaning up test products...");
        for product_id in &self.product_ids {
            self.catalog.delete_product(*product_id).await?;
        }
        self.product_ids.clear();

        info!("Test products and orders cleaned up successfully");
        Ok(())
    }
}
