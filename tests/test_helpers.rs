// File: tests/test_helpers.rs

use std::path::PathBuf;

// Sample seed records shared by workspace-level tests; same shape as
// data/full-products.json, including records with missing price/id fields
pub const SEED_JSON: &str = r#"[
    {"name": "Canvas Tote", "description": "Heavy cotton tote bag", "category": "accessories", "price": 24.5, "stock": 12},
    {"name": "Enamel Mug", "description": "Stoneware mug", "category": "kitchen"},
    {"name": "Desk Lamp", "category": "office", "price": 39.99, "stock": 4},
    {"name": "Linen Apron", "category": "kitchen"}
]"#;

// Write the shared seed records into a temp directory and return the path
pub fn write_seed_file(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("full-products.json");
    std::fs::write(&path, SEED_JSON).expect("Failed to write seed file");
    path
}

// Database test utilities
#[cfg(feature = "db_tests")]
use std::env;
#[cfg(feature = "db_tests")]
use sqlx::{postgres::PgPoolOptions, PgPool};

#[cfg(feature = "db_tests")]
pub struct DbTestContext {
    pub pool: PgPool,
}

#[cfg(feature = "db_tests")]
impl DbTestContext {
    // Create a new test database context
    pub async fn new() -> Self {
        // Use a test-specific database configuration
        let db_url = env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must be set for database tests");

        // Connect to the test database
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&db_url)
            .await
            .expect("Failed to connect to test database");

        // Migrations are idempotent, run them for every context
        common::db::run_migrations(&pool)
            .await
            .expect("Failed to run database migrations");

        Self { pool }
    }

    // Clean up test data after tests
    pub async fn cleanup(&self) {
        // Delete orders before products so no order is left referencing
        // a deleted product
        sqlx::query("DELETE FROM orders")
            .execute(&self.pool)
            .await
            .expect("Failed to clean up orders table");

        sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await
            .expect("Failed to clean up products table");
    }
}
