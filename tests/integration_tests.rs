// File: tests/integration_tests.rs

mod test_helpers;
use test_helpers::write_seed_file;

use std::sync::Arc;

use catalog_service::CatalogService;
use fixtures::FixtureHarness;
use order_service::OrderService;
use tempfile::TempDir;

// Full fixture lifecycle against in-memory services:
// seed file -> products -> randomized orders -> cleanup
#[tokio::test]
async fn test_fixture_lifecycle_end_to_end() {
    let dir = TempDir::new().unwrap();
    let seed_path = write_seed_file(&dir);

    let catalog = Arc::new(CatalogService::new());
    let orders = Arc::new(OrderService::new());
    let mut harness = FixtureHarness::new(catalog.clone(), orders.clone());

    let created = harness.setup_test_data(&seed_path).await.unwrap();
    assert_eq!(created, 4);
    assert_eq!(catalog.list_products().await.unwrap().len(), 4);

    let created_orders = harness.create_test_orders(5).await.unwrap();
    assert_eq!(created_orders.len(), 5);
    assert_eq!(orders.list_orders().await.unwrap().len(), 5);

    // Every order references only products the harness created
    for order in &created_orders {
        assert!(!order.product_ids.is_empty());
        assert!(order.product_ids.len() <= 10);
        for product_id in &order.product_ids {
            let product = catalog.get_product(*product_id).await.unwrap();
            assert!(product.is_some(), "Order references unknown product {}", product_id);
        }
    }

    harness.cleanup_test_data().await.unwrap();
    assert!(catalog.list_products().await.unwrap().is_empty());
    assert!(orders.list_orders().await.unwrap().is_empty());
}

// Seeds with missing prices become orderable products
#[tokio::test]
async fn test_seeded_products_are_orderable() {
    let dir = TempDir::new().unwrap();
    let seed_path = write_seed_file(&dir);

    let catalog = Arc::new(CatalogService::new());
    let orders = Arc::new(OrderService::new());
    let mut harness = FixtureHarness::new(catalog.clone(), orders.clone());

    harness.setup_test_data(&seed_path).await.unwrap();

    for product in catalog.list_products().await.unwrap() {
        assert!(product.price.is_sign_positive());
        assert!(product.is_in_stock());
    }

    // Creating a single order works off the seeded catalog
    let order = harness.create_test_order().await.unwrap();
    assert!(order.is_open());
}

// Full fixture lifecycle against PostgreSQL
// Run with: cargo test --features db_tests -- --ignored
#[cfg(feature = "db_tests")]
mod postgres_lifecycle {
    use super::*;
    use catalog_service::RepositoryType as CatalogRepositoryType;
    use order_service::RepositoryType as OrderRepositoryType;
    use crate::test_helpers::DbTestContext;

    #[tokio::test]
    #[ignore = "Requires test database"]
    async fn test_fixture_lifecycle_against_postgres() {
        let ctx = DbTestContext::new().await;
        let database_url = std::env::var("TEST_DATABASE_URL").unwrap();

        let catalog = Arc::new(
            CatalogService::with_repository(CatalogRepositoryType::Postgres(Some(database_url.clone())))
                .await
                .unwrap(),
        );
        let orders = Arc::new(
            OrderService::with_repository(OrderRepositoryType::Postgres(Some(database_url)))
                .await
                .unwrap(),
        );

        let dir = TempDir::new().unwrap();
        let seed_path = write_seed_file(&dir);
        let mut harness = FixtureHarness::new(catalog.clone(), orders.clone());

        harness.setup_test_data(&seed_path).await.unwrap();
        harness.create_test_orders(2).await.unwrap();

        harness.cleanup_test_data().await.unwrap();
        assert!(catalog.list_products().await.unwrap().is_empty());
        assert!(orders.list_orders().await.unwrap().is_empty());

        // Leave the schema clean for other database tests
        ctx.cleanup().await;
    }
}
