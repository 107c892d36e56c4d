use common::model::{Order, OrderStatus};
use order_service::{OrderService, RepositoryType};
use uuid::Uuid;
use tokio::test;

use dotenv::dotenv;

// PostgreSQL integration tests for the order service
// These tests require a running PostgreSQL database
// Run with: cargo test --test order_postgres_tests -- --ignored

async fn create_test_service() -> OrderService {
    dotenv().ok(); // Load .env.test if it exists

    let database_url = std::env::var("TEST_DATABASE_URL")
        .expect("TEST_DATABASE_URL must be set to run PostgreSQL tests");

    OrderService::with_repository(RepositoryType::Postgres(Some(database_url)))
        .await
        .expect("Failed to create order service with PostgreSQL repository")
}

#[test]
#[ignore = "Requires test database"]
async fn test_postgres_order_roundtrip() {
    let service = create_test_service().await;

    let product_ids = vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
    let order = Order::new("buyer@example.com".to_string(), product_ids.clone());
    let created = service.create_order(order).await.unwrap();

    // The UUID array column must preserve order and duplicates
    let retrieved = service.get_order(created.id).await.unwrap().unwrap();
    assert_eq!(retrieved.product_ids, product_ids);
    assert_eq!(retrieved.status, OrderStatus::Pending);
    assert_eq!(retrieved.buyer_email, "buyer@example.com");

    // Clean up
    service.delete_order(created.id).await.unwrap();
    assert!(service.get_order(created.id).await.unwrap().is_none());
}

#[test]
#[ignore = "Requires test database"]
async fn test_postgres_status_update() {
    let service = create_test_service().await;

    let created = service.create_order(
        Order::new("buyer@example.com".to_string(), vec![Uuid::new_v4()])
    ).await.unwrap();

    let completed = service.complete_order(created.id).await.unwrap();
    assert_eq!(completed.status, OrderStatus::Completed);

    let retrieved = service.get_order(created.id).await.unwrap().unwrap();
    assert_eq!(retrieved.status, OrderStatus::Completed);

    service.delete_order(created.id).await.unwrap();
}
