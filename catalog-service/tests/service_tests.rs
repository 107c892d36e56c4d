use catalog_service::{CatalogService, InMemoryProductRepository, RepositoryType};
use common::error::Error;
use common::model::Product;
use common::money::dec;
use uuid::Uuid;

#[tokio::test]
async fn test_repository_insert() {
    let repo = InMemoryProductRepository::new();

    assert!(repo.products.is_empty());

    let product = Product::new(
        "Canvas Tote".to_string(),
        Some("Heavy cotton tote bag".to_string()),
        Some("accessories".to_string()),
        dec!(24.50),
        10,
    );
    let id = product.id;
    repo.products.insert(id, product);

    assert_eq!(repo.products.len(), 1);
    assert!(repo.products.contains_key(&id));
}

#[tokio::test]
async fn test_create_and_get_product() {
    let service = CatalogService::with_repository(RepositoryType::InMemory).await.unwrap();

    let product = Product::new(
        "Enamel Mug".to_string(),
        None,
        Some("kitchen".to_string()),
        dec!(12.00),
        25,
    );
    let created = service.create_product(product).await.unwrap();
    assert!(created.id != Uuid::nil());
    assert!(created.is_in_stock());

    let retrieved = service.get_product(created.id).await.unwrap().unwrap();
    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.name, "Enamel Mug");

    let non_existent = service.get_product(Uuid::new_v4()).await.unwrap();
    assert!(non_existent.is_none());
}

#[tokio::test]
async fn test_create_product_rejects_empty_name() {
    let service = CatalogService::new();

    let product = Product::new("   ".to_string(), None, None, dec!(5), 1);
    let result = service.create_product(product).await;

    match result {
        Err(Error::InvalidProduct(_)) => (),
        _ => panic!("Expected InvalidProduct error"),
    }
}

#[tokio::test]
async fn test_create_product_rejects_non_positive_price() {
    let service = CatalogService::new();

    let product = Product::new("Freebie".to_string(), None, None, dec!(0), 1);
    let result = service.create_product(product).await;

    match result {
        Err(Error::InvalidProduct(_)) => (),
        _ => panic!("Expected InvalidProduct error"),
    }
}

#[tokio::test]
async fn test_list_products() {
    let service = CatalogService::new();

    service.create_product(Product::new("A".to_string(), None, None, dec!(1), 1)).await.unwrap();
    service.create_product(Product::new("B".to_string(), None, None, dec!(2), 2)).await.unwrap();

    let products = service.list_products().await.unwrap();
    assert_eq!(products.len(), 2);
}

#[tokio::test]
async fn test_update_price() {
    let service = CatalogService::new();

    let created = service.create_product(
        Product::new("Desk Lamp".to_string(), None, Some("office".to_string()), dec!(39.99), 4)
    ).await.unwrap();

    let updated = service.update_price(created.id, dec!(29.99)).await.unwrap();
    assert_eq!(updated.price, dec!(29.99));

    let retrieved = service.get_product(created.id).await.unwrap().unwrap();
    assert_eq!(retrieved.price, dec!(29.99));
}

#[tokio::test]
async fn test_delete_product() {
    let service = CatalogService::new();

    let created = service.create_product(
        Product::new("Notebook".to_string(), None, None, dec!(6.50), 100)
    ).await.unwrap();

    service.delete_product(created.id).await.unwrap();
    assert!(service.get_product(created.id).await.unwrap().is_none());

    // Deleting again reports the missing record
    let result = service.delete_product(created.id).await;
    match result {
        Err(Error::ProductNotFound(_)) => (),
        _ => panic!("Expected ProductNotFound error"),
    }
}
