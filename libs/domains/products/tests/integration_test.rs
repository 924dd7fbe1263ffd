//! Integration tests for the Products domain
//!
//! These tests run against a real MongoDB instance to ensure:
//! - Documents round-trip through the driver correctly
//! - The unique name index rejects duplicates
//! - Service-level CRUD behaves end to end
//!
//! They are ignored by default; run them with a live server:
//!
//! ```sh
//! MONGODB_URL=mongodb://localhost:27017 cargo test -- --ignored
//! ```

use domain_products::{
    CreateProduct, MongoProductRepository, ProductError, ProductService, UpdateProduct,
};
use mongodb::Client;
use uuid::Uuid;

async fn test_repository(test_name: &str) -> MongoProductRepository {
    let url = std::env::var("MONGODB_URL")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let client = Client::with_uri_str(&url).await.unwrap();
    let db = client.database("products_test");

    // Per-test collection so tests do not interfere with each other
    let collection = format!("products_{}_{}", test_name, Uuid::now_v7().simple());
    let repo = MongoProductRepository::with_collection(&db, &collection);
    repo.init_indexes().await.unwrap();
    repo
}

fn create_input(name: &str) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        description: "Integration test product".to_string(),
        price: Some(49.99),
    }
}

#[tokio::test]
#[ignore]
async fn test_create_and_get_product() {
    let service = ProductService::new(test_repository("create_and_get").await);

    let created = service.create_product(create_input("  Oak Chair ")).await.unwrap();
    assert_eq!(created.name, "oak chair");
    assert_eq!(created.price, 49.99);

    let retrieved = service.get_product(created.id).await.unwrap();
    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.name, "oak chair");
}

#[tokio::test]
#[ignore]
async fn test_duplicate_name_constraint() {
    let service = ProductService::new(test_repository("duplicate_name").await);

    service.create_product(create_input("chair")).await.unwrap();

    // Same name after normalization
    let result = service.create_product(create_input(" CHAIR ")).await;
    assert!(
        matches!(result, Err(ProductError::DuplicateName)),
        "Expected DuplicateName error, got {:?}",
        result
    );
}

#[tokio::test]
#[ignore]
async fn test_unique_index_rejects_direct_duplicate_insert() {
    use domain_products::{Product, ProductRepository};

    let repo = test_repository("index_duplicate").await;

    let first = Product::new("chair".to_string(), "one".to_string(), 1.0);
    let second = Product::new("chair".to_string(), "two".to_string(), 2.0);

    repo.insert(first).await.unwrap();

    // Bypasses the service's advisory check; the index must catch it
    let result = repo.insert(second).await;
    assert!(matches!(result, Err(ProductError::DuplicateName)));
}

#[tokio::test]
#[ignore]
async fn test_update_product() {
    let service = ProductService::new(test_repository("update").await);

    let created = service.create_product(create_input("chair")).await.unwrap();

    let updated = service
        .update_product(
            created.id,
            UpdateProduct {
                price: Some(9.99),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "chair");
    assert_eq!(updated.price, 9.99);
    assert!(updated.updated_at >= created.updated_at);

    // The replacement must be persisted
    let retrieved = service.get_product(created.id).await.unwrap();
    assert_eq!(retrieved.price, 9.99);
}

#[tokio::test]
#[ignore]
async fn test_delete_product() {
    let service = ProductService::new(test_repository("delete").await);

    let created = service.create_product(create_input("chair")).await.unwrap();

    service.delete_product(created.id).await.unwrap();

    let result = service.get_product(created.id).await;
    assert!(matches!(result, Err(ProductError::NotFound(_))));

    // Second delete reports not found
    let result = service.delete_product(created.id).await;
    assert!(matches!(result, Err(ProductError::NotFound(_))));
}

#[tokio::test]
#[ignore]
async fn test_list_products() {
    let service = ProductService::new(test_repository("list").await);

    service.create_product(create_input("chair")).await.unwrap();
    service.create_product(create_input("table")).await.unwrap();

    let products = service.list_products().await.unwrap();
    assert_eq!(products.len(), 2);
}
