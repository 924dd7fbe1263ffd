use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// Defines the data access interface for products. The MongoDB
/// implementation lives in [`crate::mongodb`]; tests use the generated
/// mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product. Fails with a duplicate-name error when the
    /// store's uniqueness constraint rejects the write.
    async fn insert(&self, product: Product) -> ProductResult<Product>;

    /// Get a product by ID
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Get a product by its stored name (exact match)
    async fn find_by_name(&self, name: &str) -> ProductResult<Option<Product>>;

    /// List all products in store-native order
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Persist a modified product, replacing the stored record
    async fn replace(&self, product: Product) -> ProductResult<Product>;

    /// Delete a product by ID, permanently
    async fn delete(&self, id: Uuid) -> ProductResult<()>;
}
