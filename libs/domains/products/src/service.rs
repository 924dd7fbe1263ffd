//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{normalize_name, CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

const REQUIRED_FIELDS: &str = "Name, description and price are required";

/// Product service providing the five CRUD operations.
///
/// The service owns validation order, name normalization, and the
/// classification of creation failures; the repository below it owns
/// persistence and the uniqueness constraint.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products in store-native order
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product.
    ///
    /// Order matters: presence checks, then normalization, then the
    /// advisory duplicate pre-check, then the insert. The pre-check only
    /// improves the error on the common path; the unique index decides the
    /// race between two concurrent creates.
    ///
    /// Every failure on this path is a 400-class error, including store
    /// failures, which are collapsed into `InvalidData`.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        if input.name.is_empty() || input.description.is_empty() || input.price.is_none() {
            return Err(ProductError::Validation(REQUIRED_FIELDS.to_string()));
        }
        let price = input.price.unwrap_or_default();

        let name = normalize_name(&input.name);

        match self.repository.find_by_name(&name).await {
            Ok(Some(_)) => return Err(ProductError::DuplicateName),
            Ok(None) => {}
            Err(ProductError::Database(_)) => return Err(ProductError::InvalidData),
            Err(e) => return Err(e),
        }

        let product = Product::new(name, input.description, price);

        match self.repository.insert(product).await {
            Ok(created) => Ok(created),
            // Unique-index violation: the advisory check raced another create
            Err(ProductError::DuplicateName) => Err(ProductError::DuplicateName),
            Err(ProductError::Database(_)) => Err(ProductError::InvalidData),
            Err(e) => Err(e),
        }
    }

    /// Update an existing product, overwriting only present-and-truthy
    /// fields
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        product.apply_update(input);

        self.repository.replace(product).await
    }

    /// Delete a product permanently
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound(id));
        }

        self.repository.delete(id).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
