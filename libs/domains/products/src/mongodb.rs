//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson, Bson, Document},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;

/// Persisted shape of a product: identical to [`Product`] except the
/// identifier is stored under MongoDB's `_id` key.
#[derive(Debug, Serialize, Deserialize)]
struct ProductDocument {
    #[serde(rename = "_id")]
    id: Uuid,
    name: String,
    description: String,
    price: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDocument {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            description: doc.description,
            price: doc.price,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository over the `products` collection
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<ProductDocument>("products"),
        }
    }

    /// Create a repository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<ProductDocument>(collection_name),
        }
    }

    /// Initialize indexes.
    ///
    /// The unique name index is the authoritative duplicate guard; the
    /// service's pre-check only narrows the race window.
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("idx_name_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    fn id_filter(id: Uuid) -> Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, product), fields(product_id = %product.id, product_name = %product.name))]
    async fn insert(&self, product: Product) -> ProductResult<Product> {
        self.collection
            .insert_one(ProductDocument::from(product.clone()))
            .await?;

        tracing::info!("Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let document = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(document.map(Product::from))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> ProductResult<Option<Product>> {
        let document = self.collection.find_one(doc! { "name": name }).await?;
        Ok(document.map(Product::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        // Store-native order; no sort applied.
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<ProductDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn replace(&self, product: Product) -> ProductResult<Product> {
        self.collection
            .replace_one(
                Self::id_filter(product.id),
                ProductDocument::from(product.clone()),
            )
            .await?;

        tracing::info!("Product updated successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count == 0 {
            return Err(ProductError::NotFound(id));
        }

        tracing::info!("Product deleted successfully");
        Ok(())
    }
}
