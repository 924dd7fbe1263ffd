use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Normalize a product name for storage: trim surrounding whitespace and
/// lower-case.
///
/// Applied at creation only. Updates write the incoming name verbatim, so
/// a renamed product may hold a non-normalized name; the unique index then
/// guards whatever value was written.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned at creation and immutable
    pub id: Uuid,
    /// Product name, normalized at creation; unique across all products
    pub name: String,
    /// Product description
    pub description: String,
    /// Price
    pub price: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product.
///
/// All fields default on deserialization so the service owns the presence
/// checks (and their combined error message) instead of serde.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Must be supplied; zero is a legitimate price
    #[serde(default)]
    pub price: Option<f64>,
}

/// DTO for partially updating an existing product
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl Product {
    /// Create a new product with a fresh id and timestamps.
    ///
    /// `name` is expected to be normalized already (the service does this).
    pub fn new(name: String, description: String, price: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name,
            description,
            price,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, field by field.
    ///
    /// A field is only overwritten when it is present AND truthy: an empty
    /// string or a zero price counts as omitted and keeps the stored value.
    /// Incoming names are not re-normalized here.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name.filter(|n| !n.is_empty()) {
            self.name = name;
        }
        if let Some(description) = update.description.filter(|d| !d.is_empty()) {
            self.description = description;
        }
        if let Some(price) = update.price.filter(|p| *p != 0.0) {
            self.price = price;
        }
        self.updated_at = Utc::now();
    }
}
