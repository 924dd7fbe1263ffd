use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(Uuid),

    #[error("Product with this name already exists")]
    DuplicateName,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid product data")]
    InvalidData,

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses.
///
/// Note the duplicate-name case maps to 400, not 409: every creation
/// failure is a Bad Request on this API.
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound("Product not found".to_string()),
            ProductError::DuplicateName => {
                AppError::BadRequest("Product with this name already exists".to_string())
            }
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::InvalidData => {
                AppError::BadRequest("Invalid product data".to_string())
            }
            ProductError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Driver errors become domain errors here; a unique-index violation
/// (server code 11000) is recognized as a duplicate name so the
/// advisory-check/insert race closes on the constraint.
impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        if database::mongodb::error_code(&err) == Some(11000) {
            ProductError::DuplicateName
        } else {
            ProductError::Database(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn not_found_maps_to_404() {
        let response = ProductError::NotFound(Uuid::nil()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_name_maps_to_400() {
        let response = ProductError::DuplicateName.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_data_maps_to_400() {
        let response = ProductError::InvalidData.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_error_maps_to_500() {
        let response = ProductError::Database("socket closed".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
