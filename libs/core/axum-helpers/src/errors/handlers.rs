use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ErrorResponse;

/// Handler for 404 Not Found errors.
///
/// Use as the router fallback for unmatched paths.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse {
        status: StatusCode::NOT_FOUND.as_u16(),
        message: "The requested resource was not found".to_string(),
    });

    (StatusCode::NOT_FOUND, body).into_response()
}
