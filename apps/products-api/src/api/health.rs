//! Readiness endpoint
//!
//! Liveness (`/health`) comes from `axum_helpers::health_router`; this
//! module adds `/ready`, which also verifies the MongoDB connection.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use database::mongodb::check_health_detailed;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadyResponse {
    status: &'static str,
    service: &'static str,
    response_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let health = check_health_detailed(&state.mongo_client).await;

    let status_code = if health.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadyResponse {
            status: if health.healthy { "ready" } else { "unavailable" },
            service: env!("CARGO_PKG_NAME"),
            response_time_ms: health.response_time_ms,
            message: health.message,
        }),
    )
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::Request;
    use core_config::{app_info, server::ServerConfig, Environment};
    use database::mongodb::MongoConfig;
    use http_body_util::BodyExt;
    use mongodb::options::ClientOptions;
    use mongodb::Client;
    use std::time::Duration;
    use tower::ServiceExt;

    async fn unreachable_state() -> AppState {
        let mut options = ClientOptions::parse("mongodb://127.0.0.1:1")
            .await
            .unwrap();
        options.server_selection_timeout = Some(Duration::from_secs(1));
        options.connect_timeout = Some(Duration::from_secs(1));
        let mongo_client = Client::with_options(options).unwrap();
        let db = mongo_client.database("products");

        AppState {
            config: Config {
                app: app_info!(),
                mongodb: MongoConfig::new("mongodb://127.0.0.1:1"),
                server: ServerConfig::default(),
                environment: Environment::Development,
            },
            mongo_client,
            db,
        }
    }

    #[tokio::test]
    async fn ready_reports_unavailable_when_store_is_down() {
        let app = router(unreachable_state().await);

        let response = app
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "unavailable");
        assert!(body["message"].is_string());
        assert!(body["response_time_ms"].is_u64());
    }
}
