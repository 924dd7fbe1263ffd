//! Products API - REST server

use axum_helpers::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::{error, info};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    // Connect to MongoDB. An unreachable store is fatal: log and exit
    // rather than serve requests that can only fail.
    let mongo_client = match database::mongodb::connect(&config.mongodb).await {
        Ok(client) => client,
        Err(e) => {
            error!(code = ?e.code(), "Failed to connect to MongoDB: {e}");
            std::process::exit(1);
        }
    };

    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    let state = AppState {
        config: config.clone(),
        mongo_client,
        db,
    };

    // Unique indexes must exist before the first create request
    api::init_indexes(&state).await?;

    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes)?;
    let app = router
        .merge(health_router(state.config.app.clone()))
        .merge(api::health::router(state.clone()));

    info!(
        "Starting Products API on port {}",
        state.config.server.port
    );

    create_app(app, &state.config.server).await?;

    info!("Products API shutdown complete");
    Ok(())
}
