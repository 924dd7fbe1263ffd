use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::{options::ClientOptions, Client};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;

/// Error type for MongoDB operations
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {source}")]
    ConnectionFailed {
        #[source]
        source: mongodb::error::Error,
    },
}

impl MongoError {
    /// Provider-specific error code, when the server reported one.
    ///
    /// Useful for startup diagnostics; an authentication failure during
    /// the bootstrap ping surfaces here as code 18, duplicate-key
    /// violations as code 11000.
    pub fn code(&self) -> Option<i32> {
        match self {
            MongoError::Mongo(err) => error_code(err),
            MongoError::ConnectionFailed { source } => error_code(source),
        }
    }
}

/// Extract the server error code from a driver error, if present.
pub fn error_code(err: &mongodb::error::Error) -> Option<i32> {
    match &*err.kind {
        ErrorKind::Command(c) => Some(c.code),
        ErrorKind::Write(WriteFailure::WriteError(w)) => Some(w.code),
        ErrorKind::Write(WriteFailure::WriteConcernError(w)) => Some(w.code),
        _ => None,
    }
}

async fn client_options(config: &MongoConfig) -> Result<ClientOptions, MongoError> {
    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    Ok(options)
}

/// Verify the configured endpoint is reachable with a short-lived client.
///
/// Opens a throwaway client with the configured timeouts, issues a `ping`,
/// and shuts the client down again. Reachability problems (DNS, auth,
/// timeouts) surface here before any pooled client is handed out.
pub async fn probe(config: &MongoConfig) -> Result<(), MongoError> {
    info!("Probing MongoDB at {}", config.url);

    let options = client_options(config).await?;
    let client = Client::with_options(options)?;

    let ping = client.database("admin").run_command(doc! { "ping": 1 }).await;
    client.shutdown().await;

    // Keep the driver error intact so startup diagnostics can still read
    // the provider error code out of it.
    ping.map_err(|source| MongoError::ConnectionFailed { source })?;

    info!("MongoDB probe succeeded");
    Ok(())
}

/// Connect to MongoDB: probe first, then attach the long-lived client.
///
/// The returned client is pooled and safe for concurrent use; it is
/// expected to live for the remainder of the process.
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, connect};
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "mydb");
/// let client = connect(&config).await?;
/// let db = client.database(config.database());
/// ```
pub async fn connect(config: &MongoConfig) -> Result<Client, MongoError> {
    probe(config).await?;

    let options = client_options(config).await?;
    let client = Client::with_options(options)?;

    // Verify the pooled client too; a failure here is as fatal as a failed
    // probe.
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|source| MongoError::ConnectionFailed { source })?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn probe_and_connect() {
        let url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let config = MongoConfig::new(url);

        probe(&config).await.unwrap();
        let client = connect(&config).await.unwrap();
        assert!(client.list_database_names().await.is_ok());
    }

    #[tokio::test]
    async fn connect_to_unreachable_host_keeps_driver_error() {
        let mut config = MongoConfig::new("mongodb://127.0.0.1:1");
        config.server_selection_timeout_secs = 1;
        config.connect_timeout_secs = 1;

        let err = connect(&config).await.unwrap_err();

        // The driver error must survive the wrapping so code() can read a
        // provider code when the server reports one (auth failures carry
        // code 18; server selection timeouts carry none).
        assert!(matches!(
            err,
            MongoError::ConnectionFailed { .. } | MongoError::Mongo(_)
        ));
        assert_eq!(err.code(), None);
    }
}
