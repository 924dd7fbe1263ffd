#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv};

/// MongoDB connection configuration.
///
/// Construct manually or load from environment variables (with the
/// `config` feature).
///
/// The two timeout fields bound the startup probe: server selection gives
/// up after `server_selection_timeout_secs` (default 5s) and individual
/// connections after `connect_timeout_secs` (default 45s).
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// MongoDB connection URL (required)
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: String,

    /// Database name to use
    pub database: String,

    /// Optional application name for server logs
    pub app_name: Option<String>,

    /// Maximum number of connections in the pool
    pub max_pool_size: u32,

    /// Minimum number of connections in the pool
    pub min_pool_size: u32,

    /// Per-connection (socket-level) timeout in seconds
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    /// Create a new MongoConfig with just a URL and default database
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: "products".to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 45,
            server_selection_timeout_secs: 5,
        }
    }

    /// Create a MongoConfig with a specific database name
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            ..Self::new(url)
        }
    }

    /// Set the application name for server logs
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Get a reference to the MongoDB URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the database name
    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::new("mongodb://localhost:27017")
    }
}

/// Load MongoConfig from environment variables
///
/// Environment variables:
/// - `MONGODB_URL` or `MONGO_URI` (required) - MongoDB connection string
/// - `MONGODB_DATABASE` (optional, default: "products") - Database name
/// - `MONGODB_APP_NAME` (optional) - Application name for server logs
/// - `MONGODB_MAX_POOL_SIZE` (optional, default: 100)
/// - `MONGODB_MIN_POOL_SIZE` (optional, default: 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (optional, default: 45)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (optional, default: 5)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        // Try MONGODB_URL first, fall back to MONGO_URI
        let url = std::env::var("MONGODB_URL")
            .or_else(|_| std::env::var("MONGO_URI"))
            .map_err(|_| ConfigError::MissingEnvVar("MONGODB_URL or MONGO_URI".to_string()))?;

        let database =
            std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| "products".to_string());

        let app_name = std::env::var("MONGODB_APP_NAME").ok();

        let max_pool_size = parse_env("MONGODB_MAX_POOL_SIZE", "100")?;
        let min_pool_size = parse_env("MONGODB_MIN_POOL_SIZE", "5")?;
        let connect_timeout_secs = parse_env("MONGODB_CONNECT_TIMEOUT_SECS", "45")?;
        let server_selection_timeout_secs =
            parse_env("MONGODB_SERVER_SELECTION_TIMEOUT_SECS", "5")?;

        Ok(Self {
            url,
            database,
            app_name,
            max_pool_size,
            min_pool_size,
            connect_timeout_secs,
            server_selection_timeout_secs,
        })
    }
}

#[cfg(feature = "config")]
fn parse_env<T: std::str::FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|e| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_new_defaults() {
        let config = MongoConfig::new("mongodb://localhost:27017");
        assert_eq!(config.url(), "mongodb://localhost:27017");
        assert_eq!(config.database(), "products");
        assert_eq!(config.server_selection_timeout_secs, 5);
        assert_eq!(config.connect_timeout_secs, 45);
    }

    #[test]
    fn config_with_database() {
        let config = MongoConfig::with_database("mongodb://localhost:27017", "mydb");
        assert_eq!(config.database(), "mydb");
    }

    #[test]
    fn config_with_app_name() {
        let config = MongoConfig::new("mongodb://localhost:27017").with_app_name("my-app");
        assert_eq!(config.app_name, Some("my-app".to_string()));
    }

    #[cfg(feature = "config")]
    #[test]
    fn config_from_env() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("testdb")),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://localhost:27017");
                assert_eq!(config.database, "testdb");
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn config_from_env_mongo_uri_fallback() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGO_URI", Some("mongodb://fallback:27017")),
                ("MONGODB_DATABASE", None::<&str>),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://fallback:27017");
                assert_eq!(config.database, "products");
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn config_from_env_missing_url() {
        temp_env::with_vars(
            [("MONGODB_URL", None::<&str>), ("MONGO_URI", None::<&str>)],
            || {
                assert!(MongoConfig::from_env().is_err());
            },
        );
    }
}
