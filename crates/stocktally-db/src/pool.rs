//! # Database Pool Management
//!
//! Connection pool creation and env-driven configuration for the product
//! catalog.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Lookup Backend Lifecycle                           │
//! │                                                                         │
//! │  Station startup                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LookupConfig::from_env()                                              │
//! │       │                                                                 │
//! │       ├── host unset ──► None ──► plain tally mode (no lookup)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::connect_lazy(&config) ← pool built, network untouched       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  First resolve() acquires a real connection                            │
//! │       │                                                                 │
//! │       ├── catalog up ───► Ok(Some(name)) / Ok(None)                    │
//! │       └── catalog down ─► LookupUnavailable (scan rejected,            │
//! │                            station keeps running)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The lazy pool keeps "no error is fatal" true from the first event on:
//! a dead catalog at startup degrades scans, it does not kill the process.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::{debug, info};

use crate::error::{ConfigError, DbError, DbResult};
use crate::repository::product::ProductRepository;

// =============================================================================
// Environment Variables
// =============================================================================

/// Catalog host. Lookup mode is enabled iff this variable is set.
pub const ENV_DB_HOST: &str = "STOCKTALLY_DB_HOST";
/// Catalog port. Optional, default 5432.
pub const ENV_DB_PORT: &str = "STOCKTALLY_DB_PORT";
/// Catalog database name. Required once the host is set.
pub const ENV_DB_NAME: &str = "STOCKTALLY_DB_NAME";
/// Catalog user. Required once the host is set.
pub const ENV_DB_USER: &str = "STOCKTALLY_DB_USER";
/// Catalog password. Optional, default empty (trust/peer auth setups).
pub const ENV_DB_PASSWORD: &str = "STOCKTALLY_DB_PASSWORD";

// =============================================================================
// Configuration
// =============================================================================

/// Product catalog connection configuration.
///
/// ## Example
/// ```rust
/// use stocktally_db::LookupConfig;
///
/// let config = LookupConfig::new("db.local", "catalog", "scanner")
///     .port(5433)
///     .max_connections(2);
/// ```
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Catalog host name or address.
    pub host: String,

    /// Catalog port. Default: 5432.
    pub port: u16,

    /// Database name.
    pub database: String,

    /// Login user.
    pub user: String,

    /// Login password. Empty string for password-less auth.
    pub password: String,

    /// Maximum number of connections in the pool.
    /// Default: 2 (one operator, one scan in flight at a time)
    pub max_connections: u32,

    /// Timeout acquiring a connection from the pool.
    /// Default: 5 seconds - a resolve must fail fast, the operator is waiting
    pub acquire_timeout: Duration,
}

impl LookupConfig {
    /// Creates a configuration with defaults for everything optional.
    pub fn new(
        host: impl Into<String>,
        database: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        LookupConfig {
            host: host.into(),
            port: 5432,
            database: database.into(),
            user: user.into(),
            password: String::new(),
            max_connections: 2,
            acquire_timeout: Duration::from_secs(5),
        }
    }

    /// Sets the catalog port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the login password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the pool acquire timeout.
    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// Loads the configuration from the process environment.
    ///
    /// ## Contract
    /// - [`ENV_DB_HOST`] unset → `Ok(None)`: plain tally mode, no lookup.
    /// - Host set but [`ENV_DB_NAME`] or [`ENV_DB_USER`] missing →
    ///   `ConfigError::MissingRequired`.
    /// - [`ENV_DB_PORT`] set but unparsable → `ConfigError::InvalidValue`.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let host = match std::env::var(ENV_DB_HOST) {
            Ok(host) if !host.trim().is_empty() => host,
            _ => return Ok(None),
        };

        let database = std::env::var(ENV_DB_NAME)
            .map_err(|_| ConfigError::MissingRequired(ENV_DB_NAME.to_string()))?;
        let user = std::env::var(ENV_DB_USER)
            .map_err(|_| ConfigError::MissingRequired(ENV_DB_USER.to_string()))?;

        let mut config = LookupConfig::new(host, database, user);

        if let Ok(port) = std::env::var(ENV_DB_PORT) {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue(ENV_DB_PORT.to_string()))?;
        }
        if let Ok(password) = std::env::var(ENV_DB_PASSWORD) {
            config.password = password;
        }

        Ok(Some(config))
    }

    /// Builds the sqlx connection options for this configuration.
    fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }
}

// =============================================================================
// Database
// =============================================================================

/// Main database handle providing repository access.
///
/// ## Usage
/// ```rust,ignore
/// let db = Database::connect_lazy(&config)?;
/// let name = db.products().find_name_by_code("8412345678905").await?;
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    /// The PostgreSQL connection pool.
    pool: PgPool,
}

impl Database {
    /// Creates a pool without touching the network.
    ///
    /// Connections are established on first use. A catalog that is down at
    /// startup therefore surfaces per-scan (`LookupUnavailable`), never as
    /// a startup failure.
    pub fn connect_lazy(config: &LookupConfig) -> DbResult<Self> {
        info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "Preparing catalog connection pool"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy_with(config.connect_options());

        debug!(max_connections = config.max_connections, "Pool prepared");

        Ok(Database { pool })
    }

    /// Connects eagerly, verifying the catalog is reachable.
    ///
    /// ## When To Use
    /// Diagnostics and tests; the station itself uses [`connect_lazy`] so
    /// a dead catalog cannot stop it from starting.
    ///
    /// [`connect_lazy`]: Database::connect_lazy
    pub async fn connect(config: &LookupConfig) -> DbResult<Self> {
        info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "Connecting to catalog"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(config.connect_options())
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!("Catalog pool connected");

        Ok(Database { pool })
    }

    /// Returns a reference to the connection pool.
    ///
    /// ## Usage
    /// For queries not covered by the repository. Prefer repository
    /// methods when available.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone())
    }

    /// Checks if the catalog is reachable (can execute queries).
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    /// Closes the connection pool.
    ///
    /// ## When To Call
    /// On station shutdown. After closing, all lookups fail.
    pub async fn close(&self) {
        info!("Closing catalog connection pool");
        self.pool.close().await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = LookupConfig::new("db.local", "catalog", "scanner");

        assert_eq!(config.port, 5432);
        assert_eq!(config.max_connections, 2);
        assert!(config.password.is_empty());
    }

    #[test]
    fn test_config_builder_overrides() {
        let config = LookupConfig::new("db.local", "catalog", "scanner")
            .port(5433)
            .password("secret")
            .max_connections(4);

        assert_eq!(config.port, 5433);
        assert_eq!(config.password, "secret");
        assert_eq!(config.max_connections, 4);
    }

    // Env vars are process-global, so every from_env case runs in this one
    // test to keep the harness's parallelism away from them.
    #[test]
    fn test_from_env_modes() {
        std::env::remove_var(ENV_DB_HOST);
        std::env::remove_var(ENV_DB_PORT);
        std::env::remove_var(ENV_DB_NAME);
        std::env::remove_var(ENV_DB_USER);
        std::env::remove_var(ENV_DB_PASSWORD);

        // No host → plain tally mode
        assert!(LookupConfig::from_env().unwrap().is_none());

        // Host without name/user → missing required
        std::env::set_var(ENV_DB_HOST, "db.local");
        assert!(matches!(
            LookupConfig::from_env(),
            Err(ConfigError::MissingRequired(_))
        ));

        // Fully specified
        std::env::set_var(ENV_DB_NAME, "catalog");
        std::env::set_var(ENV_DB_USER, "scanner");
        std::env::set_var(ENV_DB_PASSWORD, "secret");
        let config = LookupConfig::from_env().unwrap().unwrap();
        assert_eq!(config.host, "db.local");
        assert_eq!(config.database, "catalog");
        assert_eq!(config.user, "scanner");
        assert_eq!(config.password, "secret");
        assert_eq!(config.port, 5432);

        // Unparsable port
        std::env::set_var(ENV_DB_PORT, "not-a-port");
        assert!(matches!(
            LookupConfig::from_env(),
            Err(ConfigError::InvalidValue(_))
        ));

        std::env::remove_var(ENV_DB_HOST);
        std::env::remove_var(ENV_DB_PORT);
        std::env::remove_var(ENV_DB_NAME);
        std::env::remove_var(ENV_DB_USER);
        std::env::remove_var(ENV_DB_PASSWORD);
    }
}
