//! Configuration for the Hortus API server.
//!
//! Every value is read from the environment once, in `main`, and passed down
//! explicitly. The store URL is required; all other tunables have compile-time
//! defaults and can be overridden with a dedicated environment variable.

use std::time::Duration;

/// Required: PostgreSQL connection URL.
pub const DB_URL_VAR: &str = "HORTUS_DB_URL";
const DB_SCHEMA_VAR: &str = "HORTUS_DB_SCHEMA";
const DB_MAX_CONNECTIONS_VAR: &str = "HORTUS_DB_MAX_CONNECTIONS";
const DB_ACQUIRE_TIMEOUT_VAR: &str = "HORTUS_DB_ACQUIRE_TIMEOUT_MS";
const STORE_TIMEOUT_VAR: &str = "HORTUS_STORE_TIMEOUT_MS";
const LISTEN_ADDR_VAR: &str = "HORTUS_LISTEN_ADDR";

/// Schema holding the `plant` and `plant_log` tables.
const DEFAULT_DB_SCHEMA: &str = "hortus_schema";

const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Bound on waiting for a pooled connection (in milliseconds).
const DEFAULT_DB_ACQUIRE_TIMEOUT_MS: u64 = 3_000;

/// Bound on a single store call, acquisition included (in milliseconds).
const DEFAULT_STORE_TIMEOUT_MS: u64 = 5_000;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Settings consumed by the persistence adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub database_url: String,
    pub schema: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// Deadline applied to every store call.
    pub call_timeout: Duration,
}

impl StoreConfig {
    /// Store settings with defaults for everything but the URL.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            schema: DEFAULT_DB_SCHEMA.to_string(),
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_millis(DEFAULT_DB_ACQUIRE_TIMEOUT_MS),
            call_timeout: Duration::from_millis(DEFAULT_STORE_TIMEOUT_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store: StoreConfig,
    pub listen_addr: String,
}

impl Config {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load the configuration through `lookup`, which returns the value of a
    /// variable or `None` when it is unset.
    ///
    /// Priority for each optional tunable:
    /// 1. the variable, if set (an unparsable number is an error)
    /// 2. the compile-time default
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DB_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing(DB_URL_VAR))?;

        let mut store = StoreConfig::new(database_url);
        if let Some(schema) = lookup(DB_SCHEMA_VAR) {
            store.schema = schema;
        }
        if let Some(max) = parse_var(&lookup, DB_MAX_CONNECTIONS_VAR)? {
            store.max_connections = max;
        }
        if let Some(ms) = parse_var(&lookup, DB_ACQUIRE_TIMEOUT_VAR)? {
            store.acquire_timeout = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var(&lookup, STORE_TIMEOUT_VAR)? {
            store.call_timeout = Duration::from_millis(ms);
        }

        let listen_addr = lookup(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

        Ok(Self { store, listen_addr })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
