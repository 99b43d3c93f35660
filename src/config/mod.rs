use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Which employee store implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Postgres => "postgres",
            StoreBackend::Memory => "memory",
        }
    }
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => Err(anyhow::anyhow!(
                "STORE_BACKEND must be 'postgres' or 'memory', got '{}'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub environment: String,
    pub port: u16,
    /// Required when `store_backend` is `Postgres`
    pub database_url: Option<String>,
    pub store_backend: StoreBackend,
    pub max_connections: u32,
    /// Seconds before an in-flight request is answered with 408
    pub request_timeout: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 8080,
            database_url: None,
            store_backend: StoreBackend::Memory,
            max_connections: 10,
            request_timeout: 30,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let store_backend = match lookup("STORE_BACKEND") {
            Some(value) => value.parse()?,
            None => StoreBackend::Postgres,
        };

        if store_backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(anyhow::anyhow!(
                "DATABASE_URL environment variable is required when STORE_BACKEND=postgres"
            ));
        }

        Ok(Config {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port: match lookup("PORT") {
                Some(port) => port
                    .parse()
                    .map_err(|e| anyhow::anyhow!("PORT must be a valid port number: {}", e))?,
                None => defaults.port,
            },
            database_url,
            store_backend,
            max_connections: match lookup("MAX_CONNECTIONS") {
                Some(value) => value.parse().map_err(|e| {
                    anyhow::anyhow!("MAX_CONNECTIONS must be a positive integer: {}", e)
                })?,
                None => defaults.max_connections,
            },
            request_timeout: match lookup("REQUEST_TIMEOUT") {
                Some(value) => value.parse().map_err(|e| {
                    anyhow::anyhow!("REQUEST_TIMEOUT must be a number of seconds: {}", e)
                })?,
                None => defaults.request_timeout,
            },
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}
