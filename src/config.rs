use std::env;
use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:orders.db";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("LISTEN_ADDR is not a valid socket address: {0}")]
    ListenAddr(String),
    #[error("DATABASE_MAX_CONNECTIONS must be a positive integer, got {0:?}")]
    MaxConnections(String),
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:")
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub listen_addr: SocketAddr,
}

impl Config {
    /// Reads the process configuration from the environment. Call
    /// `dotenvy::dotenv()` first so a local `.env` file is honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::MaxConnections(raw)),
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let raw_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::ListenAddr(raw_addr))?;

        Ok(Self {
            database: DatabaseConfig {
                url,
                max_connections,
            },
            listen_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
        assert_eq!(config.database.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.listen_addr.port(), 8080);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite:/tmp/books.db"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("LISTEN_ADDR", "127.0.0.1:9000"),
        ]))
        .unwrap();

        assert_eq!(config.database.url, "sqlite:/tmp/books.db");
        assert_eq!(config.database.max_connections, 12);
        assert_eq!(config.listen_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad_addr = Config::from_lookup(lookup_from(&[("LISTEN_ADDR", "not-an-addr")]));
        assert!(matches!(bad_addr, Err(ConfigError::ListenAddr(_))));

        let zero_pool = Config::from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", "0")]));
        assert!(matches!(zero_pool, Err(ConfigError::MaxConnections(_))));
    }

    #[test]
    fn test_in_memory_detection() {
        assert!(DatabaseConfig::in_memory().is_in_memory());
        assert!(DatabaseConfig::new("sqlite:file:books?mode=memory&cache=shared").is_in_memory());
        assert!(!DatabaseConfig::new(DEFAULT_DATABASE_URL).is_in_memory());
    }
}
