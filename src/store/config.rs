//! Store Configuration
//!
//! Connection settings for the SQLite row store.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Row store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// sqlx connection url (default: "sqlite://pairings.db")
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Pool size (default: 5)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// How long a connection waits on a locked database (default: 5000ms)
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,

    /// Upper bound on a single repository round trip (default: 5000ms)
    #[serde(default = "default_round_trip_timeout_ms")]
    pub round_trip_timeout_ms: u64,
}

fn default_database_url() -> String {
    "sqlite://pairings.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

fn default_round_trip_timeout_ms() -> u64 {
    5000
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            max_connections: default_max_connections(),
            busy_timeout_ms: default_busy_timeout_ms(),
            round_trip_timeout_ms: default_round_trip_timeout_ms(),
        }
    }
}

impl StoreConfig {
    /// Private in-memory database, used by tests
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..Default::default()
        }
    }

    /// Create a config pointing at the given url
    pub fn with_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Default::default()
        }
    }

    /// Whether the url names an in-memory database.
    /// Each connection to one sees its own empty database.
    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    pub fn round_trip_timeout(&self) -> Duration {
        Duration::from_millis(self.round_trip_timeout_ms)
    }

    /// Check values that would otherwise fail at connect time
    pub fn validate(&self) -> Result<(), String> {
        if self.database_url.trim().is_empty() {
            return Err("database_url must not be empty".to_string());
        }
        if self.max_connections == 0 {
            return Err("max_connections must be > 0".to_string());
        }
        if self.round_trip_timeout_ms == 0 {
            return Err("round_trip_timeout_ms must be > 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.database_url, "sqlite://pairings.db");
        assert_eq!(config.max_connections, 5);
        assert!(!config.is_in_memory());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_in_memory_config() {
        let config = StoreConfig::in_memory();
        assert!(config.is_in_memory());
        assert_eq!(config.max_connections, 1);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"database_url": "sqlite://other.db"}"#).unwrap();
        assert_eq!(config.database_url, "sqlite://other.db");
        assert_eq!(config.round_trip_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_zero_pool_rejected() {
        let config = StoreConfig {
            max_connections: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
