//! Database configuration module

use serde::{Deserialize, Serialize};

/// Default pool size
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Database configuration for MySQL connections
#[derive(Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database server host
    pub host: String,

    /// Database server port
    pub port: u16,

    /// Database user
    pub user: String,

    /// Database password
    pub password: String,

    /// Database (schema) name
    pub name: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Slow query threshold in milliseconds
    #[serde(default = "default_slow_query_threshold")]
    pub slow_query_threshold: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: String::from("localhost"),
            port: 3306,
            user: String::from("root"),
            password: String::new(),
            name: String::from("contacts"),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            connect_timeout: default_connect_timeout(),
            slow_query_threshold: default_slow_query_threshold(),
        }
    }
}

impl DatabaseConfig {
    /// Connection URL with the password masked, suitable for logs
    pub fn redacted_url(&self) -> String {
        format!(
            "mysql://{}:****@{}:{}/{}",
            self.user, self.host, self.port, self.name
        )
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.redacted_url())
            .field("max_connections", &self.max_connections)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_slow_query_threshold() -> u64 {
    1000 // 1 second
}
