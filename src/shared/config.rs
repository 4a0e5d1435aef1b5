use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub sync: SyncConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Upper bound on a single syncer call, which runs inside the connect transaction.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite:data/events.db?mode=rwc".to_string(),
                max_connections: 5,
                connection_timeout: 30,
            },
            sync: SyncConfig { timeout_secs: 30 },
            logging: LoggingConfig {
                filter: "events_admin=debug,info".to_string(),
            },
        }
    }
}

impl SyncConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("EVENTS_ADMIN_DATABASE_URL") {
            let v = v.trim();
            if !v.is_empty() {
                cfg.database.url = v.to_string();
            }
        }
        if let Some(value) = lookup("EVENTS_ADMIN_DB_MAX_CONNECTIONS").and_then(|v| parse_u32(&v))
        {
            cfg.database.max_connections = value;
        }
        if let Some(value) =
            lookup("EVENTS_ADMIN_DB_CONNECTION_TIMEOUT").and_then(|v| parse_u64(&v))
        {
            cfg.database.connection_timeout = value;
        }
        if let Some(value) = lookup("EVENTS_ADMIN_SYNC_TIMEOUT_SECS").and_then(|v| parse_u64(&v)) {
            cfg.sync.timeout_secs = value;
        }
        if let Some(v) = lookup("EVENTS_ADMIN_LOG") {
            if !v.trim().is_empty() {
                cfg.logging.filter = v.trim().to_string();
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.url.trim().is_empty() {
            return Err("Database url must not be empty".to_string());
        }
        if self.database.max_connections == 0 {
            return Err("Database max_connections must be greater than 0".to_string());
        }
        if self.sync.timeout_secs == 0 {
            return Err("Sync timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Boolean-like flag parsing shared by config and request handling.
pub fn parse_bool(s: &str, default: bool) -> bool {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "t" | "true" | "y" | "yes" | "on" => true,
        "0" | "f" | "false" | "n" | "no" | "off" => false,
        _ => default,
    }
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

fn parse_u32(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}
