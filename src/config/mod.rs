//! Configuration Module
//!
//! Environment-driven configuration for the HTTP server and the storage
//! backend. A `.env` file is honoured by the binaries through `dotenv`.

use std::fmt;
use std::str::FromStr;

use crate::database::DatabaseConfig;
use crate::utils::error::AppError;

/// Environment variable helpers
pub mod env {
    use std::env;

    /// Get environment variable as string with default
    pub fn get_string(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    /// Get environment variable as u16 with default
    pub fn get_u16(key: &str, default: u16) -> u16 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as u32 with default
    pub fn get_u32(key: &str, default: u32) -> u32 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as u64 with default
    pub fn get_u64(key: &str, default: u64) -> u64 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as usize with default
    pub fn get_usize(key: &str, default: usize) -> usize {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}

/// Default multipart upload limit: 10 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Where accounts, files and customers are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// PostgreSQL through `DATABASE_URL`
    #[default]
    Postgres,
    /// Process memory; data is lost on restart
    Memory,
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" | "in-memory" => Ok(Self::Memory),
            other => Err(AppError::Configuration(format!(
                "Unknown STORAGE_BACKEND '{}', expected 'postgres' or 'memory'",
                other
            ))),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres => write!(f, "postgres"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Application configuration combining all service configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Selected storage backend
    pub storage: StorageBackend,

    /// Database configuration, present when the backend is PostgreSQL
    pub database: Option<DatabaseConfig>,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub cors_origins: Vec<String>,
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: env::get_string("SERVER_HOST", "0.0.0.0"),
            port: env::get_u16("SERVER_PORT", 8080),
            log_level: env::get_string("LOG_LEVEL", "info"),
            cors_origins: env::get_string("CORS_ORIGINS", "*")
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            max_upload_bytes: env::get_usize("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// True when any origin may call the API
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

impl AppConfig {
    /// Load complete application configuration from environment
    pub fn from_env() -> Result<Self, AppError> {
        let storage: StorageBackend = env::get_string("STORAGE_BACKEND", "postgres").parse()?;

        let database = match storage {
            StorageBackend::Postgres => Some(DatabaseConfig::from_env().map_err(|_| {
                AppError::Configuration(
                    "DATABASE_URL must be set when STORAGE_BACKEND is postgres".to_string(),
                )
            })?),
            StorageBackend::Memory => None,
        };

        Ok(Self {
            server: ServerConfig::default(),
            storage,
            database,
        })
    }

    /// Validate the complete configuration
    pub fn validate(&self) -> Result<(), AppError> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "Server port must be greater than 0".into(),
            ));
        }

        if self.server.max_upload_bytes == 0 {
            return Err(AppError::Configuration(
                "MAX_UPLOAD_BYTES must be greater than 0".into(),
            ));
        }

        match (&self.storage, &self.database) {
            (StorageBackend::Postgres, None) => {
                return Err(AppError::Configuration(
                    "PostgreSQL backend selected without database configuration".into(),
                ));
            }
            (StorageBackend::Postgres, Some(db)) => {
                if db.max_connections == 0 {
                    return Err(AppError::Configuration(
                        "Database max_connections must be greater than 0".into(),
                    ));
                }
                if db.min_connections > db.max_connections {
                    return Err(AppError::Configuration(
                        "Database min_connections cannot be greater than max_connections".into(),
                    ));
                }
            }
            (StorageBackend::Memory, _) => {}
        }

        Ok(())
    }
}
