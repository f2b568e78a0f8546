//! Database module for handling SQLite connections and operations
//!
//! This module provides connection pooling, configuration, and health checks
//! for the SQLite database backing the catalog.

use crate::error::{DatabaseError, DatabaseResult};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

/// Database configuration struct
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Create a new DatabaseConfig from environment variables
    ///
    /// # Environment Variables
    /// - `DB_PATH`: Explicit database file path, overrides everything else
    /// - `DATA_DIR`: Directory holding the database file (default: "./data")
    /// - `SITE_NAME`: Names the per-site database file `<site>.sqlite`
    ///   (default: "local"; `WEBSITE_SITE_NAME` is accepted as a fallback
    ///   spelling for hosted deployments)
    /// - `DATABASE_MAX_CONNECTIONS`: Maximum number of connections (default: 5)
    pub fn from_env() -> DatabaseResult<Self> {
        let site_name = env::var("SITE_NAME")
            .or_else(|_| env::var("WEBSITE_SITE_NAME"))
            .unwrap_or_else(|_| "local".to_string());

        let db_path = match env::var("DB_PATH") {
            Ok(path) => PathBuf::from(path),
            Err(_) => {
                let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());
                Path::new(&data_dir).join(format!("{site_name}.sqlite"))
            }
        };

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            db_path,
            max_connections,
        })
    }
}

/// Initialize a SQLite connection pool
///
/// Creates the data directory and the database file if they do not exist
/// yet, then opens the pool that is shared for the process lifetime.
///
/// # Arguments
///
/// * `config` - Database configuration
///
/// # Returns
///
/// * `DatabaseResult<SqlitePool>` - SQLite connection pool or error
pub async fn init_pool(config: &DatabaseConfig) -> DatabaseResult<SqlitePool> {
    if let Some(parent) = config.db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DatabaseError::Configuration(format!(
                    "Failed to create data directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(&config.db_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .map_err(DatabaseError::Connection)?;

    info!("SQLite database opened at {}", config.db_path.display());

    Ok(pool)
}

/// Open an in-memory SQLite pool, used by integration tests
///
/// The pool is pinned to a single connection so every query sees the same
/// in-memory database.
pub async fn init_memory_pool() -> DatabaseResult<SqlitePool> {
    let options = SqliteConnectOptions::new().in_memory(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(DatabaseError::Connection)?;

    Ok(pool)
}

/// Check database connectivity
///
/// # Arguments
///
/// * `pool` - SQLite connection pool
///
/// # Returns
///
/// * `DatabaseResult<bool>` - True if connection is successful, false otherwise
pub async fn health_check(pool: &SqlitePool) -> DatabaseResult<bool> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(DatabaseError::Query)?;

    Ok(true)
}
