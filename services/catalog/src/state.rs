//! Application state shared across handlers

use sqlx::SqlitePool;
use std::time::Instant;

use crate::repositories::ProductRepository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub product_repository: ProductRepository,
    /// Process start time, reported by the health probe
    pub started_at: Instant,
}

impl AppState {
    /// Build the state around an open pool
    pub fn new(db_pool: SqlitePool) -> Self {
        let product_repository = ProductRepository::new(db_pool.clone());
        Self {
            db_pool,
            product_repository,
            started_at: Instant::now(),
        }
    }
}
