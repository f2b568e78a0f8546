//! Response and request models mirrored from the catalog API

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Product as returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

/// Payload for product creation and full updates
#[derive(Debug, Clone, Serialize)]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

impl ProductPayload {
    /// Payload with just the required fields
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            description: None,
            image_url: None,
            category: None,
        }
    }
}

/// Confirmation message returned by mutating endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Liveness probe response
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub uptime_seconds: u64,
}

/// Error envelope used by all non-OK API responses
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: String,
}
