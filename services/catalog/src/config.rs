//! Server configuration for the catalog service

use std::env;

/// Default origin allowed to call the API cross-origin during development
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// Whether the process runs in production mode
    pub production: bool,
    /// Directory holding the built client bundle, served in production
    pub static_dir: String,
    /// Origins allowed to call the API cross-origin
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    ///
    /// # Environment Variables
    /// - `PORT`: Listen port (default: 5000)
    /// - `APP_ENV`: "production" enables static hosting (`NODE_ENV` is
    ///   accepted as a fallback spelling)
    /// - `STATIC_DIR`: Built client bundle location (default: "public")
    /// - `ALLOWED_ORIGINS`: Comma-separated origins appended to the default
    ///   development allow-list
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5000);

        let environment = env::var("APP_ENV")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());

        let mut allowed_origins = vec![DEFAULT_ALLOWED_ORIGIN.to_string()];
        if let Ok(extra) = env::var("ALLOWED_ORIGINS") {
            for origin in extra.split(',') {
                let origin = origin.trim();
                if !origin.is_empty() && !allowed_origins.iter().any(|o| o == origin) {
                    allowed_origins.push(origin.to_string());
                }
            }
        }

        ServerConfig {
            port,
            production: environment == "production",
            static_dir,
            allowed_origins,
        }
    }
}
