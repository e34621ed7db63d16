/// Configuration management for the VibeHunt service
///
/// This module handles loading and managing configuration from environment
/// variables (with `.env` support at startup).
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Document store configuration
    pub database: DatabaseConfig,
    /// Startup bootstrap configuration
    pub bootstrap: BootstrapConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins; `*` opens the API to any
    /// origin, which is the default posture for this public board.
    pub allowed_origins: String,
}

/// Document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Store connection URL. Absent means the store is unavailable and
    /// store-backed endpoints report a server error per request.
    pub url: Option<String>,
    /// Logical database name
    pub name: String,
}

/// Startup bootstrap configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Seed demo posts/comments/votes when the post collection is empty
    pub seed_demo: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            app: AppConfig {
                env: app_env,
                host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: match std::env::var("PORT") {
                    Ok(raw) => raw
                        .parse()
                        .map_err(|e| format!("Failed to parse PORT='{}': {}", raw, e))?,
                    Err(_) => 8000,
                },
            },
            cors: CorsConfig {
                allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "*".to_string()),
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL").ok(),
                name: std::env::var("DATABASE_NAME").unwrap_or_else(|_| "vibehunt".to_string()),
            },
            bootstrap: BootstrapConfig {
                seed_demo: match std::env::var("SEED_DEMO_DATA") {
                    Ok(raw) => raw
                        .parse()
                        .map_err(|e| format!("Failed to parse SEED_DEMO_DATA='{}': {}", raw, e))?,
                    Err(_) => true,
                },
            },
        })
    }
}
