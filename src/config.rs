/// Configuration management for Blog Service
///
/// This module handles loading and managing configuration from environment
/// variables.
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Document store (headless CMS) configuration
    pub cms: CmsConfig,
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
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// Document store configuration
///
/// The store is addressed by project id and dataset name. `base_url` is
/// normally derived from the project id; tests point it at a local mock
/// server instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsConfig {
    /// Hosted project identifier
    pub project_id: String,
    /// Dataset name within the project
    pub dataset: String,
    /// Store API version (date-based)
    pub api_version: String,
    /// Write token; required for comment submission
    pub token: Option<String>,
    /// Explicit API base URL override
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: std::env::var("BLOG_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("BLOG_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
            },
            cors: {
                let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
                    Ok(value) => value,
                    Err(_) if app_env.eq_ignore_ascii_case("production") => {
                        return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string())
                    }
                    Err(_) => "http://localhost:3000".to_string(),
                };

                if app_env.eq_ignore_ascii_case("production") && allowed_origins.trim() == "*" {
                    return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
                }

                CorsConfig { allowed_origins }
            },
            cms: {
                let project_id = match std::env::var("CMS_PROJECT_ID") {
                    Ok(value) if !value.trim().is_empty() => value,
                    _ if app_env.eq_ignore_ascii_case("production") => {
                        return Err("CMS_PROJECT_ID must be set in production".to_string())
                    }
                    _ => "dev-project".to_string(),
                };

                CmsConfig {
                    project_id,
                    dataset: std::env::var("CMS_DATASET")
                        .unwrap_or_else(|_| "production".to_string()),
                    api_version: std::env::var("CMS_API_VERSION")
                        .unwrap_or_else(|_| "2021-10-21".to_string()),
                    token: std::env::var("CMS_TOKEN").ok().filter(|t| !t.is_empty()),
                    base_url: std::env::var("CMS_BASE_URL").ok().filter(|u| !u.is_empty()),
                }
            },
        })
    }
}
