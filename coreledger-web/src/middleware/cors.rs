use axum::http::{HeaderName, HeaderValue, Method};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::correlation::{CORRELATION_ID_HEADER, TRACE_ID_HEADER};

/// CORS configuration for different environments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins (use ["*"] for any origin in development only)
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    /// Headers the browser may read from responses
    pub expose_headers: Vec<String>,
    pub allow_credentials: bool,
    /// Maximum age for preflight cache
    pub max_age: Option<Duration>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "https://localhost:3000".to_string(),
                "https://127.0.0.1:3000".to_string(),
            ],
            allowed_methods: ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            allowed_headers: vec![
                "content-type".to_string(),
                "accept".to_string(),
                CORRELATION_ID_HEADER.to_ascii_lowercase(),
            ],
            expose_headers: vec![
                CORRELATION_ID_HEADER.to_ascii_lowercase(),
                TRACE_ID_HEADER.to_ascii_lowercase(),
            ],
            allow_credentials: false,
            max_age: Some(Duration::from_secs(3600)), // 1 hour
        }
    }
}

impl CorsConfig {
    /// Permissive settings for local development
    pub fn development() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            ..Default::default()
        }
    }

    /// Strict settings with explicit origins
    pub fn production(allowed_origins: Vec<String>) -> Self {
        Self {
            allowed_origins,
            ..Default::default()
        }
    }

    fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }

    /// Validate CORS configuration for security
    pub fn validate(&self) -> Result<(), String> {
        if self.allows_any_origin() && self.allow_credentials {
            return Err("Cannot use wildcard origin '*' with allow_credentials: true".to_string());
        }
        if let Some(origin) = self
            .allowed_origins
            .iter()
            .find(|origin| *origin != "*" && origin.parse::<HeaderValue>().is_err())
        {
            return Err(format!("Invalid origin in CORS configuration: {}", origin));
        }
        Ok(())
    }
}

/// Create CORS layer with custom configuration
///
/// An invalid configuration is logged and replaced by the secure defaults.
pub fn cors_layer_with_config(config: CorsConfig) -> CorsLayer {
    let config = match config.validate() {
        Ok(()) => config,
        Err(e) => {
            tracing::error!("Invalid CORS configuration: {}, falling back to secure defaults", e);
            CorsConfig::default()
        }
    };

    let mut cors = CorsLayer::new();

    if config.allows_any_origin() {
        tracing::warn!("CORS configured to allow any origin - use only in development");
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors = cors.allow_origin(AllowOrigin::list(origins));
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|method| method.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    let headers: Vec<HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|header| header.parse().ok())
        .collect();
    cors = cors.allow_headers(headers);

    let expose_headers: Vec<HeaderName> = config
        .expose_headers
        .iter()
        .filter_map(|header| header.parse().ok())
        .collect();
    cors = cors.expose_headers(expose_headers);

    if config.allow_credentials {
        cors = cors.allow_credentials(true);
    }
    if let Some(max_age) = config.max_age {
        cors = cors.max_age(max_age);
    }

    cors
}
