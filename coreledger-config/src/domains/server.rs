//! HTTP server configuration

use crate::error::{ConfigError, ConfigResult};
use crate::validation::{validate_port_range, validate_required_string, Validatable};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "crate::domains::utils::default_true")]
    pub enable_cors: bool,

    /// Whether request tracing spans are installed
    #[serde(default = "crate::domains::utils::default_true")]
    pub enable_tracing: bool,

    /// Path prefix for all resource routes
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            enable_cors: true,
            enable_tracing: true,
            api_prefix: default_api_prefix(),
        }
    }
}

impl ServerConfig {
    /// Socket address the listener binds to
    pub fn socket_addr(&self) -> ConfigResult<SocketAddr> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|e| self.validation_error(format!("Invalid bind address '{}': {}", self.bind_address, e)))
    }
}

impl Validatable for ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(&self.bind_address, "bind_address", self.domain_name())?;
        validate_port_range(self.port, "port", self.domain_name())?;
        self.socket_addr()?;

        if !self.api_prefix.starts_with('/') || (self.api_prefix.len() > 1 && self.api_prefix.ends_with('/')) {
            return Err(ConfigError::DomainError {
                domain: self.domain_name().to_string(),
                message: format!(
                    "api_prefix must start with '/' and must not end with '/', got '{}'",
                    self.api_prefix
                ),
            });
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "server"
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_api_prefix() -> String {
    "/api".to_string()
}
