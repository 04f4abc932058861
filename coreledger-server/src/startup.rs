//! Server startup and shutdown logic

use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;

use coreledger_config::{CoreLedgerConfig, DatabaseConfig};
use coreledger_rest_api::{create_rest_app, AppConfig, AppContext};
use coreledger_storage::{DatabaseConfig as StorageConfig, DatabaseConnection, RepositoryFactory};

/// Server application struct
pub struct Server {
    config: CoreLedgerConfig,
    database: DatabaseConnection,
}

impl Server {
    /// Connect to the database and apply migrations
    ///
    /// Logging must already be initialized by the caller.
    pub async fn new(config: CoreLedgerConfig) -> Result<Self> {
        let database = DatabaseConnection::new(storage_config(&config.database))
            .await
            .context("Failed to connect to database")?;
        database.migrate().await.context("Failed to run database migrations")?;

        Ok(Self { config, database })
    }

    /// Build the complete application router
    pub fn build_app(&self) -> Router {
        let repositories = Arc::new(RepositoryFactory::new(self.database.clone()));
        let context = AppContext::new(repositories, Arc::new(self.database.clone()));
        create_rest_app(context, app_config(&self.config))
    }

    /// Serve until a shutdown signal arrives, then close the database
    pub async fn start(self) -> Result<()> {
        let addr = self.config.server.socket_addr()?;
        let app = self.build_app();

        self.log_config_summary();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        self.database.close().await?;
        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Log configuration summary
    fn log_config_summary(&self) {
        let server = &self.config.server;
        tracing::info!("=== CoreLedger Server Configuration ===");
        tracing::info!("Environment: {}", self.config.environment);
        tracing::info!("Bind Address: {}:{}", server.bind_address, server.port);
        tracing::info!("API Prefix: {}", server.api_prefix);
        tracing::info!("Database: {}", self.config.database.url);
        tracing::info!("CORS: {}", if server.enable_cors { "Enabled" } else { "Disabled" });
        tracing::info!("Tracing: {}", if server.enable_tracing { "Enabled" } else { "Disabled" });
        tracing::info!("=======================================");
    }
}

/// Storage settings from the database configuration domain
pub fn storage_config(database: &DatabaseConfig) -> StorageConfig {
    StorageConfig {
        url: database.url.clone(),
        max_connections: database.max_connections,
        connection_timeout: database.connection_timeout,
        query_timeout: database.query_timeout,
    }
}

/// REST application settings; error details are exposed only in development
pub fn app_config(config: &CoreLedgerConfig) -> AppConfig {
    AppConfig {
        enable_cors: config.server.enable_cors,
        enable_tracing: config.server.enable_tracing,
        api_prefix: config.server.api_prefix.clone(),
        expose_error_details: config.environment.is_development(),
    }
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
