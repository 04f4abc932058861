use super::config::DatabaseConfig;
use async_trait::async_trait;
use coreledger_core::{ClassifiedFault, FaultResult};
use coreledger_interfaces::HealthCheck;
use sea_orm::{ConnectOptions, Database, DatabaseConnection as SeaConnection, DbErr};
use std::future::Future;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Database connection wrapper with configuration
#[derive(Clone)]
pub struct DatabaseConnection {
    connection: SeaConnection,
    config: DatabaseConfig,
}

/// Database-related errors
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error: {0}")]
    DbError(#[from] DbErr),

    #[error("Database operation '{operation}' timed out after {}ms", .after.as_millis())]
    Timeout { operation: &'static str, after: Duration },

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<DatabaseError> for ClassifiedFault {
    fn from(err: DatabaseError) -> Self {
        // The translation layer logs the fault at ERROR with the request ids
        debug!(error = %err, "Database error occurred");
        ClassifiedFault::unclassified_from(err)
    }
}

impl DatabaseConnection {
    /// Create a new database connection with configuration
    pub async fn new(config: DatabaseConfig) -> Result<Self, DatabaseError> {
        info!("Connecting to database: {}", config.url);

        Self::ensure_sqlite_file_exists(&config.url)?;

        let mut opts = ConnectOptions::new(&config.url);
        opts.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(config.connection_timeout)
            .acquire_timeout(config.connection_timeout)
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        // An in-memory database lives only as long as its connection
        if !config.is_in_memory() {
            opts.idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(3600));
        }

        let connection = Database::connect(opts).await?;

        debug!(
            "Database connection established with {} max connections",
            config.max_connections
        );

        Ok(Self { connection, config })
    }

    /// Create the parent directory of a file-based SQLite database
    fn ensure_sqlite_file_exists(database_url: &str) -> Result<(), DatabaseError> {
        if !database_url.starts_with("sqlite:") {
            debug!("Non-SQLite database detected, skipping file creation logic");
            return Ok(());
        }
        if database_url.contains(":memory:") {
            debug!("Using in-memory SQLite database");
            return Ok(());
        }

        let file_path = sqlite_file_path(database_url)
            .ok_or_else(|| DatabaseError::ConfigError(format!("Invalid SQLite URL format: {}", database_url)))?;
        let path = Path::new(file_path);

        if let Some(parent_dir) = path.parent() {
            if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
                info!("Creating database directory: {:?}", parent_dir);
                std::fs::create_dir_all(parent_dir).map_err(|e| {
                    DatabaseError::ConfigError(format!(
                        "Failed to create database directory {:?}: {}",
                        parent_dir, e
                    ))
                })?;
            }
        }

        if path.exists() {
            debug!("Using existing database file: {:?}", path);
        } else {
            info!("Database file will be created by SQLite: {:?}", path);
        }

        Ok(())
    }

    /// Get the underlying Sea-ORM connection
    pub fn get_connection(&self) -> &SeaConnection {
        &self.connection
    }

    /// Get database configuration
    pub fn get_config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Await a storage future, bounded by the configured query timeout
    pub async fn run<T, F>(&self, operation: &'static str, fut: F) -> Result<T, DatabaseError>
    where
        F: Future<Output = Result<T, DbErr>>,
    {
        match tokio::time::timeout(self.config.query_timeout, fut).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(DatabaseError::Timeout {
                operation,
                after: self.config.query_timeout,
            }),
        }
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        use sea_orm_migration::MigratorTrait;

        info!("Running database migrations");

        super::migrations::Migrator::up(&self.connection, None)
            .await
            .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;

        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Check database connectivity
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        debug!("Pinging database");
        self.run("ping", self.connection.ping()).await.map_err(|e| {
            debug!("Database ping failed: {}", e);
            e
        })
    }

    /// Close the database connection
    pub async fn close(self) -> Result<(), DatabaseError> {
        info!("Closing database connection");
        self.connection.close().await?;
        debug!("Database connection closed");
        Ok(())
    }
}

#[async_trait]
impl HealthCheck for DatabaseConnection {
    async fn health_check(&self) -> FaultResult<()> {
        Ok(self.ping().await?)
    }
}

/// File path part of a SQLite URL, without scheme or query string
fn sqlite_file_path(database_url: &str) -> Option<&str> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    (!path.is_empty()).then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_file_path() {
        assert_eq!(sqlite_file_path("sqlite://coreledger.db?mode=rwc"), Some("coreledger.db"));
        assert_eq!(sqlite_file_path("sqlite:///var/lib/ledger.db"), Some("/var/lib/ledger.db"));
        assert_eq!(sqlite_file_path("sqlite:data/ledger.db"), Some("data/ledger.db"));
        assert_eq!(sqlite_file_path("sqlite://"), None);
        assert_eq!(sqlite_file_path("postgres://localhost"), None);
    }

    #[tokio::test]
    async fn test_in_memory_database() {
        let db = DatabaseConnection::new(DatabaseConfig::in_memory()).await.unwrap();
        assert!(db.ping().await.is_ok());
        assert!(db.migrate().await.is_ok());
        assert!(db.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_creates_parent_directory_for_file_database() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("ledger.db");
        let config = DatabaseConfig {
            url: format!("sqlite://{}?mode=rwc", db_path.display()),
            max_connections: 1,
            ..DatabaseConfig::default()
        };

        let db = DatabaseConnection::new(config).await.unwrap();
        db.migrate().await.unwrap();
        assert!(db_path.parent().unwrap().exists());
        db.close().await.unwrap();
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_conversion_does_not_log_at_error() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let fault = tracing::subscriber::with_default(subscriber, || {
            ClassifiedFault::from(DatabaseError::MigrationError("no such table".to_string()))
        });
        assert_eq!(fault.status_code(), 500);

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Database error occurred"), "{}", output);
        assert!(output.contains("DEBUG"), "{}", output);
        assert!(!output.contains("ERROR"), "{}", output);
    }

    #[tokio::test]
    async fn test_run_times_out_into_unclassified_fault() {
        let config = DatabaseConfig {
            query_timeout: Duration::from_millis(5),
            ..DatabaseConfig::in_memory()
        };
        let db = DatabaseConnection::new(config).await.unwrap();

        let slow = async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok::<_, DbErr>(())
        };
        let err = db.run("slow_query", slow).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Timeout { operation: "slow_query", .. }));

        let fault = ClassifiedFault::from(err);
        assert_eq!(fault.status_code(), 500);
        assert!(fault.detail().contains("timed out"));
    }
}
