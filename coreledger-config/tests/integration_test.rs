//! Integration tests for coreledger-config

use coreledger_config::*;
use std::io::Write;
use std::time::Duration;
use temp_env::with_vars;

#[test]
fn test_default_config_validation() {
    let config = CoreLedgerConfig::default();
    assert!(config.validate_all().is_ok());
}

#[test]
fn test_config_loader_from_env() {
    let vars = vec![
        ("CORELEDGER_ENVIRONMENT", Some("development")),
        ("CORELEDGER_SERVER_PORT", Some("8080")),
        ("CORELEDGER_DATABASE_URL", Some("sqlite::memory:")),
        ("CORELEDGER_DATABASE_MAX_CONNECTIONS", Some("1")),
        ("CORELEDGER_DATABASE_QUERY_TIMEOUT", Some("5")),
        ("CORELEDGER_LOG_LEVEL", Some("debug")),
        ("CORELEDGER_LOG_FORMAT", Some("json")),
    ];

    with_vars(vars, || {
        let config = ConfigLoader::new().from_env().unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.database.max_connections, 1);
        assert_eq!(config.database.query_timeout, Duration::from_secs(5));
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    });
}

#[test]
fn test_invalid_env_override_is_reported() {
    with_vars(vec![("CORELEDGER_SERVER_PORT", Some("eighty"))], || {
        let err = ConfigLoader::new().from_env().unwrap_err();
        match err {
            ConfigError::InvalidEnv { variable, value, .. } => {
                assert_eq!(variable, "CORELEDGER_SERVER_PORT");
                assert_eq!(value, "eighty");
            }
            other => panic!("unexpected error: {}", other),
        }
    });
}

#[test]
fn test_yaml_file_with_env_override() {
    let yaml = r#"
environment: development

server:
  bind_address: "0.0.0.0"
  port: 5050
  enable_cors: false
  api_prefix: "/api"

database:
  url: "sqlite://data/ledger.db?mode=rwc"
  max_connections: 4
  connection_timeout: 10
  query_timeout: 15

logging:
  level: warn
  format: compact
  file:
    directory: "/var/log/coreledger"
    rotation: hourly
"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    with_vars(vec![("CORELEDGER_SERVER_PORT", Some("6000"))], || {
        let config = ConfigLoader::new().from_file(file.path()).unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert_eq!(config.server.port, 6000);
        assert!(!config.server.enable_cors);
        assert!(config.server.enable_tracing);
        assert_eq!(config.database.max_connections, 4);
        assert_eq!(config.database.connection_timeout, Duration::from_secs(10));
        assert_eq!(config.logging.level, LogLevel::Warn);
        let sink = config.logging.file.as_ref().unwrap();
        assert_eq!(sink.rotation, LogRotation::Hourly);
        assert_eq!(sink.file_prefix, "coreledger");
    });
}

#[test]
fn test_invalid_domain_fails_load() {
    temp_env::with_var_unset("CORELEDGER_SERVER_PORT", || {
        let err = ConfigLoader::new().from_yaml("server:\n  port: 0\n").unwrap_err();
        match err {
            ConfigError::DomainError { domain, .. } => assert_eq!(domain, "server"),
            other => panic!("unexpected error: {}", other),
        }
    });
}

#[test]
fn test_missing_file_is_read_error() {
    let err = ConfigLoader::new().from_file("/nonexistent/coreledger.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::FileRead { .. }));
    assert!(err.to_string().contains("/nonexistent/coreledger.yaml"));
}

#[test]
fn test_custom_prefix() {
    with_vars(vec![("LEDGER_TEST_SERVER_PORT", Some("7000"))], || {
        let config = ConfigLoader::with_prefix("LEDGER_TEST").from_env().unwrap();
        assert_eq!(config.server.port, 7000);
    });
}
