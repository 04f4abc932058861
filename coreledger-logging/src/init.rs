use coreledger_config::{FileLogConfig, LogFormat, LogRotation, LoggingConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::error::LoggingError;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps background log writers alive
///
/// Dropping the guard, or calling [`LoggingGuard::shutdown`], flushes every
/// pending line to the file sink.
#[must_use = "dropping the guard stops file logging"]
#[derive(Debug, Default)]
pub struct LoggingGuard {
    worker_guards: Vec<WorkerGuard>,
}

impl LoggingGuard {
    /// Whether a file sink is attached
    pub fn has_file_sink(&self) -> bool {
        !self.worker_guards.is_empty()
    }

    /// Flush and stop the background writers
    pub fn shutdown(self) {
        drop(self.worker_guards);
    }
}

/// Install the global subscriber described by `config`
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard, LoggingError> {
    let mut guard = LoggingGuard::default();
    let mut layers: Vec<BoxedLayer> = vec![console_layer(config.format)];

    if let Some(file) = &config.file {
        let appender = build_file_appender(file)?;
        let (writer, worker_guard) = tracing_appender::non_blocking(appender);
        layers.push(
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_ansi(false)
                .with_writer(writer)
                .boxed(),
        );
        guard.worker_guards.push(worker_guard);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(build_env_filter(config))
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    tracing::debug!(
        level = config.level.as_str(),
        file_sink = guard.has_file_sink(),
        "Logging initialized"
    );
    Ok(guard)
}

/// Filter from `RUST_LOG`, falling back to the configured level
pub fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.as_str()))
}

fn console_layer(format: LogFormat) -> BoxedLayer {
    match format {
        LogFormat::Json => fmt::layer().json().with_current_span(true).boxed(),
        LogFormat::Compact => fmt::layer().compact().boxed(),
        LogFormat::Pretty => fmt::layer().pretty().boxed(),
        LogFormat::Text => fmt::layer().with_target(true).boxed(),
    }
}

fn build_file_appender(file: &FileLogConfig) -> Result<RollingFileAppender, LoggingError> {
    let rotation = match file.rotation {
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Never => Rotation::NEVER,
    };

    RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(file.file_prefix.as_str())
        .filename_suffix("log")
        .build(&file.directory)
        .map_err(|e| LoggingError::FileSink {
            directory: file.directory.display().to_string(),
            message: e.to_string(),
        })
}
