use thiserror::Error;

/// Errors raised while installing the logging pipeline
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,

    #[error("Failed to create log file in {directory}: {message}")]
    FileSink { directory: String, message: String },
}
