use thiserror::Error;

/// Errors surfaced by the demo library.
///
/// Driver errors pass through transparently; everything else is labeled with
/// the step that failed so a demo's single top-level error print is enough
/// to see what went wrong.
#[derive(Debug, Error)]
pub enum DemoDbError {
    #[error(transparent)]
    Postgres(#[from] tokio_postgres::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("SQL execution error: {0}")]
    ExecutionError(String),
}
