use thiserror::Error;

/// Errors raised while setting up or running the demo application.
///
/// Directory operations themselves never fail; a missing user is `None`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(#[from] tracing_subscriber::filter::ParseError),
    #[error("Failed to install tracing subscriber: {0}")]
    TracingInit(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
