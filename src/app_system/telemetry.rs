use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the global fmt subscriber, filtered by `RUST_LOG`.
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=user_directory::directory=debug cargo run
/// ```
pub fn setup_tracing() -> Result<(), AppError> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_env_filter(directives.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .try_init()
        .map_err(AppError::TracingInit)
}

/// Parses filter directives, falling back to [`DEFAULT_LOG_FILTER`] when none are given.
pub fn build_env_filter(directives: Option<&str>) -> Result<EnvFilter, AppError> {
    match directives {
        Some(directives) if !directives.trim().is_empty() => Ok(EnvFilter::try_new(directives)?),
        _ => Ok(EnvFilter::new(DEFAULT_LOG_FILTER)),
    }
}
