use crate::errors::{AppError, AppResult};
use std::path::Path;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;

/// Route tracing output to daily-rotated files under `log_dir`, keeping the
/// terminal free for the screens. `RUST_LOG` wins over `level`.
pub fn enable_logging(log_dir: &Path, level: &str) -> AppResult<()> {
    let appender = tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(5)
        .filename_prefix("rtimetracker")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| AppError::Logging(e.to_string()))?;

    let filter = std::env::var("RUST_LOG")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| {
            format!(
                "{}={level}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
            )
        });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
