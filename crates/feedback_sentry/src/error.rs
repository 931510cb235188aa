use std::path::PathBuf;

use thiserror::Error;

/// Raised only while configuring or constructing a reporter; submission
/// itself is fire-and-forget and never errors.
#[derive(Debug, Error)]
pub enum ReporterError {
    #[error("invalid sentry dsn {dsn:?}: {source}")]
    InvalidDsn {
        dsn: String,
        source: sentry::types::ParseDsnError,
    },
    #[error("failed to read reporter config (path={path:?}): {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse reporter config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
