use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::ReporterError;

/// Destination and identity of the reporting client.
///
/// Set once when a [`SentryReporter`](crate::SentryReporter) is built and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReporterConfig {
    /// Application release identifier attached to every captured event.
    pub release: String,
    /// Sentry DSN naming the destination project.
    pub dsn: String,
    /// Static tags applied to the client scope once at construction.
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl ReporterConfig {
    pub fn new(release: impl Into<String>, dsn: impl Into<String>) -> Self {
        Self {
            release: release.into(),
            dsn: dsn.into(),
            tags: BTreeMap::new(),
        }
    }

    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ReporterError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ReporterError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ReporterError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}

/// Construction-time options for [`SentryReporter`](crate::SentryReporter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReporterOptions {
    pub(crate) quiet_init: bool,
}

impl ReporterOptions {
    /// Suppress the single diagnostic line emitted while the client
    /// initializes.
    pub fn quiet_init(mut self, enabled: bool) -> Self {
        self.quiet_init = enabled;
        self
    }
}
