use std::sync::Arc;

use async_trait::async_trait;
use feedback::{FakeReporter, FeedbackReport, FeedbackReporter};
use tracing::debug;

use crate::{ReporterConfig, ReporterError, ReporterOptions};

/// Forwards user feedback to Sentry.
///
/// Holds the client guard so pending captures flush when the reporter is
/// dropped. Construction is the only fallible step; submission is
/// fire-and-forget.
pub struct SentryReporter {
    _guard: sentry::ClientInitGuard,
}

impl std::fmt::Debug for SentryReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentryReporter").finish_non_exhaustive()
    }
}

impl SentryReporter {
    pub fn new(config: ReporterConfig) -> Result<Self, ReporterError> {
        Self::with_options(config, ReporterOptions::default())
    }

    pub fn with_options(
        config: ReporterConfig,
        options: ReporterOptions,
    ) -> Result<Self, ReporterError> {
        if !options.quiet_init {
            debug!(release = %config.release, "initializing feedback reporting");
        }

        let dsn: sentry::types::Dsn =
            config
                .dsn
                .parse()
                .map_err(|source| ReporterError::InvalidDsn {
                    dsn: config.dsn.clone(),
                    source,
                })?;

        let guard = sentry::init(sentry::ClientOptions {
            dsn: Some(dsn),
            release: Some(config.release.into()),
            ..Default::default()
        });

        // Static tags live on the scope for the lifetime of the client.
        sentry::configure_scope(|scope| {
            for (key, value) in &config.tags {
                scope.set_tag(key, value);
            }
        });

        Ok(Self { _guard: guard })
    }
}

#[async_trait]
impl FeedbackReporter for SentryReporter {
    async fn submit(&self, report: FeedbackReport) {
        deliver(&report);
    }
}

/// Hands one report to the current client.
///
/// Identity context holds the submitter email for exactly the duration of
/// the capture and is cleared before returning, so it never leaks into an
/// unrelated later capture.
fn deliver(report: &FeedbackReport) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::protocol::User {
            email: Some(report.email.clone().unwrap_or_default()),
            ..Default::default()
        }));
    });

    sentry::with_scope(
        |scope| scope.set_tag("category", &report.category),
        || {
            sentry::capture_message(&report.feedback, sentry::Level::Info);
        },
    );

    sentry::configure_scope(|scope| scope.set_user(None));
}

/// Picks the Sentry-backed reporter when configuration is present and the
/// console-only fallback otherwise.
pub fn reporter_for(
    config: Option<ReporterConfig>,
) -> Result<Arc<dyn FeedbackReporter>, ReporterError> {
    match config {
        Some(config) => Ok(Arc::new(SentryReporter::new(config)?)),
        None => Ok(Arc::new(FakeReporter)),
    }
}
