use async_trait::async_trait;
use tracing::debug;

use crate::FeedbackReport;

/// Reporting capability shared by every backend.
///
/// `submit` resolves once the report has been handed off to its
/// destination; hand-off is not delivery. Transport failures are never
/// surfaced to the caller, so reporting cannot block a user flow.
#[async_trait]
pub trait FeedbackReporter: Send + Sync {
    async fn submit(&self, report: FeedbackReport);
}

/// Console-only reporter used when reporting is disabled or unavailable.
///
/// Writes the report to local diagnostic output and resolves immediately;
/// no external calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeReporter;

#[async_trait]
impl FeedbackReporter for FakeReporter {
    async fn submit(&self, report: FeedbackReport) {
        debug!(
            "Reporting fake feedback: {} by {}, {}",
            report.feedback,
            report.email_or_placeholder(),
            report.category
        );
    }
}
