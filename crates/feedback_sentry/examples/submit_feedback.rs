//! Submits one feedback report, against Sentry when `FEEDBACK_DSN` is set
//! and against the console-only fallback otherwise.
//!
//! ```text
//! FEEDBACK_DSN=https://public@o0.ingest.example.com/42 \
//!     cargo run --example submit_feedback
//! ```

use feedback::{FeedbackReport, FeedbackReporter};
use feedback_sentry::{install_panic_breadcrumbs, reporter_for, ReporterConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = std::env::var("FEEDBACK_DSN").ok().map(|dsn| {
        ReporterConfig::new(env!("CARGO_PKG_VERSION"), dsn).tag("platform", std::env::consts::OS)
    });
    let reporter = reporter_for(config)?;
    let _hook = install_panic_breadcrumbs();

    let report = FeedbackReport::new("Login fails after update", "bug").email("user@example.com");
    reporter.submit(report).await;

    Ok(())
}
