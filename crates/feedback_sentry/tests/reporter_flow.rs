use std::{
    io,
    sync::{Arc, Mutex},
};

use feedback::{FeedbackReport, FeedbackReporter};
use feedback_sentry::{reporter_for, ReporterConfig, ReporterError, ReporterOptions, SentryReporter};

// Unroutable but well-formed destination; captures go nowhere.
const TEST_DSN: &str = "https://public@sentry.invalid/1";

#[derive(Clone, Default)]
struct SharedWriter(Arc<Mutex<Vec<u8>>>);

impl SharedWriter {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn log_capture() -> (SharedWriter, tracing::subscriber::DefaultGuard) {
    let writer = SharedWriter::default();
    let sink = writer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .without_time()
        .with_ansi(false)
        .with_writer(move || sink.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (writer, guard)
}

#[test]
fn invalid_dsn_fails_construction() {
    let err = SentryReporter::new(ReporterConfig::new("1.0.0", "not a dsn")).unwrap_err();
    assert!(matches!(err, ReporterError::InvalidDsn { .. }));
}

#[test]
fn default_init_emits_one_diagnostic_line() {
    let (writer, _guard) = log_capture();

    let reporter = SentryReporter::new(ReporterConfig::new("1.0.0", TEST_DSN)).unwrap();
    drop(reporter);

    let logs = writer.contents();
    assert_eq!(logs.matches("initializing feedback reporting").count(), 1);
}

#[test]
fn quiet_init_suppresses_the_diagnostic() {
    let (writer, _guard) = log_capture();

    let reporter = SentryReporter::with_options(
        ReporterConfig::new("1.0.0", TEST_DSN),
        ReporterOptions::default().quiet_init(true),
    )
    .unwrap();
    drop(reporter);

    assert!(!writer.contents().contains("initializing feedback reporting"));
}

#[tokio::test]
async fn submit_resolves_without_a_reachable_destination() {
    let reporter = SentryReporter::with_options(
        ReporterConfig::new("1.0.0", TEST_DSN).tag("build", "test"),
        ReporterOptions::default().quiet_init(true),
    )
    .unwrap();

    reporter
        .submit(FeedbackReport::new("Crashes on start", "crash"))
        .await;
    reporter
        .submit(FeedbackReport::new("Login fails", "bug").email("user@example.com"))
        .await;
}

#[tokio::test]
async fn selector_falls_back_to_the_fake() {
    let reporter = reporter_for(None).unwrap();
    reporter
        .submit(FeedbackReport::new("Login fails", "bug").email("user@example.com"))
        .await;
}

#[test]
fn selector_builds_the_sentry_reporter_from_config() {
    assert!(reporter_for(Some(ReporterConfig::new("1.0.0", TEST_DSN))).is_ok());
    assert!(matches!(
        reporter_for(Some(ReporterConfig::new("1.0.0", "not a dsn"))),
        Err(ReporterError::InvalidDsn { .. })
    ));
}

#[test]
fn loads_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reporter.toml");
    std::fs::write(
        &path,
        "release = \"0.3.1\"\ndsn = \"https://public@sentry.invalid/1\"\n\n[tags]\nbuild = \"nightly\"\n",
    )
    .unwrap();

    let config = ReporterConfig::from_path(&path).unwrap();
    assert_eq!(config.release, "0.3.1");
    assert_eq!(config.tags.get("build").map(String::as_str), Some("nightly"));
}

#[test]
fn missing_config_file_is_a_read_error() {
    let err = ReporterConfig::from_path("/nonexistent/reporter.toml").unwrap_err();
    assert!(matches!(err, ReporterError::ConfigRead { .. }));
}
