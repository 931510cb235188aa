use std::{
    backtrace::{Backtrace, BacktraceStatus},
    panic::{self, PanicHookInfo},
    sync::Arc,
};

use sentry::protocol::{Breadcrumb, Map};
use tracing::debug;

/// Category carried by every breadcrumb the hook records.
pub const PANIC_BREADCRUMB_CATEGORY: &str = "unhandled_panic";

type Hook = Box<dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static>;

/// Uninstalls the breadcrumb hook when dropped, restoring the behavior of
/// the hook that was installed at registration time.
pub struct PanicHookGuard {
    previous: Arc<Hook>,
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        let previous = Arc::clone(&self.previous);
        panic::set_hook(Box::new(move |info| (*previous)(info)));
    }
}

/// Records every panic as a diagnostic breadcrumb on the current client,
/// then defers to the previously installed hook.
///
/// The breadcrumb message is the captured backtrace when backtraces are
/// enabled, otherwise the raw panic payload. The hook never touches
/// identity context and never panics itself. Only unwinding panics are
/// observed; with `panic = "abort"` the process dies before the
/// breadcrumb can accompany any later event.
pub fn install_panic_breadcrumbs() -> PanicHookGuard {
    let previous: Arc<Hook> = Arc::new(panic::take_hook());
    let chained = Arc::clone(&previous);
    panic::set_hook(Box::new(move |info| {
        record_breadcrumb(info);
        (*chained)(info);
    }));
    debug!("panic breadcrumbs installed");
    PanicHookGuard { previous }
}

fn record_breadcrumb(info: &PanicHookInfo<'_>) {
    let backtrace = Backtrace::capture();
    let message = if matches!(backtrace.status(), BacktraceStatus::Captured) {
        backtrace.to_string()
    } else {
        payload_text(info)
    };

    let mut data = Map::new();
    if let Some(location) = info.location() {
        data.insert(
            "location".to_string(),
            serde_json::Value::String(location.to_string()),
        );
    }

    sentry::add_breadcrumb(Breadcrumb {
        message: Some(message),
        category: Some(PANIC_BREADCRUMB_CATEGORY.to_string()),
        level: sentry::Level::Error,
        data,
        ..Default::default()
    });
}

fn payload_text(info: &PanicHookInfo<'_>) -> String {
    let payload = info.payload();
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "panic payload of unknown type".to_string()
    }
}
