#![forbid(unsafe_code)]
//! Sentry-backed implementation of the [`feedback`] reporting contract.
//!
//! [`SentryReporter`] configures the Sentry client once at construction
//! (release, DSN, static tags) and forwards each report as a tagged
//! message with transient identity context. Uncaught failures can be
//! recorded as diagnostic breadcrumbs through the explicit
//! [`install_panic_breadcrumbs`] registration; the returned guard makes
//! the hook's lifecycle controllable instead of process-global forever.

mod config;
mod error;
mod panic_hook;
mod reporter;

pub use config::{ReporterConfig, ReporterOptions};
pub use error::ReporterError;
pub use panic_hook::{install_panic_breadcrumbs, PanicHookGuard, PANIC_BREADCRUMB_CATEGORY};
pub use reporter::{reporter_for, SentryReporter};
