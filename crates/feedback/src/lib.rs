#![forbid(unsafe_code)]
//! Shared user-feedback reporting contract.
//!
//! This crate deliberately knows nothing about any particular tracking
//! backend. It provides:
//! - [`FeedbackReporter`], the contract consumed by UI code that gathers
//!   user feedback.
//! - [`FeedbackReport`], the per-call report value.
//! - [`FakeReporter`], a console-only implementation for environments
//!   where reporting is disabled or unavailable.

mod report;
mod reporter;

pub use report::{FeedbackReport, EMAIL_PLACEHOLDER};
pub use reporter::{FakeReporter, FeedbackReporter};
