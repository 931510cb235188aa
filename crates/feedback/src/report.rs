/// Placeholder recorded when a report carries no submitter email.
pub const EMAIL_PLACEHOLDER: &str = "(email not given)";

/// A single piece of user feedback.
///
/// Built per call and handed to [`FeedbackReporter::submit`]; never
/// persisted.
///
/// [`FeedbackReporter::submit`]: crate::FeedbackReporter::submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackReport {
    /// Free-text feedback entered by the user.
    pub feedback: String,
    /// Category label chosen by the user (e.g. `"bug"`).
    pub category: String,
    /// Submitter email, if the user chose to give one.
    pub email: Option<String>,
}

impl FeedbackReport {
    pub fn new(feedback: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            category: category.into(),
            email: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Submitter email, or [`EMAIL_PLACEHOLDER`] when none was given.
    pub fn email_or_placeholder(&self) -> &str {
        self.email.as_deref().unwrap_or(EMAIL_PLACEHOLDER)
    }
}
