//! Single-field feedback form.

use tracing::info;

/// Acknowledgement shown after a submission.
pub const FEEDBACK_ACKNOWLEDGEMENT: &str = "Thank you for your feedback!";

/// Result of submitting the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackSubmission {
    /// Submitted text, as typed.
    pub text: String,
    /// Message to show the user.
    pub acknowledgement: &'static str,
}

/// Feedback text area state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackFormState {
    text: String,
}

impl FeedbackFormState {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the feedback text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Current feedback text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Submits the feedback and resets the form.
    pub fn submit(&mut self) -> FeedbackSubmission {
        let text = std::mem::take(&mut self.text);
        info!(feedback = %text, "Feedback submitted");
        FeedbackSubmission {
            text,
            acknowledgement: FEEDBACK_ACKNOWLEDGEMENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FEEDBACK_ACKNOWLEDGEMENT, FeedbackFormState};

    #[test]
    fn submit_acknowledges_and_resets() {
        let mut form = FeedbackFormState::new();
        form.set_text("Lovely gardens");
        let submission = form.submit();
        assert_eq!(submission.text, "Lovely gardens");
        assert_eq!(submission.acknowledgement, FEEDBACK_ACKNOWLEDGEMENT);
        assert_eq!(form.text(), "");
    }

    #[test]
    fn empty_submission_is_accepted() {
        let mut form = FeedbackFormState::new();
        assert_eq!(form.submit().text, "");
    }
}
