use tour_components::feedback_form::FeedbackFormState;

use super::PageContext;
use crate::event::UiEvent;

/// Feedback form page.
pub struct FeedbackPage {
    /// Form state.
    pub form: FeedbackFormState,
}

impl FeedbackPage {
    pub(crate) fn new() -> Self {
        Self {
            form: FeedbackFormState::new(),
        }
    }

    pub(crate) fn handle(&mut self, event: &UiEvent, ctx: &mut PageContext<'_>) -> bool {
        match event {
            UiEvent::Input(text) => {
                self.form.set_text(text.as_str());
                true
            }
            UiEvent::Submit => {
                let submission = self.form.submit();
                ctx.alert(submission.acknowledgement);
                true
            }
            _ => false,
        }
    }
}
