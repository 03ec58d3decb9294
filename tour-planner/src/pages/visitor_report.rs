use tour_platform::{ShareData, ShareOutcome};

use super::PageContext;
use crate::event::{Target, UiEvent};

/// Tour summary with a share button.
pub struct VisitorReportPage {
    /// Outcome of the latest share attempt.
    pub last_share: Option<ShareOutcome>,
}

impl VisitorReportPage {
    pub(crate) fn new() -> Self {
        Self { last_share: None }
    }

    pub(crate) fn handle(&mut self, event: &UiEvent, ctx: &mut PageContext<'_>) -> bool {
        if *event != UiEvent::Click(Target::ShareButton) {
            return false;
        }
        let share = &ctx.config.share;
        let data = ShareData::new(share.title.as_str(), share.text.as_str(), ctx.href);
        let outcome = ctx.share.share(&data);
        if let ShareOutcome::Unsupported(message) = &outcome {
            ctx.alert(*message);
        }
        self.last_share = Some(outcome);
        true
    }
}
