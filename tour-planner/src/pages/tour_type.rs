use std::time::Instant;

use tour_components::notification::NotificationHostState;
use tour_ui::State;

use super::PageChrome;
use crate::{AppConfig, event::UiEvent};

/// Landing page offering the journey options.
pub struct TourTypePage {
    /// Cards and navigation.
    pub chrome: PageChrome,
}

impl TourTypePage {
    pub(crate) fn new(config: &AppConfig, notifications: &State<NotificationHostState>) -> Self {
        Self {
            chrome: PageChrome::new(config, notifications),
        }
    }

    pub(crate) fn handle(&mut self, event: &UiEvent, now: Instant) -> bool {
        self.chrome.handle(event, now)
    }
}
