use std::time::Instant;

use tour_components::{
    notification::NotificationHostState,
    selectable_group::{SelectableGroup, SelectableGroupArgs},
};
use tour_ui::State;
use tracing::debug;

use super::PageChrome;
use crate::{
    AppConfig,
    event::{Target, TourStyle, UiEvent},
};

/// Tour preferences: tour style plus the shared cards and navigation.
///
/// The page has no next button; leaving it goes through the cards or the
/// navigation bar.
pub struct PreferencesPage {
    /// Classic/custom toggle; nothing is marked initially.
    pub style: SelectableGroup<TourStyle>,
    /// Cards and navigation.
    pub chrome: PageChrome,
}

impl PreferencesPage {
    pub(crate) fn new(config: &AppConfig, notifications: &State<NotificationHostState>) -> Self {
        Self {
            style: SelectableGroup::new(SelectableGroupArgs::new(vec![
                TourStyle::Classic,
                TourStyle::Custom,
            ])),
            chrome: PageChrome::new(config, notifications),
        }
    }

    /// Currently marked tour style.
    pub fn selected_style(&self) -> Option<TourStyle> {
        self.style.active().copied()
    }

    pub(crate) fn handle(&mut self, event: &UiEvent, now: Instant) -> bool {
        match event {
            UiEvent::Click(Target::TourStyle(style)) => {
                let index = match style {
                    TourStyle::Classic => 0,
                    TourStyle::Custom => 1,
                };
                debug!(?style, "tour style selected");
                self.style.select(index, now).is_some()
            }
            _ => self.chrome.handle(event, now),
        }
    }
}
