use std::time::Instant;

use tour_components::{
    duration_picker::{DurationPickerState, SelectedDuration},
    notification::NotificationHostState,
};
use tour_ui::State;
use tracing::{info, warn};

use super::{PageChrome, PageContext};
use crate::{
    AppConfig,
    event::{Target, UiEvent},
    routes::Route,
};

/// Duration selection; confirming moves straight on to the tour plan.
pub struct DurationPage {
    /// Presets and wheels.
    pub picker: DurationPickerState,
    /// Cards and navigation.
    pub chrome: PageChrome,
    next_has_focus: bool,
}

impl DurationPage {
    pub(crate) fn new(config: &AppConfig, notifications: &State<NotificationHostState>) -> Self {
        Self {
            picker: DurationPickerState::new(&config.duration),
            chrome: PageChrome::new(config, notifications),
            next_has_focus: false,
        }
    }

    pub(crate) fn handle(
        &mut self,
        event: &UiEvent,
        now: Instant,
        ctx: &mut PageContext<'_>,
    ) -> bool {
        match event {
            UiEvent::Click(Target::Preset(index)) => {
                self.picker.select_preset(*index, now).is_some()
            }
            UiEvent::Scroll { unit, scroll_top } => {
                self.picker.scroll(*unit, *scroll_top);
                true
            }
            UiEvent::Click(Target::NextButton) => {
                self.confirm(ctx);
                true
            }
            UiEvent::Key(key) if key.is_activation() && self.next_has_focus => {
                self.confirm(ctx);
                true
            }
            UiEvent::Focus(Target::NextButton) => {
                self.chrome.focus(Target::NextButton);
                self.next_has_focus = true;
                false
            }
            UiEvent::Focus(_) => {
                self.next_has_focus = false;
                self.chrome.handle(event, now)
            }
            _ => self.chrome.handle(event, now),
        }
    }

    fn confirm(&mut self, ctx: &mut PageContext<'_>) {
        let duration = self.picker.selected_duration();
        log_duration(&duration);
        info!("Duration set: {}", duration.summary());
        ctx.navigate(Route::TourPlan);
    }
}

fn log_duration(duration: &SelectedDuration) {
    match serde_json::to_string(duration) {
        Ok(json) => info!("Selected duration: {json}"),
        Err(err) => warn!("Selected duration: {duration:?} ({err})"),
    }
}
