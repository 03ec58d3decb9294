use std::time::Instant;

use tour_components::{destination_list::DestinationListState, notification::NotificationHostState};
use tour_ui::State;
use tracing::info;

use super::{PageChrome, PageContext, TOUR_STOPS_KEY};
use crate::{
    AppConfig,
    error::AppError,
    event::{Target, UiEvent},
    routes::Route,
};

/// Message shown when the tour is started without stops.
pub const EMPTY_TOUR_MESSAGE: &str = "Please add at least one destination";

/// Destination list builder that hands the stops to the route map.
pub struct TourPlanPage {
    /// Typed input and added stops.
    pub destinations: DestinationListState,
    /// Cards and navigation.
    pub chrome: PageChrome,
    input_has_focus: bool,
}

impl TourPlanPage {
    pub(crate) fn new(config: &AppConfig, notifications: &State<NotificationHostState>) -> Self {
        Self {
            destinations: DestinationListState::new(),
            chrome: PageChrome::new(config, notifications),
            input_has_focus: false,
        }
    }

    pub(crate) fn handle(
        &mut self,
        event: &UiEvent,
        now: Instant,
        ctx: &mut PageContext<'_>,
    ) -> Result<bool, AppError> {
        let handled = match event {
            UiEvent::Input(text) => {
                self.destinations.set_input(text.as_str());
                true
            }
            UiEvent::Click(Target::AddDestination) => self.destinations.add(),
            UiEvent::Key(key) if self.input_has_focus => self.destinations.on_input_key(key),
            UiEvent::Click(Target::RemoveDestination(index)) => {
                self.destinations.remove(*index).is_some()
            }
            UiEvent::Click(Target::StartTour) => {
                self.start_tour(now, ctx)?;
                true
            }
            UiEvent::Focus(target) => {
                self.input_has_focus = *target == Target::TextInput;
                self.chrome.handle(event, now)
            }
            _ => self.chrome.handle(event, now),
        };
        Ok(handled)
    }

    fn start_tour(&mut self, now: Instant, ctx: &mut PageContext<'_>) -> Result<(), AppError> {
        if self.destinations.is_empty() {
            ctx.notify(EMPTY_TOUR_MESSAGE, now);
            return Ok(());
        }
        ctx.storage
            .set_json(TOUR_STOPS_KEY, self.destinations.stops())?;
        info!(stops = self.destinations.len(), "starting tour");
        ctx.navigate(Route::Dijkstra);
        Ok(())
    }
}
