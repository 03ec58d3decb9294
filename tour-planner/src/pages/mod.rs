//! Page state for every route.
//!
//! A page is rebuilt from scratch whenever its route is entered, so pending
//! timers of the previous page never fire after navigation.

mod chrome;
mod dijkstra;
mod duration;
mod feedback;
mod preferences;
mod settings;
mod tour_plan;
mod tour_type;
mod visitor_report;

use std::time::Instant;

use tour_components::notification::NotificationHostState;
use tour_platform::{SessionStorage, ShareService};
use tour_ui::State;

pub use chrome::PageChrome;
pub use dijkstra::{DijkstraPage, TOUR_STOPS_KEY};
pub use duration::DurationPage;
pub use feedback::FeedbackPage;
pub use preferences::PreferencesPage;
pub use settings::SettingsPage;
pub use tour_plan::{EMPTY_TOUR_MESSAGE, TourPlanPage};
pub use tour_type::TourTypePage;
pub use visitor_report::VisitorReportPage;

use crate::{AppConfig, error::AppError, event::UiEvent, routes::Route};

/// Services and outputs available to a page while it handles an event.
pub struct PageContext<'a> {
    pub(crate) config: &'a AppConfig,
    pub(crate) notifications: &'a State<NotificationHostState>,
    pub(crate) storage: &'a mut SessionStorage,
    pub(crate) share: &'a ShareService,
    pub(crate) href: &'a str,
    pub(crate) navigation: Option<Route>,
    pub(crate) alerts: Vec<String>,
}

impl<'a> PageContext<'a> {
    pub(crate) fn new(
        config: &'a AppConfig,
        notifications: &'a State<NotificationHostState>,
        storage: &'a mut SessionStorage,
        share: &'a ShareService,
        href: &'a str,
    ) -> Self {
        Self {
            config,
            notifications,
            storage,
            share,
            href,
            navigation: None,
            alerts: Vec::new(),
        }
    }

    /// Shows a toast.
    pub fn notify(&self, message: impl Into<String>, now: Instant) {
        self.notifications.with_mut(|host| host.show(message, now));
    }

    /// Shows a blocking alert.
    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    /// Leaves the page for `route` once the current event is handled.
    pub fn navigate(&mut self, route: Route) {
        self.navigation = Some(route);
    }
}

/// State of the page currently shown.
pub enum PageState {
    /// Tour type selection.
    TourType(TourTypePage),
    /// Tour preferences.
    Preferences(PreferencesPage),
    /// Duration picker.
    Duration(DurationPage),
    /// Tour plan.
    TourPlan(TourPlanPage),
    /// Settings.
    Settings(SettingsPage),
    /// Feedback form.
    Feedback(FeedbackPage),
    /// Visitor report.
    VisitorReport(VisitorReportPage),
    /// Route map.
    Dijkstra(DijkstraPage),
}

impl PageState {
    /// Builds fresh state for `route`.
    pub(crate) fn build(
        route: Route,
        config: &AppConfig,
        notifications: &State<NotificationHostState>,
        storage: &SessionStorage,
    ) -> Self {
        match route {
            Route::Home => PageState::TourType(TourTypePage::new(config, notifications)),
            Route::Preferences => {
                PageState::Preferences(PreferencesPage::new(config, notifications))
            }
            Route::TourPlan | Route::TourPlanPage => {
                PageState::TourPlan(TourPlanPage::new(config, notifications))
            }
            Route::Duration => PageState::Duration(DurationPage::new(config, notifications)),
            Route::Settings => PageState::Settings(SettingsPage::new(config)),
            Route::Feedback => PageState::Feedback(FeedbackPage::new()),
            Route::VisitorReport => PageState::VisitorReport(VisitorReportPage::new()),
            Route::Dijkstra => PageState::Dijkstra(DijkstraPage::load(storage)),
        }
    }

    /// Routes an event to the page. Returns whether the page consumed it.
    pub(crate) fn handle(
        &mut self,
        event: &UiEvent,
        now: Instant,
        ctx: &mut PageContext<'_>,
    ) -> Result<bool, AppError> {
        let handled = match self {
            PageState::TourType(page) => page.handle(event, now),
            PageState::Preferences(page) => page.handle(event, now),
            PageState::Duration(page) => page.handle(event, now, ctx),
            PageState::TourPlan(page) => page.handle(event, now, ctx)?,
            PageState::Settings(page) => page.handle(event),
            PageState::Feedback(page) => page.handle(event, ctx),
            PageState::VisitorReport(page) => page.handle(event, ctx),
            PageState::Dijkstra(_) => false,
        };
        Ok(handled)
    }

    /// Advances page timers.
    pub(crate) fn tick(&mut self, now: Instant, ctx: &mut PageContext<'_>) {
        match self {
            PageState::TourType(page) => page.chrome.tick(now, ctx),
            PageState::Preferences(page) => page.chrome.tick(now, ctx),
            PageState::Duration(page) => page.chrome.tick(now, ctx),
            PageState::TourPlan(page) => page.chrome.tick(now, ctx),
            PageState::Settings(_)
            | PageState::Feedback(_)
            | PageState::VisitorReport(_)
            | PageState::Dijkstra(_) => {}
        }
    }
}
