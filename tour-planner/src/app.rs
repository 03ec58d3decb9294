//! The app shell: routing, page lifecycle and shared services.

use std::time::Instant;

use tour_components::notification::{NotificationHostState, NotificationView};
use tour_platform::{ContainerMinHeight, SessionStorage, ShareService, Viewport, ViewportState};
use tour_ui::{Router, State};
use tracing::{debug, info};

use crate::{
    AppConfig,
    error::AppError,
    event::UiEvent,
    pages::{PageContext, PageState},
    routes::Route,
};

/// A running tour planner session.
///
/// The host forwards input with [`App::dispatch`] and calls [`App::tick`]
/// once per frame; everything time based advances only inside `tick`.
pub struct App {
    config: AppConfig,
    router: Router<Route>,
    page: PageState,
    href: String,
    storage: SessionStorage,
    notifications: State<NotificationHostState>,
    notification: Option<NotificationView>,
    viewport: ViewportState,
    share: ShareService,
    alerts: Vec<String>,
}

impl App {
    /// Creates a session showing the landing page, without share support.
    pub fn new(config: AppConfig) -> Self {
        let notifications = State::new(
            NotificationHostState::with_timings(config.notifications)
                .with_style(config.notification_style),
        );
        let storage = SessionStorage::new();
        let viewport = ViewportState::with_timings(
            Viewport {
                inner_height: config.initial_height,
            },
            config.resize_debounce,
            config.orientation_delay,
        );
        let page = PageState::build(Route::Home, &config, &notifications, &storage);
        Self {
            href: Route::Home.href(&config.origin),
            router: Router::with_root(Route::Home),
            page,
            storage,
            notifications,
            notification: None,
            viewport,
            share: ShareService::unsupported(),
            alerts: Vec::new(),
            config,
        }
    }

    /// Installs the platform share service.
    pub fn with_share_service(mut self, share: ShareService) -> Self {
        self.share = share;
        self
    }

    /// Opens the page served from `path`, discarding the history.
    pub fn open(&mut self, path: &str) -> Result<(), AppError> {
        let route = Route::from_path(path).ok_or_else(|| AppError::UnknownPath(path.to_owned()))?;
        self.router.reset_with(route);
        self.enter(route);
        Ok(())
    }

    /// Goes back to the previous page, if any.
    pub fn back(&mut self) -> bool {
        if self.router.len() < 2 {
            return false;
        }
        self.router.pop();
        match self.router.current().copied() {
            Some(route) => {
                self.enter(route);
                true
            }
            None => false,
        }
    }

    /// Delivers an input event.
    ///
    /// Returns whether the event was consumed.
    pub fn dispatch(&mut self, event: UiEvent, now: Instant) -> Result<bool, AppError> {
        match &event {
            UiEvent::Resize(inner_height) => {
                self.viewport.on_resize(now, *inner_height);
                return Ok(true);
            }
            UiEvent::OrientationChange => {
                self.viewport.on_orientation_change(now);
                return Ok(true);
            }
            _ => {}
        }

        let mut ctx = PageContext::new(
            &self.config,
            &self.notifications,
            &mut self.storage,
            &self.share,
            &self.href,
        );
        let handled = self.page.handle(&event, now, &mut ctx);
        let PageContext {
            navigation, alerts, ..
        } = ctx;
        self.finish(navigation, alerts);
        if !matches!(handled, Ok(true)) {
            debug!(?event, "event not handled");
        }
        handled
    }

    /// Advances timers: viewport debounce, page timers and the toast.
    pub fn tick(&mut self, now: Instant) {
        if let Some(min_height) = self.viewport.poll(now) {
            debug!(?min_height, "viewport resized");
        }

        let mut ctx = PageContext::new(
            &self.config,
            &self.notifications,
            &mut self.storage,
            &self.share,
            &self.href,
        );
        self.page.tick(now, &mut ctx);
        let PageContext {
            navigation, alerts, ..
        } = ctx;
        self.finish(navigation, alerts);

        self.notification = self.notifications.with_mut(|host| host.poll(now));
    }

    fn finish(&mut self, navigation: Option<Route>, alerts: Vec<String>) {
        self.alerts.extend(alerts);
        if let Some(route) = navigation {
            self.router.push(route);
            self.enter(route);
        }
    }

    fn enter(&mut self, route: Route) {
        info!("Navigating to {}", route.as_path());
        self.href = route.href(&self.config.origin);
        self.page = PageState::build(route, &self.config, &self.notifications, &self.storage);
        self.notifications.with_mut(|host| host.dismiss());
        self.notification = None;
    }

    /// Route of the current page.
    pub fn route(&self) -> Route {
        self.router.current().copied().unwrap_or(Route::Home)
    }

    /// Absolute URL of the current page.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Changes whenever a navigation happens.
    pub fn router_version(&self) -> u64 {
        self.router.version()
    }

    /// State of the current page.
    pub fn page(&self) -> &PageState {
        &self.page
    }

    /// Toast as of the last [`App::tick`].
    pub fn notification(&self) -> Option<&NotificationView> {
        self.notification.as_ref()
    }

    /// Container minimum height for the current viewport.
    pub fn min_height(&self) -> ContainerMinHeight {
        self.viewport.min_height()
    }

    /// Session storage shared by all pages.
    pub fn storage(&self) -> &SessionStorage {
        &self.storage
    }

    /// Alerts raised since the last call, oldest first.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    /// Configuration the app was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
