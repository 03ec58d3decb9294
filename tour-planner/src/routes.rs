//! Page routes.

use tour_ui::RouterDestination;

/// A page the app can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// Tour type selection, the landing page.
    Home,
    /// Tour preferences.
    Preferences,
    /// Tour plan, served by the server route.
    TourPlan,
    /// Tour plan, served as a static file.
    TourPlanPage,
    /// Duration picker.
    Duration,
    /// Settings.
    Settings,
    /// Feedback form.
    Feedback,
    /// Visitor report.
    VisitorReport,
    /// Route map consuming the stored tour stops.
    Dijkstra,
}

impl Route {
    /// All routes, in declaration order.
    pub const ALL: [Route; 9] = [
        Route::Home,
        Route::Preferences,
        Route::TourPlan,
        Route::TourPlanPage,
        Route::Duration,
        Route::Settings,
        Route::Feedback,
        Route::VisitorReport,
        Route::Dijkstra,
    ];

    /// Path the route is served from.
    pub fn as_path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Preferences => "/preferences",
            Route::TourPlan => "/tour-plan",
            Route::TourPlanPage => "tourPlanPage.html",
            Route::Duration => "durationPage.html",
            Route::Settings => "settingsPage.html",
            Route::Feedback => "feedbackPage.html",
            Route::VisitorReport => "visitorReportPage.html",
            Route::Dijkstra => "/dijkstra",
        }
    }

    /// Resolves a path; static file names match with or without a leading `/`.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| {
            let own = route.as_path();
            own == path || (!own.starts_with('/') && path.strip_prefix('/') == Some(own))
        })
    }

    /// Absolute URL of the route under `origin`.
    pub fn href(&self, origin: &str) -> String {
        let origin = origin.trim_end_matches('/');
        match self.as_path() {
            "/" => format!("{origin}/"),
            path => format!("{origin}/{}", path.trim_start_matches('/')),
        }
    }
}

impl RouterDestination for Route {
    fn path(&self) -> &str {
        self.as_path()
    }
}
