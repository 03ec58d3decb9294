//! Client-side interaction layer of the tour planner.
//!
//! The [`App`] owns every page of the planning flow (tour type, preferences,
//! duration, tour plan, settings, feedback and visitor report) and the
//! services they share. A host forwards input as [`UiEvent`]s, calls
//! [`App::tick`] every frame and draws from the page state.
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use tour_planner::{App, AppConfig, Target, UiEvent};
//!
//! let mut app = App::new(AppConfig::default());
//! let start = Instant::now();
//! app.dispatch(UiEvent::Click(Target::NavItem(1)), start).unwrap();
//! app.tick(start + Duration::from_millis(500));
//!
//! let toast = app.notification().unwrap();
//! assert_eq!(toast.message, "Search feature coming soon!");
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod app;
mod config;
mod error;
mod event;
pub mod pages;
mod routes;

use anyhow::Context;

pub use app::App;
pub use config::{AppConfig, DEFAULT_SETTINGS_ITEMS, ShareConfig};
pub use error::AppError;
pub use event::{Target, TourStyle, UiEvent};
pub use routes::Route;

/// Installs the global `tracing` subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to
/// `error,tour_planner=info`. Calling this more than once is harmless.
pub fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,tour_planner=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

/// Initializes logging and opens the page served from `path`.
pub fn launch(config: AppConfig, path: &str) -> anyhow::Result<App> {
    init_tracing();
    let mut app = App::new(config);
    app.open(path)
        .with_context(|| format!("failed to launch the tour planner at `{path}`"))?;
    Ok(app)
}
