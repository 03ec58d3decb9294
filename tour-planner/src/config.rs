//! Application configuration.

use std::time::Duration;

use derive_setters::Setters;
use tour_components::{
    duration_picker::DurationPickerArgs,
    notification::{NotificationStyle, NotificationTimings},
    option_card::OptionCardsArgs,
};
use tour_platform::viewport::{ORIENTATION_SETTLE_DELAY, RESIZE_DEBOUNCE};
use tour_ui::Px;

/// Settings entries shown when none are configured.
pub const DEFAULT_SETTINGS_ITEMS: [&str; 5] = [
    "Account",
    "Notifications",
    "Privacy",
    "Help & Support",
    "About",
];

/// Title and text of the shared visitor report.
///
/// The shared URL is always the current page.
#[derive(Clone, Debug, PartialEq, Eq, Setters)]
#[setters(into)]
pub struct ShareConfig {
    /// Share sheet title.
    pub title: String,
    /// Share sheet text.
    pub text: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            title: "My Tour Report".to_owned(),
            text: "Check out the summary of my latest tour!".to_owned(),
        }
    }
}

/// Configuration for [`App`](crate::App).
///
/// Every field has a default matching the shipped pages, so a config is
/// usually built with `AppConfig::default()` plus a few setters.
#[derive(Clone, Debug, PartialEq, Eq, Setters)]
pub struct AppConfig {
    /// Origin the pages are served from, used to build page URLs.
    #[setters(into)]
    pub origin: String,
    /// Window inner height at startup.
    pub initial_height: Px,
    /// Option card timings.
    pub option_cards: OptionCardsArgs,
    /// Presets and wheels of the duration page.
    pub duration: DurationPickerArgs,
    /// Toast timings.
    pub notifications: NotificationTimings,
    /// Toast look.
    pub notification_style: NotificationStyle,
    /// Quiet period for window resizes.
    pub resize_debounce: Duration,
    /// Delay before re-applying sizes after an orientation change.
    pub orientation_delay: Duration,
    /// Settings page entries.
    pub settings_items: Vec<String>,
    /// Visitor report share payload.
    pub share: ShareConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:5000".to_owned(),
            initial_height: Px(800),
            option_cards: OptionCardsArgs::default(),
            duration: DurationPickerArgs::default(),
            notifications: NotificationTimings::default(),
            notification_style: NotificationStyle::default(),
            resize_debounce: RESIZE_DEBOUNCE,
            orientation_delay: ORIENTATION_SETTLE_DELAY,
            settings_items: DEFAULT_SETTINGS_ITEMS
                .iter()
                .map(|item| item.to_string())
                .collect(),
            share: ShareConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{AppConfig, ShareConfig};

    #[test]
    fn setters_override_defaults() {
        let config = AppConfig::default()
            .origin("https://tours.example")
            .resize_debounce(Duration::from_millis(10))
            .share(ShareConfig::default().title("Garden walk"));

        assert_eq!(config.origin, "https://tours.example");
        assert_eq!(config.resize_debounce, Duration::from_millis(10));
        assert_eq!(config.share.title, "Garden walk");
        assert_eq!(
            config.share.text,
            "Check out the summary of my latest tour!"
        );
        assert_eq!(config.settings_items.len(), 5);
    }
}
