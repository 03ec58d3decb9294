//! Bottom navigation bar.
//!
//! ## Usage
//!
//! Build a [`NavigationBarState`] from the destinations shown on the page and
//! forward clicks to [`NavigationBarState::click`]. The clicked item becomes
//! the only active item and the selection event is handed to `on_select`.

use std::time::Instant;

use tour_ui::{CallbackWith, FocusRing, Key};
use tracing::info;

use crate::selectable_group::{Exclusivity, SelectEvent, SelectableGroup, SelectableGroupArgs};

/// A navigation bar item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavDestination {
    /// Home page.
    Home,
    /// Search page.
    Search,
    /// Settings page.
    Settings,
    /// Any other navigation key, kept verbatim.
    Unknown(String),
}

impl NavDestination {
    /// Parses the navigation key attached to an item.
    pub fn parse(key: &str) -> Self {
        match key {
            "home" => NavDestination::Home,
            "search" => NavDestination::Search,
            "settings" => NavDestination::Settings,
            other => NavDestination::Unknown(other.to_owned()),
        }
    }

    /// Navigation key.
    pub fn as_str(&self) -> &str {
        match self {
            NavDestination::Home => "home",
            NavDestination::Search => "search",
            NavDestination::Settings => "settings",
            NavDestination::Unknown(key) => key,
        }
    }

    /// Notification shown after selecting the item.
    ///
    /// Unknown destinations have no message.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            NavDestination::Home => Some("Already on Home page"),
            NavDestination::Search => Some("Search feature coming soon!"),
            NavDestination::Settings => Some("Settings feature coming soon!"),
            NavDestination::Unknown(_) => None,
        }
    }
}

/// Configuration for [`NavigationBarState`].
#[derive(Clone, PartialEq)]
pub struct NavigationBarArgs {
    /// Items in display order.
    pub items: Vec<NavDestination>,
    /// Item active before any click.
    pub initial: Option<usize>,
    /// Called after every click, including clicks on the active item.
    pub on_select: Option<CallbackWith<SelectEvent<NavDestination>>>,
}

impl NavigationBarArgs {
    /// Creates args for `items` with nothing active.
    pub fn new(items: impl IntoIterator<Item = NavDestination>) -> Self {
        Self {
            items: items.into_iter().collect(),
            initial: None,
            on_select: None,
        }
    }

    /// Sets the initially active item.
    pub fn initial(mut self, index: usize) -> Self {
        self.initial = Some(index);
        self
    }

    /// Sets the selection callback.
    pub fn on_select(
        mut self,
        on_select: impl Into<CallbackWith<SelectEvent<NavDestination>>>,
    ) -> Self {
        self.on_select = Some(on_select.into());
        self
    }
}

impl Default for NavigationBarArgs {
    fn default() -> Self {
        Self::new([
            NavDestination::Home,
            NavDestination::Search,
            NavDestination::Settings,
        ])
        .initial(0)
    }
}

/// Navigation bar with one active item.
pub struct NavigationBarState {
    group: SelectableGroup<NavDestination>,
    focus: FocusRing,
}

impl NavigationBarState {
    /// Creates the bar from its args.
    pub fn new(args: NavigationBarArgs) -> Self {
        let focus = FocusRing::new(args.items.len());
        let group_args = SelectableGroupArgs {
            items: args.items,
            initial: args.initial,
            exclusivity: Exclusivity::Exclusive,
            on_select: args.on_select,
        };
        Self {
            group: SelectableGroup::new(group_args),
            focus,
        }
    }

    /// Clicks the item at `index`, making it the active item.
    pub fn click(&mut self, index: usize, now: Instant) -> Option<NavDestination> {
        let event = self.group.select(index, now)?;
        if let NavDestination::Unknown(key) = &event.item {
            info!("Unknown navigation: {key}");
        }
        Some(event.item)
    }

    /// Handles a key press while an item may have focus.
    ///
    /// Returns `true` if the key was consumed.
    pub fn on_key(&mut self, key: &Key, now: Instant) -> bool {
        match self.focus.focused() {
            Some(focused) if key.is_activation() => {
                self.click(focused, now);
                true
            }
            _ => false,
        }
    }

    /// Moves keyboard focus to the item at `index`.
    pub fn focus(&mut self, index: usize) {
        self.focus.focus(index);
    }

    /// Removes keyboard focus from the bar.
    pub fn blur(&mut self) {
        self.focus.blur();
    }

    /// Index of the focused item.
    pub fn focused(&self) -> Option<usize> {
        self.focus.focused()
    }

    /// Active destination.
    pub fn active(&self) -> Option<&NavDestination> {
        self.group.active()
    }

    /// Index of the active item.
    pub fn active_index(&self) -> Option<usize> {
        self.group.active_index()
    }

    /// Items in display order.
    pub fn items(&self) -> &[NavDestination] {
        self.group.items()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Mutex},
        time::Instant,
    };

    use tour_ui::Key;

    use super::{NavDestination, NavigationBarArgs, NavigationBarState};
    use crate::selectable_group::SelectEvent;

    #[test]
    fn messages_per_destination() {
        assert_eq!(NavDestination::parse("home").message(), Some("Already on Home page"));
        assert_eq!(
            NavDestination::parse("search").message(),
            Some("Search feature coming soon!")
        );
        assert_eq!(
            NavDestination::Settings.message(),
            Some("Settings feature coming soon!")
        );
        let unknown = NavDestination::parse("profile");
        assert_eq!(unknown.message(), None);
        assert_eq!(unknown.as_str(), "profile");
    }

    #[test]
    fn click_moves_active_item_and_notifies() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let args =
            NavigationBarArgs::default().on_select(move |event: SelectEvent<NavDestination>| {
                sink.lock().expect("lock").push(event.item);
            });
        let mut bar = NavigationBarState::new(args);
        assert_eq!(bar.active(), Some(&NavDestination::Home));

        let now = Instant::now();
        assert_eq!(bar.click(2, now), Some(NavDestination::Settings));
        assert_eq!(bar.active_index(), Some(2));
        // Re-clicking the active item still notifies.
        bar.click(2, now);
        assert_eq!(bar.click(7, now), None);

        assert_eq!(
            *seen.lock().expect("lock"),
            vec![NavDestination::Settings, NavDestination::Settings]
        );
    }

    #[test]
    fn activation_key_clicks_focused_item() {
        let mut bar = NavigationBarState::new(NavigationBarArgs::default());
        let now = Instant::now();
        assert!(!bar.on_key(&Key::Enter, now));

        bar.focus(1);
        assert!(bar.on_key(&Key::Enter, now));
        assert_eq!(bar.active(), Some(&NavDestination::Search));
        assert!(!bar.on_key(&Key::ArrowDown, now));
    }
}
