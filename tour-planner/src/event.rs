//! Input events delivered to the app.

use tour_components::duration_picker::TimeUnit;
use tour_ui::{Key, Px};

/// Something on the page the user can interact with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Option card, by position.
    OptionCard(usize),
    /// Bottom navigation item, by position.
    NavItem(usize),
    /// Duration preset button, by position.
    Preset(usize),
    /// Classic or custom tour style button.
    TourStyle(TourStyle),
    /// The page's next button.
    NextButton,
    /// Text input of the page (destination input or feedback text).
    TextInput,
    /// Button adding the typed destination.
    AddDestination,
    /// Trash icon of a destination, by position.
    RemoveDestination(usize),
    /// Button starting the tour.
    StartTour,
    /// Settings entry, by position.
    SettingsItem(usize),
    /// Report share button.
    ShareButton,
}

/// Tour style offered on the preferences page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TourStyle {
    /// Predefined route.
    Classic,
    /// User-built route.
    Custom,
}

/// An input event.
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// Pointer click or tap.
    Click(Target),
    /// Touch started on a target.
    TouchStart(Target),
    /// Keyboard focus moved to a target.
    Focus(Target),
    /// Key pressed; goes to the focused target.
    Key(Key),
    /// Text of the page's input changed.
    Input(String),
    /// Form submitted.
    Submit,
    /// A duration wheel scrolled to a new offset.
    Scroll {
        /// Wheel that scrolled.
        unit: TimeUnit,
        /// New scroll offset.
        scroll_top: Px,
    },
    /// Language selection changed.
    LanguageChanged(String),
    /// Window inner height changed.
    Resize(Px),
    /// Device orientation changed.
    OrientationChange,
}
