//! Journey option cards with loading and press feedback.
//!
//! A click puts the card into a loading state; when the loading delay elapses
//! the card's option is reported by [`OptionCardsState::poll`] and the card
//! becomes clickable again. Clicks on a loading card are ignored.

use std::time::{Duration, Instant};

use derive_setters::Setters;
use smallvec::SmallVec;
use tour_ui::{FocusRing, Key, Timeout};
use tracing::{debug, info};

/// Time a card stays in the loading state after a click.
pub const CARD_LOADING_DELAY: Duration = Duration::from_millis(1_000);
/// Time a touched card stays scaled down.
pub const TOUCH_FEEDBACK_DURATION: Duration = Duration::from_millis(150);
/// Scale applied to a pressed card.
pub const PRESSED_SCALE: f32 = 0.98;

/// Kind of journey a card starts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum JourneyOption {
    /// Classic garden route.
    Classic,
    /// Limited time tour.
    Limited,
    /// Any other option key, kept verbatim.
    Unknown(String),
}

impl JourneyOption {
    /// Parses the option key attached to a card.
    pub fn parse(key: &str) -> Self {
        match key {
            "classic" => JourneyOption::Classic,
            "limited" => JourneyOption::Limited,
            other => JourneyOption::Unknown(other.to_owned()),
        }
    }

    /// Option key.
    pub fn as_str(&self) -> &str {
        match self {
            JourneyOption::Classic => "classic",
            JourneyOption::Limited => "limited",
            JourneyOption::Unknown(key) => key,
        }
    }

    /// Feedback shown once the option is chosen.
    pub fn message(&self) -> &'static str {
        match self {
            JourneyOption::Classic => "Starting Classic Garden Route...",
            JourneyOption::Limited => "Starting Limited Time Tour...",
            JourneyOption::Unknown(_) => "Unknown option selected",
        }
    }
}

/// Timing configuration for [`OptionCardsState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Setters)]
pub struct OptionCardsArgs {
    /// Loading time after a click.
    pub loading_delay: Duration,
    /// Press feedback time after a touch.
    pub touch_feedback: Duration,
}

impl Default for OptionCardsArgs {
    fn default() -> Self {
        Self {
            loading_delay: CARD_LOADING_DELAY,
            touch_feedback: TOUCH_FEEDBACK_DURATION,
        }
    }
}

#[derive(Clone, Debug)]
struct OptionCard {
    option: JourneyOption,
    loading: Option<Timeout>,
    pressed: Option<Timeout>,
}

/// A column of option cards.
pub struct OptionCardsState {
    args: OptionCardsArgs,
    cards: Vec<OptionCard>,
    focus: FocusRing,
}

impl OptionCardsState {
    /// Creates cards for `options`, in display order.
    pub fn new(options: impl IntoIterator<Item = JourneyOption>, args: OptionCardsArgs) -> Self {
        let cards: Vec<_> = options
            .into_iter()
            .map(|option| OptionCard {
                option,
                loading: None,
                pressed: None,
            })
            .collect();
        let focus = FocusRing::new(cards.len());
        Self { args, cards, focus }
    }

    /// Clicks the card at `index`.
    ///
    /// Returns `false` if the index is out of range or the card is already
    /// loading.
    pub fn click(&mut self, index: usize, now: Instant) -> bool {
        let loading_delay = self.args.loading_delay;
        let Some(card) = self.cards.get_mut(index) else {
            return false;
        };
        if card.loading.is_some() {
            debug!(option = card.option.as_str(), "ignoring click on loading card");
            return false;
        }
        card.loading = Some(Timeout::start(now, loading_delay));
        true
    }

    /// Starts press feedback on the card at `index`.
    pub fn touch_start(&mut self, index: usize, now: Instant) {
        let touch_feedback = self.args.touch_feedback;
        if let Some(card) = self.cards.get_mut(index) {
            card.pressed = Some(Timeout::start(now, touch_feedback));
        }
    }

    /// Whether the card at `index` is loading.
    pub fn is_loading(&self, index: usize) -> bool {
        self.cards
            .get(index)
            .is_some_and(|card| card.loading.is_some())
    }

    /// Scale to draw the card at `index` with.
    pub fn scale(&self, index: usize, now: Instant) -> f32 {
        match self.cards.get(index).and_then(|card| card.pressed) {
            Some(pressed) if !pressed.is_due(now) => PRESSED_SCALE,
            _ => 1.0,
        }
    }

    /// Advances timers and returns the options whose loading finished.
    pub fn poll(&mut self, now: Instant) -> SmallVec<[JourneyOption; 2]> {
        let mut chosen = SmallVec::new();
        for card in &mut self.cards {
            if card.pressed.is_some_and(|pressed| pressed.is_due(now)) {
                card.pressed = None;
            }
            if card.loading.is_some_and(|loading| loading.is_due(now)) {
                card.loading = None;
                info!("Selected journey: {}", card.option.as_str());
                chosen.push(card.option.clone());
            }
        }
        chosen
    }

    /// Handles a key press while a card may have focus.
    ///
    /// Returns `true` if the key was consumed.
    pub fn on_key(&mut self, key: &Key, now: Instant) -> bool {
        let Some(focused) = self.focus.focused() else {
            return false;
        };
        match key {
            key if key.is_activation() => {
                self.click(focused, now);
                true
            }
            Key::ArrowDown => self.focus.next().is_some(),
            Key::ArrowUp => self.focus.previous().is_some(),
            _ => false,
        }
    }

    /// Moves keyboard focus to the card at `index`.
    pub fn focus(&mut self, index: usize) {
        self.focus.focus(index);
    }

    /// Removes keyboard focus from the cards.
    pub fn blur(&mut self) {
        self.focus.blur();
    }

    /// Index of the focused card.
    pub fn focused(&self) -> Option<usize> {
        self.focus.focused()
    }

    /// Option of the card at `index`.
    pub fn option(&self, index: usize) -> Option<&JourneyOption> {
        self.cards.get(index).map(|card| &card.option)
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether there are no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
