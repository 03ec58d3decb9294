use std::time::Instant;

use tour_components::{
    navigation_bar::{NavDestination, NavigationBarArgs, NavigationBarState},
    notification::NotificationHostState,
    option_card::{JourneyOption, OptionCardsState},
    selectable_group::SelectEvent,
};
use tour_ui::State;
use tracing::debug;

use super::PageContext;
use crate::{
    AppConfig,
    event::{Target, UiEvent},
};

/// Option cards, bottom navigation and keyboard focus shared by the tour pages.
pub struct PageChrome {
    /// Journey option cards.
    pub cards: OptionCardsState,
    /// Bottom navigation bar.
    pub nav: NavigationBarState,
}

impl PageChrome {
    /// Creates the classic and limited cards and the home/search/settings bar.
    pub fn new(config: &AppConfig, notifications: &State<NotificationHostState>) -> Self {
        let toasts = notifications.clone();
        let nav_args =
            NavigationBarArgs::default().on_select(move |event: SelectEvent<NavDestination>| {
                if let Some(message) = event.item.message() {
                    toasts.with_mut(|host| host.show(message, event.at));
                }
            });
        Self {
            cards: OptionCardsState::new(
                [JourneyOption::Classic, JourneyOption::Limited],
                config.option_cards,
            ),
            nav: NavigationBarState::new(nav_args),
        }
    }

    /// Handles card, navigation and keyboard events.
    pub fn handle(&mut self, event: &UiEvent, now: Instant) -> bool {
        match event {
            UiEvent::Click(Target::OptionCard(index)) => self.cards.click(*index, now),
            UiEvent::TouchStart(Target::OptionCard(index)) => {
                self.cards.touch_start(*index, now);
                true
            }
            UiEvent::Click(Target::NavItem(index)) => self.nav.click(*index, now).is_some(),
            UiEvent::Focus(target) => {
                self.focus(*target);
                false
            }
            UiEvent::Key(key) => self.cards.on_key(key, now) || self.nav.on_key(key, now),
            _ => false,
        }
    }

    /// Moves keyboard focus; targets outside the chrome clear it.
    pub fn focus(&mut self, target: Target) {
        self.cards.blur();
        self.nav.blur();
        match target {
            Target::OptionCard(index) => self.cards.focus(index),
            Target::NavItem(index) => self.nav.focus(index),
            _ => {}
        }
    }

    /// Reports finished card selections as toasts.
    pub fn tick(&mut self, now: Instant, ctx: &mut PageContext<'_>) {
        for option in self.cards.poll(now) {
            debug!(option = option.as_str(), "journey option chosen");
            ctx.notify(option.message(), now);
        }
    }
}
