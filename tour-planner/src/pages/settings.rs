use tour_components::settings_list::SettingsListState;

use crate::{
    AppConfig,
    event::{Target, UiEvent},
};

/// Settings entries and language selection.
pub struct SettingsPage {
    /// Entries and language.
    pub settings: SettingsListState,
}

impl SettingsPage {
    pub(crate) fn new(config: &AppConfig) -> Self {
        Self {
            settings: SettingsListState::new(config.settings_items.iter().cloned()),
        }
    }

    pub(crate) fn handle(&mut self, event: &UiEvent) -> bool {
        match event {
            UiEvent::Click(Target::SettingsItem(index)) => self.settings.click(*index).is_some(),
            UiEvent::LanguageChanged(code) => {
                self.settings.set_language(code.as_str());
                true
            }
            _ => false,
        }
    }
}
