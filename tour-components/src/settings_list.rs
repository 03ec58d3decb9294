//! Settings entries and the language selector.

use tracing::info;

/// Language used when none was chosen.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A column of settings entries plus a language selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsListState {
    items: Vec<String>,
    language: String,
}

impl SettingsListState {
    /// Creates the list from entry labels.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            language: DEFAULT_LANGUAGE.to_owned(),
        }
    }

    /// Clicks the entry at `index` and returns its trimmed label.
    ///
    /// Entries with blank labels do nothing.
    pub fn click(&self, index: usize) -> Option<&str> {
        let label = self.items.get(index)?.trim();
        if label.is_empty() {
            return None;
        }
        info!("Navigating to: {label}");
        Some(label)
    }

    /// Changes the selected language.
    pub fn set_language(&mut self, code: impl Into<String>) {
        self.language = code.into();
        info!("Language changed to: {}", self.language);
    }

    /// Selected language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Entry labels.
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_LANGUAGE, SettingsListState};

    #[test]
    fn click_returns_trimmed_label() {
        let settings = SettingsListState::new([" Account ", "", "Privacy"]);
        assert_eq!(settings.click(0), Some("Account"));
        assert_eq!(settings.click(1), None);
        assert_eq!(settings.click(9), None);
    }

    #[test]
    fn language_changes() {
        let mut settings = SettingsListState::new(["Account"]);
        assert_eq!(settings.language(), DEFAULT_LANGUAGE);
        settings.set_language("fr");
        assert_eq!(settings.language(), "fr");
    }
}
