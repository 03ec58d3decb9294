//! Ordered list of tour stops built from a text input.

use tour_ui::Key;
use tracing::debug;

/// Text input plus the numbered list of stops added from it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DestinationListState {
    input: String,
    stops: Vec<String>,
}

impl DestinationListState {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Appends the trimmed input as a stop and clears the input.
    ///
    /// Blank input is ignored and left in place. Returns whether a stop was
    /// added.
    pub fn add(&mut self) -> bool {
        let name = self.input.trim();
        if name.is_empty() {
            return false;
        }
        self.stops.push(name.to_owned());
        self.input.clear();
        debug!(count = self.stops.len(), "destination added");
        true
    }

    /// Handles a key press inside the input; Enter adds the stop.
    pub fn on_input_key(&mut self, key: &Key) -> bool {
        *key == Key::Enter && self.add()
    }

    /// Removes the stop at `index`; later stops move up one position.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.stops.len() {
            return None;
        }
        let removed = self.stops.remove(index);
        debug!(index, count = self.stops.len(), "destination removed");
        Some(removed)
    }

    /// Display labels, numbered from 1: `"1. Cape Town"`.
    pub fn labels(&self) -> Vec<String> {
        self.stops
            .iter()
            .enumerate()
            .map(|(index, name)| format!("{}. {name}", index + 1))
            .collect()
    }

    /// Stop names in order.
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether no stop was added.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use tour_ui::Key;

    use super::DestinationListState;

    fn add(list: &mut DestinationListState, name: &str) -> bool {
        list.set_input(name);
        list.add()
    }

    #[test]
    fn removal_reindexes_labels() {
        let mut list = DestinationListState::new();
        add(&mut list, "Cape Town");
        add(&mut list, "Stellenbosch");
        assert_eq!(list.labels(), ["1. Cape Town", "2. Stellenbosch"]);

        assert_eq!(list.remove(0).as_deref(), Some("Cape Town"));
        assert_eq!(list.labels(), ["1. Stellenbosch"]);
        assert_eq!(list.stops(), ["Stellenbosch"]);
    }

    #[test]
    fn add_trims_and_clears_input() {
        let mut list = DestinationListState::new();
        assert!(add(&mut list, "  Table Mountain  "));
        assert_eq!(list.stops(), ["Table Mountain"]);
        assert_eq!(list.input(), "");
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut list = DestinationListState::new();
        assert!(!add(&mut list, "   "));
        assert!(list.is_empty());
        assert_eq!(list.input(), "   ");
        assert_eq!(list.remove(0), None);
    }

    #[test]
    fn names_with_periods_survive() {
        let mut list = DestinationListState::new();
        add(&mut list, "St. James. Beach");
        assert_eq!(list.stops(), ["St. James. Beach"]);
        assert_eq!(list.labels(), ["1. St. James. Beach"]);
    }

    #[test]
    fn enter_adds_from_input() {
        let mut list = DestinationListState::new();
        list.set_input("Franschhoek");
        assert!(!list.on_input_key(&Key::Space));
        assert!(list.on_input_key(&Key::Enter));
        assert_eq!(list.len(), 1);
    }
}
