//! Single selection among sibling items.
//!
//! ## Usage
//!
//! Back option buttons, preset buttons and navigation items with one group:
//! selecting an item clears the mark from every sibling and marks the
//! selected one, then notifies the optional `on_select` callback.

use std::time::Instant;

use tour_ui::CallbackWith;
use tracing::{debug, warn};

/// How a group reacts when its marked item is selected again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Exclusivity {
    /// The marked item stays marked.
    #[default]
    Exclusive,
    /// Selecting the marked item clears the mark.
    Toggle,
}

/// Emitted when an item becomes the marked item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectEvent<T> {
    /// Index of the selected item.
    pub index: usize,
    /// The selected item.
    pub item: T,
    /// Instant of the selection.
    pub at: Instant,
}

/// Configuration for [`SelectableGroup`].
#[derive(Clone, PartialEq)]
pub struct SelectableGroupArgs<T> {
    /// Items in display order.
    pub items: Vec<T>,
    /// Index marked initially.
    pub initial: Option<usize>,
    /// Reselection rule.
    pub exclusivity: Exclusivity,
    /// Called after an item becomes marked.
    pub on_select: Option<CallbackWith<SelectEvent<T>>>,
}

impl<T> SelectableGroupArgs<T> {
    /// Creates exclusive group args with nothing marked.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            initial: None,
            exclusivity: Exclusivity::Exclusive,
            on_select: None,
        }
    }

    /// Sets the initially marked index.
    pub fn initial(mut self, index: usize) -> Self {
        self.initial = Some(index);
        self
    }

    /// Sets the reselection rule.
    pub fn exclusivity(mut self, exclusivity: Exclusivity) -> Self {
        self.exclusivity = exclusivity;
        self
    }

    /// Sets the selection callback.
    pub fn on_select(mut self, on_select: impl Into<CallbackWith<SelectEvent<T>>>) -> Self {
        self.on_select = Some(on_select.into());
        self
    }
}

/// Group of mutually exclusive items with at most one marked.
pub struct SelectableGroup<T> {
    items: Vec<T>,
    active: Option<usize>,
    exclusivity: Exclusivity,
    on_select: Option<CallbackWith<SelectEvent<T>>>,
}

impl<T: Clone> SelectableGroup<T> {
    /// Creates a group from its args.
    pub fn new(args: SelectableGroupArgs<T>) -> Self {
        let active = args.initial.filter(|index| *index < args.items.len());
        Self {
            items: args.items,
            active,
            exclusivity: args.exclusivity,
            on_select: args.on_select,
        }
    }

    /// Selects the item at `index`.
    ///
    /// Returns the event when an item became marked. Out-of-range indices and
    /// toggled-off selections return `None`.
    pub fn select(&mut self, index: usize, now: Instant) -> Option<SelectEvent<T>> {
        let Some(item) = self.items.get(index) else {
            warn!(index, len = self.items.len(), "selection out of range ignored");
            return None;
        };

        if self.exclusivity == Exclusivity::Toggle && self.active == Some(index) {
            debug!(index, "selection toggled off");
            self.active = None;
            return None;
        }

        self.active = Some(index);
        let event = SelectEvent {
            index,
            item: item.clone(),
            at: now,
        };
        if let Some(on_select) = &self.on_select {
            on_select.call(event.clone());
        }
        Some(event)
    }

    /// Clears the mark.
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Marked item.
    pub fn active(&self) -> Option<&T> {
        self.active.and_then(|index| self.items.get(index))
    }

    /// Index of the marked item.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Whether the item at `index` is marked.
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Items in display order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the group has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
