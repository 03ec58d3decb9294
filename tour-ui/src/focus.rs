//! Keyboard keys and roving focus.

/// Keyboard key relevant to component activation and focus movement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// The Enter key.
    Enter,
    /// The space bar.
    Space,
    /// Arrow up.
    ArrowUp,
    /// Arrow down.
    ArrowDown,
    /// Any other key, by its DOM key name.
    Other(String),
}

impl Key {
    /// Parses a DOM `KeyboardEvent.key` name.
    pub fn parse(name: &str) -> Self {
        match name {
            "Enter" => Key::Enter,
            " " | "Space" | "Spacebar" => Key::Space,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            other => Key::Other(other.to_owned()),
        }
    }

    /// Whether this key activates the focused control.
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// Tracks which of `len` sibling items holds keyboard focus.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusRing {
    len: usize,
    focused: Option<usize>,
}

impl FocusRing {
    /// Creates a ring over `len` items with nothing focused.
    pub fn new(len: usize) -> Self {
        Self { len, focused: None }
    }

    /// Number of items in the ring.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the ring has no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Currently focused index.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Focuses `index`; out-of-range indices are ignored.
    pub fn focus(&mut self, index: usize) {
        if index < self.len {
            self.focused = Some(index);
        }
    }

    /// Drops focus from the ring.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Moves focus to the next item, wrapping to the first.
    ///
    /// Does nothing when no item is focused.
    pub fn next(&mut self) -> Option<usize> {
        let current = self.focused?;
        let next = (current + 1) % self.len;
        self.focused = Some(next);
        Some(next)
    }

    /// Moves focus to the previous item, wrapping to the last.
    ///
    /// Does nothing when no item is focused.
    pub fn previous(&mut self) -> Option<usize> {
        let current = self.focused?;
        let previous = if current == 0 {
            self.len - 1
        } else {
            current - 1
        };
        self.focused = Some(previous);
        Some(previous)
    }
}
