//! Scrollable numeric wheels with scroll-snap selection.
//!
//! ## Usage
//!
//! Use one wheel per time unit (hours, minutes, seconds). The wheel is
//! populated once, then every scroll event re-marks the item nearest the
//! panel's vertical center.
//!
//! # Geometry
//!
//! A wheel holds one blank spacer, the values `0..=max`, and a second spacer.
//! Child `k` (spacers included) sits at `k * item_height` from the top of the
//! scrollable content and is `item_height` tall. The panel shows
//! `viewport_height` pixels starting at `scroll_top`.

use derive_setters::Setters;
use tour_ui::Px;
use tracing::{debug, trace};

/// Height of one wheel row.
pub const WHEEL_ITEM_HEIGHT: Px = Px(30);

/// Rows visible in the panel at once.
pub const WHEEL_VISIBLE_ITEMS: i32 = 3;

/// Configuration for populating a wheel.
#[derive(Clone, Debug, PartialEq, Eq, Setters)]
pub struct WheelPickerArgs {
    /// Largest value, inclusive. The smallest value is always 0.
    pub max: u32,
    /// Value marked after population.
    ///
    /// Values above `max` leave the wheel without a mark.
    pub default_value: u32,
    /// Height of one row.
    pub item_height: Px,
    /// Visible height of the scroll panel.
    pub viewport_height: Px,
}

impl WheelPickerArgs {
    /// Creates args for a `0..=max` wheel marking `default_value`.
    pub fn new(max: u32, default_value: u32) -> Self {
        Self {
            max,
            default_value,
            ..Self::default()
        }
    }
}

impl Default for WheelPickerArgs {
    fn default() -> Self {
        Self {
            max: 59,
            default_value: 0,
            item_height: WHEEL_ITEM_HEIGHT,
            viewport_height: WHEEL_ITEM_HEIGHT * WHEEL_VISIBLE_ITEMS,
        }
    }
}

/// One row of a wheel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelItem {
    /// Blank padding row before the first and after the last value.
    Spacer,
    /// A selectable value.
    Value(u32),
}

impl WheelItem {
    /// Text shown for the row: empty for spacers, two-digit zero padded
    /// otherwise.
    pub fn label(&self) -> String {
        match self {
            WheelItem::Spacer => String::new(),
            WheelItem::Value(value) => format!("{value:02}"),
        }
    }

    /// Numeric value of the row.
    pub fn value(&self) -> Option<u32> {
        match self {
            WheelItem::Spacer => None,
            WheelItem::Value(value) => Some(*value),
        }
    }
}

/// State of one wheel panel.
///
/// At most one row is marked as selected at any time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WheelPickerState {
    items: Vec<WheelItem>,
    selected: Option<usize>,
    scroll_top: Px,
    item_height: Px,
    viewport_height: Px,
}

impl WheelPickerState {
    /// Creates an empty wheel with default geometry.
    pub fn new() -> Self {
        let args = WheelPickerArgs::default();
        Self {
            items: Vec::new(),
            selected: None,
            scroll_top: Px::ZERO,
            item_height: args.item_height,
            viewport_height: args.viewport_height,
        }
    }

    /// Creates a wheel populated from `args`.
    pub fn from_args(args: &WheelPickerArgs) -> Self {
        let mut state = Self::new();
        state.populate(args);
        state
    }

    /// Replaces the wheel contents.
    ///
    /// Builds `[spacer, 00, 01, ..., max, spacer]`, marks `default_value` and
    /// scrolls to `(default_value + 1) * item_height`. An out-of-range default
    /// leaves the wheel unmarked; the offset uses the same formula.
    pub fn populate(&mut self, args: &WheelPickerArgs) {
        self.item_height = args.item_height;
        self.viewport_height = args.viewport_height;

        self.items.clear();
        self.items.reserve(args.max as usize + 3);
        self.items.push(WheelItem::Spacer);
        self.items.extend((0..=args.max).map(WheelItem::Value));
        self.items.push(WheelItem::Spacer);

        self.selected = self
            .items
            .iter()
            .position(|item| *item == WheelItem::Value(args.default_value));

        let default_row = i32::try_from(args.default_value)
            .unwrap_or(i32::MAX)
            .saturating_add(1);
        self.scroll_top = Px(default_row.saturating_mul(args.item_height.raw()));

        debug!(
            max = args.max,
            default_value = args.default_value,
            scroll_top = self.scroll_top.raw(),
            "wheel populated"
        );
    }

    /// Handles a scroll event: stores the offset and re-marks the nearest row.
    pub fn on_scroll(&mut self, scroll_top: Px) {
        self.scroll_top = scroll_top;
        self.snap();
    }

    /// Marks the row whose center is closest to the panel center.
    ///
    /// Spacers take part like any other row. On equal distance the earlier
    /// row wins. An empty wheel stays unmarked.
    pub fn snap(&mut self) {
        // Compare doubled coordinates so half-pixel centers stay exact.
        let center = self.scroll_top.doubled() + i64::from(self.viewport_height.raw());

        let mut closest = None;
        let mut min_distance = u64::MAX;
        for index in 0..self.items.len() {
            let item_center =
                self.item_offset_top(index).doubled() + i64::from(self.item_height.raw());
            let distance = item_center.abs_diff(center);
            if distance < min_distance {
                min_distance = distance;
                closest = Some(index);
            }
        }

        if closest != self.selected {
            trace!(from = ?self.selected, to = ?closest, "wheel selection moved");
        }
        self.selected = closest;
    }

    /// Distance from the top of the content to row `index`.
    pub fn item_offset_top(&self, index: usize) -> Px {
        let row = i32::try_from(index).unwrap_or(i32::MAX);
        Px(row.saturating_mul(self.item_height.raw()))
    }

    /// All rows, spacers included.
    pub fn items(&self) -> &[WheelItem] {
        &self.items
    }

    /// Index of the marked row.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The marked row.
    pub fn selected_item(&self) -> Option<WheelItem> {
        self.selected.and_then(|index| self.items.get(index).copied())
    }

    /// Text of the marked row.
    pub fn selected_label(&self) -> Option<String> {
        self.selected_item().map(|item| item.label())
    }

    /// Value of the marked row, or 0 when nothing or a spacer is marked.
    pub fn selected_value(&self) -> u32 {
        self.selected_item()
            .and_then(|item| item.value())
            .unwrap_or(0)
    }

    /// Current scroll offset.
    pub fn scroll_top(&self) -> Px {
        self.scroll_top
    }

    /// Height of one row.
    pub fn item_height(&self) -> Px {
        self.item_height
    }

    /// Visible height of the panel.
    pub fn viewport_height(&self) -> Px {
        self.viewport_height
    }
}

impl Default for WheelPickerState {
    fn default() -> Self {
        Self::new()
    }
}
