//! Tour duration selection: preset buttons with a custom time fallback.
//!
//! ## Usage
//!
//! Show the presets above three wheels. While a preset is marked it wins;
//! otherwise the duration is read from the hours, minutes and seconds wheels.
//! Reading the duration is side-effect free and can happen at any time.

use std::time::Instant;

use derive_setters::Setters;
use serde::Serialize;
use tour_ui::Px;

use crate::{
    selectable_group::{Exclusivity, SelectEvent, SelectableGroup, SelectableGroupArgs},
    wheel_picker::{WheelPickerArgs, WheelPickerState},
};

/// Preset labels offered by default.
pub const DEFAULT_PRESETS: [&str; 4] = ["15 min", "30 min", "45 min", "60 min"];

/// One of the three wheels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Hours wheel, 0-23.
    Hours,
    /// Minutes wheel, 0-59.
    Minutes,
    /// Seconds wheel, 0-59.
    Seconds,
}

/// A named duration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DurationPreset {
    label: String,
}

impl DurationPreset {
    /// Creates a preset from its button label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Label with surrounding whitespace removed.
    pub fn label(&self) -> &str {
        self.label.trim()
    }

    /// First integer in the label, or 0 when it has none.
    ///
    /// Numbers too large for `u32` saturate.
    pub fn minutes(&self) -> u32 {
        self.label
            .split(|c: char| !c.is_ascii_digit())
            .find(|run| !run.is_empty())
            // A run of ASCII digits only fails to parse on overflow.
            .map(|run| run.parse().unwrap_or(u32::MAX))
            .unwrap_or(0)
    }
}

/// Duration chosen by the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SelectedDuration {
    /// A preset button was marked.
    Preset {
        /// Preset label.
        value: String,
        /// Minutes parsed from the label.
        minutes: u32,
    },
    /// Custom time read from the wheels.
    Custom {
        /// Hours wheel value.
        hours: u32,
        /// Minutes wheel value.
        minutes: u32,
        /// Seconds wheel value.
        seconds: u32,
        /// `hours * 60 + minutes`, plus one when `seconds >= 30`.
        #[serde(rename = "totalMinutes")]
        total_minutes: u32,
    },
}

impl SelectedDuration {
    /// Builds a custom duration, rounding seconds to the nearest minute.
    ///
    /// The total saturates at `u32::MAX`.
    pub fn custom(hours: u32, minutes: u32, seconds: u32) -> Self {
        // Half-up rounding of seconds / 60.
        let rounded_seconds = seconds.saturating_add(30) / 60;
        SelectedDuration::Custom {
            hours,
            minutes,
            seconds,
            total_minutes: hours
                .saturating_mul(60)
                .saturating_add(minutes)
                .saturating_add(rounded_seconds),
        }
    }

    /// Whole minutes represented by this duration.
    pub fn total_minutes(&self) -> u32 {
        match self {
            SelectedDuration::Preset { minutes, .. } => *minutes,
            SelectedDuration::Custom { total_minutes, .. } => *total_minutes,
        }
    }

    /// Short human readable form: the preset label or `"2h 15m 40s"`.
    pub fn summary(&self) -> String {
        match self {
            SelectedDuration::Preset { value, .. } => value.clone(),
            SelectedDuration::Custom {
                hours,
                minutes,
                seconds,
                ..
            } => format!("{hours}h {minutes}m {seconds}s"),
        }
    }
}

/// Configuration for [`DurationPickerState`].
#[derive(Clone, Debug, PartialEq, Eq, Setters)]
pub struct DurationPickerArgs {
    /// Preset button labels.
    #[setters(skip)]
    pub presets: Vec<String>,
    /// Reselection rule for presets.
    pub preset_exclusivity: Exclusivity,
    /// Hours wheel.
    pub hours: WheelPickerArgs,
    /// Minutes wheel.
    pub minutes: WheelPickerArgs,
    /// Seconds wheel.
    pub seconds: WheelPickerArgs,
}

impl DurationPickerArgs {
    /// Replaces the preset labels.
    pub fn presets<I, S>(mut self, presets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.presets = presets.into_iter().map(Into::into).collect();
        self
    }

    /// Applies one row geometry to all three wheels.
    pub fn wheel_geometry(mut self, item_height: Px, viewport_height: Px) -> Self {
        for wheel in [&mut self.hours, &mut self.minutes, &mut self.seconds] {
            wheel.item_height = item_height;
            wheel.viewport_height = viewport_height;
        }
        self
    }
}

impl Default for DurationPickerArgs {
    fn default() -> Self {
        Self {
            presets: DEFAULT_PRESETS.iter().map(|label| label.to_string()).collect(),
            preset_exclusivity: Exclusivity::Exclusive,
            hours: WheelPickerArgs::new(23, 1),
            minutes: WheelPickerArgs::new(59, 26),
            seconds: WheelPickerArgs::new(59, 1),
        }
    }
}

/// Presets plus three wheels.
pub struct DurationPickerState {
    presets: SelectableGroup<DurationPreset>,
    hours: WheelPickerState,
    minutes: WheelPickerState,
    seconds: WheelPickerState,
}

impl DurationPickerState {
    /// Creates the picker with populated wheels and no marked preset.
    pub fn new(args: &DurationPickerArgs) -> Self {
        let presets = args.presets.iter().map(DurationPreset::new).collect();
        Self {
            presets: SelectableGroup::new(
                SelectableGroupArgs::new(presets).exclusivity(args.preset_exclusivity),
            ),
            hours: WheelPickerState::from_args(&args.hours),
            minutes: WheelPickerState::from_args(&args.minutes),
            seconds: WheelPickerState::from_args(&args.seconds),
        }
    }

    /// Marks the preset at `index`.
    pub fn select_preset(&mut self, index: usize, now: Instant) -> Option<SelectEvent<DurationPreset>> {
        self.presets.select(index, now)
    }

    /// Clears the preset mark so the wheels decide the duration.
    pub fn clear_preset(&mut self) {
        self.presets.clear();
    }

    /// Forwards a scroll event to one wheel.
    pub fn scroll(&mut self, unit: TimeUnit, scroll_top: Px) {
        self.wheel_mut(unit).on_scroll(scroll_top);
    }

    /// The wheel for `unit`.
    pub fn wheel(&self, unit: TimeUnit) -> &WheelPickerState {
        match unit {
            TimeUnit::Hours => &self.hours,
            TimeUnit::Minutes => &self.minutes,
            TimeUnit::Seconds => &self.seconds,
        }
    }

    fn wheel_mut(&mut self, unit: TimeUnit) -> &mut WheelPickerState {
        match unit {
            TimeUnit::Hours => &mut self.hours,
            TimeUnit::Minutes => &mut self.minutes,
            TimeUnit::Seconds => &mut self.seconds,
        }
    }

    /// Preset buttons.
    pub fn presets(&self) -> &SelectableGroup<DurationPreset> {
        &self.presets
    }

    /// Reads the current duration.
    ///
    /// A marked preset takes priority; otherwise each wheel contributes its
    /// marked value, with unmarked wheels reading as zero.
    pub fn selected_duration(&self) -> SelectedDuration {
        if let Some(preset) = self.presets.active() {
            return SelectedDuration::Preset {
                value: preset.label().to_owned(),
                minutes: preset.minutes(),
            };
        }
        SelectedDuration::custom(
            self.hours.selected_value(),
            self.minutes.selected_value(),
            self.seconds.selected_value(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use serde_json::json;
    use tour_ui::Px;

    use super::{
        DurationPickerArgs, DurationPickerState, DurationPreset, SelectedDuration, TimeUnit,
    };
    use crate::{selectable_group::Exclusivity, wheel_picker::WheelPickerArgs};

    /// Scroll offset that centers `value` in the default 90px panel.
    fn centered(value: i32) -> Px {
        Px(value * 30)
    }

    #[test]
    fn custom_duration_from_wheels() {
        let mut picker = DurationPickerState::new(&DurationPickerArgs::default());
        picker.scroll(TimeUnit::Hours, centered(2));
        picker.scroll(TimeUnit::Minutes, centered(15));
        picker.scroll(TimeUnit::Seconds, centered(40));

        let duration = picker.selected_duration();
        assert_eq!(
            duration,
            SelectedDuration::Custom {
                hours: 2,
                minutes: 15,
                seconds: 40,
                total_minutes: 136,
            }
        );
        assert_eq!(duration.summary(), "2h 15m 40s");
        assert_eq!(
            serde_json::to_value(&duration).expect("serializable"),
            json!({"type": "custom", "hours": 2, "minutes": 15, "seconds": 40, "totalMinutes": 136})
        );
    }

    #[test]
    fn defaults_read_from_populated_wheels() {
        let picker = DurationPickerState::new(&DurationPickerArgs::default());
        assert_eq!(picker.selected_duration(), SelectedDuration::custom(1, 26, 1));
        assert_eq!(picker.selected_duration().total_minutes(), 86);
    }

    #[test]
    fn active_preset_overrides_wheels() {
        let mut picker = DurationPickerState::new(&DurationPickerArgs::default());
        picker.scroll(TimeUnit::Hours, centered(5));
        picker.select_preset(1, Instant::now());

        let duration = picker.selected_duration();
        assert_eq!(
            duration,
            SelectedDuration::Preset {
                value: "30 min".into(),
                minutes: 30,
            }
        );
        assert_eq!(
            serde_json::to_value(&duration).expect("serializable"),
            json!({"type": "preset", "value": "30 min", "minutes": 30})
        );

        picker.clear_preset();
        assert!(matches!(
            picker.selected_duration(),
            SelectedDuration::Custom { hours: 5, .. }
        ));
    }

    #[test]
    fn nothing_selected_reads_as_zero() {
        // Defaults outside every wheel's range leave all three unmarked.
        let args = DurationPickerArgs::default()
            .presets(Vec::<String>::new())
            .hours(WheelPickerArgs::new(23, 99))
            .minutes(WheelPickerArgs::new(59, 99))
            .seconds(WheelPickerArgs::new(59, 99));
        let picker = DurationPickerState::new(&args);

        assert_eq!(
            picker.selected_duration(),
            SelectedDuration::Custom {
                hours: 0,
                minutes: 0,
                seconds: 0,
                total_minutes: 0,
            }
        );
    }

    #[test]
    fn seconds_round_half_up() {
        assert_eq!(SelectedDuration::custom(0, 10, 29).total_minutes(), 10);
        assert_eq!(SelectedDuration::custom(0, 10, 30).total_minutes(), 11);
        assert_eq!(SelectedDuration::custom(1, 0, 59).total_minutes(), 61);
    }

    #[test]
    fn preset_minutes_use_first_integer() {
        assert_eq!(DurationPreset::new("  45 min ").minutes(), 45);
        assert_eq!(DurationPreset::new("  45 min ").label(), "45 min");
        assert_eq!(DurationPreset::new("1 h 30 min").minutes(), 1);
        assert_eq!(DurationPreset::new("All day").minutes(), 0);
    }

    #[test]
    fn oversized_preset_minutes_saturate() {
        assert_eq!(DurationPreset::new("5000000000 min").minutes(), u32::MAX);
        assert_eq!(DurationPreset::new("4294967295 min").minutes(), u32::MAX);
    }

    #[test]
    fn custom_total_saturates() {
        assert_eq!(
            SelectedDuration::custom(u32::MAX, 0, 0).total_minutes(),
            u32::MAX
        );
        assert_eq!(
            SelectedDuration::custom(0, u32::MAX, 59).total_minutes(),
            u32::MAX
        );
        // Seconds near the limit still round instead of wrapping.
        assert_eq!(
            SelectedDuration::custom(0, 0, u32::MAX).total_minutes(),
            u32::MAX / 60
        );
    }

    #[test]
    fn toggle_presets_return_to_custom() {
        let args = DurationPickerArgs::default().preset_exclusivity(Exclusivity::Toggle);
        let mut picker = DurationPickerState::new(&args);
        let now = Instant::now();
        picker.select_preset(0, now);
        picker.select_preset(0, now);
        assert!(picker.presets().active().is_none());
        assert!(matches!(
            picker.selected_duration(),
            SelectedDuration::Custom { .. }
        ));
    }

    #[test]
    fn wheel_geometry_applies_to_all_wheels() {
        let args = DurationPickerArgs::default().wheel_geometry(Px(40), Px(200));
        let picker = DurationPickerState::new(&args);
        for unit in [TimeUnit::Hours, TimeUnit::Minutes, TimeUnit::Seconds] {
            assert_eq!(picker.wheel(unit).item_height(), Px(40));
            assert_eq!(picker.wheel(unit).viewport_height(), Px(200));
        }
    }
}
