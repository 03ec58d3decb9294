//! Transient toast notifications.
//!
//! ## Usage
//!
//! Call [`NotificationHostState::show`] with a message and poll the host each
//! frame. At most one toast exists at a time; a new message replaces the
//! current one immediately and restarts the timeline.
//!
//! Timeline, measured from `show`:
//!
//! | elapsed | phase | opacity |
//! |---------|-------|---------|
//! | `< 10ms` | [`NotificationPhase::Entering`] | 0 |
//! | `10ms..3000ms` | [`NotificationPhase::Visible`] | fades in over 300ms, then 1 |
//! | `3000ms..3300ms` | [`NotificationPhase::Leaving`] | fades out to 0 |
//! | `>= 3300ms` | removed | |

use std::time::{Duration, Instant};

use derive_setters::Setters;
use tour_ui::Timeout;
use tracing::debug;

/// Delay before the toast starts fading in.
pub const NOTIFICATION_ENTER_DELAY: Duration = Duration::from_millis(10);
/// Time from `show` until the fade-out starts.
pub const NOTIFICATION_VISIBLE_DURATION: Duration = Duration::from_millis(3_000);
/// Length of the fade transitions.
pub const NOTIFICATION_FADE_DURATION: Duration = Duration::from_millis(300);

/// Timing configuration for a notification host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Setters)]
pub struct NotificationTimings {
    /// Delay before fading in.
    pub enter_delay: Duration,
    /// Time from `show` until fading out.
    pub visible_for: Duration,
    /// Fade transition length.
    pub fade: Duration,
}

impl NotificationTimings {
    /// Total lifetime of a toast.
    pub fn lifetime(&self) -> Duration {
        self.visible_for + self.fade
    }
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            enter_delay: NOTIFICATION_ENTER_DELAY,
            visible_for: NOTIFICATION_VISIBLE_DURATION,
            fade: NOTIFICATION_FADE_DURATION,
        }
    }
}

/// Where a toast is in its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Inserted but not yet fading in.
    Entering,
    /// Fading in or fully shown.
    Visible,
    /// Fading out.
    Leaving,
}

/// Snapshot of the current toast for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationView {
    /// Toast id returned by [`NotificationHostState::show`].
    pub id: u64,
    /// Message text.
    pub message: String,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Lifetime phase.
    pub phase: NotificationPhase,
    /// Look of the toast.
    pub style: NotificationStyle,
}

/// Visual style of the toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationStyle {
    /// Distance from the top of the viewport, in pixels.
    pub top: i32,
    /// Background color as `0xRRGGBB`.
    pub background_rgb: u32,
    /// Text color as `0xRRGGBB`.
    pub text_rgb: u32,
    /// Vertical padding, in pixels.
    pub padding_vertical: i32,
    /// Horizontal padding, in pixels.
    pub padding_horizontal: i32,
    /// Corner radius, in pixels.
    pub corner_radius: i32,
    /// Font size, in pixels.
    pub font_size: i32,
    /// Font weight.
    pub font_weight: u16,
    /// Stacking order.
    pub z_index: i32,
}

impl Default for NotificationStyle {
    fn default() -> Self {
        Self {
            top: 20,
            background_rgb: 0x4a7c59,
            text_rgb: 0xffffff,
            padding_vertical: 12,
            padding_horizontal: 24,
            corner_radius: 8,
            font_size: 14,
            font_weight: 500,
            z_index: 1000,
        }
    }
}

#[derive(Clone, Debug)]
struct ActiveNotification {
    id: u64,
    message: String,
    shown_at: Instant,
}

/// Holds the single visible toast.
pub struct NotificationHostState {
    timings: NotificationTimings,
    style: NotificationStyle,
    current: Option<ActiveNotification>,
    next_id: u64,
}

impl NotificationHostState {
    /// Creates an empty host with default timings.
    pub fn new() -> Self {
        Self::with_timings(NotificationTimings::default())
    }

    /// Creates an empty host with custom timings.
    pub fn with_timings(timings: NotificationTimings) -> Self {
        Self {
            timings,
            style: NotificationStyle::default(),
            current: None,
            next_id: 1,
        }
    }

    /// Replaces the style reported with every toast.
    pub fn with_style(mut self, style: NotificationStyle) -> Self {
        self.style = style;
        self
    }

    /// Shows `message`, replacing any visible toast.
    ///
    /// Returns the id of the new toast.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        let message = message.into();
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        if let Some(previous) = self.current.take() {
            debug!(replaced = previous.id, id, "replacing notification");
        }
        debug!(id, %message, "showing notification");
        self.current = Some(ActiveNotification {
            id,
            message,
            shown_at: now,
        });
        id
    }

    /// Removes the toast immediately.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Advances the timeline and returns the toast to draw, if any.
    pub fn poll(&mut self, now: Instant) -> Option<NotificationView> {
        let current = self.current.as_ref()?;
        let elapsed = now.saturating_duration_since(current.shown_at);
        if elapsed >= self.timings.lifetime() {
            debug!(id = current.id, "notification expired");
            self.current = None;
            return None;
        }
        let (phase, opacity) = self.phase_at(current.shown_at, now);
        Some(NotificationView {
            id: current.id,
            message: current.message.clone(),
            opacity,
            phase,
            style: self.style,
        })
    }

    fn phase_at(&self, shown_at: Instant, now: Instant) -> (NotificationPhase, f32) {
        let timings = &self.timings;
        let fade_in = Timeout::start(shown_at + timings.enter_delay, timings.fade);
        let fade_out_at = shown_at + timings.visible_for;
        let elapsed = now.saturating_duration_since(shown_at);
        if elapsed < timings.enter_delay {
            (NotificationPhase::Entering, 0.0)
        } else if elapsed < timings.visible_for {
            (NotificationPhase::Visible, fade_in.progress(now))
        } else {
            // Fade-out starts from wherever the fade-in reached.
            let fade_out = Timeout::start(fade_out_at, timings.fade);
            (
                NotificationPhase::Leaving,
                fade_in.progress(fade_out_at) * (1.0 - fade_out.progress(now)),
            )
        }
    }
}

impl Default for NotificationHostState {
    fn default() -> Self {
        Self::new()
    }
}
