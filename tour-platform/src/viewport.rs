//! Viewport tracking for responsive container sizing.
//!
//! Resize events are debounced; an orientation change re-emits a resize after
//! a short delay so layouts settle before they are measured.

use std::time::{Duration, Instant};

use tour_ui::{Debouncer, Px, TimerQueue};
use tracing::debug;

/// Viewports shorter than this get a fixed container min height.
pub const COMPACT_HEIGHT_THRESHOLD: Px = Px(600);

/// Default quiet period for resize handling.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Default delay between an orientation change and the re-emitted resize.
pub const ORIENTATION_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Visible window area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Inner height of the window.
    pub inner_height: Px,
}

impl Viewport {
    /// Minimum height the page container should use for this viewport.
    pub fn container_min_height(&self) -> ContainerMinHeight {
        if self.inner_height < COMPACT_HEIGHT_THRESHOLD {
            ContainerMinHeight::Fixed(self.inner_height)
        } else {
            ContainerMinHeight::FullViewport
        }
    }
}

/// Container minimum height rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerMinHeight {
    /// Exactly this many pixels.
    Fixed(Px),
    /// The full viewport height (`100vh`).
    FullViewport,
}

/// Debounced viewport state.
pub struct ViewportState {
    viewport: Viewport,
    min_height: ContainerMinHeight,
    // Most recent height reported by the window, applied or not.
    reported_height: Px,
    resize: Debouncer<Px>,
    orientation: TimerQueue<()>,
    orientation_delay: Duration,
}

impl ViewportState {
    /// Creates viewport state with the default timings.
    pub fn new(viewport: Viewport) -> Self {
        Self::with_timings(viewport, RESIZE_DEBOUNCE, ORIENTATION_SETTLE_DELAY)
    }

    /// Creates viewport state with custom timings.
    pub fn with_timings(
        viewport: Viewport,
        resize_debounce: Duration,
        orientation_delay: Duration,
    ) -> Self {
        Self {
            viewport,
            min_height: viewport.container_min_height(),
            reported_height: viewport.inner_height,
            resize: Debouncer::new(resize_debounce),
            orientation: TimerQueue::new(),
            orientation_delay,
        }
    }

    /// Last applied viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Container min height for the last applied viewport.
    pub fn min_height(&self) -> ContainerMinHeight {
        self.min_height
    }

    /// Records a window resize.
    pub fn on_resize(&mut self, now: Instant, inner_height: Px) {
        self.reported_height = inner_height;
        self.resize.call(now, inner_height);
    }

    /// Records an orientation change.
    pub fn on_orientation_change(&mut self, now: Instant) {
        self.orientation.schedule(now, self.orientation_delay, ());
    }

    /// Advances timers; returns the new min height when it was recomputed.
    pub fn poll(&mut self, now: Instant) -> Option<ContainerMinHeight> {
        if !self.orientation.poll(now).is_empty() {
            self.resize.call(now, self.reported_height);
        }
        let inner_height = self.resize.poll(now)?;
        self.viewport = Viewport { inner_height };
        self.min_height = self.viewport.container_min_height();
        debug!(min_height = ?self.min_height, "container min height updated");
        Some(self.min_height)
    }
}
