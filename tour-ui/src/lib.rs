//! Foundation primitives shared by the tour planner component crates.
//!
//! # Overview
//!
//! `tour-ui` contains no components of its own. It provides the small set of
//! building blocks every component and page relies on:
//!
//! - [`Px`] for integer pixel geometry (wheel items, scroll offsets, viewport
//!   heights).
//! - [`State`] for explicit, per-page shared state handles.
//! - [`CallbackWith`] for identity-compared event handlers.
//! - [`Timeout`], [`TimerQueue`] and [`Debouncer`] for frame-driven timers.
//! - [`Router`] for stack-based navigation between destinations.
//! - [`Key`] and [`FocusRing`] for keyboard activation and roving focus.
//!
//! # Time
//!
//! Nothing in this crate reads the clock. Every time-dependent operation takes
//! an explicit `now: Instant`, and the host event loop advances timers by
//! polling them once per frame:
//!
//! ```
//! use std::time::{Duration, Instant};
//! use tour_ui::TimerQueue;
//!
//! let start = Instant::now();
//! let mut timers = TimerQueue::new();
//! timers.schedule(start, Duration::from_millis(150), "reset-scale");
//!
//! assert!(timers.poll(start).is_empty());
//! assert_eq!(timers.poll(start + Duration::from_millis(150)), vec!["reset-scale"]);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod callback;
pub mod focus;
pub mod px;
pub mod router;
pub mod state;
pub mod timer;

pub use callback::CallbackWith;
pub use focus::{FocusRing, Key};
pub use px::Px;
pub use router::{Router, RouterDestination};
pub use state::State;
pub use timer::{Debouncer, Timeout, TimerQueue};
