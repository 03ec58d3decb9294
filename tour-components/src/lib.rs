//! Headless interaction components for the tour planner.
//!
//! Each component is a plain state struct driven by explicit events (clicks,
//! scroll offsets, key presses) and, where time matters, by `poll(now)`. A
//! renderer reads the state to draw; nothing here touches a real display.
//!
//! | module | component |
//! |--------|-----------|
//! | [`wheel_picker`] | scrollable numeric wheel with scroll-snap selection |
//! | [`duration_picker`] | preset buttons plus hours/minutes/seconds wheels |
//! | [`selectable_group`] | single selection among sibling items |
//! | [`notification`] | transient toast with a fixed lifetime |
//! | [`option_card`] | journey option cards with loading and press feedback |
//! | [`navigation_bar`] | bottom navigation bar |
//! | [`destination_list`] | ordered, re-indexed list of tour stops |
//! | [`settings_list`] | settings entries and language selection |
//! | [`feedback_form`] | single-field feedback form |
#![deny(missing_docs, clippy::unwrap_used)]

pub mod destination_list;
pub mod duration_picker;
pub mod feedback_form;
pub mod navigation_bar;
pub mod notification;
pub mod option_card;
pub mod selectable_group;
pub mod settings_list;
pub mod wheel_picker;
