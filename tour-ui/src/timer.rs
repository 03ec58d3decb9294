//! Frame-driven timers.
//!
//! ## Usage
//!
//! Components never sleep or spawn threads. They record deadlines and the
//! host loop advances them by calling `poll(now)` every frame, which keeps all
//! timer behavior single-threaded and deterministic under test.

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

/// A single running timeout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timeout {
    started_at: Instant,
    duration: Duration,
}

impl Timeout {
    /// Starts a timeout at `now`.
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            started_at: now,
            duration,
        }
    }

    /// Time elapsed since the start, saturating at zero.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Whether the full duration has elapsed.
    pub fn is_due(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.duration
    }

    /// Fraction of the duration elapsed, in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed(now).as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

struct PendingTask<T> {
    deadline: Instant,
    task: T,
}

/// Fire-and-forget one-shot timers.
///
/// There is no cancellation: a scheduled task fires once its deadline passes,
/// or is dropped together with the queue.
pub struct TimerQueue<T> {
    pending: VecDeque<PendingTask<T>>,
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// Schedules `task` to fire `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) {
        let deadline = now + delay;
        // Keep deadline order; equal deadlines fire in scheduling order.
        let index = self
            .pending
            .iter()
            .position(|pending| pending.deadline > deadline)
            .unwrap_or(self.pending.len());
        self.pending.insert(index, PendingTask { deadline, task });
    }

    /// Removes and returns every task whose deadline is at or before `now`.
    pub fn poll(&mut self, now: Instant) -> Vec<T> {
        let mut due = Vec::new();
        while self
            .pending
            .front()
            .is_some_and(|pending| pending.deadline <= now)
        {
            if let Some(pending) = self.pending.pop_front() {
                due.push(pending.task);
            }
        }
        due
    }

    /// Number of tasks still waiting.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no task is waiting.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Trailing-edge debouncer.
///
/// Each [`call`](Debouncer::call) re-arms the deadline and keeps the latest
/// value; [`poll`](Debouncer::poll) yields that value once `wait` passed
/// without another call.
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer with the given quiet period.
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Records a call, replacing any pending value.
    pub fn call(&mut self, now: Instant, value: T) {
        self.pending = Some((now + self.wait, value));
    }

    /// Returns the pending value once its quiet period elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => self.pending.take().map(|(_, value)| value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{Debouncer, Timeout, TimerQueue};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn timeout_progress_is_clamped() {
        let start = Instant::now();
        let timeout = Timeout::start(start, ms(100));
        assert_eq!(timeout.progress(start), 0.0);
        assert!(!timeout.is_due(start + ms(99)));
        assert!(timeout.is_due(start + ms(100)));
        assert_eq!(timeout.progress(start + ms(500)), 1.0);
        assert_eq!(Timeout::start(start, Duration::ZERO).progress(start), 1.0);
    }

    #[test]
    fn queue_fires_in_deadline_then_schedule_order() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(start, ms(1000), "card-loaded");
        queue.schedule(start, ms(150), "touch-a");
        queue.schedule(start, ms(150), "touch-b");
        queue.schedule(start, ms(10), "fade-in");

        assert_eq!(queue.poll(start + ms(5)), Vec::<&str>::new());
        assert_eq!(
            queue.poll(start + ms(150)),
            vec!["fade-in", "touch-a", "touch-b"]
        );
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.poll(start + ms(2000)), vec!["card-loaded"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn debouncer_keeps_latest_value_and_rearms() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(250));
        debouncer.call(start, 500);
        debouncer.call(start + ms(200), 700);

        assert_eq!(debouncer.poll(start + ms(300)), None);
        assert_eq!(debouncer.poll(start + ms(450)), Some(700));
        assert_eq!(debouncer.poll(start + ms(900)), None);
    }
}
