//! Shared state handles.
//!
//! ## Usage
//!
//! Create one handle per page instance and pass clones into the components
//! and callbacks that need it. There is no global registry: dropping the last
//! handle drops the state.

use std::{fmt, sync::Arc};

use parking_lot::RwLock;

/// Cloneable handle to a value shared between a page and its callbacks.
///
/// `State<T>` is `Send + Sync` when `T` is, and compares by identity so it can
/// be stored inside `PartialEq` argument structs.
///
/// # Examples
///
/// ```
/// use tour_ui::State;
///
/// let count = State::new(0usize);
/// let handle = count.clone();
/// handle.with_mut(|c| *c += 1);
/// assert_eq!(count.get(), 1);
/// ```
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> State<T> {
    /// Wraps a value in a new handle.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Execute a closure with a shared reference to the stored value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Execute a closure with a mutable reference to the stored value.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Get a cloned value. Requires `T: Clone`.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(Clone::clone)
    }

    /// Replace the stored value.
    pub fn set(&self, value: T) {
        self.with_mut(|slot| *slot = value);
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for State<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Eq for State<T> {}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("State").field(&*self.inner.read()).finish()
    }
}
