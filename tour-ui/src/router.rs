//! Stack-based routing between page destinations.
//!
//! # Responsibilities
//!
//! - Maintain an ordered stack of active destinations.
//! - Expose push/pop/reset helpers.
//! - Bump a version on every change so hosts can detect navigation.
//!
//! Link clicks and redirects [`Router::push`], so going back returns to the
//! previous page. Opening a URL directly starts over with
//! [`Router::reset_with`].

use tracing::debug;

/// A navigation destination.
pub trait RouterDestination: Clone + PartialEq {
    /// Path or file name the destination is served from.
    fn path(&self) -> &str;
}

/// Stack router over destinations of type `D`.
///
/// This type has no global singleton. The application owns one instance.
#[derive(Clone, Debug)]
pub struct Router<D> {
    route_stack: Vec<D>,
    version: u64,
}

impl<D: RouterDestination> Router<D> {
    /// Create an empty router.
    pub fn new() -> Self {
        Self {
            route_stack: Vec::new(),
            version: 0,
        }
    }

    /// Create a router seeded with a root destination.
    pub fn with_root(root: D) -> Self {
        let mut router = Self::new();
        router.push(root);
        router
    }

    /// Monotonic routing version.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Push a destination onto the stack.
    pub fn push(&mut self, destination: D) {
        debug!(path = destination.path(), "router push");
        self.route_stack.push(destination);
        self.bump_version();
    }

    /// Pop the top destination from the stack.
    ///
    /// Returns `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<D> {
        let removed = self.route_stack.pop()?;
        debug!(path = removed.path(), "router pop");
        self.bump_version();
        Some(removed)
    }

    /// Clear all destinations and push a new root destination.
    pub fn reset_with(&mut self, root: D) {
        self.route_stack.clear();
        self.push(root);
    }

    /// Top destination.
    pub fn current(&self) -> Option<&D> {
        self.route_stack.last()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.route_stack.is_empty()
    }

    /// Number of destinations in the stack.
    pub fn len(&self) -> usize {
        self.route_stack.len()
    }

    fn bump_version(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

impl<D: RouterDestination> Default for Router<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Router, RouterDestination};

    #[derive(Clone, Debug, PartialEq)]
    struct Page(&'static str);

    impl RouterDestination for Page {
        fn path(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn push_and_pop_bump_version() {
        let mut router = Router::with_root(Page("/"));
        let version = router.version();

        router.push(Page("/tour-plan"));
        assert_eq!(router.current(), Some(&Page("/tour-plan")));
        assert_eq!(router.len(), 2);
        assert!(router.version() > version);

        let version = router.version();
        assert_eq!(router.pop(), Some(Page("/tour-plan")));
        assert_eq!(router.current(), Some(&Page("/")));
        assert!(router.version() > version);
    }

    #[test]
    fn pop_on_empty_stack_is_none() {
        let mut router: Router<Page> = Router::new();
        assert!(router.is_empty());
        assert_eq!(router.pop(), None);
        assert_eq!(router.version(), 0);

        router.push(Page("/dijkstra"));
        assert_eq!(router.current(), Some(&Page("/dijkstra")));
    }

    #[test]
    fn reset_keeps_only_new_root() {
        let mut router = Router::with_root(Page("/"));
        router.push(Page("/preferences"));
        router.push(Page("/tour-plan"));
        router.reset_with(Page("/"));
        assert_eq!(router.len(), 1);
        assert_eq!(router.current().map(RouterDestination::path), Some("/"));
    }
}
