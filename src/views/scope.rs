//! View-scoped background tasks.
//!
//! A page load runs inside a scope tied to the view's lifetime; dropping
//! the scope aborts every in-flight fetch so nothing writes state after
//! navigation.

use tokio::task::{AbortHandle, JoinHandle};

/// Tracks the tasks spawned on behalf of one view and aborts them when
/// the view goes away
#[derive(Debug, Default)]
pub struct ViewScope {
    handles: Vec<AbortHandle>,
}

impl ViewScope {
    /// Create an empty scope
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a task whose lifetime is bounded by this scope.
    ///
    /// Awaiting the returned handle after the scope was dropped yields a
    /// cancelled `JoinError`.
    pub fn spawn<F>(&mut self, future: F) -> JoinHandle<F::Output>
    where
        F: std::future::Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let handle = tokio::spawn(future);
        self.handles.push(handle.abort_handle());
        handle
    }

    /// Number of tasks spawned in this scope so far
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.handles.len()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}
