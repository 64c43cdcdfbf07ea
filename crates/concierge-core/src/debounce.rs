//! Single-slot debounce guard for send triggers.
//!
//! Rapid repeated triggers (key repeat, double submit) within the window
//! collapse into a single effective invocation: a newer trigger supersedes
//! any invocation still waiting out its window. An action that has already
//! started always runs to completion; overlap with a newer trigger is
//! resolved downstream by the send-state guard.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Collapses bursts of triggers into one delayed invocation.
///
/// Each trigger bumps a generation counter; a scheduled action re-checks
/// the counter after its window elapses and bows out if a newer trigger
/// arrived in the meantime. Nothing ever aborts a task, so an action that
/// passed its check cannot be interrupted mid-flight.
pub struct Debouncer {
    window: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Schedule `action` to run after the window, superseding any earlier
    /// trigger still waiting for its window to elapse.
    ///
    /// Supersession only covers the waiting phase. Once an action starts,
    /// it runs to completion.
    ///
    /// Must be called from within a tokio runtime; the action runs on a
    /// spawned task.
    pub fn trigger<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let current = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let window = self.window;
        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            // A newer trigger (or cancel) arrived while this one waited.
            if generation.load(Ordering::SeqCst) != current {
                return;
            }
            action.await;
        });
    }

    /// Drop any invocation still waiting for its window (e.g., on shutdown).
    /// An action that already started is unaffected.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
