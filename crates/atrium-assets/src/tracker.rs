//! Loading-progress tracker with a forced-ready timeout.

use tracing::warn;

/// Seconds after which readiness is forced regardless of progress.
const LOAD_TIMEOUT: f32 = 3.0;

/// Tracks how many art requests have resolved and forces readiness
/// after [`LOAD_TIMEOUT`] so the entry gate never stalls on slow art.
#[derive(Debug, Clone)]
pub struct LoadTracker {
    resolved: Vec<bool>,
    loaded: usize,
    elapsed: f32,
    forced: bool,
}

impl LoadTracker {
    /// Track `total` outstanding requests. Zero requests is immediately
    /// ready.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            resolved: vec![false; total],
            loaded: 0,
            elapsed: 0.0,
            forced: false,
        }
    }

    /// Advance the timeout clock.
    pub fn tick(&mut self, dt: f32) {
        if self.loaded >= self.resolved.len() {
            return;
        }
        self.elapsed += dt;
        if self.elapsed >= LOAD_TIMEOUT && !self.forced {
            self.forced = true;
            warn!(
                loaded = self.loaded,
                total = self.resolved.len(),
                "art loading timed out, proceeding without the rest"
            );
        }
    }

    /// Record a resolved request. Duplicate and out-of-range indices are
    /// ignored; late resolutions after a forced timeout still count.
    pub fn mark_resolved(&mut self, index: usize) {
        if let Some(slot) = self.resolved.get_mut(index)
            && !*slot
        {
            *slot = true;
            self.loaded += 1;
        }
    }

    /// Ready when everything resolved or the timeout forced it.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.forced || self.loaded >= self.resolved.len()
    }

    /// Requests resolved so far.
    #[must_use]
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    /// Requests being tracked.
    #[must_use]
    pub fn total(&self) -> usize {
        self.resolved.len()
    }
}
