#![forbid(unsafe_code)]

//! Change detection for layout inputs.

use spheregrid_core::geometry::Size;

/// Snapshot of the inputs the last layout was computed from.
///
/// Starts empty, so the first [`changed`](Self::changed) call always reports
/// a change.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportState {
    viewport: Option<Size>,
    active_count: Option<usize>,
}

impl ViewportState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare against the snapshot and record the new values.
    ///
    /// Returns `true` when either the viewport size or the active count
    /// differs from the last call.
    pub fn changed(&mut self, viewport: Size, active_count: usize) -> bool {
        let changed =
            self.viewport != Some(viewport) || self.active_count != Some(active_count);
        self.viewport = Some(viewport);
        self.active_count = Some(active_count);
        changed
    }

    /// Forget the snapshot so the next check reports a change.
    pub fn invalidate(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Size> {
        self.viewport
    }

    #[must_use]
    pub fn active_count(&self) -> Option<usize> {
        self.active_count
    }
}
