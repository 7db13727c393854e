#![forbid(unsafe_code)]

//! Cached grid recomputation.

use spheregrid_core::geometry::Vec2;

use crate::{DEFAULT_CELL_FACTOR, GridInput, GridLayout, GridSolver, ViewportHost, ViewportState};

/// Re-solves the grid only when the viewport size or active count changes.
#[derive(Debug, Clone)]
pub struct GridManager {
    state: ViewportState,
    reserved_percentage: f32,
    cell_factor: f32,
    layout: Option<GridLayout>,
}

impl Default for GridManager {
    fn default() -> Self {
        Self::new(30.0, DEFAULT_CELL_FACTOR)
    }
}

impl GridManager {
    #[must_use]
    pub fn new(reserved_percentage: f32, cell_factor: f32) -> Self {
        Self {
            state: ViewportState::new(),
            reserved_percentage,
            cell_factor,
            layout: None,
        }
    }

    /// The most recent layout, if any.
    #[must_use]
    pub fn layout(&self) -> Option<&GridLayout> {
        self.layout.as_ref()
    }

    /// Force the next [`update`](Self::update) to re-solve.
    pub fn invalidate(&mut self) {
        self.state.invalidate();
    }

    /// Check the inputs and re-solve if they changed.
    ///
    /// Returns the new layout only when one was computed this call. A change
    /// to zero active items clears the stored layout; a degenerate viewport
    /// keeps the previous one.
    pub fn update<H: ViewportHost + ?Sized>(
        &mut self,
        host: &H,
        active_count: usize,
        pool_capacity: usize,
    ) -> Option<GridLayout> {
        let viewport = host.viewport();
        if !self.state.changed(viewport, active_count) {
            return None;
        }
        if active_count == 0 {
            self.layout = None;
            return None;
        }

        let input = GridInput::new(active_count, viewport, host.reference_footprint(), pool_capacity)
            .reserved_percentage(self.reserved_percentage)
            .cell_factor(self.cell_factor);
        match GridSolver::solve(&input) {
            Some(layout) => {
                tracing::debug!(
                    target: "spheregrid.layout",
                    active = active_count,
                    width = viewport.width,
                    height = viewport.height,
                    columns = layout.columns,
                    rows = layout.rows,
                    spacing = layout.spacing,
                    candidate = ?layout.chosen,
                    "grid recomputed"
                );
                self.layout = Some(layout);
                Some(layout)
            }
            None => {
                tracing::warn!(
                    target: "spheregrid.layout",
                    active = active_count,
                    width = viewport.width,
                    height = viewport.height,
                    "viewport leaves no room for the grid; keeping previous layout"
                );
                None
            }
        }
    }

    /// Scene-space position of the top-left cell for `layout`.
    #[must_use]
    pub fn world_origin<H: ViewportHost + ?Sized>(host: &H, layout: &GridLayout) -> Vec2 {
        host.screen_to_world(layout.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spheregrid_core::geometry::Size;
    use std::cell::Cell;

    struct Viewport {
        size: Size,
        footprint_queries: Cell<usize>,
    }

    impl ViewportHost for Viewport {
        fn viewport(&self) -> Size {
            self.size
        }

        fn reference_footprint(&self) -> Size {
            self.footprint_queries.set(self.footprint_queries.get() + 1);
            Size::new(50.0, 50.0)
        }

        fn screen_to_world(&self, point: Vec2) -> Vec2 {
            point * 0.01
        }
    }

    fn host(width: f32, height: f32) -> Viewport {
        Viewport {
            size: Size::new(width, height),
            footprint_queries: Cell::new(0),
        }
    }

    #[test]
    fn recomputes_only_on_change() {
        let mut manager = GridManager::default();
        let mut vp = host(1920.0, 1080.0);
        assert_eq!(manager.update(&vp, 50, 1000).map(|l| l.columns), Some(8));
        assert!(manager.update(&vp, 50, 1000).is_none());
        assert_eq!(vp.footprint_queries.get(), 1);

        vp.size = Size::new(960.0, 1080.0);
        let layout = manager.update(&vp, 50, 1000).expect("resized");
        assert_eq!(layout.columns, 6);
        assert_eq!(manager.layout().map(|l| l.columns), Some(6));
    }

    #[test]
    fn zero_active_clears_layout() {
        let mut manager = GridManager::default();
        let vp = host(1920.0, 1080.0);
        manager.update(&vp, 10, 1000);
        assert!(manager.layout().is_some());
        assert!(manager.update(&vp, 0, 1000).is_none());
        assert!(manager.layout().is_none());
    }

    #[test]
    fn degenerate_viewport_keeps_previous() {
        let mut manager = GridManager::default();
        let mut vp = host(1920.0, 1080.0);
        manager.update(&vp, 10, 1000);
        vp.size = Size::new(0.0, 0.0);
        assert!(manager.update(&vp, 10, 1000).is_none());
        assert_eq!(manager.layout().map(|l| l.columns), Some(3));
    }

    #[test]
    fn origin_goes_through_projection() {
        let mut manager = GridManager::default();
        let vp = host(1000.0, 800.0);
        let layout = manager.update(&vp, 4, 100).expect("layout");
        let origin = GridManager::world_origin(&vp, &layout);
        assert!((origin.x - 3.5).abs() < 1e-5);
        assert!((origin.y - 7.5).abs() < 1e-5);
    }
}
