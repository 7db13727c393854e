#![forbid(unsafe_code)]

//! Collaborator traits implemented by the embedding engine.

use spheregrid_core::geometry::{Size, Vec2};

use crate::PanelInsets;

/// Read access to the render viewport and camera projection.
pub trait ViewportHost {
    /// Current viewport size in pixels.
    fn viewport(&self) -> Size;

    /// Bounding footprint of the reference item projected into viewport pixels.
    fn reference_footprint(&self) -> Size;

    /// Convert a viewport-pixel point into scene space.
    fn screen_to_world(&self, point: Vec2) -> Vec2;
}

/// The UI canvas that hosts the control panel and the grid panel.
pub trait CanvasHost {
    /// Current canvas width in pixels.
    fn canvas_width(&self) -> f32;

    /// Return and clear the canvas "size changed" flag.
    fn take_canvas_changed(&mut self) -> bool;

    /// Apply new panel insets.
    fn set_panel_insets(&mut self, insets: PanelInsets);
}
