#![forbid(unsafe_code)]

//! Side panel sizing.
//!
//! The control panel and the grid panel split the canvas at fixed shares.
//! [`PanelSizer`] turns the canvas width into edge insets and pushes them to
//! the host on startup and whenever the canvas reports a size change.

use serde::{Deserialize, Serialize};

use crate::CanvasHost;

/// Edge insets for the two panels, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelInsets {
    /// Right-edge inset of the control (slider) panel.
    pub slider_right: f32,
    /// Left-edge inset of the grid (sphere) panel.
    pub sphere_left: f32,
}

/// Keeps both panels at fixed percentages of the canvas width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelSizer {
    /// Share of the canvas cut from the control panel's right edge (0..100).
    pub slider_percentage: f32,
    /// Share of the canvas cut from the grid panel's left edge (0..100).
    pub sphere_percentage: f32,
}

impl Default for PanelSizer {
    fn default() -> Self {
        Self::new(70.0, 30.0)
    }
}

impl PanelSizer {
    #[must_use]
    pub const fn new(slider_percentage: f32, sphere_percentage: f32) -> Self {
        Self {
            slider_percentage,
            sphere_percentage,
        }
    }

    /// Insets for a canvas of `canvas_width` pixels.
    #[must_use]
    pub fn insets(&self, canvas_width: f32) -> PanelInsets {
        PanelInsets {
            slider_right: canvas_width * (self.slider_percentage / 100.0),
            sphere_left: canvas_width * (self.sphere_percentage / 100.0),
        }
    }

    /// Apply insets unconditionally.
    pub fn apply<H: CanvasHost + ?Sized>(&self, host: &mut H) -> PanelInsets {
        let insets = self.insets(host.canvas_width());
        host.set_panel_insets(insets);
        insets
    }

    /// Apply insets if the canvas reported a size change since the last call.
    pub fn update<H: CanvasHost + ?Sized>(&self, host: &mut H) -> Option<PanelInsets> {
        if host.take_canvas_changed() {
            let insets = self.apply(host);
            tracing::debug!(
                target: "spheregrid.layout",
                slider_right = insets.slider_right,
                sphere_left = insets.sphere_left,
                "panels resized"
            );
            Some(insets)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Canvas {
        width: f32,
        changed: bool,
        applied: Vec<PanelInsets>,
    }

    impl CanvasHost for Canvas {
        fn canvas_width(&self) -> f32 {
            self.width
        }

        fn take_canvas_changed(&mut self) -> bool {
            std::mem::take(&mut self.changed)
        }

        fn set_panel_insets(&mut self, insets: PanelInsets) {
            self.applied.push(insets);
        }
    }

    #[test]
    fn insets_follow_percentages() {
        let sizer = PanelSizer::new(70.0, 30.0);
        let insets = sizer.insets(1920.0);
        assert!((insets.slider_right - 1344.0).abs() < 1e-3);
        assert!((insets.sphere_left - 576.0).abs() < 1e-3);
    }

    #[test]
    fn update_only_on_change() {
        let sizer = PanelSizer::default();
        let mut canvas = Canvas {
            width: 1000.0,
            ..Default::default()
        };
        sizer.apply(&mut canvas);
        assert_eq!(canvas.applied.len(), 1);

        assert!(sizer.update(&mut canvas).is_none());
        canvas.width = 500.0;
        canvas.changed = true;
        let insets = sizer.update(&mut canvas).expect("changed");
        assert!((insets.sphere_left - 150.0).abs() < 1e-3);
        assert_eq!(canvas.applied.len(), 2);
        assert!(!canvas.changed, "flag is consumed");
    }
}
