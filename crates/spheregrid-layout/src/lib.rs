#![forbid(unsafe_code)]

//! Layout primitives and solvers.
//!
//! - [`GridSolver`] partitions the active items into rows and columns for the
//!   current viewport and derives a uniform cell scale.
//! - [`GridManager`] caches the last viewport and active count and only
//!   re-solves when one of them changes.
//! - [`PanelSizer`] keeps the two side panels at fixed shares of the canvas.

mod grid;
mod host;
mod manager;
mod panels;
mod viewport;

pub use grid::{
    Candidate, CandidateShape, CellPlacement, DEFAULT_CELL_FACTOR, GridInput, GridLayout,
    GridSolver,
};
pub use host::{CanvasHost, ViewportHost};
pub use manager::GridManager;
pub use panels::{PanelInsets, PanelSizer};
pub use spheregrid_core::geometry::{Size, Vec2, Vec3};
pub use viewport::ViewportState;
