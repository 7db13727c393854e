#![forbid(unsafe_code)]

//! Tick-driven runtime for SphereGrid.
//!
//! [`SphereGrid`] owns the object pool, the grid manager, and the panel
//! sizer, and advances them in a fixed order on every frame. The embedding
//! engine implements [`GridHost`] and calls [`SphereGrid::tick`] from its
//! frame loop; nothing here owns a thread or a clock.
//!
//! Configuration is data: [`GridConfig`] loads from TOML or JSON and is
//! validated before the pool is built.

pub mod config;
mod error;
mod grid;

pub use config::GridConfig;
pub use error::{ConfigError, SetupError};
pub use grid::{FrameReport, GridHost, SphereGrid};
