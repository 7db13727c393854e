#![forbid(unsafe_code)]

//! Core: geometry, animation tasks, and logging for SphereGrid.
//!
//! # Role in SphereGrid
//! `spheregrid-core` is the leaf crate. It owns the plain value types shared
//! by the layout solver and the object pool, the tick-driven [`Animation`]
//! contract, and the logging bootstrap used by binaries and tests.
//!
//! # Primary responsibilities
//! - **Geometry**: [`Vec2`], [`Vec3`], and [`Size`] in viewport or scene units.
//! - **Animation**: the [`Animation`] trait and the resumable
//!   [`OpacityLerp`](animation::OpacityLerp) task.
//! - **Logging**: tracing re-exports and optional subscriber installation.
//!
//! [`Animation`]: animation::Animation
//! [`Vec2`]: geometry::Vec2
//! [`Vec3`]: geometry::Vec3
//! [`Size`]: geometry::Size

pub mod animation;
pub mod geometry;
pub mod logging;

pub use logging::{debug, error, info, trace, warn};
