#![forbid(unsafe_code)]

//! Object pool for grid items and their paired controls.
//!
//! An [`ObjectPool`] pre-allocates a fixed number of visual items, each
//! permanently paired with one control (a normalized [0, 1] slider). The
//! pool decides which items are active, and each [`PooledItem`] runs a small
//! opacity state machine driven by its control's value.
//!
//! # How it fits in the system
//! The pool never touches engine objects directly. Every visibility, material,
//! alpha, and transform change is forwarded to a [`SceneHost`] passed into
//! the mutating call, so the same pool runs against a real engine or a
//! recording fake.

mod control;
mod error;
mod host;
mod item;
mod pool;

pub use control::{Control, ControlId};
pub use error::PoolError;
pub use host::{MaterialMode, SceneHost};
pub use item::{ItemId, ItemState, PooledItem};
pub use pool::{DEFAULT_RESUME_FLOOR, DEFAULT_TRANSITION, ObjectPool};
