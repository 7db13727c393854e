#![forbid(unsafe_code)]

//! Tick-driven animation primitives.
//!
//! Animations are plain state machines advanced by an external scheduler:
//! the owner calls [`Animation::tick`] once per frame with the elapsed delta
//! and reads [`Animation::value`] afterwards. Nothing here spawns threads or
//! sleeps.

mod opacity_lerp;

pub use opacity_lerp::{LerpState, OpacityLerp, OpacityTarget};

use std::time::Duration;

/// A value that evolves over time under explicit ticking.
pub trait Animation {
    /// Advance by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation will no longer change its value.
    fn is_complete(&self) -> bool;

    /// Current output value.
    fn value(&self) -> f32;

    /// Return to the initial state.
    fn reset(&mut self);

    /// Time consumed past the end by the last tick.
    fn overshoot(&self) -> Duration {
        Duration::ZERO
    }
}

/// Linear interpolation between `a` and `b`, with `t` clamped to [0, 1].
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    a + (b - a) * t
}
