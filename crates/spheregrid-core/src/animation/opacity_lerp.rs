#![forbid(unsafe_code)]

//! Resumable opacity transition.
//!
//! An [`OpacityLerp`] interpolates linearly from a start value to an end
//! value over a fixed duration. It is advanced once per frame; when the
//! accumulated time reaches the duration the value snaps exactly to the end.
//!
//! # Invariants
//!
//! 1. `value()` is `start` before the first tick.
//! 2. Samples move monotonically from `start` toward `end`.
//! 3. Once `Finished`, `value()` is exactly `end`.
//! 4. `cancel()` freezes the value; later ticks are ignored.
//!
//! # Failure Modes
//!
//! - Zero duration: clamped to 1ns so the first tick finishes the transition.

use std::time::Duration;

use super::{Animation, lerp};

/// Direction chosen for a toggle-style transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpacityTarget {
    /// Fade in to fully opaque.
    Opaque,
    /// Fade out to fully transparent.
    Transparent,
}

impl OpacityTarget {
    /// Pick the target for a toggle started at `current`.
    ///
    /// Values below one half fade in, values above fade out. Exactly one half
    /// has no target.
    #[must_use]
    pub fn toward(current: f32) -> Option<Self> {
        if current < 0.5 {
            Some(Self::Opaque)
        } else if current > 0.5 {
            Some(Self::Transparent)
        } else {
            None
        }
    }

    /// The endpoint value for this target.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f32 {
        match self {
            Self::Opaque => 1.0,
            Self::Transparent => 0.0,
        }
    }
}

/// Lifecycle of an [`OpacityLerp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LerpState {
    Running,
    Finished,
    Cancelled,
}

/// A linear opacity transition advanced by explicit ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct OpacityLerp {
    start: f32,
    end: f32,
    duration: Duration,
    elapsed: Duration,
    state: LerpState,
}

impl OpacityLerp {
    /// Create a running transition from `start` to `end`.
    #[must_use]
    pub fn new(start: f32, end: f32, duration: Duration) -> Self {
        Self {
            start,
            end,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            elapsed: Duration::ZERO,
            state: LerpState::Running,
        }
    }

    /// Create a transition from `start` toward `target`'s endpoint.
    #[must_use]
    pub fn to_target(start: f32, target: OpacityTarget, duration: Duration) -> Self {
        Self::new(start, target.value(), duration)
    }

    /// Stop the transition where it is.
    ///
    /// No-op once finished.
    pub fn cancel(&mut self) {
        if self.state == LerpState::Running {
            self.state = LerpState::Cancelled;
        }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> LerpState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.state == LerpState::Cancelled
    }

    #[inline]
    #[must_use]
    pub fn start(&self) -> f32 {
        self.start
    }

    #[inline]
    #[must_use]
    pub fn end(&self) -> f32 {
        self.end
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Fraction of the duration consumed, in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }
}

impl Animation for OpacityLerp {
    fn tick(&mut self, dt: Duration) {
        if self.state != LerpState::Running {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.duration {
            self.state = LerpState::Finished;
        }
    }

    fn is_complete(&self) -> bool {
        self.state != LerpState::Running
    }

    fn value(&self) -> f32 {
        match self.state {
            LerpState::Finished => self.end,
            LerpState::Running | LerpState::Cancelled => {
                lerp(self.start, self.end, self.progress())
            }
        }
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.state = LerpState::Running;
    }

    fn overshoot(&self) -> Duration {
        if self.state == LerpState::Finished {
            self.elapsed.saturating_sub(self.duration)
        } else {
            Duration::ZERO
        }
    }
}
