#![forbid(unsafe_code)]

//! The frame-driven grid scene.
//!
//! # Frame order
//!
//! Each [`SphereGrid::tick`] runs, in order:
//! 1. a pending active-count change (full pool reset),
//! 2. a panel resize if the canvas reported one,
//! 3. one step of every in-flight opacity transition,
//! 4. a grid re-solve if the viewport size or active count changed, followed
//!    by writing transforms for every active item.

use std::time::Duration;

use serde::Serialize;
use spheregrid_layout::{CanvasHost, GridLayout, GridManager, PanelSizer, ViewportHost};
use spheregrid_pool::{ItemId, ObjectPool, SceneHost};

use crate::{ConfigError, GridConfig, SetupError};

/// Everything the runtime needs from the embedding engine.
pub trait GridHost: SceneHost + ViewportHost + CanvasHost {}

impl<T: SceneHost + ViewportHost + CanvasHost + ?Sized> GridHost for T {}

/// What happened during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FrameReport {
    pub frame: u64,
    /// The pool was torn down and rebuilt.
    pub reset: bool,
    pub panels_resized: bool,
    /// Opacity transitions advanced.
    pub transitions: usize,
    /// Layout solved this frame, if any.
    pub layout: Option<GridLayout>,
}

/// Pool, grid, and panels wired together.
#[derive(Debug)]
pub struct SphereGrid<I, C> {
    config: GridConfig,
    pool: ObjectPool<I, C>,
    grid: GridManager,
    panels: PanelSizer,
    requested_active: usize,
    frame: u64,
}

impl<I, C> SphereGrid<I, C> {
    /// Validate `config`, build the pool, and size the panels.
    ///
    /// The configured active count is applied on the first tick.
    pub fn new<H>(
        config: GridConfig,
        item_factory: impl FnMut(usize) -> Option<I>,
        control_factory: impl FnMut(usize, &str) -> Option<C>,
        host: &mut H,
    ) -> Result<Self, SetupError>
    where
        H: GridHost<Item = I, Control = C> + ?Sized,
    {
        let errors = config.validate();
        if !errors.is_empty() {
            return Err(ConfigError::Validation(errors).into());
        }

        let pool = ObjectPool::initialize(config.pool_size, item_factory, control_factory, host)?
            .transition_duration(config.transition_duration())
            .resume_floor(config.resume_floor);
        let panels = config.panel_sizer();
        panels.apply(host);

        let mut scene = Self {
            grid: config.grid_manager(),
            panels,
            pool,
            requested_active: 0,
            frame: 0,
            config,
        };
        scene.set_active_spheres(scene.config.active_spheres);

        tracing::info!(
            target: "spheregrid.runtime",
            pool_size = scene.config.pool_size,
            active = scene.requested_active,
            "sphere grid ready"
        );
        Ok(scene)
    }

    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[must_use]
    pub fn pool(&self) -> &ObjectPool<I, C> {
        &self.pool
    }

    /// Most recent grid layout.
    #[must_use]
    pub fn layout(&self) -> Option<&GridLayout> {
        self.grid.layout()
    }

    /// Active count that the next tick will apply.
    #[must_use]
    pub fn requested_active(&self) -> usize {
        self.requested_active
    }

    /// Request a new active count, applied on the next tick.
    ///
    /// Requests above the pool capacity are ignored and the previous request
    /// stays in effect.
    pub fn set_active_spheres(&mut self, n: usize) -> bool {
        if n > self.pool.capacity() {
            tracing::warn!(
                target: "spheregrid.runtime",
                requested = n,
                capacity = self.pool.capacity(),
                "active count exceeds pool size; ignored"
            );
            return false;
        }
        self.requested_active = n;
        true
    }

    /// Advance one frame.
    pub fn tick<H>(&mut self, dt: Duration, host: &mut H) -> FrameReport
    where
        H: GridHost<Item = I, Control = C> + ?Sized,
    {
        self.frame += 1;
        let mut report = FrameReport {
            frame: self.frame,
            ..FrameReport::default()
        };

        if self.requested_active != self.pool.active_count() {
            report.reset = self.pool.set_active_count(self.requested_active, host);
        }

        report.panels_resized = self.panels.update(host).is_some();
        report.transitions = self.pool.tick(dt, host);

        let active = self.pool.active_items().count();
        if let Some(layout) = self.grid.update(&*host, active, self.pool.capacity()) {
            self.apply_layout(&layout, host);
            report.layout = Some(layout);
        }

        report
    }

    fn apply_layout<H>(&self, layout: &GridLayout, host: &mut H)
    where
        H: GridHost<Item = I, Control = C> + ?Sized,
    {
        let origin = GridManager::world_origin(&*host, layout);
        for (sequence, (_, item)) in self.pool.active_items().enumerate() {
            let cell = layout.placement(sequence, origin);
            host.set_transform(item.resource(), cell.position, cell.scale);
        }
    }

    /// Drive one item's control, as if the user dragged its slider.
    pub fn set_opacity<H>(&mut self, item: ItemId, value: f32, host: &mut H) -> bool
    where
        H: GridHost<Item = I, Control = C> + ?Sized,
    {
        self.pool.set_item_value(item, value, host)
    }

    /// Drive every visible control from the master slider.
    pub fn set_all_opacity<H>(&mut self, value: f32, host: &mut H) -> usize
    where
        H: GridHost<Item = I, Control = C> + ?Sized,
    {
        let changed = self.pool.set_all_values(value, host);
        tracing::debug!(target: "spheregrid.runtime", value, changed, "master opacity");
        changed
    }

    /// Start a timed fade on one item, as if its label was clicked.
    pub fn initiate_lerp<H>(&mut self, item: ItemId, host: &mut H) -> bool
    where
        H: GridHost<Item = I, Control = C> + ?Sized,
    {
        self.pool.start_transition(item, host)
    }

    /// Start a timed fade on every active item.
    pub fn initiate_lerp_all<H>(&mut self, host: &mut H) -> usize
    where
        H: GridHost<Item = I, Control = C> + ?Sized,
    {
        let started = self.pool.start_all_transitions(host);
        tracing::debug!(target: "spheregrid.runtime", started, "master transition");
        started
    }

    /// Stop a running fade where it is.
    pub fn cancel_lerp(&mut self, item: ItemId) -> bool {
        self.pool.cancel_transition(item)
    }
}
