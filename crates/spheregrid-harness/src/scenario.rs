#![forbid(unsafe_code)]

use std::time::Duration;

use serde::Serialize;
use spheregrid_core::geometry::{Size, Vec2};
use spheregrid_layout::{Candidate, PanelInsets};
use spheregrid_runtime::{ConfigError, GridConfig, SetupError, SphereGrid};
use thiserror::Error;

use crate::HeadlessHost;

/// Placements reported in the summary.
const SUMMARY_PLACEMENTS: usize = 3;

/// Failures surfaced by the harness binary.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error("failed to encode summary: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("viewport must be non-zero, got {width}x{height}")]
    Viewport { width: f32, height: f32 },
}

impl HarnessError {
    /// Process exit code: 2 for bad input, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Setup(SetupError::Config(_)) | Self::Viewport { .. } => 2,
            Self::Setup(_) | Self::Encode(_) => 1,
        }
    }
}

/// Build a grid over a [`HeadlessHost`] sized for `config.pool_size`.
pub fn build_grid(
    config: GridConfig,
    viewport: Size,
) -> Result<(SphereGrid<usize, usize>, HeadlessHost), SetupError> {
    let mut host = HeadlessHost::new(config.pool_size, viewport);
    let grid = SphereGrid::new(
        config,
        host.item_factory(),
        host.control_factory(),
        &mut host,
    )?;
    Ok((grid, host))
}

/// A scripted headless session.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub config: GridConfig,
    pub viewport: Size,
    pub frames: u64,
    pub dt: Duration,
    /// Start a master transition after the first frame.
    pub lerp_all: bool,
    /// Resize the window before the given frame.
    pub resize: Option<(u64, Size)>,
}

impl Scenario {
    #[must_use]
    pub fn new(config: GridConfig, viewport: Size) -> Self {
        Self {
            config,
            viewport,
            frames: 60,
            dt: Duration::from_millis(16),
            lerp_all: false,
            resize: None,
        }
    }

    /// Run every frame and summarize the final state.
    pub fn run(&self) -> Result<Summary, HarnessError> {
        if self.viewport.is_degenerate() {
            return Err(HarnessError::Viewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        let (mut grid, mut host) = build_grid(self.config.clone(), self.viewport)?;
        let mut layouts_solved = 0;
        let mut resets = 0;

        let _span = tracing::info_span!(target: "spheregrid.harness", "scenario", frames = self.frames)
            .entered();
        for frame in 1..=self.frames {
            match self.resize {
                Some((at, size)) if at == frame => host.resize(size),
                _ => {}
            }
            let report = grid.tick(self.dt, &mut host);
            if report.layout.is_some() {
                layouts_solved += 1;
            }
            if report.reset {
                resets += 1;
            }
            if frame == 1 && self.lerp_all {
                grid.initiate_lerp_all(&mut host);
            }
        }

        let layout = grid.layout().copied();
        let pool = grid.pool();
        let first_placements = pool
            .active_items()
            .take(SUMMARY_PLACEMENTS)
            .filter_map(|(_, item)| host.items.get(*item.resource()))
            .map(|record| record.position)
            .collect();
        Ok(Summary {
            frames: self.frames,
            pool_size: pool.capacity(),
            active: pool.active_count(),
            visible_items: host.visible_items().len(),
            visible_controls: host.visible_controls().len(),
            transitions_in_flight: pool.transitions_in_flight(),
            resets,
            layouts_solved,
            columns: layout.map(|l| l.columns),
            rows: layout.map(|l| l.rows),
            spacing: layout.map(|l| l.spacing),
            cell_scale: layout.map(|l| l.cell_scale),
            chosen: layout.map(|l| l.chosen),
            first_placements,
            insets: host.insets,
        })
    }
}

/// End-of-run snapshot printed by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub frames: u64,
    pub pool_size: usize,
    pub active: usize,
    pub visible_items: usize,
    pub visible_controls: usize,
    pub transitions_in_flight: usize,
    pub resets: usize,
    pub layouts_solved: usize,
    pub columns: Option<usize>,
    pub rows: Option<usize>,
    pub spacing: Option<f32>,
    pub cell_scale: Option<f32>,
    pub chosen: Option<Candidate>,
    /// Scene positions of the first active items, in sequence order.
    pub first_placements: Vec<Vec2>,
    pub insets: Option<PanelInsets>,
}
