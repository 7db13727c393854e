#![forbid(unsafe_code)]

//! Adaptive grid solver.
//!
//! [`GridSolver::solve`] picks a column count for `n` active items so the grid
//! fills the usable part of the viewport, then derives a uniform cell scale
//! that grows as fewer items are active.
//!
//! # Algorithm
//!
//! With usable width `w` (viewport minus the reserved panel share minus two
//! reference footprints) and height `h`, the aspect ratio is `r = w / h`. The
//! continuous estimate `cols0 = sqrt(n * r)`, `rows0 = n / cols0` seeds two
//! integer candidates:
//!
//! - **row-first**: round `rows0` up, derive columns, and add rows until
//!   `rows * r >= cols`;
//! - **column-first**: round `cols0` up, derive rows, and add columns until
//!   `cols >= rows * r`.
//!
//! The candidate with the larger effective cell wins; ties go to row-first.
//!
//! # Invariants
//!
//! 1. For `n > 0` and a usable viewport, `columns >= 1` and
//!    `rows * columns >= n`.
//! 2. Identical inputs always produce identical layouts.
//! 3. `cell_scale > 0` and `spacing == cell_scale`.
//!
//! # Failure Modes
//!
//! - `n == 0`: no layout.
//! - Zero/negative/non-finite viewport, or no usable width left after the
//!   reserved share: no layout. Callers keep the previous one.

use serde::{Deserialize, Serialize};
use spheregrid_core::geometry::{Size, Vec2, Vec3};

/// Default multiplier applied to the chosen column count before the cell
/// scale is floored to hundredths.
pub const DEFAULT_CELL_FACTOR: f32 = 0.85;

/// Viewports shorter than this produce no layout.
const MIN_VIEWPORT_EXTENT: f32 = 1.0;

/// Upper bound on candidate refinement steps.
const MAX_REFINE_STEPS: usize = 1 << 16;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Inputs to a single solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridInput {
    /// Number of items to place.
    pub active_count: usize,
    /// Viewport size in pixels.
    pub viewport: Size,
    /// Reference item footprint in viewport pixels.
    pub footprint: Size,
    /// Share of the viewport width reserved for the side panel (0..100).
    pub reserved_percentage: f32,
    /// Total pool capacity; scales cells up when fewer items are active.
    pub pool_capacity: usize,
    /// Column multiplier for the cell scale.
    pub cell_factor: f32,
}

impl GridInput {
    /// Inputs with the default reserved share (30%) and cell factor.
    #[must_use]
    pub fn new(active_count: usize, viewport: Size, footprint: Size, pool_capacity: usize) -> Self {
        Self {
            active_count,
            viewport,
            footprint,
            reserved_percentage: 30.0,
            pool_capacity,
            cell_factor: DEFAULT_CELL_FACTOR,
        }
    }

    #[must_use]
    pub fn reserved_percentage(mut self, percentage: f32) -> Self {
        self.reserved_percentage = percentage;
        self
    }

    #[must_use]
    pub fn cell_factor(mut self, factor: f32) -> Self {
        self.cell_factor = factor;
        self
    }

    /// Width left for the grid after the panel share and a footprint margin
    /// on each side.
    #[must_use]
    pub fn usable_width(&self) -> f32 {
        let reserved = self.viewport.width * (self.reserved_percentage / 100.0);
        self.viewport.width - reserved - self.footprint.width * 2.0
    }

    /// Top-left cell position in viewport pixels.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(
            self.viewport.width * (self.reserved_percentage / 100.0) + self.footprint.width,
            self.viewport.height - self.footprint.height,
        )
    }
}

/// Which refinement produced the chosen column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Candidate {
    RowFirst,
    ColumnFirst,
}

/// One integer partition considered by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateShape {
    pub rows: usize,
    pub columns: usize,
    /// Reference footprint width divided by the refined dimension.
    pub metric: f64,
}

/// A solved grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    /// Distance between neighbouring cell centres in scene units.
    pub spacing: f32,
    /// Uniform node scale for every cell.
    pub cell_scale: f32,
    /// Top-left cell in viewport pixels.
    pub origin: Vec2,
    pub chosen: Candidate,
    pub active_count: usize,
}

/// Where one active item goes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellPlacement {
    /// Position among active items.
    pub sequence: usize,
    pub column: usize,
    /// Row offset from the origin; rows stack downward, so this is `<= 0`.
    pub row: i64,
    pub position: Vec2,
    pub scale: Vec3,
}

// ---------------------------------------------------------------------------
// GridLayout
// ---------------------------------------------------------------------------

impl GridLayout {
    /// Column and (non-positive) row of the item at `sequence`.
    #[inline]
    #[must_use]
    pub fn cell(&self, sequence: usize) -> (usize, i64) {
        let columns = self.columns.max(1);
        let column = sequence % columns;
        let row = -((sequence / columns) as i64);
        (column, row)
    }

    /// Placement of the item at `sequence`, relative to `origin` in scene space.
    #[must_use]
    pub fn placement(&self, sequence: usize, origin: Vec2) -> CellPlacement {
        let (column, row) = self.cell(sequence);
        let offset = Vec2::new(column as f32, row as f32) * self.spacing;
        CellPlacement {
            sequence,
            column,
            row,
            position: origin + offset,
            scale: Vec3::splat(self.cell_scale),
        }
    }

    /// Placements for every active item, in sequence order.
    pub fn placements(&self, origin: Vec2) -> impl Iterator<Item = CellPlacement> + '_ {
        (0..self.active_count).map(move |i| self.placement(i, origin))
    }
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Stateless grid solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridSolver;

impl GridSolver {
    /// Solve the grid for `input`, or `None` when there is nothing to lay out.
    ///
    /// Candidate refinement is capped at `MAX_REFINE_STEPS`. On extreme
    /// aspect ratios a capped candidate is returned as-is and may still fail
    /// its own fit condition; it always covers every item.
    #[must_use]
    pub fn solve(input: &GridInput) -> Option<GridLayout> {
        let n = input.active_count;
        if n == 0 {
            return None;
        }
        if input.viewport.is_degenerate() || input.viewport.height < MIN_VIEWPORT_EXTENT {
            return None;
        }

        let ratio = f64::from(input.usable_width()) / f64::from(input.viewport.height);
        if !ratio.is_finite() || ratio <= 0.0 {
            return None;
        }

        let (row_first, column_first) = Self::candidates(n, ratio, input.footprint.width);
        let (columns, chosen) = if row_first.metric < column_first.metric {
            (column_first.columns, Candidate::ColumnFirst)
        } else {
            (row_first.columns, Candidate::RowFirst)
        };
        let columns = columns.max(1);
        let cell = Self::cell_scale(columns, n, input.pool_capacity, input.cell_factor);

        Some(GridLayout {
            columns,
            rows: n.div_ceil(columns),
            spacing: cell,
            cell_scale: cell,
            origin: input.origin(),
            chosen,
            active_count: n,
        })
    }

    /// Both candidate partitions for `n` items at aspect `ratio`.
    ///
    /// Returns `(row_first, column_first)`.
    #[must_use]
    pub fn candidates(n: usize, ratio: f64, footprint_width: f32) -> (CandidateShape, CandidateShape) {
        let count = n as f64;
        let cols0 = (count * ratio).sqrt();
        let rows0 = count / cols0;
        let reference = f64::from(footprint_width);

        let mut rows1 = rows0.ceil().max(1.0);
        let mut cols1 = (count / rows1).ceil();
        let mut steps = 0;
        while rows1 * ratio < cols1 && steps < MAX_REFINE_STEPS {
            rows1 += 1.0;
            cols1 = (count / rows1).ceil();
            steps += 1;
        }
        if steps == MAX_REFINE_STEPS {
            tracing::debug!(target: "spheregrid.layout", n, ratio, rows = rows1, "row-first refinement capped");
        }

        let mut cols2 = cols0.ceil().max(1.0);
        let mut rows2 = (count / cols2).ceil();
        steps = 0;
        while cols2 < rows2 * ratio && steps < MAX_REFINE_STEPS {
            cols2 += 1.0;
            rows2 = (count / cols2).ceil();
            steps += 1;
        }
        if steps == MAX_REFINE_STEPS {
            tracing::debug!(target: "spheregrid.layout", n, ratio, columns = cols2, "column-first refinement capped");
        }

        (
            CandidateShape {
                rows: rows1 as usize,
                columns: cols1 as usize,
                metric: reference / rows1,
            },
            CandidateShape {
                rows: rows2 as usize,
                columns: cols2 as usize,
                metric: reference / cols2,
            },
        )
    }

    /// Uniform cell scale for `columns` columns and `n` active items.
    ///
    /// `floor(columns * factor) / 100`, multiplied by the integer quotient
    /// `capacity / n`. A result of exactly zero becomes 1.
    #[must_use]
    pub fn cell_scale(columns: usize, n: usize, capacity: usize, factor: f32) -> f32 {
        let base = (columns as f32 * factor).floor() / 100.0;
        let compensation = if n == 0 { 0 } else { capacity / n };
        let cell = base * compensation as f32;
        if cell == 0.0 { 1.0 } else { cell }
    }
}
