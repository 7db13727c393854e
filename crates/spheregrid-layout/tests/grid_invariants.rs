//! Property invariants for the adaptive grid solver.

use proptest::prelude::*;
use spheregrid_layout::{GridInput, GridLayout, GridSolver, Size, Vec2};

fn input(n: usize, width: f32, height: f32, footprint: f32) -> GridInput {
    GridInput::new(n, Size::new(width, height), Size::new(footprint, footprint), 1000)
}

proptest! {
    #[test]
    fn layout_covers_every_active_item(
        n in 1usize..=1000,
        width in 640.0f32..4096.0,
        height in 360.0f32..2160.0,
        footprint in 0.0f32..80.0,
    ) {
        if let Some(layout) = GridSolver::solve(&input(n, width, height, footprint)) {
            prop_assert!(layout.columns >= 1);
            prop_assert!(layout.rows * layout.columns >= n);
            prop_assert!((layout.rows - 1) * layout.columns < n, "no empty trailing row");
            prop_assert!(layout.cell_scale > 0.0);
            prop_assert_eq!(layout.spacing, layout.cell_scale);
            prop_assert_eq!(layout.active_count, n);
        }
    }

    #[test]
    fn no_two_items_share_a_cell(
        n in 1usize..=400,
        width in 640.0f32..4096.0,
        height in 360.0f32..2160.0,
    ) {
        if let Some(layout) = GridSolver::solve(&input(n, width, height, 32.0)) {
            let mut seen = std::collections::HashSet::new();
            for p in layout.placements(Vec2::ZERO) {
                prop_assert!(p.column < layout.columns);
                prop_assert!(p.row <= 0);
                prop_assert!(seen.insert((p.column, p.row)));
            }
        }
    }

    #[test]
    fn identical_inputs_identical_layouts(
        n in 1usize..=1000,
        width in 640.0f32..4096.0,
        height in 360.0f32..2160.0,
    ) {
        let a = GridSolver::solve(&input(n, width, height, 50.0));
        let b = GridSolver::solve(&input(n, width, height, 50.0));
        prop_assert_eq!(a, b);
    }
}

#[test]
fn halving_width_reduces_columns() {
    let wide = GridSolver::solve(&input(50, 1920.0, 1080.0, 50.0)).expect("wide");
    let narrow = GridSolver::solve(&input(50, 960.0, 1080.0, 50.0)).expect("narrow");
    assert!(narrow.columns < wide.columns);
}

#[test]
fn layout_serializes_for_diagnostics() {
    let layout: GridLayout = GridSolver::solve(&input(12, 1280.0, 720.0, 64.0)).expect("layout");
    let json = serde_json::to_value(layout).expect("serialize");
    assert_eq!(json["columns"], 3);
    assert_eq!(json["chosen"], "RowFirst");
}
