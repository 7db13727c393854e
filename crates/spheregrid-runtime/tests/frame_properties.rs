//! Property tests over random frame sequences.
//!
//! Run:
//!   cargo test -p spheregrid-runtime --test frame_properties

use std::time::Duration;

use proptest::prelude::*;
use spheregrid_core::geometry::Size;
use spheregrid_harness::build_grid;
use spheregrid_pool::ItemId;
use spheregrid_runtime::GridConfig;

const POOL: usize = 40;

#[derive(Debug, Clone)]
enum Op {
    SetActive(usize),
    SetOpacity(usize, f32),
    Lerp(usize),
    LerpAll,
    Resize(f32, f32),
    Tick(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..=POOL + 5).prop_map(Op::SetActive),
        (0..POOL, 0.0f32..=1.0).prop_map(|(i, v)| Op::SetOpacity(i, v)),
        (0..POOL).prop_map(Op::Lerp),
        Just(Op::LerpAll),
        (300.0f32..2560.0, 300.0f32..1440.0).prop_map(|(w, h)| Op::Resize(w, h)),
        (1u64..400).prop_map(Op::Tick),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn controls_track_requested_prefix(ops in prop::collection::vec(op(), 1..60)) {
        let config = GridConfig {
            pool_size: POOL,
            active_spheres: 10,
            ..GridConfig::default()
        };
        let (mut grid, mut host) =
            build_grid(config, Size::new(1920.0, 1080.0)).expect("valid config");

        for op in ops {
            match op {
                Op::SetActive(n) => {
                    let accepted = grid.set_active_spheres(n);
                    prop_assert_eq!(accepted, n <= POOL);
                }
                Op::SetOpacity(i, v) => {
                    grid.set_opacity(ItemId(i), v, &mut host);
                }
                Op::Lerp(i) => {
                    grid.initiate_lerp(ItemId(i), &mut host);
                }
                Op::LerpAll => {
                    grid.initiate_lerp_all(&mut host);
                }
                Op::Resize(w, h) => host.resize(Size::new(w, h)),
                Op::Tick(ms) => {
                    let report = grid.tick(Duration::from_millis(ms), &mut host);
                    if report.reset {
                        prop_assert_eq!(report.transitions, 0);
                        prop_assert_eq!(grid.pool().transitions_in_flight(), 0);
                    }
                }
            }
            let visible = host.visible_controls();
            prop_assert!(host.visible_items().iter().all(|i| visible.contains(i)));
        }

        grid.tick(Duration::from_millis(16), &mut host);
        let n = grid.requested_active();
        prop_assert!(n <= POOL);
        prop_assert_eq!(grid.pool().active_count(), n);
        prop_assert_eq!(host.visible_controls(), (0..n).collect::<Vec<_>>());
        match grid.layout() {
            Some(layout) => prop_assert_eq!(layout.active_count, n),
            None => prop_assert_eq!(n, 0),
        }
    }
}
