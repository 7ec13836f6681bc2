// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Completeness and soundness of viewport queries over random placements.

use proptest::prelude::*;
use tessera_grid::{CellGrid, Viewport};

const W: i32 = 3_200;
const H: i32 = 2_100;

fn points() -> impl Strategy<Value = Vec<(f32, f32)>> {
    prop::collection::vec((0.0_f32..W as f32, 0.0_f32..H as f32), 0..200)
}

proptest! {
    #[test]
    fn full_map_query_returns_every_key_once(pts in points()) {
        let mut grid: CellGrid<usize> = CellGrid::with_default_cells(W, H);
        for (i, &(x, y)) in pts.iter().enumerate() {
            grid.insert(x, y, i);
        }
        let mut hits = grid.query(&Viewport::from_min_max(0.0, 0.0, W as f32, H as f32));
        hits.sort_unstable();
        let expected: Vec<usize> = (0..pts.len()).collect();
        prop_assert_eq!(hits, expected);
    }

    #[test]
    fn query_never_returns_keys_outside_covered_cells(
        pts in points(),
        cx in 0.0_f32..W as f32,
        cy in 0.0_f32..H as f32,
        vw in 1.0_f32..1500.0,
        vh in 1.0_f32..1500.0,
    ) {
        let mut grid: CellGrid<usize> = CellGrid::with_default_cells(W, H);
        for (i, &(x, y)) in pts.iter().enumerate() {
            grid.insert(x, y, i);
        }
        let view = Viewport::from_center_size(cx, cy, vw, vh);
        let start = grid.cell_coord(view.min_x(), view.min_y());
        let end = grid.cell_coord(view.max_x(), view.max_y());
        let hits = grid.query(&view);
        for &i in &hits {
            let (x, y) = pts[i];
            let c = grid.cell_coord(x, y);
            prop_assert!(start.col <= c.col && c.col <= end.col);
            prop_assert!(start.row <= c.row && c.row <= end.row);
        }
        // And nothing inside the covered range is missed.
        let covered = pts
            .iter()
            .filter(|&&(x, y)| {
                let c = grid.cell_coord(x, y);
                start.col <= c.col && c.col <= end.col && start.row <= c.row && c.row <= end.row
            })
            .count();
        prop_assert_eq!(hits.len(), covered);
    }

    #[test]
    fn query_is_deterministic(pts in points()) {
        let mut grid: CellGrid<usize> = CellGrid::with_default_cells(W, H);
        for (i, &(x, y)) in pts.iter().enumerate() {
            grid.insert(x, y, i);
        }
        let view = Viewport::from_center_size(1600.0, 1000.0, 1920.0, 1080.0);
        prop_assert_eq!(grid.query(&view), grid.clone().query(&view));
    }
}
