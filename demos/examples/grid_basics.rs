// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell grid basics.
//!
//! Buckets a handful of keys into 500-unit cells, then asks which cells a
//! screen-sized viewport touches. Note that the query is cell-level: a key just
//! outside the viewport is still returned when its cell overlaps.
//!
//! Run:
//! - `cargo run -p tessera_demos --example grid_basics`

use tessera_grid::{CellGrid, Viewport};

fn main() {
    let mut grid = CellGrid::<&str>::with_default_cells(4_000, 3_000);
    grid.insert(100.0, 100.0, "spawn");
    grid.insert(480.0, 20.0, "tree");
    grid.insert(620.0, 40.0, "rock");
    grid.insert(3_900.0, 2_900.0, "exit");
    // Outside the map; clamped into the last cell.
    grid.insert(9_999.0, 9_999.0, "stray");

    println!(
        "{} keys in {} buckets ({} cells per row)",
        grid.len(),
        grid.bucket_count(),
        grid.cells_per_row()
    );
    for (index, keys) in grid.buckets() {
        println!("  cell {index:>3}: {keys:?}");
    }

    let view = Viewport::from_center_size(250.0, 250.0, 500.0, 500.0);
    println!("== Query {view:?} ==");
    for key in grid.query(&view) {
        println!("  {key}");
    }

    let removed = grid.remove(480.0, 20.0, "tree");
    println!("removed tree: {removed}; now {} keys", grid.len());
}
