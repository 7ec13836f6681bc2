// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform cell grid over a bounded map extent.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::types::{CellCoord, CellRect, Viewport};

/// Cell size used by map documents, in world units.
pub const DEFAULT_GRID_SIZE: i32 = 500;

/// Uniform grid that buckets keys by the cell containing their position.
///
/// The grid covers `[0, width) × [0, height)`. Positions outside the extent are
/// clamped into the nearest boundary cell instead of being rejected, so every key
/// always lands in exactly one bucket.
///
/// Buckets live in an ordered map keyed by the linear cell index
/// `row * cells_per_row + col`. Keys inside a bucket keep their insertion order,
/// which makes query results deterministic for a fixed grid state.
#[derive(Clone)]
pub struct CellGrid<K: Copy> {
    width: i32,
    height: i32,
    cell_size: i32,
    cells_per_row: i32,
    rows: i32,
    len: usize,
    cells: BTreeMap<i64, Vec<K>>,
}

impl<K: Copy> CellGrid<K> {
    /// Create an empty grid for a `width × height` extent.
    ///
    /// Non-positive extents produce a single-cell grid.
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        assert!(cell_size > 0, "cell size must be positive");
        Self {
            width,
            height,
            cell_size,
            cells_per_row: cells_along(width, cell_size),
            rows: cells_along(height, cell_size),
            len: 0,
            cells: BTreeMap::new(),
        }
    }

    /// Create an empty grid with [`DEFAULT_GRID_SIZE`] cells.
    pub fn with_default_cells(width: i32, height: i32) -> Self {
        Self::new(width, height, DEFAULT_GRID_SIZE)
    }

    /// Map width the grid was built for.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Map height the grid was built for.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Edge length of a cell.
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Number of cells in one row.
    pub fn cells_per_row(&self) -> i32 {
        self.cells_per_row
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Total number of keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of non-empty buckets.
    pub fn bucket_count(&self) -> usize {
        self.cells.len()
    }

    /// Column and row of the cell containing `(x, y)` after clamping into the extent.
    pub fn cell_coord(&self, x: f32, y: f32) -> CellCoord {
        CellCoord {
            col: self.axis_cell(x, self.width, self.cells_per_row),
            row: self.axis_cell(y, self.height, self.rows),
        }
    }

    /// Linear bucket index of the cell containing `(x, y)`.
    pub fn cell_index(&self, x: f32, y: f32) -> i64 {
        let c = self.cell_coord(x, y);
        self.linear(c)
    }

    /// World rectangle of the cell with the given linear index, if it is inside the grid.
    pub fn cell_bounds(&self, index: i64) -> Option<CellRect> {
        let per_row = i64::from(self.cells_per_row);
        if index < 0 || index >= per_row * i64::from(self.rows) {
            return None;
        }
        let cs = i64::from(self.cell_size);
        let (x0, y0) = ((index % per_row) * cs, (index / per_row) * cs);
        let (cs, x0, y0) = (cs as f32, x0 as f32, y0 as f32);
        Some(CellRect {
            min_x: x0,
            min_y: y0,
            max_x: x0 + cs,
            max_y: y0 + cs,
        })
    }

    /// Append `key` to the bucket of the cell containing `(x, y)`.
    pub fn insert(&mut self, x: f32, y: f32, key: K) {
        let idx = self.cell_index(x, y);
        self.cells.entry(idx).or_default().push(key);
        self.len += 1;
    }

    /// Remove all keys.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.len = 0;
    }

    /// Collect the keys of every bucket whose cell intersects the viewport.
    ///
    /// The viewport corners are clamped like positions, so a camera hanging off
    /// the map edge still sees the boundary cells. Buckets are visited row by row
    /// and left to right; scanning stops once the cell index passes the highest
    /// populated bucket.
    pub fn query(&self, viewport: &Viewport) -> Vec<K> {
        let mut out = Vec::new();
        let Some((&last, _)) = self.cells.last_key_value() else {
            return out;
        };
        let start = self.cell_coord(viewport.min_x(), viewport.min_y());
        let end = self.cell_coord(viewport.max_x(), viewport.max_y());
        'rows: for row in start.row..=end.row {
            for col in start.col..=end.col {
                let idx = self.linear(CellCoord { col, row });
                if idx > last {
                    // Indices only grow from here on.
                    break 'rows;
                }
                if let Some(bucket) = self.cells.get(&idx) {
                    out.extend_from_slice(bucket);
                }
            }
        }
        out
    }

    /// Iterate over non-empty buckets in index order.
    pub fn buckets(&self) -> impl Iterator<Item = (i64, &[K])> + '_ {
        self.cells.iter().map(|(&i, b)| (i, b.as_slice()))
    }

    #[inline]
    fn linear(&self, c: CellCoord) -> i64 {
        i64::from(c.row) * i64::from(self.cells_per_row) + i64::from(c.col)
    }

    fn axis_cell(&self, v: f32, extent: i32, count: i32) -> i32 {
        let clamped = v.clamp(0.0, extent.max(0) as f32);
        let cell = floor_to_i32(clamped / self.cell_size as f32);
        cell.clamp(0, count - 1)
    }
}

impl<K: Copy + PartialEq> CellGrid<K> {
    /// Remove `key` from the bucket of the cell containing `(x, y)`.
    ///
    /// The cell is recomputed from the position, so callers must pass the same
    /// coordinates used at insertion. Returns `false` if the key was not found.
    pub fn remove(&mut self, x: f32, y: f32, key: K) -> bool {
        let idx = self.cell_index(x, y);
        let Some(bucket) = self.cells.get_mut(&idx) else {
            return false;
        };
        let Some(pos) = bucket.iter().position(|&k| k == key) else {
            return false;
        };
        bucket.remove(pos);
        if bucket.is_empty() {
            self.cells.remove(&idx);
        }
        self.len -= 1;
        true
    }

    /// Whether `key` is stored in the cell containing `(x, y)`.
    pub fn contains(&self, x: f32, y: f32, key: K) -> bool {
        self.cells
            .get(&self.cell_index(x, y))
            .is_some_and(|b| b.contains(&key))
    }
}

impl<K: Copy> Debug for CellGrid<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CellGrid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("cell_size", &self.cell_size)
            .field("cells_per_row", &self.cells_per_row)
            .field("rows", &self.rows)
            .field("len", &self.len)
            .field("buckets", &self.cells.len())
            .finish_non_exhaustive()
    }
}

/// Number of cells needed to cover `extent`, at least one.
fn cells_along(extent: i32, cell_size: i32) -> i32 {
    if extent <= 0 {
        1
    } else {
        extent / cell_size + i32::from(extent % cell_size != 0)
    }
}

#[inline]
fn floor_to_i32(v: f32) -> i32 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "inputs are clamped to the map extent before the cast"
    )]
    let i = v as i32;
    if (i as f32) > v { i - 1 } else { i }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn cell_index_uses_row_major_layout() {
        let g: CellGrid<u32> = CellGrid::new(2000, 1000, 500);
        assert_eq!(g.cells_per_row(), 4);
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cell_index(0.0, 0.0), 0);
        assert_eq!(g.cell_index(499.9, 0.0), 0);
        assert_eq!(g.cell_index(500.0, 0.0), 1);
        assert_eq!(g.cell_index(1999.0, 0.0), 3);
        assert_eq!(g.cell_index(0.0, 500.0), 4);
        assert_eq!(g.cell_index(1250.0, 750.0), 6);
    }

    #[test]
    fn out_of_range_positions_clamp_to_boundary_cells() {
        let g: CellGrid<u32> = CellGrid::new(1000, 1000, 500);
        assert_eq!(g.cell_index(-50.0, -10.0), 0);
        assert_eq!(g.cell_index(1000.0, 0.0), 1);
        assert_eq!(g.cell_index(5000.0, 5000.0), 3);
        assert_eq!(g.cell_index(0.0, 1000.0), 2);
    }

    #[test]
    fn partial_cells_do_not_alias_the_next_row() {
        // 1200 wide: three columns, the last one partial.
        let g: CellGrid<u32> = CellGrid::new(1200, 1200, 500);
        assert_eq!(g.cells_per_row(), 3);
        assert_ne!(g.cell_index(1100.0, 0.0), g.cell_index(0.0, 500.0));
        assert_eq!(g.cell_index(1199.0, 0.0), 2);
        assert_eq!(g.cell_index(0.0, 500.0), 3);
    }

    #[test]
    fn degenerate_extent_has_one_cell() {
        let mut g: CellGrid<u32> = CellGrid::new(0, 0, 500);
        assert_eq!(g.cells_per_row(), 1);
        assert_eq!(g.rows(), 1);
        g.insert(42.0, 42.0, 7);
        assert_eq!(g.cell_index(42.0, 42.0), 0);
        assert_eq!(g.query(&Viewport::from_center_size(0.0, 0.0, 10.0, 10.0)), vec![7]);
    }

    #[test]
    fn query_returns_buckets_in_row_then_column_order() {
        let mut g: CellGrid<u32> = CellGrid::new(1000, 1000, 500);
        g.insert(900.0, 900.0, 4);
        g.insert(10.0, 10.0, 1);
        g.insert(600.0, 10.0, 2);
        g.insert(20.0, 20.0, 11);
        g.insert(10.0, 600.0, 3);
        let all = g.query(&Viewport::from_min_max(0.0, 0.0, 1000.0, 1000.0));
        assert_eq!(all, vec![1, 11, 2, 3, 4]);
    }

    #[test]
    fn query_only_touches_covered_cells() {
        let mut g: CellGrid<u32> = CellGrid::new(2000, 2000, 500);
        g.insert(100.0, 100.0, 1);
        g.insert(1600.0, 100.0, 2);
        g.insert(100.0, 1600.0, 3);
        let hits = g.query(&Viewport::from_center_size(250.0, 250.0, 400.0, 400.0));
        assert_eq!(hits, vec![1]);
        let hits = g.query(&Viewport::from_min_max(0.0, 0.0, 2000.0, 400.0));
        assert_eq!(hits, vec![1, 2]);
    }

    #[test]
    fn query_on_empty_grid_is_empty() {
        let g: CellGrid<u32> = CellGrid::new(1000, 1000, 500);
        assert!(g.query(&Viewport::from_min_max(0.0, 0.0, 1000.0, 1000.0)).is_empty());
    }

    #[test]
    fn viewport_off_the_map_sees_boundary_cells() {
        let mut g: CellGrid<u32> = CellGrid::new(1000, 1000, 500);
        g.insert(990.0, 990.0, 9);
        let hits = g.query(&Viewport::from_center_size(3000.0, 3000.0, 100.0, 100.0));
        assert_eq!(hits, vec![9]);
    }

    #[test]
    fn remove_erases_from_its_bucket_only() {
        let mut g: CellGrid<u32> = CellGrid::new(1000, 1000, 500);
        g.insert(10.0, 10.0, 1);
        g.insert(20.0, 20.0, 2);
        g.insert(30.0, 30.0, 3);
        assert!(g.remove(20.0, 20.0, 2));
        assert!(!g.remove(20.0, 20.0, 2));
        // Wrong cell for key 1.
        assert!(!g.remove(900.0, 900.0, 1));
        assert_eq!(g.len(), 2);
        assert_eq!(
            g.query(&Viewport::from_min_max(0.0, 0.0, 1000.0, 1000.0)),
            vec![1, 3]
        );
    }

    #[test]
    fn emptied_buckets_are_dropped() {
        let mut g: CellGrid<u32> = CellGrid::new(1000, 1000, 500);
        g.insert(900.0, 900.0, 1);
        assert_eq!(g.bucket_count(), 1);
        assert!(g.remove(900.0, 900.0, 1));
        assert_eq!(g.bucket_count(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn cell_bounds_match_cell_index() {
        let g: CellGrid<u32> = CellGrid::new(1500, 1000, 500);
        let idx = g.cell_index(700.0, 600.0);
        let r = g.cell_bounds(idx).unwrap();
        assert_eq!((r.min_x, r.min_y, r.max_x, r.max_y), (500.0, 500.0, 1000.0, 1000.0));
        assert!(g.cell_bounds(6).is_none());
        assert!(g.cell_bounds(-1).is_none());
    }

    #[test]
    fn clear_resets_everything() {
        let mut g: CellGrid<u32> = CellGrid::new(1000, 1000, 500);
        g.insert(1.0, 1.0, 1);
        g.insert(600.0, 600.0, 2);
        g.clear();
        assert!(g.is_empty());
        assert_eq!(g.bucket_count(), 0);
        assert!(!g.contains(1.0, 1.0, 1));
    }
}
