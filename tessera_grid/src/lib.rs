// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessera Grid: a uniform cell grid for viewport queries over a bounded map.
//!
//! Maps in Tessera are far larger than the screen. Rendering only needs the blocks
//! near the camera, so placed blocks are bucketed by the coarse cell that contains
//! their position and a viewport query only visits the cells it covers.
//!
//! - [`CellGrid::insert`] and [`CellGrid::remove`] place and erase keys by position.
//! - [`CellGrid::query`] returns the keys of every cell a [`Viewport`] touches.
//! - [`CellGrid::cell_index`] exposes the bucket numbering for diagnostics.
//!
//! The grid stores small copyable keys (for example arena handles), never the
//! blocks themselves, so it can be rebuilt or cleared without touching the owner.
//!
//! # Example
//!
//! ```rust
//! use tessera_grid::{CellGrid, Viewport};
//!
//! let mut grid: CellGrid<u32> = CellGrid::with_default_cells(10_000, 10_000);
//! grid.insert(120.0, 80.0, 1);
//! grid.insert(9_800.0, 9_900.0, 2);
//!
//! // A 1920×1080 camera centered near the origin only sees the first key.
//! let hits = grid.query(&Viewport::from_center_size(960.0, 540.0, 1920.0, 1080.0));
//! assert_eq!(hits, vec![1]);
//! ```
//!
//! ## Edge policy
//!
//! Coordinates outside `[0, width] × [0, height]` are clamped into the boundary
//! cells rather than rejected. Callers that want to refuse out-of-map placements
//! should check bounds before inserting.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for coordinates. A NaN position lands in cell 0.

#![no_std]

extern crate alloc;

pub mod grid;
pub mod types;

pub use grid::{CellGrid, DEFAULT_GRID_SIZE};
pub use types::{CellCoord, CellRect, Viewport};
