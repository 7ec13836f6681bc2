// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport and cell geometry shared by the grid and its callers.

/// Axis-aligned camera region in world coordinates.
///
/// Stored as center plus full size, which is how cameras describe themselves.
/// The min/max accessors give the covered rectangle `[center - half, center + half]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Center x.
    pub center_x: f32,
    /// Center y.
    pub center_y: f32,
    /// Full width.
    pub width: f32,
    /// Full height.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport from its center and full size.
    pub const fn from_center_size(center_x: f32, center_y: f32, width: f32, height: f32) -> Self {
        Self {
            center_x,
            center_y,
            width,
            height,
        }
    }

    /// Create a viewport covering the rectangle between two corners.
    pub fn from_min_max(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            center_x: 0.5 * (min_x + max_x),
            center_y: 0.5 * (min_y + max_y),
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Left edge.
    pub fn min_x(&self) -> f32 {
        self.center_x - 0.5 * self.width
    }

    /// Top edge.
    pub fn min_y(&self) -> f32 {
        self.center_y - 0.5 * self.height
    }

    /// Right edge.
    pub fn max_x(&self) -> f32 {
        self.center_x + 0.5 * self.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f32 {
        self.center_y + 0.5 * self.height
    }

    /// Whether the point lies inside the covered rectangle (edges inclusive).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.min_x() <= x && x <= self.max_x() && self.min_y() <= y && y <= self.max_y()
    }
}

/// Column/row coordinate of a grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    /// Column, counted from the left map edge.
    pub col: i32,
    /// Row, counted from the top map edge.
    pub row: i32,
}

/// World-space rectangle covered by one grid cell.
///
/// Cells on the right and bottom edges may extend past the map extent when the
/// extent is not a multiple of the cell size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellRect {
    /// Minimum x (left).
    pub min_x: f32,
    /// Minimum y (top).
    pub min_y: f32,
    /// Maximum x (right, exclusive).
    pub max_x: f32,
    /// Maximum y (bottom, exclusive).
    pub max_y: f32,
}

impl CellRect {
    /// Whether this cell overlaps the viewport rectangle.
    pub fn overlaps(&self, viewport: &Viewport) -> bool {
        self.min_x <= viewport.max_x()
            && viewport.min_x() < self.max_x
            && self.min_y <= viewport.max_y()
            && viewport.min_y() < self.max_y
    }
}
