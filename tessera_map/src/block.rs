// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placed blocks and their arena handles.

/// Texture id meaning "no block selected". Placement with this id is ignored.
pub const NO_BLOCK: i32 = -1;

/// A placed, rotatable, textured block.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Block {
    /// World x of the block center.
    pub x: f32,
    /// World y of the block center.
    pub y: f32,
    /// Rotation in degrees, in `[0, 360)` for blocks created with [`Block::new`].
    pub angle: f32,
    /// Texture/type id. Not validated against the loaded textures.
    pub id: i32,
}

impl Block {
    /// Create a block, wrapping `angle` into `[0, 360)`.
    pub fn new(x: f32, y: f32, angle: f32, id: i32) -> Self {
        Self {
            x,
            y,
            angle: wrap_angle(angle),
            id,
        }
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if a >= 360.0 { 0.0 } else { a }
}

/// Generational handle for a block in a [`BlockStore`](crate::BlockStore).
///
/// Handles stay valid until the block is removed. A freed slot is reused with a
/// higher generation, so stale handles never alias a different live block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub(crate) u32, pub(crate) u32);

impl BlockId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Generation counter of the slot when this handle was issued.
    pub const fn generation(self) -> u32 {
        self.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angles_wrap_into_range() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert_eq!(wrap_angle(90.0), 90.0);
        assert_eq!(wrap_angle(360.0), 0.0);
        assert_eq!(wrap_angle(450.0), 90.0);
        assert_eq!(wrap_angle(-90.0), 270.0);
        assert_eq!(wrap_angle(-720.0), 0.0);
    }

    #[test]
    fn tiny_negative_angle_does_not_become_360() {
        let a = wrap_angle(-1.0e-6);
        assert!((0.0..360.0).contains(&a), "got {a}");
    }

    #[test]
    fn new_block_wraps_angle() {
        let b = Block::new(1.0, 2.0, 725.0, 3);
        assert_eq!(b, Block { x: 1.0, y: 2.0, angle: 5.0, id: 3 });
    }
}
