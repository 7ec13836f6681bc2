// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Texture lookup seam between the document and a renderer.

use crate::block::{Block, BlockId};

/// Resolves block texture ids to renderer-owned textures.
///
/// The document never loads or decodes textures. Renderers pass an implementation
/// of this trait to [`MapDocument::sprites_in_viewport`](crate::MapDocument::sprites_in_viewport).
pub trait TextureLookup {
    /// Handle type the renderer draws with.
    type Texture: Clone;

    /// Texture for `id`, or `None` if no texture is loaded under that id.
    fn texture(&self, id: i32) -> Option<Self::Texture>;
}

/// A visible block paired with its texture.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite<T> {
    /// Handle of the block in the document.
    pub id: BlockId,
    /// The block itself.
    pub block: Block,
    /// Texture resolved from [`Block::id`].
    pub texture: T,
}

impl<F, T> TextureLookup for F
where
    F: Fn(i32) -> Option<T>,
    T: Clone,
{
    type Texture = T;

    fn texture(&self, id: i32) -> Option<T> {
        self(id)
    }
}
