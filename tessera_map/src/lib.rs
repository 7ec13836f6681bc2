// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessera Map: the block map document behind the Tessera editor.
//!
//! - [`BlockStore`]: arena that owns placed [`Block`]s behind generational [`BlockId`] handles.
//! - [`MapDocument`]: metadata, blocks, a [`CellGrid`](tessera_grid::CellGrid) of handles for
//!   viewport queries, and save/load with dirty tracking.
//! - [`codec`]: the little-endian `MaP!` binary format.
//! - [`TextureLookup`]: seam through which a renderer resolves block ids to textures.
//!
//! ## Minimal usage
//!
//! ```
//! use tessera_map::{MapDocument, Viewport};
//!
//! let mut doc = MapDocument::new();
//! doc.create_new(4_000, 3_000, "Caves", "Alice");
//! let near = doc.add_block(100.0, 100.0, 0.0, 3).unwrap();
//! doc.add_block(3_900.0, 2_900.0, 90.0, 4).unwrap();
//!
//! let hits = doc.blocks_in_viewport(&Viewport::from_center_size(400.0, 300.0, 800.0, 600.0));
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].0, near);
//! assert!(!doc.is_saved());
//! ```
//!
//! ## Persistence
//!
//! [`MapDocument::save_map`] writes `<filename>.map`, first copying any existing
//! file to `<filename>.map.bak`. [`MapDocument::load_map`] decodes the whole file
//! before replacing anything, so a failed load leaves the open map intact.
//!
//! Logging goes through `tracing`; install a subscriber to see it.

pub mod block;
pub mod codec;
pub mod document;
pub mod error;
pub mod store;
pub mod texture;

pub use block::{Block, BlockId, NO_BLOCK, wrap_angle};
pub use codec::{MAGIC, MapData};
pub use document::{MapDocument, MapInfo};
pub use error::{CodecError, MapError, Result};
pub use store::BlockStore;
pub use tessera_grid::{DEFAULT_GRID_SIZE, Viewport};
pub use texture::{Sprite, TextureLookup};
