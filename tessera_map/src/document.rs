// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editable map: metadata, blocks, spatial index, and persistence.

use std::fs;
use std::path::{Path, PathBuf};

use tessera_grid::{CellGrid, Viewport};
use tracing::{debug, info, warn};

use crate::block::{Block, BlockId, NO_BLOCK};
use crate::codec::{self, MapData};
use crate::error::{MapError, Result};
use crate::store::BlockStore;
use crate::texture::{Sprite, TextureLookup};

/// Extension appended to the document filename when saving.
pub const MAP_EXTENSION: &str = "map";

/// Extension appended to the target path for the pre-save backup copy.
pub const BACKUP_EXTENSION: &str = "bak";

/// Map metadata stored in the file header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapInfo {
    /// Map width in world units.
    pub width: i32,
    /// Map height in world units.
    pub height: i32,
    /// Display name.
    pub name: String,
    /// Author name.
    pub author: String,
}

/// A block map being edited.
///
/// The document owns its blocks in a [`BlockStore`](crate::BlockStore) and keeps a
/// [`CellGrid`] of handles for viewport queries. Both are updated together, so
/// every live block sits in exactly one grid bucket.
///
/// The document tracks two flags: whether a map exists at all (`ready`, set by
/// [`create_new`](Self::create_new) or a successful [`load_map`](Self::load_map)),
/// and whether the in-memory state matches the file on disk (`saved`).
#[derive(Clone, Debug)]
pub struct MapDocument {
    info: MapInfo,
    filename: String,
    store: BlockStore,
    grid: CellGrid<BlockId>,
    ready: bool,
    saved: bool,
}

impl Default for MapDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MapDocument {
    /// An empty document with no map. Blocks cannot be added until a map is created or loaded.
    pub fn new() -> Self {
        Self {
            info: MapInfo::default(),
            filename: String::new(),
            store: BlockStore::new(),
            grid: CellGrid::with_default_cells(0, 0),
            ready: false,
            saved: false,
        }
    }

    /// Discard the current map and start an empty one.
    ///
    /// Dimensions are taken as given; callers validate them. The filename is
    /// cleared, so the new map must be given one before it can be saved.
    pub fn create_new(&mut self, width: i32, height: i32, name: &str, author: &str) {
        self.info = MapInfo {
            width,
            height,
            name: name.to_owned(),
            author: author.to_owned(),
        };
        self.filename.clear();
        self.store.clear();
        self.grid = CellGrid::with_default_cells(width, height);
        self.ready = true;
        self.saved = false;
        info!(width, height, name, author, "created new map");
    }

    /// Place a block and return its handle.
    ///
    /// Returns `None` without changing anything when `id` is [`NO_BLOCK`] or no map
    /// exists. Positions are not bounds-checked; out-of-extent blocks are indexed
    /// in the nearest boundary cell.
    pub fn add_block(&mut self, x: f32, y: f32, angle: f32, id: i32) -> Option<BlockId> {
        if id == NO_BLOCK {
            debug!(x, y, "ignoring placement without a selected block");
            return None;
        }
        if !self.ready {
            debug!(x, y, id, "ignoring placement, no map");
            return None;
        }
        let block = Block::new(x, y, angle, id);
        let handle = self.store.add(block);
        self.grid.insert(block.x, block.y, handle);
        self.saved = false;
        Some(handle)
    }

    /// Remove a block, returning it. Unknown handles return `None` and leave the
    /// saved flag alone.
    pub fn remove_block(&mut self, handle: BlockId) -> Option<Block> {
        let Some(block) = self.store.remove(handle) else {
            warn!(?handle, "cannot remove unknown block");
            return None;
        };
        if !self.grid.remove(block.x, block.y, handle) {
            warn!(?handle, "removed block was missing from the grid");
        }
        self.saved = false;
        Some(block)
    }

    /// Look up a placed block.
    pub fn block(&self, handle: BlockId) -> Option<&Block> {
        self.store.get(handle)
    }

    /// Number of placed blocks.
    pub fn block_count(&self) -> usize {
        self.store.len()
    }

    /// Blocks in placement order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.store.blocks()
    }

    /// Blocks whose grid cell intersects the viewport, in cell order.
    ///
    /// This is a cell-level filter: blocks near the viewport edge may be
    /// returned even if they lie just outside it. Empty when no map exists.
    pub fn blocks_in_viewport(&self, viewport: &Viewport) -> Vec<(BlockId, Block)> {
        if !self.ready {
            return Vec::new();
        }
        self.grid
            .query(viewport)
            .into_iter()
            .filter_map(|h| self.store.get(h).map(|b| (h, *b)))
            .collect()
    }

    /// The most recently placed block whose center lies within `radius` of `(x, y)`.
    pub fn pick_block(&self, x: f32, y: f32, radius: f32) -> Option<BlockId> {
        let radius = radius.max(0.0);
        let area = Viewport::from_center_size(x, y, radius * 2.0, radius * 2.0);
        let near: Vec<BlockId> = self
            .blocks_in_viewport(&area)
            .into_iter()
            .filter(|(_, b)| {
                let (dx, dy) = (b.x - x, b.y - y);
                dx * dx + dy * dy <= radius * radius
            })
            .map(|(h, _)| h)
            .collect();
        if near.is_empty() {
            return None;
        }
        self.store
            .iter()
            .rev()
            .map(|(h, _)| h)
            .find(|h| near.contains(h))
    }

    /// Visible blocks joined with their textures. Blocks whose texture is not
    /// loaded are skipped.
    pub fn sprites_in_viewport<L: TextureLookup>(
        &self,
        viewport: &Viewport,
        textures: &L,
    ) -> Vec<Sprite<L::Texture>> {
        self.blocks_in_viewport(viewport)
            .into_iter()
            .filter_map(|(id, block)| {
                let texture = textures.texture(block.id)?;
                Some(Sprite { id, block, texture })
            })
            .collect()
    }

    /// Whether the document matches what was last saved or loaded.
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Whether a map has been created or loaded.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Map width.
    pub fn width(&self) -> i32 {
        self.info.width
    }

    /// Map height.
    pub fn height(&self) -> i32 {
        self.info.height
    }

    /// Map name.
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Map author.
    pub fn author(&self) -> &str {
        &self.info.author
    }

    /// Target path without the `.map` extension. Empty for a fresh map.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Map metadata.
    pub fn info(&self) -> &MapInfo {
        &self.info
    }

    /// Path the map is saved to, if a filename is set.
    pub fn path(&self) -> Option<PathBuf> {
        if self.filename.is_empty() {
            return None;
        }
        let mut path = PathBuf::from(&self.filename);
        path.as_mut_os_string().push(".");
        path.as_mut_os_string().push(MAP_EXTENSION);
        Some(path)
    }

    /// Set the target filename, without extension.
    pub fn set_filename(&mut self, filename: &str) {
        self.filename = filename.to_owned();
        self.saved = false;
    }

    /// Set the map name.
    pub fn set_name(&mut self, name: &str) {
        self.info.name = name.to_owned();
        self.saved = false;
    }

    /// Set the map author.
    pub fn set_author(&mut self, author: &str) {
        self.info.author = author.to_owned();
        self.saved = false;
    }

    /// Write the map to [`path`](Self::path).
    ///
    /// An existing file at the target is copied to `<path>.bak` first. A failed
    /// backup is logged and does not stop the save.
    pub fn save_map(&mut self) -> Result<()> {
        if !self.ready {
            return Err(MapError::NotReady);
        }
        let path = self.path().ok_or(MapError::NoFilename)?;
        let bytes = codec::encode(&self.info, self.store.blocks()).map_err(|source| {
            MapError::Format {
                path: path.clone(),
                source,
            }
        })?;

        if path.exists() {
            let backup = backup_path(&path);
            match fs::copy(&path, &backup) {
                Ok(_) => debug!(backup = %backup.display(), "backed up previous map"),
                Err(err) => warn!(backup = %backup.display(), %err, "failed to back up map"),
            }
        }

        fs::write(&path, &bytes).map_err(|source| MapError::Io {
            path: path.clone(),
            source,
        })?;
        self.saved = true;
        info!(path = %path.display(), blocks = self.store.len(), "saved map");
        Ok(())
    }

    /// Save to an explicit path. The filename becomes `path` minus its extension.
    ///
    /// If the save fails the previous filename is kept.
    pub fn save_map_as(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let previous = std::mem::replace(&mut self.filename, strip_extension(path.as_ref()));
        let result = self.save_map();
        if result.is_err() {
            self.filename = previous;
        }
        result
    }

    /// Replace the document with the map stored at `path`.
    ///
    /// The file is read and decoded completely before anything changes. On
    /// error the previous map, blocks, filename, and flags are left untouched.
    pub fn load_map(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let MapData { info, blocks } = codec::decode(&bytes).map_err(|source| MapError::Format {
            path: path.to_path_buf(),
            source,
        })?;

        let mut store = BlockStore::with_capacity(blocks.len());
        let mut grid = CellGrid::with_default_cells(info.width, info.height);
        for block in blocks {
            let handle = store.add(block);
            grid.insert(block.x, block.y, handle);
        }

        self.info = info;
        self.store = store;
        self.grid = grid;
        self.filename = strip_extension(path);
        self.ready = true;
        self.saved = true;
        info!(
            path = %path.display(),
            width = self.info.width,
            height = self.info.height,
            blocks = self.store.len(),
            "loaded map"
        );
        Ok(())
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut s = path.as_os_str().to_owned();
    s.push(".");
    s.push(BACKUP_EXTENSION);
    PathBuf::from(s)
}

fn strip_extension(path: &Path) -> String {
    path.with_extension("").to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> MapDocument {
        let mut d = MapDocument::new();
        d.create_new(1000, 1000, "Test", "Alice");
        d
    }

    #[test]
    fn fresh_document_is_not_ready() {
        let mut d = MapDocument::new();
        assert!(!d.is_ready());
        assert!(!d.is_saved());
        assert_eq!(d.add_block(1.0, 1.0, 0.0, 3), None);
        assert_eq!(d.block_count(), 0);
        assert!(matches!(d.save_map(), Err(MapError::NotReady)));
    }

    #[test]
    fn sentinel_id_is_ignored() {
        let mut d = doc();
        assert_eq!(d.add_block(10.0, 10.0, 0.0, NO_BLOCK), None);
        assert_eq!(d.block_count(), 0);
    }

    #[test]
    fn add_then_remove_tracks_dirty_flag() {
        let mut d = doc();
        let h = d.add_block(10.0, 10.0, 450.0, 5).unwrap();
        assert_eq!(d.block(h).map(|b| b.angle), Some(90.0));
        assert!(!d.is_saved());
        assert_eq!(d.remove_block(h).map(|b| b.id), Some(5));
        assert_eq!(d.block_count(), 0);
        assert!(d.blocks_in_viewport(&Viewport::from_min_max(0.0, 0.0, 1000.0, 1000.0)).is_empty());
    }

    #[test]
    fn removing_unknown_handle_keeps_saved_flag() {
        let mut d = doc();
        let h = d.add_block(10.0, 10.0, 0.0, 5).unwrap();
        d.remove_block(h);
        d.saved = true;
        assert_eq!(d.remove_block(h), None);
        assert!(d.is_saved());
    }

    #[test]
    fn viewport_returns_blocks_of_covered_cells() {
        let mut d = doc();
        let a = d.add_block(10.0, 10.0, 0.0, 5).unwrap();
        let b = d.add_block(990.0, 990.0, 90.0, 7).unwrap();
        let near = d.blocks_in_viewport(&Viewport::from_center_size(100.0, 100.0, 200.0, 200.0));
        assert_eq!(near.iter().map(|(h, _)| *h).collect::<Vec<_>>(), vec![a]);
        let all = d.blocks_in_viewport(&Viewport::from_center_size(500.0, 500.0, 1000.0, 1000.0));
        assert_eq!(all.iter().map(|(h, _)| *h).collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn pick_prefers_latest_block() {
        let mut d = doc();
        let _a = d.add_block(100.0, 100.0, 0.0, 1).unwrap();
        let b = d.add_block(105.0, 100.0, 0.0, 2).unwrap();
        assert_eq!(d.pick_block(102.0, 100.0, 10.0), Some(b));
        assert_eq!(d.pick_block(400.0, 400.0, 10.0), None);
    }

    #[test]
    fn sprites_skip_missing_textures() {
        let mut d = doc();
        d.add_block(10.0, 10.0, 0.0, 1).unwrap();
        d.add_block(20.0, 20.0, 0.0, 2).unwrap();
        let lookup = |id: i32| (id == 2).then_some("two");
        let sprites =
            d.sprites_in_viewport(&Viewport::from_center_size(0.0, 0.0, 100.0, 100.0), &lookup);
        assert_eq!(sprites.len(), 1);
        assert_eq!(sprites[0].texture, "two");
        assert_eq!(sprites[0].block.id, 2);
    }

    #[test]
    fn setters_mark_unsaved() {
        let mut d = doc();
        d.saved = true;
        d.set_name("Other");
        assert!(!d.is_saved());
        d.saved = true;
        d.set_author("Bob");
        assert!(!d.is_saved());
        d.saved = true;
        d.set_filename("maps/x");
        assert!(!d.is_saved());
        assert_eq!(d.path(), Some(PathBuf::from("maps/x.map")));
    }

    #[test]
    fn create_new_clears_everything() {
        let mut d = doc();
        d.set_filename("keep");
        d.add_block(1.0, 1.0, 0.0, 1).unwrap();
        d.create_new(200, 300, "B", "C");
        assert_eq!(d.block_count(), 0);
        assert_eq!(d.filename(), "");
        assert_eq!(d.path(), None);
        assert_eq!((d.width(), d.height(), d.name(), d.author()), (200, 300, "B", "C"));
        assert!(matches!(d.save_map(), Err(MapError::NoFilename)));
    }

    #[test]
    fn backup_path_appends_extension() {
        assert_eq!(backup_path(Path::new("a/t.map")), PathBuf::from("a/t.map.bak"));
        assert_eq!(strip_extension(Path::new("a/t.map")), "a/t");
    }
}
