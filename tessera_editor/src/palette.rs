// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discovering block textures on disk.

use std::fs;
use std::path::Path;

use tessera_map::TextureLookup;
use tessera_ui::BlockPalette;
use tracing::{debug, info, warn};

use crate::error::{EditorError, Result};

/// Split a texture file name of the form `<id>_<name>.<ext>`.
///
/// ```
/// use tessera_editor::palette::parse_texture_name;
///
/// assert_eq!(parse_texture_name("12_stone.png"), Some((12, "stone".to_owned())));
/// assert_eq!(parse_texture_name("stone.png"), None);
/// ```
pub fn parse_texture_name(file_name: &str) -> Option<(i32, String)> {
    let (id, rest) = file_name.split_once('_')?;
    let id: i32 = id.parse().ok()?;
    if id < 0 {
        return None;
    }
    let name = match rest.rfind('.') {
        Some(dot) => &rest[..dot],
        None => rest,
    };
    Some((id, name.to_owned()))
}

/// Build a palette from the files in `dir`.
///
/// Files whose names do not parse are skipped with a warning, as are
/// subdirectories. A later file with an already seen id replaces the earlier one.
pub fn scan_palette_dir(dir: &Path) -> Result<BlockPalette> {
    let entries = fs::read_dir(dir).map_err(|source| EditorError::Palette {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut palette = BlockPalette::new();
    for entry in entries {
        let entry = entry.map_err(|source| EditorError::Palette {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        match parse_texture_name(&file_name) {
            Some((id, name)) => {
                debug!(id, %name, path = %path.display(), "found block texture");
                if let Some(old) = palette.insert(id, name) {
                    warn!(id, %old, "duplicate block id, keeping the later file");
                }
            }
            None => warn!(path = %path.display(), "skipping file not named <id>_<name>.<ext>"),
        }
    }
    info!(dir = %dir.display(), blocks = palette.len(), "loaded block palette");
    Ok(palette)
}

/// Resolves block ids against a palette; the texture handle is the id itself.
#[derive(Copy, Clone, Debug)]
pub struct PaletteTextures<'a>(pub &'a BlockPalette);

impl TextureLookup for PaletteTextures<'_> {
    type Texture = i32;

    fn texture(&self, id: i32) -> Option<i32> {
        self.0.contains(id).then_some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_like_texture_files() {
        assert_eq!(parse_texture_name("1_dirt.png"), Some((1, String::from("dirt"))));
        assert_eq!(
            parse_texture_name("7_dark_stone.v2.png"),
            Some((7, String::from("dark_stone.v2")))
        );
        assert_eq!(parse_texture_name("3_noext"), Some((3, String::from("noext"))));
        assert_eq!(parse_texture_name("x_dirt.png"), None);
        assert_eq!(parse_texture_name("-1_none.png"), None);
        assert_eq!(parse_texture_name("dirt.png"), None);
    }

    #[test]
    fn scan_skips_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["1_dirt.png", "2_grass.png", "readme.txt", "10_water.png"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("5_folder")).unwrap();

        let palette = scan_palette_dir(dir.path()).unwrap();
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.name(10), Some("water"));
        assert!(!palette.contains(5));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            scan_palette_dir(&dir.path().join("absent")),
            Err(EditorError::Palette { .. })
        ));
    }

    #[test]
    fn lookup_only_knows_palette_ids() {
        let palette: BlockPalette = [(1, "a")].into_iter().collect();
        let lookup = PaletteTextures(&palette);
        assert_eq!(lookup.texture(1), Some(1));
        assert_eq!(lookup.texture(2), None);
    }
}
