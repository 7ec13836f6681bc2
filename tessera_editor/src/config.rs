// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editor settings loaded from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Editor settings. Every key is optional in the TOML file.
///
/// ```toml
/// palette_dir = "assets/blocks"
/// screen_width = 1280
/// screen_height = 720
/// log_filter = "tessera=debug"
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Initial contents of the filename field.
    pub default_filename: String,
    /// Initial contents of the author field.
    pub default_author: String,
    /// Initial contents of the map name field.
    pub default_name: String,
    /// Directory scanned for `<id>_<name>.<ext>` block textures.
    pub palette_dir: PathBuf,
    /// Screen width in pixels.
    pub screen_width: u32,
    /// Screen height in pixels.
    pub screen_height: u32,
    /// Fraction of the screen height used by the tool panel at the bottom.
    pub tool_area: f64,
    /// Fraction of the screen height used by the console.
    pub console_height: f64,
    /// Degrees rotated per wheel step.
    pub rotate_step: f32,
    /// World units within which the erase tool picks a block.
    pub erase_radius: f32,
    /// Size at which blocks are drawn, in world units.
    pub block_size: f64,
    /// Console log capacity.
    pub max_log_lines: usize,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_filename: String::from("DefaultMapName"),
            default_author: String::from("DefaultAuthor"),
            default_name: String::from("MapTitle"),
            palette_dir: PathBuf::from("blocks"),
            screen_width: 1920,
            screen_height: 1080,
            tool_area: 0.1,
            console_height: 0.4,
            rotate_step: 15.0,
            erase_radius: 32.0,
            block_size: 64.0,
            max_log_lines: tessera_console::DEFAULT_MAX_LOG_LINES,
            log_filter: String::from("tessera=info"),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text, path)?;
        debug!(path = %path.display(), "loaded editor config");
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(invalid("screen_width", "screen size must be non-zero"));
        }
        if !(self.tool_area > 0.0 && self.tool_area < 1.0) {
            return Err(invalid("tool_area", "must be between 0 and 1"));
        }
        if !(self.console_height > 0.0 && self.console_height <= 1.0) {
            return Err(invalid("console_height", "must be in (0, 1]"));
        }
        if self.block_size <= 0.0 {
            return Err(invalid("block_size", "must be positive"));
        }
        if self.erase_radius < 0.0 {
            return Err(invalid("erase_radius", "must not be negative"));
        }
        if self.max_log_lines == 0 {
            return Err(invalid("max_log_lines", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let c = EditorConfig::from_toml_str("", Path::new("x.toml")).unwrap();
        assert_eq!(c, EditorConfig::default());
        assert_eq!(c.default_filename, "DefaultMapName");
        assert_eq!(c.max_log_lines, 500);
    }

    #[test]
    fn partial_file_overrides_some_keys() {
        let c = EditorConfig::from_toml_str(
            "screen_width = 1280\nscreen_height = 720\npalette_dir = \"tiles\"\n",
            Path::new("x.toml"),
        )
        .unwrap();
        assert_eq!((c.screen_width, c.screen_height), (1280, 720));
        assert_eq!(c.palette_dir, PathBuf::from("tiles"));
        assert_eq!(c.default_author, "DefaultAuthor");
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(matches!(
            EditorConfig::from_toml_str("tool_area = 1.5", Path::new("x.toml")),
            Err(ConfigError::Invalid { field: "tool_area", .. })
        ));
        assert!(matches!(
            EditorConfig::from_toml_str("screen_width = \"wide\"", Path::new("x.toml")),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            EditorConfig::from_toml_str("colour = 3", Path::new("x.toml")),
            Err(ConfigError::Parse { .. })
        ));
    }
}
