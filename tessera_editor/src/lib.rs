// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessera Editor: the block map editor built from [`tessera_map`], [`tessera_ui`],
//! and [`tessera_console`].
//!
//! The [`Editor`] owns one [`MapDocument`](tessera_map::MapDocument), a tool panel
//! (block picker plus filename, author, and name fields), a drop-down console, and
//! a [`Camera`] over the map. Hosts feed it [`Event`](tessera_ui::Event)s and
//! [`EditorKey`]s and draw it through any [`Painter`](tessera_ui::Painter).
//!
//! - Primary click in the map view places the selected block at the current angle.
//! - Secondary click removes the most recent block under the cursor.
//! - The wheel rotates the placement angle.
//! - F1 saves using the panel fields, F2 loads `<filename>.map`.
//! - Enter opens the console, Escape quits once it is closed.
//!
//! ```
//! use kurbo::Point;
//! use tessera_editor::{Editor, EditorConfig};
//! use tessera_ui::BlockPalette;
//!
//! let palette: BlockPalette = [(1, "dirt"), (2, "grass")].into_iter().collect();
//! let mut editor = Editor::new(EditorConfig::default(), palette);
//! editor.run_command("new 2000 1000 Meadow Bob").unwrap();
//! editor.place_block(Point::new(50.0, 60.0)).unwrap();
//! assert_eq!(editor.doc().block_count(), 1);
//! ```
//!
//! Without a window, [`run_headless`] drives the same editor from a script.

pub mod camera;
pub mod config;
pub mod editor;
pub mod error;
pub mod headless;
pub mod palette;

pub use camera::Camera;
pub use config::EditorConfig;
pub use editor::{Editor, EditorAction, EditorKey};
pub use error::{ConfigError, EditorError, Result};
pub use headless::run_headless;
pub use palette::{PaletteTextures, parse_texture_name, scan_palette_dir};
