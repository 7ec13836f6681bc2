// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessera Console: a drop-down command console.
//!
//! A [`Console`] owns an input line, a bounded log, and a [`CommandTable`] of plain
//! function handlers. Each handler receives the parsed [`Args`] and a `&mut T`
//! target and returns the lines to log. [`map_commands`] provides the map editing
//! commands for a [`MapDocument`](tessera_map::MapDocument).
//!
//! ```
//! use tessera_console::{Console, map_commands};
//! use tessera_map::MapDocument;
//!
//! let mut doc = MapDocument::new();
//! let mut console = Console::new(map_commands());
//! console.execute("new 2000 1500 Caves Alice", &mut doc).unwrap();
//! assert_eq!(doc.width(), 2000);
//!
//! console.execute("fly", &mut doc).unwrap_err();
//! assert_eq!(console.log_lines().last(), Some("Unknown command 'fly'"));
//! ```

pub mod command;
pub mod console;
pub mod error;
pub mod map_commands;

pub use command::{Args, Command, CommandFn, CommandTable};
pub use console::{Console, DEFAULT_MAX_LOG_LINES};
pub use error::{CommandError, Result};
pub use map_commands::map_commands;
