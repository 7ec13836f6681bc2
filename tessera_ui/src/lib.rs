// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessera UI: a small retained-mode widget layer for editor tool panels.
//!
//! - [`Event`]: typed input (pointer press/release, text, wheel). Each variant carries its own payload.
//! - [`Widget`]: capability trait (`area`, `flags`, `update`, `handle_event`, `draw`).
//! - [`Ui`]: owns named [`Component`]s on layers, tracks focus and the selected block,
//!   and routes events to the topmost widget.
//! - [`BlockPicker`] and [`EditBox`]: the two widget kinds.
//! - [`Painter`]: drawing seam. [`DisplayList`] records draw calls.
//!
//! ## Routing rules
//!
//! - Draw order is ascending layer, then insertion order.
//! - Pointer events go to the topmost visible widget under the pointer.
//! - A press focuses the hit widget if it is [`WidgetFlags::FOCUSABLE`], otherwise clears focus.
//! - Text goes to the focused widget; nothing else sees it.
//! - [`Outcome::Ignored`] means no widget reacted, so the caller may treat the event
//!   as a map interaction.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Point, Rect};
//! use tessera_ui::{EditBox, Event, Outcome, PointerButton, PointerEvent, Ui};
//!
//! let mut ui = Ui::new();
//! ui.add("author", EditBox::new(Rect::new(10.0, 10.0, 200.0, 40.0)), 1);
//!
//! let click = Event::Pointer(PointerEvent {
//!     pos: Point::new(20.0, 20.0),
//!     button: PointerButton::Primary,
//!     pressed: true,
//! });
//! assert_eq!(ui.handle_event(&click), Outcome::Consumed);
//! assert!(ui.is_focused());
//!
//! for c in "Alice".chars() {
//!     ui.handle_event(&Event::Text(c));
//! }
//! assert_eq!(ui.edit_box("author").unwrap().buffer(), "Alice");
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Enable the `libm` feature when building
//! without `std`.

#![no_std]

extern crate alloc;

pub mod edit_box;
pub mod painter;
pub mod palette;
pub mod picker;
pub mod types;
pub mod ui;
pub mod widget;

pub use edit_box::EditBox;
pub use painter::{Color, DisplayList, DrawCommand, Painter};
pub use palette::BlockPalette;
pub use picker::BlockPicker;
pub use types::{
    BACKSPACE, ENTER, ESCAPE, Event, NO_BLOCK, Outcome, PointerButton, PointerEvent, WidgetFlags,
    WidgetId,
};
pub use ui::{Component, DEFAULT_SELECTED_BLOCK, Ui};
pub use widget::{DrawCx, EventCx, Widget};
