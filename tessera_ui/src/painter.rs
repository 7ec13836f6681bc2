// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render seam: widgets describe what to draw, a backend decides how.
//!
//! [`DisplayList`] is a backend that simply records commands. It is handy for
//! tests and for renderers that replay a frame later.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Point, Rect};

/// 8-bit RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Color {
    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Yellow.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// Dark green.
    pub const DARK_GREEN: Self = Self::rgb(0, 100, 0);
    /// Mid gray.
    pub const GRAY: Self = Self::rgb(128, 128, 128);
}

/// Drawing backend used by widgets.
pub trait Painter {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Outline an axis-aligned rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);
    /// Draw the texture registered under `id` into `rect`, rotated by `angle` degrees around its center.
    fn texture(&mut self, id: i32, rect: Rect, angle: f64);
    /// Draw a line of text with its top-left corner at `origin`.
    fn text(&mut self, origin: Point, text: &str, size: f64, color: Color);
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// See [`Painter::fill_rect`].
    FillRect {
        /// Target rectangle.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// See [`Painter::stroke_rect`].
    StrokeRect {
        /// Target rectangle.
        rect: Rect,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// See [`Painter::texture`].
    Texture {
        /// Texture id.
        id: i32,
        /// Target rectangle.
        rect: Rect,
        /// Rotation in degrees.
        angle: f64,
    },
    /// See [`Painter::text`].
    Text {
        /// Top-left corner.
        origin: Point,
        /// Text content.
        text: String,
        /// Font size in pixels.
        size: f64,
        /// Text color.
        color: Color,
    },
}

/// A [`Painter`] that records commands in order.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Ids of drawn textures, in draw order.
    pub fn texture_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Texture { id, .. } => Some(*id),
            _ => None,
        })
    }

    /// Drawn text, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Painter for DisplayList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.commands
            .push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn texture(&mut self, id: i32, rect: Rect, angle: f64) {
        self.commands.push(DrawCommand::Texture { id, rect, angle });
    }

    fn text(&mut self, origin: Point, text: &str, size: f64, color: Color) {
        self.commands.push(DrawCommand::Text {
            origin,
            text: text.to_string(),
            size,
            color,
        });
    }
}
