// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-line text input.

use alloc::string::String;

use kurbo::{Point, Rect};

use crate::painter::{Color, Painter};
use crate::types::{BACKSPACE, ENTER, ESCAPE, Event, Outcome, WidgetFlags};
use crate::widget::{DrawCx, EventCx, Widget};

/// Longest buffer accepted by default, matching the map header string limit.
pub const DEFAULT_MAX_LEN: usize = 255;

/// Single-line text buffer that edits while focused.
#[derive(Clone, Debug)]
pub struct EditBox {
    area: Rect,
    label: String,
    buffer: String,
    max_len: usize,
    flags: WidgetFlags,
}

impl EditBox {
    /// Empty edit box.
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            label: String::new(),
            buffer: String::new(),
            max_len: DEFAULT_MAX_LEN,
            flags: WidgetFlags::VISIBLE | WidgetFlags::FOCUSABLE,
        }
    }

    /// Caption drawn before the buffer.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Limit the buffer to `max_len` bytes.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self.buffer.truncate(floor_char_boundary(&self.buffer, max_len));
        self
    }

    /// Current text.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Replace the text, truncating it to the length limit.
    pub fn set_buffer(&mut self, text: &str) {
        self.buffer.clear();
        self.buffer
            .push_str(&text[..floor_char_boundary(text, self.max_len)]);
    }

    /// Caption.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Show or hide the box.
    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(WidgetFlags::VISIBLE, visible);
    }

    fn type_char(&mut self, c: char, cx: &mut EventCx) {
        match c {
            BACKSPACE => {
                self.buffer.pop();
            }
            ENTER | ESCAPE => cx.release_focus(),
            c if c.is_control() => {}
            c => {
                if self.buffer.len() + c.len_utf8() <= self.max_len {
                    self.buffer.push(c);
                }
            }
        }
    }
}

impl Widget for EditBox {
    fn area(&self) -> Rect {
        self.area
    }

    fn flags(&self) -> WidgetFlags {
        self.flags
    }

    fn handle_event(&mut self, event: &Event, cx: &mut EventCx) -> Outcome {
        match event {
            Event::Pointer(p) if self.area.contains(p.pos) => Outcome::Consumed,
            Event::Text(c) if cx.is_focused() => {
                self.type_char(*c, cx);
                Outcome::Consumed
            }
            _ => Outcome::Ignored,
        }
    }

    fn draw(&self, painter: &mut dyn Painter, cx: &DrawCx) {
        let (fill, outline) = if cx.focused {
            (Color::rgb(70, 70, 70), Color::YELLOW)
        } else {
            (Color::rgb(40, 40, 40), Color::GRAY)
        };
        painter.fill_rect(self.area, fill);
        painter.stroke_rect(self.area, outline, 1.0);

        let size = (self.area.height() * 0.6).max(1.0);
        let y = self.area.y0 + (self.area.height() - size) / 2.0;
        if !self.label.is_empty() {
            painter.text(
                Point::new(self.area.x0, self.area.y0 - size - 2.0),
                &self.label,
                size,
                Color::WHITE,
            );
        }
        painter.text(Point::new(self.area.x0 + 4.0, y), &self.buffer, size, Color::WHITE);
    }
}

fn floor_char_boundary(s: &str, max: usize) -> usize {
    if max >= s.len() {
        return s.len();
    }
    (0..=max).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}
