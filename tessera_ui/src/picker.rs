// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal, scrollable strip of block textures.

use alloc::format;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::painter::{Color, Painter};
use crate::palette::BlockPalette;
use crate::types::{Event, Outcome, PointerEvent, WidgetFlags};
use crate::widget::{DrawCx, EventCx, Widget};

/// Entries shown at once by default.
pub const DEFAULT_VIEW_COUNT: usize = 10;

/// Width of each arrow zone as a fraction of the picker width.
pub const ARROW_ZONE_FRACTION: f64 = 0.05;

/// Block selection strip.
///
/// ```text
/// +---+----+----+----+-- ... --+----+---+
/// | < | e0 | e1 | e2 |         | e9 | > |
/// +---+----+----+----+-- ... --+----+---+
/// ```
///
/// Releasing the pointer over an arrow scrolls by one entry; releasing over an
/// entry selects it. The wheel scrolls as well.
#[derive(Clone, Debug)]
pub struct BlockPicker {
    area: Rect,
    palette: BlockPalette,
    first: Option<i32>,
    view_count: usize,
    flags: WidgetFlags,
}

impl BlockPicker {
    /// Picker over `palette`, showing [`DEFAULT_VIEW_COUNT`] entries.
    pub fn new(area: Rect, palette: BlockPalette) -> Self {
        Self::with_view_count(area, palette, DEFAULT_VIEW_COUNT)
    }

    /// Picker showing `view_count` entries at once (at least one).
    pub fn with_view_count(area: Rect, palette: BlockPalette, view_count: usize) -> Self {
        let first = palette.first();
        Self {
            area,
            palette,
            first,
            view_count: view_count.max(1),
            flags: WidgetFlags::VISIBLE,
        }
    }

    /// Available blocks.
    pub fn palette(&self) -> &BlockPalette {
        &self.palette
    }

    /// Replace the available blocks and scroll back to the start.
    pub fn set_palette(&mut self, palette: BlockPalette) {
        self.first = palette.first();
        self.palette = palette;
    }

    /// Entries shown at once.
    pub fn view_count(&self) -> usize {
        self.view_count
    }

    /// Show or hide the picker.
    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(WidgetFlags::VISIBLE, visible);
    }

    /// Ids currently in view, left to right.
    pub fn visible_entries(&self) -> Vec<i32> {
        match self.first {
            Some(first) => self.palette.window(first, self.view_count).collect(),
            None => Vec::new(),
        }
    }

    /// Scroll one entry towards the end. Stops once the last entry is in view.
    pub fn scroll_forward(&mut self) -> bool {
        let visible = self.visible_entries();
        let Some(&last_visible) = visible.last() else {
            return false;
        };
        if visible.len() < self.view_count || self.palette.next(last_visible).is_none() {
            return false;
        }
        self.first = self.first.and_then(|f| self.palette.next(f));
        true
    }

    /// Scroll one entry towards the start.
    pub fn scroll_back(&mut self) -> bool {
        match self.first.and_then(|f| self.palette.prev(f)) {
            Some(prev) => {
                self.first = Some(prev);
                true
            }
            None => false,
        }
    }

    /// Hit zone of the left arrow.
    pub fn left_arrow(&self) -> Rect {
        let w = self.area.width() * ARROW_ZONE_FRACTION;
        Rect::new(self.area.x0, self.area.y0, self.area.x0 + w, self.area.y1)
    }

    /// Hit zone of the right arrow.
    pub fn right_arrow(&self) -> Rect {
        let w = self.area.width() * ARROW_ZONE_FRACTION;
        Rect::new(self.area.x1 - w, self.area.y0, self.area.x1, self.area.y1)
    }

    /// Area between the arrows.
    pub fn view_rect(&self) -> Rect {
        Rect::new(
            self.left_arrow().x1,
            self.area.y0,
            self.right_arrow().x0,
            self.area.y1,
        )
    }

    /// Rectangle of the `slot`-th visible entry.
    pub fn slot_rect(&self, slot: usize) -> Rect {
        let view = self.view_rect();
        let w = self.slot_width();
        let x0 = view.x0 + w * slot as f64;
        Rect::new(x0, view.y0, x0 + w, view.y1)
    }

    /// Id of the entry under `pos`.
    pub fn entry_at(&self, pos: Point) -> Option<i32> {
        let view = self.view_rect();
        if !view.contains(pos) {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Non-negative slot offsets; truncation is the intended floor."
        )]
        let slot = ((pos.x - view.x0) / self.slot_width()) as usize;
        self.visible_entries().get(slot).copied()
    }

    fn slot_width(&self) -> f64 {
        self.view_rect().width() / self.view_count as f64
    }

    fn on_release(&mut self, p: &PointerEvent, cx: &mut EventCx) -> Outcome {
        if self.left_arrow().contains(p.pos) {
            self.scroll_back();
            Outcome::Consumed
        } else if self.right_arrow().contains(p.pos) {
            self.scroll_forward();
            Outcome::Consumed
        } else if let Some(id) = self.entry_at(p.pos) {
            cx.select_block(id);
            Outcome::Consumed
        } else {
            Outcome::Handled
        }
    }
}

impl Widget for BlockPicker {
    fn area(&self) -> Rect {
        self.area
    }

    fn flags(&self) -> WidgetFlags {
        self.flags
    }

    fn handle_event(&mut self, event: &Event, cx: &mut EventCx) -> Outcome {
        match event {
            Event::Pointer(p) if self.area.contains(p.pos) => {
                if p.pressed {
                    Outcome::Handled
                } else {
                    self.on_release(p, cx)
                }
            }
            Event::Scroll { pos, delta } if self.area.contains(*pos) => {
                if *delta > 0.0 {
                    self.scroll_back();
                } else if *delta < 0.0 {
                    self.scroll_forward();
                }
                Outcome::Consumed
            }
            _ => Outcome::Ignored,
        }
    }

    fn draw(&self, painter: &mut dyn Painter, cx: &DrawCx) {
        painter.fill_rect(self.area, Color::RED);

        let arrow_size = self.area.height() / 3.0;
        for (arrow, glyph) in [(self.left_arrow(), "<"), (self.right_arrow(), ">")] {
            painter.fill_rect(arrow, Color::DARK_GREEN);
            let origin = Point::new(
                arrow.x0 + (arrow.width() - arrow_size) / 2.0,
                arrow.y0 + (arrow.height() - arrow_size) / 2.0,
            );
            painter.text(origin, glyph, arrow_size, Color::WHITE);
        }

        for (slot, id) in self.visible_entries().into_iter().enumerate() {
            let rect = self.slot_rect(slot);
            painter.texture(id, rect.inset(-1.0), 0.0);
            let outline = if id == cx.selected_block {
                Color::WHITE
            } else {
                Color::YELLOW
            };
            painter.stroke_rect(rect, outline, 1.0);
            painter.text(
                Point::new(rect.x0 + 2.0, rect.y0 + 2.0),
                &format!("{id}"),
                12.0,
                Color::WHITE,
            );
        }
    }
}
