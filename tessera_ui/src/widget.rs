// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget capability trait and the contexts passed to it.

use kurbo::Rect;

use crate::painter::Painter;
use crate::types::{Event, Outcome, WidgetFlags};

/// Per-event context handed to [`Widget::handle_event`].
///
/// Widgets never reach into the [`Ui`](crate::Ui) directly. They leave requests
/// here and the container applies them after the handler returns.
#[derive(Clone, Debug, Default)]
pub struct EventCx {
    focused: bool,
    release_focus: bool,
    selection: Option<i32>,
}

impl EventCx {
    /// Context for a widget that does (or does not) hold focus.
    pub fn new(focused: bool) -> Self {
        Self {
            focused,
            ..Self::default()
        }
    }

    /// Whether the receiving widget holds keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Ask the container to drop keyboard focus.
    pub fn release_focus(&mut self) {
        self.release_focus = true;
    }

    /// Whether [`release_focus`](Self::release_focus) was requested.
    pub fn focus_released(&self) -> bool {
        self.release_focus
    }

    /// Make `id` the selected block.
    pub fn select_block(&mut self, id: i32) {
        self.selection = Some(id);
    }

    /// Block selected during this event, if any.
    pub fn selection(&self) -> Option<i32> {
        self.selection
    }
}

/// Per-frame context handed to [`Widget::draw`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DrawCx {
    /// Whether the widget being drawn holds focus.
    pub focused: bool,
    /// Currently selected block id.
    pub selected_block: i32,
}

/// Capabilities every widget provides.
pub trait Widget {
    /// Screen rectangle occupied by the widget.
    fn area(&self) -> Rect;

    /// Visibility and focus behavior.
    fn flags(&self) -> WidgetFlags;

    /// Per-frame state update.
    fn update(&mut self) {}

    /// React to an event routed to this widget.
    fn handle_event(&mut self, event: &Event, cx: &mut EventCx) -> Outcome;

    /// Draw the widget.
    fn draw(&self, painter: &mut dyn Painter, cx: &DrawCx);
}
