// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: events, outcomes, flags, and widget identifiers.

use kurbo::Point;

/// Block id meaning "nothing selected".
pub const NO_BLOCK: i32 = -1;

/// Character delivered for the backspace key.
pub const BACKSPACE: char = '\u{8}';
/// Character delivered for the return key.
pub const ENTER: char = '\r';
/// Character delivered for the escape key.
pub const ESCAPE: char = '\u{1b}';

/// Mouse button that produced a pointer event.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PointerButton {
    /// Usually the left button.
    Primary,
    /// Usually the right button.
    Secondary,
    /// Wheel button.
    Middle,
}

/// Press or release of a pointer button.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Position in screen coordinates.
    pub pos: Point,
    /// Button that changed state.
    pub button: PointerButton,
    /// `true` on press, `false` on release.
    pub pressed: bool,
}

/// Input delivered to widgets.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event {
    /// A button press or release.
    Pointer(PointerEvent),
    /// A typed character, including [`BACKSPACE`], [`ENTER`] and [`ESCAPE`].
    Text(char),
    /// Wheel movement over `pos`. Positive `delta` scrolls up/back.
    Scroll {
        /// Pointer position.
        pos: Point,
        /// Wheel steps.
        delta: f64,
    },
}

impl Event {
    /// Screen position for positional events.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::Pointer(p) => Some(p.pos),
            Self::Scroll { pos, .. } => Some(*pos),
            Self::Text(_) => None,
        }
    }
}

/// Result of handling an event.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The widget did not react; the caller may route the event elsewhere.
    Ignored,
    /// The widget reacted, but the event may still be meaningful to the caller.
    Handled,
    /// The widget used the event; nothing else should see it.
    Consumed,
}

impl Outcome {
    /// Whether a widget reacted at all.
    pub fn is_handled(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

bitflags::bitflags! {
    /// Widget flags controlling drawing and focus.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct WidgetFlags: u8 {
        /// Widget is drawn and hit-tested.
        const VISIBLE   = 0b0000_0001;
        /// Widget takes keyboard focus when pressed.
        const FOCUSABLE = 0b0000_0010;
    }
}

impl Default for WidgetFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Identifier of a widget inside a [`Ui`](crate::Ui).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub(crate) u32);

impl WidgetId {
    /// Position in insertion order.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_events_report_position() {
        let p = Point::new(3.0, 4.0);
        let press = Event::Pointer(PointerEvent {
            pos: p,
            button: PointerButton::Primary,
            pressed: true,
        });
        assert_eq!(press.position(), Some(p));
        assert_eq!(Event::Scroll { pos: p, delta: 1.0 }.position(), Some(p));
        assert_eq!(Event::Text('a').position(), None);
    }

    #[test]
    fn default_flags_are_visible_only() {
        let f = WidgetFlags::default();
        assert!(f.contains(WidgetFlags::VISIBLE));
        assert!(!f.contains(WidgetFlags::FOCUSABLE));
    }

    #[test]
    fn ignored_is_not_handled() {
        assert!(!Outcome::Ignored.is_handled());
        assert!(Outcome::Handled.is_handled());
        assert!(Outcome::Consumed.is_handled());
    }
}
