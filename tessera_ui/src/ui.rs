// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget container: ownership, layering, focus, and event routing.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::edit_box::EditBox;
use crate::painter::Painter;
use crate::palette::BlockPalette;
use crate::picker::BlockPicker;
use crate::types::{Event, NO_BLOCK, Outcome, WidgetFlags, WidgetId};
use crate::widget::{DrawCx, EventCx, Widget};

/// Block selected before the user picks one.
pub const DEFAULT_SELECTED_BLOCK: i32 = 1;

/// Every widget kind the container can hold.
#[derive(Clone, Debug)]
pub enum Component {
    /// See [`BlockPicker`].
    BlockPicker(BlockPicker),
    /// See [`EditBox`].
    EditBox(EditBox),
}

impl Component {
    fn widget(&self) -> &dyn Widget {
        match self {
            Self::BlockPicker(w) => w,
            Self::EditBox(w) => w,
        }
    }

    fn widget_mut(&mut self) -> &mut dyn Widget {
        match self {
            Self::BlockPicker(w) => w,
            Self::EditBox(w) => w,
        }
    }
}

impl Widget for Component {
    fn area(&self) -> Rect {
        self.widget().area()
    }

    fn flags(&self) -> WidgetFlags {
        self.widget().flags()
    }

    fn update(&mut self) {
        self.widget_mut().update();
    }

    fn handle_event(&mut self, event: &Event, cx: &mut EventCx) -> Outcome {
        self.widget_mut().handle_event(event, cx)
    }

    fn draw(&self, painter: &mut dyn Painter, cx: &DrawCx) {
        self.widget().draw(painter, cx);
    }
}

impl From<BlockPicker> for Component {
    fn from(w: BlockPicker) -> Self {
        Self::BlockPicker(w)
    }
}

impl From<EditBox> for Component {
    fn from(w: EditBox) -> Self {
        Self::EditBox(w)
    }
}

#[derive(Clone, Debug)]
struct Entry {
    name: String,
    layer: i32,
    component: Component,
}

/// Owns the widgets of one screen.
///
/// Widgets are drawn by ascending layer and, within a layer, in insertion order.
/// Pointer events go to the topmost visible widget under the pointer, which is the
/// last one drawn there. A press also moves keyboard focus: to the hit widget if it
/// is focusable, otherwise nowhere. Text goes to the focused widget only.
#[derive(Clone, Debug)]
pub struct Ui {
    entries: Vec<Entry>,
    focused: Option<WidgetId>,
    selected_block: i32,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    /// Empty container with [`DEFAULT_SELECTED_BLOCK`] selected.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            focused: None,
            selected_block: DEFAULT_SELECTED_BLOCK,
        }
    }

    /// Add a widget on `layer` and return its id.
    pub fn add(&mut self, name: &str, component: impl Into<Component>, layer: i32) -> WidgetId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "A screen holds far fewer than u32::MAX widgets."
        )]
        let id = WidgetId(self.entries.len() as u32);
        self.entries.push(Entry {
            name: String::from(name),
            layer,
            component: component.into(),
        });
        id
    }

    /// Number of widgets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no widgets.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Widget by id.
    pub fn get(&self, id: WidgetId) -> Option<&Component> {
        self.entries.get(id.index()).map(|e| &e.component)
    }

    /// Widget by id, mutably.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Component> {
        self.entries.get_mut(id.index()).map(|e| &mut e.component)
    }

    /// Id of the first widget registered under `name`.
    pub fn id_of(&self, name: &str) -> Option<WidgetId> {
        let idx = self.entries.iter().position(|e| e.name == name)?;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Indices come from `add`, which issues u32 ids."
        )]
        Some(WidgetId(idx as u32))
    }

    /// Name a widget was registered under.
    pub fn name_of(&self, id: WidgetId) -> Option<&str> {
        self.entries.get(id.index()).map(|e| e.name.as_str())
    }

    /// Widget by name.
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    /// Block picker by name. `None` if absent or of another kind.
    pub fn picker(&self, name: &str) -> Option<&BlockPicker> {
        match self.component(name)? {
            Component::BlockPicker(p) => Some(p),
            _ => None,
        }
    }

    /// Block picker by name, mutably.
    pub fn picker_mut(&mut self, name: &str) -> Option<&mut BlockPicker> {
        let id = self.id_of(name)?;
        match self.get_mut(id)? {
            Component::BlockPicker(p) => Some(p),
            _ => None,
        }
    }

    /// Edit box by name. `None` if absent or of another kind.
    pub fn edit_box(&self, name: &str) -> Option<&EditBox> {
        match self.component(name)? {
            Component::EditBox(b) => Some(b),
            _ => None,
        }
    }

    /// Edit box by name, mutably.
    pub fn edit_box_mut(&mut self, name: &str) -> Option<&mut EditBox> {
        let id = self.id_of(name)?;
        match self.get_mut(id)? {
            Component::EditBox(b) => Some(b),
            _ => None,
        }
    }

    /// Widget holding keyboard focus.
    pub fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    /// Whether any widget holds keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focused.is_some()
    }

    /// Move focus. Ids of unknown or non-focusable widgets clear it.
    pub fn set_focus(&mut self, id: Option<WidgetId>) {
        self.focused = id.filter(|&id| {
            self.get(id)
                .is_some_and(|c| c.flags().contains(WidgetFlags::FOCUSABLE))
        });
    }

    /// Drop keyboard focus.
    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    /// Currently selected block id.
    pub fn selected_block(&self) -> i32 {
        self.selected_block
    }

    /// Select a block id.
    pub fn set_selected_block(&mut self, id: i32) {
        self.selected_block = id;
    }

    /// Give the picker named `name` a new palette and keep the selection valid:
    /// an empty palette selects [`NO_BLOCK`], a selection missing from the palette
    /// falls back to its first entry.
    pub fn set_palette(&mut self, name: &str, palette: BlockPalette) -> bool {
        let selection = if palette.is_empty() {
            NO_BLOCK
        } else if palette.contains(self.selected_block) {
            self.selected_block
        } else {
            palette.first().unwrap_or(NO_BLOCK)
        };
        let Some(picker) = self.picker_mut(name) else {
            return false;
        };
        picker.set_palette(palette);
        self.selected_block = selection;
        true
    }

    /// Ids in draw order: ascending layer, then insertion.
    pub fn draw_order(&self) -> Vec<WidgetId> {
        let mut order: Vec<(i32, usize)> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.layer, i))
            .collect();
        order.sort_unstable();
        order
            .into_iter()
            .filter_map(|(_, i)| u32::try_from(i).ok().map(WidgetId))
            .collect()
    }

    /// Topmost visible widget containing `pos`.
    pub fn hit_test(&self, pos: Point) -> Option<WidgetId> {
        self.draw_order().into_iter().rev().find(|&id| {
            self.get(id).is_some_and(|c| {
                c.flags().contains(WidgetFlags::VISIBLE) && c.area().contains(pos)
            })
        })
    }

    /// Route an event. Returns [`Outcome::Ignored`] when no widget reacted, in which
    /// case the caller is free to apply it elsewhere (for example to the map).
    pub fn handle_event(&mut self, event: &Event) -> Outcome {
        let target = match event {
            Event::Pointer(p) => {
                let hit = self.hit_test(p.pos);
                if p.pressed {
                    self.set_focus(hit);
                }
                hit
            }
            Event::Scroll { pos, .. } => self.hit_test(*pos),
            Event::Text(_) => self.focused,
        };
        let Some(target) = target else {
            return Outcome::Ignored;
        };

        let mut cx = EventCx::new(self.focused == Some(target));
        let outcome = match self.get_mut(target) {
            Some(c) => c.handle_event(event, &mut cx),
            None => Outcome::Ignored,
        };
        if cx.focus_released() && self.focused == Some(target) {
            self.focused = None;
        }
        if let Some(id) = cx.selection() {
            self.selected_block = id;
        }
        outcome
    }

    /// Per-frame update of every widget.
    pub fn update(&mut self) {
        for e in &mut self.entries {
            e.component.update();
        }
    }

    /// Draw visible widgets in draw order.
    pub fn draw(&self, painter: &mut dyn Painter) {
        for id in self.draw_order() {
            let Some(c) = self.get(id) else { continue };
            if !c.flags().contains(WidgetFlags::VISIBLE) {
                continue;
            }
            let cx = DrawCx {
                focused: self.focused == Some(id),
                selected_block: self.selected_block,
            };
            c.draw(painter, &cx);
        }
    }
}
