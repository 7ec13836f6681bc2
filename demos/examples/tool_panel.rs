// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tool panel widgets.
//!
//! A block picker and a text field on one surface. Clicks scroll and select in
//! the picker, focus moves with presses, and anything outside the panel comes
//! back as `Ignored` for the caller to apply to the map.
//!
//! Run:
//! - `cargo run -p tessera_demos --example tool_panel`

use kurbo::{Point, Rect};
use tessera_ui::{
    BlockPalette, BlockPicker, DisplayList, EditBox, Event, PointerButton, PointerEvent, Ui,
};

fn click(ui: &mut Ui, x: f64, y: f64) {
    let pos = Point::new(x, y);
    for pressed in [true, false] {
        let outcome = ui.handle_event(&Event::Pointer(PointerEvent {
            pos,
            button: PointerButton::Primary,
            pressed,
        }));
        println!("  {} at ({x}, {y}) -> {outcome:?}", if pressed { "press" } else { "release" });
    }
}

fn main() {
    let palette: BlockPalette = (1..=14).map(|id| (id, format!("tile{id}"))).collect();
    let mut ui = Ui::new();
    ui.add("blocks", BlockPicker::new(Rect::new(0.0, 900.0, 1_000.0, 1_000.0), palette), 0);
    ui.add("name", EditBox::new(Rect::new(1_010.0, 900.0, 1_400.0, 940.0)).with_label("name"), 0);

    println!("== Scroll the picker right twice, then pick the first slot ==");
    click(&mut ui, 990.0, 950.0);
    click(&mut ui, 990.0, 950.0);
    let first = ui.picker("blocks").map(|p| p.visible_entries()).unwrap_or_default();
    println!("  visible: {first:?}");
    let slot = ui.picker("blocks").map(|p| p.slot_rect(0).center()).unwrap_or_default();
    click(&mut ui, slot.x, slot.y);
    println!("  selected block: {}", ui.selected_block());

    println!("== Type into the name field ==");
    click(&mut ui, 1_100.0, 920.0);
    for c in "Keep\r".chars() {
        ui.handle_event(&Event::Text(c));
    }
    println!("  name = {:?}, focused = {}", ui.edit_box("name").map(EditBox::buffer), ui.is_focused());

    println!("== Click on the map area ==");
    click(&mut ui, 400.0, 300.0);

    let mut frame = DisplayList::new();
    ui.draw(&mut frame);
    println!("== Frame: {} commands, textures {:?} ==", frame.len(), frame.texture_ids().collect::<Vec<_>>());
}
