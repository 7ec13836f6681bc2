// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Console session.
//!
//! Types a few commands into a map console one character at a time, the way a
//! window would deliver them, including a refused `new` over unsaved work.
//!
//! Run:
//! - `cargo run -p tessera_demos --example console_session`

use tessera_console::{Console, map_commands};
use tessera_map::MapDocument;
use tessera_ui::{DisplayList, ENTER};

fn main() {
    let mut doc = MapDocument::new();
    let mut console = Console::new(map_commands());
    console.show();

    for line in [
        "help",
        "new 2000 1500 \"Sunken Keep\" Bea",
        "name",
        "new 10 10",
        "new! 10 10 Scratch",
        "info",
        "frobnicate",
    ] {
        for c in line.chars() {
            console.input(c, &mut doc);
        }
        console.input(ENTER, &mut doc);
    }

    println!("== Log ==");
    for line in console.log_lines() {
        println!("{line}");
    }

    // Let the slide-in finish, then count what a frame would draw.
    for _ in 0..30 {
        console.update(1.0 / 60.0);
    }
    let mut frame = DisplayList::new();
    console.draw(&mut frame, 1_920.0);
    println!(
        "== Frame: {} draw commands, {} visible log lines ==",
        frame.len(),
        console.visible_log().len()
    );
}
