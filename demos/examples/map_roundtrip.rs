// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Map document save and load.
//!
//! Builds a small map, writes it in the `MaP!` format to the temp directory,
//! dumps the header bytes, and reads it back.
//!
//! Run:
//! - `cargo run -p tessera_demos --example map_roundtrip`

use tessera_map::{MapDocument, Viewport, codec};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("tessera=debug").init();

    let mut doc = MapDocument::new();
    doc.create_new(1_000, 1_000, "Test", "Alice");
    doc.add_block(10.0, 10.0, 0.0, 5);
    doc.add_block(990.0, 990.0, 90.0, 7);

    let bytes = codec::encode(doc.info(), doc.blocks())?;
    println!("== Encoded {} bytes ==", bytes.len());
    for chunk in bytes.chunks(16) {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
        println!("  {}", hex.join(" "));
    }

    let path = std::env::temp_dir().join("tessera_demo.map");
    doc.save_map_as(&path)?;
    println!("saved to {}", doc.path().unwrap_or_default().display());

    let mut loaded = MapDocument::new();
    loaded.load_map(&path)?;
    println!(
        "loaded '{}' by '{}' ({}x{}), {} blocks",
        loaded.name(),
        loaded.author(),
        loaded.width(),
        loaded.height(),
        loaded.block_count()
    );
    let corner = loaded.blocks_in_viewport(&Viewport::from_center_size(0.0, 0.0, 200.0, 200.0));
    println!("near the origin: {corner:?}");
    Ok(())
}
