// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `tessera-editor`: run the map editor from a script or an interactive prompt.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use clap::Parser;
use tessera_editor::{Editor, EditorConfig, Result, run_headless, scan_palette_dir};
use tessera_ui::BlockPalette;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG: &str = "tessera.toml";

/// Tessera block map editor
#[derive(Parser, Debug)]
#[command(name = "tessera-editor")]
#[command(about = "Edit Tessera block maps through console commands")]
struct Args {
    /// Editor settings (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Map file to open at startup
    #[arg(long)]
    map: Option<PathBuf>,

    /// Run commands from this file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Override the block texture directory
    #[arg(long)]
    palette_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EditorConfig::load(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => EditorConfig::load(Path::new(DEFAULT_CONFIG))?,
        None => EditorConfig::default(),
    };
    if let Some(dir) = args.palette_dir {
        config.palette_dir = dir;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let palette = match scan_palette_dir(&config.palette_dir) {
        Ok(palette) => palette,
        Err(err) => {
            warn!(%err, "starting with an empty block palette");
            BlockPalette::new()
        }
    };

    let mut editor = Editor::new(config, palette);
    if let Some(map) = &args.map {
        editor.doc_mut().load_map(map)?;
        editor.sync_fields();
        info!(map = %map.display(), blocks = editor.doc().block_count(), "opened map");
    }

    let stdout = io::stdout().lock();
    match &args.script {
        Some(script) => {
            let file = File::open(script)?;
            run_headless(&mut editor, BufReader::new(file), stdout)?;
        }
        None => {
            info!("reading commands from stdin; 'help' lists them, 'quit' exits");
            run_headless(&mut editor, io::stdin().lock(), stdout)?;
        }
    }

    if editor.doc().is_ready() && !editor.doc().is_saved() {
        warn!("exiting with unsaved changes");
    }
    Ok(())
}
