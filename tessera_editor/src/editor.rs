// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editor shell: owns the document, tool panel, console, and camera, and
//! turns input into edits.

use kurbo::{Point, Rect, Size};
use tessera_console::{Console, map_commands};
use tessera_map::{Block, BlockId, MapDocument, wrap_angle};
use tessera_ui::{
    BlockPalette, BlockPicker, Color, EditBox, Event, Outcome, Painter, PointerButton, Ui,
};
use tracing::{info, warn};

use crate::camera::Camera;
use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use crate::palette::PaletteTextures;

/// Name of the block picker widget.
pub const PICKER: &str = "blocks";
/// Name of the filename edit box.
pub const FILENAME_FIELD: &str = "filename";
/// Name of the author edit box.
pub const AUTHOR_FIELD: &str = "author";
/// Name of the map name edit box.
pub const NAME_FIELD: &str = "name";

/// Logged when a placement falls outside the map.
pub const OUT_OF_BOUNDS: &str = "Error: Block out of the map boundaries!";

/// Keys the editor reacts to outside of text entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditorKey {
    /// Save using the tool panel fields.
    F1,
    /// Reload the map named in the filename field.
    F2,
    /// Open the console.
    Enter,
    /// Quit, unless the console is on screen.
    Escape,
}

/// What the host loop should do after an input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditorAction {
    /// Keep running.
    Continue,
    /// Close the editor.
    Quit,
}

/// A running editor session.
#[derive(Debug)]
pub struct Editor {
    config: EditorConfig,
    doc: MapDocument,
    ui: Ui,
    console: Console<MapDocument>,
    camera: Camera,
    view: Rect,
    angle: f32,
}

impl Editor {
    /// Lay out the tool panel for `config` and offer the blocks in `palette`.
    pub fn new(config: EditorConfig, palette: BlockPalette) -> Self {
        let sw = f64::from(config.screen_width);
        let sh = f64::from(config.screen_height);
        let tool_top = sh * (1.0 - config.tool_area);
        let view = Rect::new(0.0, 0.0, sw, tool_top);

        let mut ui = Ui::new();
        let picker_rect = Rect::new(0.0, tool_top + 4.0, sw * 0.8, sh);
        ui.add(PICKER, BlockPicker::new(picker_rect, BlockPalette::new()), 1);
        ui.set_palette(PICKER, palette);

        let row = sh * config.tool_area / 3.0;
        let fields = [
            (FILENAME_FIELD, &config.default_filename),
            (AUTHOR_FIELD, &config.default_author),
            (NAME_FIELD, &config.default_name),
        ];
        for (i, (name, initial)) in fields.into_iter().enumerate() {
            let y0 = tool_top + 5.0 + row * i as f64;
            let rect = Rect::new(sw * 0.8 + 2.0, y0, sw - 2.0, y0 + row - 5.0);
            let mut field = EditBox::new(rect).with_label(name);
            field.set_buffer(initial);
            ui.add(name, field, 1);
        }

        let mut console = Console::new(map_commands()).with_max_log_lines(config.max_log_lines);
        console.set_height(sh * config.console_height);

        Self {
            camera: Camera::at_origin(Size::new(view.width(), view.height())),
            config,
            doc: MapDocument::new(),
            ui,
            console,
            view,
            angle: 0.0,
        }
    }

    /// Settings the editor was built with.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The open map.
    pub fn doc(&self) -> &MapDocument {
        &self.doc
    }

    /// The open map, mutably.
    pub fn doc_mut(&mut self) -> &mut MapDocument {
        &mut self.doc
    }

    /// Tool panel.
    pub fn ui(&self) -> &Ui {
        &self.ui
    }

    /// Tool panel, mutably.
    pub fn ui_mut(&mut self) -> &mut Ui {
        &mut self.ui
    }

    /// Console.
    pub fn console(&self) -> &Console<MapDocument> {
        &self.console
    }

    /// Camera over the map.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Camera over the map, mutably.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Screen rectangle the map is drawn into.
    pub fn view(&self) -> Rect {
        self.view
    }

    /// Rotation applied to newly placed blocks.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Rotate the placement angle by `delta` degrees.
    pub fn rotate(&mut self, delta: f32) {
        self.angle = wrap_angle(self.angle + delta);
    }

    /// Append a line to the console log.
    pub fn log(&mut self, line: impl Into<String>) {
        self.console.add_log_line(line);
    }

    /// Place the selected block at a world position.
    ///
    /// Positions outside `[0, width) × [0, height)` are refused and logged.
    pub fn place_block(&mut self, world: Point) -> Option<BlockId> {
        if !self.doc.is_ready() {
            self.log("No map. Use 'new' or 'load' in the console.");
            return None;
        }
        let (x, y) = map_coords(world);
        let inside = x >= 0.0
            && y >= 0.0
            && x < self.doc.width() as f32
            && y < self.doc.height() as f32;
        if !inside {
            self.log(OUT_OF_BOUNDS);
            return None;
        }
        self.doc.add_block(x, y, self.angle, self.ui.selected_block())
    }

    /// Remove the most recent block near a world position.
    pub fn erase_block(&mut self, world: Point) -> Option<Block> {
        let (x, y) = map_coords(world);
        let id = self.doc.pick_block(x, y, self.config.erase_radius)?;
        self.doc.remove_block(id)
    }

    /// Save using the filename, name, and author fields (F1).
    pub fn save_from_fields(&mut self) -> Result<()> {
        let filename = self.field(FILENAME_FIELD)?;
        let name = self.field(NAME_FIELD)?;
        let author = self.field(AUTHOR_FIELD)?;
        info!(%name, %author, %filename, "saving map from tool panel");
        self.log(format!(
            "Saving '{name}' map from '{author}' to '{filename}.map'"
        ));
        self.doc.set_filename(&filename);
        self.doc.set_name(&name);
        self.doc.set_author(&author);
        if let Err(err) = self.doc.save_map() {
            self.log(err.to_string());
            return Err(err.into());
        }
        Ok(())
    }

    /// Load `<filename>.map` from the filename field and refresh the fields (F2).
    pub fn load_from_fields(&mut self) -> Result<()> {
        let filename = self.field(FILENAME_FIELD)?;
        let path = format!("{filename}.map");
        if let Err(err) = self.doc.load_map(&path) {
            self.log(err.to_string());
            return Err(err.into());
        }
        self.log(format!(
            "Loaded '{}' from '{path}' ({} blocks)",
            self.doc.name(),
            self.doc.block_count()
        ));
        self.sync_fields();
        Ok(())
    }

    /// Copy the document metadata into the tool panel fields.
    pub fn sync_fields(&mut self) {
        let values = [
            (FILENAME_FIELD, self.doc.filename().to_owned()),
            (NAME_FIELD, self.doc.name().to_owned()),
            (AUTHOR_FIELD, self.doc.author().to_owned()),
        ];
        for (field, value) in values {
            if let Some(b) = self.ui.edit_box_mut(field) {
                b.set_buffer(&value);
            }
        }
    }

    fn field(&mut self, name: &'static str) -> Result<String> {
        let value = self
            .ui
            .edit_box(name)
            .map(|b| b.buffer().trim().to_owned())
            .unwrap_or_default();
        if value.is_empty() {
            self.log(format!("Cannot continue, the {name} field is empty"));
            return Err(EditorError::EmptyField(name));
        }
        Ok(value)
    }

    /// Run a console command line against the open map.
    pub fn run_command(&mut self, line: &str) -> tessera_console::Result<()> {
        let result = self.console.execute(line, &mut self.doc);
        if result.is_ok() && is_load(line) {
            self.sync_fields();
        }
        result
    }

    /// Route a pointer, text, or wheel event.
    ///
    /// Text goes to the console while it is open. Otherwise the tool panel gets the
    /// first look; events it ignores act on the map: primary press places, secondary
    /// press erases, and the wheel rotates.
    pub fn handle_event(&mut self, event: &Event) -> Outcome {
        if let Event::Text(c) = event {
            if self.console.is_active() {
                let loading = is_load(self.console.buffer());
                let executed = self.console.input(*c, &mut self.doc);
                if loading && matches!(executed, Some(Ok(()))) {
                    self.sync_fields();
                }
                return Outcome::Consumed;
            }
        }

        let outcome = self.ui.handle_event(event);
        if outcome.is_handled() {
            return outcome;
        }

        match event {
            Event::Pointer(p) if p.pressed && self.view.contains(p.pos) => {
                let world = self.camera.screen_to_world(p.pos, self.view);
                match p.button {
                    PointerButton::Primary => {
                        self.place_block(world);
                    }
                    PointerButton::Secondary => {
                        self.erase_block(world);
                    }
                    PointerButton::Middle => return Outcome::Ignored,
                }
                Outcome::Consumed
            }
            Event::Scroll { pos, delta } if self.view.contains(*pos) => {
                let step = if *delta > 0.0 {
                    -self.config.rotate_step
                } else {
                    self.config.rotate_step
                };
                self.rotate(step);
                Outcome::Consumed
            }
            _ => Outcome::Ignored,
        }
    }

    /// React to a released key. Ignored while a field or the console takes input.
    pub fn handle_key(&mut self, key: EditorKey) -> EditorAction {
        if self.ui.is_focused() || self.console.is_active() {
            return EditorAction::Continue;
        }
        match key {
            EditorKey::F1 => {
                if let Err(err) = self.save_from_fields() {
                    warn!(%err, "save failed");
                }
            }
            EditorKey::F2 => {
                if let Err(err) = self.load_from_fields() {
                    warn!(%err, "load failed");
                }
            }
            EditorKey::Enter => self.console.show(),
            EditorKey::Escape => {
                if !self.console.is_active_or_hiding() {
                    return EditorAction::Quit;
                }
            }
        }
        EditorAction::Continue
    }

    /// Advance animations by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        self.ui.update();
        self.console.update(dt);
    }

    /// Draw a frame: visible blocks, view outline, tool panel, then console.
    pub fn draw(&self, painter: &mut dyn Painter) {
        if self.doc.is_ready() {
            let palette = self.ui.picker(PICKER).map(BlockPicker::palette);
            let empty = BlockPalette::new();
            let textures = PaletteTextures(palette.unwrap_or(&empty));
            let half = self.config.block_size / 2.0;
            for sprite in self.doc.sprites_in_viewport(&self.camera.viewport(), &textures) {
                let a = self.camera.world_to_screen(
                    Point::new(f64::from(sprite.block.x) - half, f64::from(sprite.block.y) - half),
                    self.view,
                );
                let b = self.camera.world_to_screen(
                    Point::new(f64::from(sprite.block.x) + half, f64::from(sprite.block.y) + half),
                    self.view,
                );
                painter.texture(sprite.texture, Rect::from_points(a, b), f64::from(sprite.block.angle));
            }
        }
        painter.stroke_rect(self.view.inset(-2.0), Color::rgb(0, 0, 255), 2.0);
        self.ui.draw(painter);
        self.console.draw(painter, self.view.width());
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Map coordinates are stored as f32."
)]
fn map_coords(p: Point) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

fn is_load(line: &str) -> bool {
    matches!(line.split_whitespace().next(), Some("load" | "load!"))
}
