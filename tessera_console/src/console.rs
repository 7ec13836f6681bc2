// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop-down console: input line, bounded log, and show/hide animation.

use std::collections::VecDeque;

use kurbo::{Point, Rect};
use tessera_ui::{BACKSPACE, Color, ENTER, ESCAPE, Painter};
use tracing::{debug, warn};

use crate::command::CommandTable;
use crate::error::Result;

/// Log lines kept before the oldest are dropped.
pub const DEFAULT_MAX_LOG_LINES: usize = 500;

/// Seconds between cursor blinks.
pub const BLINK_PERIOD: f64 = 0.3;

/// Slide speed of the show/hide animation, in pixels per second.
pub const SLIDE_SPEED: f64 = 1000.0;

/// Default console height in pixels (40% of a 1080 px screen).
pub const DEFAULT_HEIGHT: f64 = 432.0;

/// Height of one log line in pixels.
pub const LOG_LINE_HEIGHT: f64 = 16.0;

/// Space reserved for the input line at the bottom.
const INPUT_AREA: f64 = 30.0;
const INPUT_TEXT_SIZE: f64 = 20.0;
const MARGIN: f64 = 5.0;

/// Console for issuing commands against a target of type `T`.
///
/// The log keeps at most [`max_log_lines`](Self::max_log_lines) entries. While the
/// view follows the tail, new lines scroll it so the newest line stays visible;
/// scrolling up stops following until the view reaches the bottom again.
#[derive(Debug)]
pub struct Console<T> {
    commands: CommandTable<T>,
    buffer: String,
    log: VecDeque<String>,
    logged: u64,
    max_log_lines: usize,
    visible_lines: usize,
    scroll: usize,
    follow_tail: bool,
    active: bool,
    hiding: bool,
    height: f64,
    offset: f64,
    blink_timer: f64,
    cursor_on: bool,
}

impl<T> Console<T> {
    /// Hidden console dispatching to `commands`.
    pub fn new(commands: CommandTable<T>) -> Self {
        Self {
            commands,
            buffer: String::new(),
            log: VecDeque::new(),
            logged: 0,
            max_log_lines: DEFAULT_MAX_LOG_LINES,
            visible_lines: lines_for_height(DEFAULT_HEIGHT),
            scroll: 0,
            follow_tail: true,
            active: false,
            hiding: false,
            height: DEFAULT_HEIGHT,
            offset: -DEFAULT_HEIGHT,
            blink_timer: 0.0,
            cursor_on: true,
        }
    }

    /// Keep at most `n` log lines (at least one).
    pub fn with_max_log_lines(mut self, n: usize) -> Self {
        self.max_log_lines = n.max(1);
        while self.log.len() > self.max_log_lines {
            self.log.pop_front();
        }
        self.clamp_scroll();
        self
    }

    /// Resize the console; the number of visible log lines follows.
    pub fn set_height(&mut self, height: f64) {
        self.height = height.max(INPUT_AREA + LOG_LINE_HEIGHT);
        self.visible_lines = lines_for_height(self.height);
        if !self.active && !self.hiding {
            self.offset = -self.height;
        }
        self.clamp_scroll();
    }

    /// Console height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Log capacity.
    pub fn max_log_lines(&self) -> usize {
        self.max_log_lines
    }

    /// Log lines that fit on screen.
    pub fn visible_line_count(&self) -> usize {
        self.visible_lines
    }

    /// Registered commands.
    pub fn commands(&self) -> &CommandTable<T> {
        &self.commands
    }

    /// Registered commands, for adding more.
    pub fn commands_mut(&mut self) -> &mut CommandTable<T> {
        &mut self.commands
    }

    /// Text typed so far.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Every log line, oldest first.
    pub fn log_lines(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.log.iter().map(String::as_str)
    }

    /// Number of log lines.
    pub fn log_len(&self) -> usize {
        self.log.len()
    }

    /// Lines currently in view, top to bottom.
    pub fn visible_log(&self) -> Vec<&str> {
        self.log
            .iter()
            .skip(self.scroll)
            .take(self.visible_lines)
            .map(String::as_str)
            .collect()
    }

    /// Lines appended since creation, counting ones since dropped or cleared.
    pub fn lines_logged(&self) -> u64 {
        self.logged
    }

    /// Index of the first line in view.
    pub fn scroll_position(&self) -> usize {
        self.scroll
    }

    /// Append a line, dropping the oldest once the log is full.
    pub fn add_log_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        debug!(target: "tessera_console::log", "{line}");
        if self.log.len() >= self.max_log_lines {
            self.log.pop_front();
        }
        self.log.push_back(line);
        self.logged += 1;
        if self.follow_tail {
            self.scroll = self.tail_position();
        } else {
            self.clamp_scroll();
        }
    }

    /// Drop every log line.
    pub fn clear_log(&mut self) {
        self.log.clear();
        self.scroll = 0;
        self.follow_tail = true;
    }

    /// Scroll towards older lines.
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
        self.follow_tail = self.scroll >= self.tail_position();
    }

    /// Scroll towards newer lines.
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_add(lines).min(self.tail_position());
        self.follow_tail = self.scroll >= self.tail_position();
    }

    /// Start sliding in.
    pub fn show(&mut self) {
        if !self.hiding {
            self.offset = -self.height;
        }
        self.active = true;
        self.hiding = false;
    }

    /// Start sliding out.
    pub fn hide(&mut self) {
        self.active = false;
        self.hiding = true;
    }

    /// Whether the console takes keyboard input.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the console is on screen at all, including while sliding out.
    pub fn is_active_or_hiding(&self) -> bool {
        self.active || self.hiding
    }

    /// Vertical position of the top edge: `0` when fully shown, `-height` when hidden.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Whether the input cursor is drawn this frame.
    pub fn cursor_visible(&self) -> bool {
        self.cursor_on && !self.hiding
    }

    /// Advance the slide animation and the cursor blink by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        if self.active {
            self.offset = (self.offset + SLIDE_SPEED * dt).min(0.0);
        } else if self.hiding {
            self.offset -= SLIDE_SPEED * dt;
            if self.offset <= -self.height {
                self.offset = -self.height;
                self.hiding = false;
            }
        }

        self.blink_timer += dt;
        if self.blink_timer > BLINK_PERIOD {
            self.cursor_on = !self.cursor_on;
            self.blink_timer = 0.0;
        }
    }

    /// Feed one typed character.
    ///
    /// Printable characters are appended. Enter executes and clears the line,
    /// Backspace removes the last character, and Escape clears a non-empty line or
    /// otherwise hides the console.
    ///
    /// Returns the outcome of the command when `c` submitted a line. Failures are
    /// already in the log.
    pub fn input(&mut self, c: char, target: &mut T) -> Option<Result<()>> {
        let mut executed = None;
        match c {
            ENTER | '\n' => {
                let line = std::mem::take(&mut self.buffer);
                executed = Some(self.execute(&line, target));
            }
            BACKSPACE => {
                self.buffer.pop();
            }
            ESCAPE => {
                if self.buffer.is_empty() {
                    self.hide();
                } else {
                    self.buffer.clear();
                }
            }
            c if !c.is_control() => self.buffer.push(c),
            _ => {}
        }
        self.blink_timer = 0.0;
        self.cursor_on = true;
        executed
    }

    /// Run `line`, logging the command, its output, and any error.
    ///
    /// `clear` is handled by the console itself and empties the log.
    pub fn execute(&mut self, line: &str, target: &mut T) -> Result<()> {
        self.add_log_line(format!("Executing: '{line}'"));
        if line.trim() == "clear" {
            self.clear_log();
            return Ok(());
        }
        match self.commands.execute(line, target) {
            Ok(output) => {
                for l in output {
                    self.add_log_line(l);
                }
                Ok(())
            }
            Err(err) => {
                warn!(%line, %err, "command failed");
                self.add_log_line(err.to_string());
                Err(err)
            }
        }
    }

    /// Draw the console across `width` pixels.
    pub fn draw(&self, painter: &mut dyn Painter, width: f64) {
        if !self.is_active_or_hiding() {
            return;
        }
        let area = Rect::new(0.0, self.offset, width, self.offset + self.height);
        painter.fill_rect(area, Color::rgba(0, 0, 0, 128));
        painter.stroke_rect(area, Color::RED, 1.0);

        let mut y = self.offset;
        for line in self.visible_log() {
            painter.text(Point::new(MARGIN, y), line, LOG_LINE_HEIGHT, Color::YELLOW);
            y += LOG_LINE_HEIGHT;
        }

        let input_y = self.offset + self.height - INPUT_AREA;
        let prompt = format!(": {}", self.buffer);
        painter.text(Point::new(MARGIN, input_y), &prompt, INPUT_TEXT_SIZE, Color::WHITE);
        if self.cursor_visible() {
            // Monospace estimate; the backend owns real text metrics.
            let x = MARGIN + prompt.chars().count() as f64 * INPUT_TEXT_SIZE * 0.5 + 4.0;
            painter.fill_rect(
                Rect::new(x, input_y + 6.0, x + 2.0, input_y + 23.0),
                Color::WHITE,
            );
        }
    }

    fn tail_position(&self) -> usize {
        self.log.len().saturating_sub(self.visible_lines)
    }

    fn clamp_scroll(&mut self) {
        if self.follow_tail {
            self.scroll = self.tail_position();
        } else {
            self.scroll = self.scroll.min(self.tail_position());
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Line counts are small positive numbers."
)]
fn lines_for_height(height: f64) -> usize {
    ((height - INPUT_AREA) / LOG_LINE_HEIGHT + 0.5).max(1.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Args, CommandTable};
    use crate::error::CommandError;
    use tessera_ui::DisplayList;

    fn echo(args: &Args, calls: &mut u32) -> Result<Vec<String>> {
        *calls += 1;
        Ok(vec![args.rest(0)])
    }

    fn console() -> Console<u32> {
        let mut table = CommandTable::new();
        table.register("echo", "echo [text]", "print text", echo);
        Console::new(table)
    }

    fn type_line(c: &mut Console<u32>, line: &str, target: &mut u32) {
        for ch in line.chars() {
            c.input(ch, target);
        }
    }

    #[test]
    fn enter_executes_and_logs() {
        let mut c = console();
        let mut calls = 0;
        type_line(&mut c, "echo hi there\r", &mut calls);
        assert_eq!(calls, 1);
        assert_eq!(c.buffer(), "");
        assert_eq!(
            c.log_lines().collect::<Vec<_>>(),
            vec!["Executing: 'echo hi there'", "hi there"]
        );
    }

    #[test]
    fn input_reports_submitted_outcome() {
        let mut c = console();
        let mut calls = 0;
        assert!(c.input('x', &mut calls).is_none());
        c.input(BACKSPACE, &mut calls);
        type_line(&mut c, "echo ok", &mut calls);
        assert!(matches!(c.input(ENTER, &mut calls), Some(Ok(()))));
        type_line(&mut c, "nope", &mut calls);
        assert!(matches!(
            c.input(ENTER, &mut calls),
            Some(Err(CommandError::Unknown(_)))
        ));
    }

    #[test]
    fn unknown_command_is_logged() {
        let mut c = console();
        let mut calls = 0;
        let err = c.execute("nope 1", &mut calls).unwrap_err();
        assert!(matches!(err, CommandError::Unknown(_)));
        assert_eq!(c.log_lines().last(), Some("Unknown command 'nope'"));
    }

    #[test]
    fn backspace_and_control_characters() {
        let mut c = console();
        let mut calls = 0;
        type_line(&mut c, "ab\u{8}\u{8}\u{8}x\u{7}", &mut calls);
        assert_eq!(c.buffer(), "x");
    }

    #[test]
    fn escape_clears_then_hides() {
        let mut c = console();
        let mut calls = 0;
        c.show();
        type_line(&mut c, "abc\u{1b}", &mut calls);
        assert_eq!(c.buffer(), "");
        assert!(c.is_active());
        c.input(ESCAPE, &mut calls);
        assert!(!c.is_active());
        assert!(c.is_active_or_hiding());
    }

    #[test]
    fn log_is_bounded() {
        let mut c = console().with_max_log_lines(3);
        for i in 0..5 {
            c.add_log_line(format!("line {i}"));
        }
        assert_eq!(
            c.log_lines().collect::<Vec<_>>(),
            vec!["line 2", "line 3", "line 4"]
        );
        assert_eq!(c.lines_logged(), 5);
        c.clear_log();
        assert_eq!(c.lines_logged(), 5);
        assert_eq!(console().max_log_lines(), DEFAULT_MAX_LOG_LINES);
    }

    #[test]
    fn view_follows_tail_until_scrolled_up() {
        let mut c = console();
        c.set_height(INPUT_AREA + 3.0 * LOG_LINE_HEIGHT);
        assert_eq!(c.visible_line_count(), 3);
        for i in 0..10 {
            c.add_log_line(format!("{i}"));
        }
        assert_eq!(c.visible_log(), vec!["7", "8", "9"]);

        c.scroll_up(2);
        c.add_log_line("10");
        assert_eq!(c.visible_log(), vec!["5", "6", "7"]);

        c.scroll_down(100);
        assert_eq!(c.visible_log(), vec!["8", "9", "10"]);
        c.add_log_line("11");
        assert_eq!(c.visible_log(), vec!["9", "10", "11"]);
    }

    #[test]
    fn clear_is_builtin() {
        let mut c = console();
        let mut calls = 0;
        c.add_log_line("old");
        c.execute("clear", &mut calls).unwrap();
        assert_eq!(c.log_len(), 0);
        assert_eq!(calls, 0);
    }

    #[test]
    fn slide_animation_and_blink() {
        let mut c = console();
        assert_eq!(c.offset(), -DEFAULT_HEIGHT);
        c.show();
        c.update(0.1);
        assert_eq!(c.offset(), -DEFAULT_HEIGHT + 100.0);
        c.update(1.0);
        assert_eq!(c.offset(), 0.0);

        c.hide();
        assert!(!c.cursor_visible());
        c.update(0.2);
        assert!(c.is_active_or_hiding());
        c.update(1.0);
        assert!(!c.is_active_or_hiding());
        assert_eq!(c.offset(), -DEFAULT_HEIGHT);

        c.show();
        let on = c.cursor_visible();
        c.update(BLINK_PERIOD + 0.01);
        assert_ne!(c.cursor_visible(), on);
    }

    #[test]
    fn hidden_console_draws_nothing() {
        let mut c = console();
        let mut list = DisplayList::new();
        c.draw(&mut list, 1920.0);
        assert!(list.is_empty());
        c.show();
        c.add_log_line("hello");
        c.draw(&mut list, 1920.0);
        assert!(list.texts().any(|t| t == "hello"));
        assert!(list.texts().any(|t| t == ": "));
    }
}
