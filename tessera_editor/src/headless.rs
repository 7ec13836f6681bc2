// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line-driven sessions without a window: scripts and stdin.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::editor::Editor;

/// Run console commands read from `input`, writing every new log line to `output`.
///
/// Blank lines and lines starting with `#` are skipped. `quit` or `exit` ends the
/// session early. Command failures are reported through the log and do not stop
/// the session; only I/O errors on `input` or `output` do.
pub fn run_headless<R: BufRead, W: Write>(
    editor: &mut Editor,
    input: R,
    mut output: W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            debug!("headless session ended by {line}");
            break;
        }

        let before = editor.console().lines_logged();
        // Errors land in the log, which is echoed below.
        let _ = editor.run_command(line);
        let added = editor.console().lines_logged() - before;
        let shown = usize::try_from(added)
            .unwrap_or(usize::MAX)
            .min(editor.console().log_len());
        let skip = editor.console().log_len() - shown;
        for l in editor.console().log_lines().skip(skip) {
            writeln!(output, "{l}")?;
        }
        output.flush()?;
    }
    Ok(())
}
