// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Console commands operating on a [`MapDocument`].

use tessera_map::MapDocument;
use tracing::info;

use crate::command::{Args, CommandTable};
use crate::error::{CommandError, Result};

/// Largest width or height `new` accepts.
pub const MAX_MAP_DIMENSION: i32 = 1_000_000;

/// Name given to maps created without one.
pub const DEFAULT_MAP_NAME: &str = "MapTitle";

/// Author given to maps created without one.
pub const DEFAULT_AUTHOR: &str = "DefaultAuthor";

const UNSAVED: &str = "Map hasn't been saved";

/// Every map command, ready to hand to a [`Console`](crate::Console).
pub fn map_commands() -> CommandTable<MapDocument> {
    let mut table = CommandTable::new();
    table
        .register("help", "help", "list commands", help)
        .register(
            "new",
            "new <width> <height> [name] [author]",
            "create an empty map; refuses to discard unsaved changes",
            new,
        )
        .register(
            "new!",
            "new! <width> <height> [name] [author]",
            "create an empty map, discarding unsaved changes",
            new_forced,
        )
        .register(
            "load",
            "load <path>",
            "load a map file; refuses to discard unsaved changes",
            load,
        )
        .register(
            "load!",
            "load! <path>",
            "load a map file, discarding unsaved changes",
            load_forced,
        )
        .register(
            "save",
            "save [path]",
            "save to the current filename or to path",
            save,
        )
        .register("name", "name [text]", "show or set the map name", name)
        .register("author", "author [text]", "show or set the map author", author)
        .register(
            "filename",
            "filename [path]",
            "show or set the filename (without .map)",
            filename,
        )
        .register("info", "info", "show map metadata", map_info);
    table
}

fn help(_: &Args, _: &mut MapDocument) -> Result<Vec<String>> {
    let mut lines = vec![String::from("Commands:")];
    lines.extend(map_commands().help_lines().into_iter().map(|l| format!("  {l}")));
    lines.push(String::from("  clear - clear the console log"));
    Ok(lines)
}

fn guard_unsaved(doc: &MapDocument, forced_name: &str) -> Result<()> {
    if doc.is_ready() && !doc.is_saved() {
        return Err(CommandError::Refused(format!(
            "{UNSAVED}, use '{forced_name}' to discard changes"
        )));
    }
    Ok(())
}

fn new(args: &Args, doc: &mut MapDocument) -> Result<Vec<String>> {
    guard_unsaved(doc, "new!")?;
    create(args, doc, "new <width> <height> [name] [author]")
}

fn new_forced(args: &Args, doc: &mut MapDocument) -> Result<Vec<String>> {
    create(args, doc, "new! <width> <height> [name] [author]")
}

fn create(args: &Args, doc: &mut MapDocument, usage: &'static str) -> Result<Vec<String>> {
    args.require(2, usage)?;
    let width = dimension(args, 0, "width", usage)?;
    let height = dimension(args, 1, "height", usage)?;
    let name = args.get(2).unwrap_or(DEFAULT_MAP_NAME);
    let author = args.get(3).unwrap_or(DEFAULT_AUTHOR);
    doc.create_new(width, height, name, author);
    Ok(vec![format!(
        "Created map '{name}' by '{author}' ({width}x{height})"
    )])
}

fn dimension(args: &Args, i: usize, what: &'static str, usage: &'static str) -> Result<i32> {
    let v: i32 = args.parse_at(i, what, usage)?;
    if !(1..=MAX_MAP_DIMENSION).contains(&v) {
        return Err(CommandError::InvalidArgument {
            what,
            value: v.to_string(),
            reason: format!("must be between 1 and {MAX_MAP_DIMENSION}"),
        });
    }
    Ok(v)
}

fn load(args: &Args, doc: &mut MapDocument) -> Result<Vec<String>> {
    guard_unsaved(doc, "load!")?;
    load_forced(args, doc)
}

fn load_forced(args: &Args, doc: &mut MapDocument) -> Result<Vec<String>> {
    args.require(1, "load <path>")?;
    let path = args.rest(0);
    doc.load_map(&path)?;
    Ok(vec![format!(
        "Loaded '{}' by '{}' ({}x{}, {} blocks)",
        doc.name(),
        doc.author(),
        doc.width(),
        doc.height(),
        doc.block_count()
    )])
}

fn save(args: &Args, doc: &mut MapDocument) -> Result<Vec<String>> {
    if args.is_empty() {
        doc.save_map()?;
    } else {
        doc.save_map_as(args.rest(0))?;
    }
    let path = doc
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    info!(%path, "map saved from console");
    Ok(vec![format!("Saved {} blocks to '{path}'", doc.block_count())])
}

fn name(args: &Args, doc: &mut MapDocument) -> Result<Vec<String>> {
    if !args.is_empty() {
        doc.set_name(&args.rest(0));
    }
    Ok(vec![format!("Name: {}", doc.name())])
}

fn author(args: &Args, doc: &mut MapDocument) -> Result<Vec<String>> {
    if !args.is_empty() {
        doc.set_author(&args.rest(0));
    }
    Ok(vec![format!("Author: {}", doc.author())])
}

fn filename(args: &Args, doc: &mut MapDocument) -> Result<Vec<String>> {
    if !args.is_empty() {
        doc.set_filename(&args.rest(0));
    }
    Ok(vec![format!("Filename: {}", doc.filename())])
}

fn map_info(_: &Args, doc: &mut MapDocument) -> Result<Vec<String>> {
    if !doc.is_ready() {
        return Ok(vec![String::from("No map. Use 'new' or 'load'.")]);
    }
    Ok(vec![
        format!("Name: {}", doc.name()),
        format!("Author: {}", doc.author()),
        format!("Size: {}x{}", doc.width(), doc.height()),
        format!("Blocks: {}", doc.block_count()),
        format!("Filename: {}", doc.filename()),
        format!("Saved: {}", if doc.is_saved() { "yes" } else { "no" }),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(doc: &mut MapDocument, line: &str) -> Result<Vec<String>> {
        map_commands().execute(line, doc)
    }

    #[test]
    fn new_validates_parameters() {
        let mut doc = MapDocument::new();
        let err = run(&mut doc, "new 100").unwrap_err();
        assert!(err.to_string().starts_with("Too few parameters"));
        assert!(matches!(
            run(&mut doc, "new 0 100"),
            Err(CommandError::InvalidArgument { what: "width", .. })
        ));
        assert!(matches!(
            run(&mut doc, "new 100 abc"),
            Err(CommandError::InvalidArgument { what: "height", .. })
        ));
        assert!(!doc.is_ready());

        run(&mut doc, "new 3000 2000").unwrap();
        assert_eq!((doc.width(), doc.height()), (3000, 2000));
        assert_eq!(doc.name(), DEFAULT_MAP_NAME);
        assert_eq!(doc.author(), DEFAULT_AUTHOR);
    }

    #[test]
    fn new_refuses_to_discard_unsaved_map() {
        let mut doc = MapDocument::new();
        run(&mut doc, r#"new 500 500 "Old Map" Bob"#).unwrap();
        assert_eq!(doc.name(), "Old Map");
        doc.add_block(1.0, 1.0, 0.0, 1);

        let err = run(&mut doc, "new 100 100").unwrap_err();
        assert!(err.to_string().starts_with("Map hasn't been saved"));
        assert_eq!(doc.block_count(), 1);

        run(&mut doc, "new! 100 100 Fresh").unwrap();
        assert_eq!(doc.block_count(), 0);
        assert_eq!(doc.name(), "Fresh");
    }

    #[test]
    fn metadata_commands_show_and_set() {
        let mut doc = MapDocument::new();
        run(&mut doc, "new 10 10").unwrap();
        assert_eq!(run(&mut doc, "name Big Cave").unwrap(), vec!["Name: Big Cave"]);
        assert_eq!(run(&mut doc, "author").unwrap(), vec!["Author: DefaultAuthor"]);
        assert_eq!(
            run(&mut doc, "filename maps/cave").unwrap(),
            vec!["Filename: maps/cave"]
        );
        let info = run(&mut doc, "info").unwrap();
        assert!(info.contains(&String::from("Size: 10x10")));
        assert!(info.contains(&String::from("Saved: no")));
    }

    #[test]
    fn save_without_filename_reports_error() {
        let mut doc = MapDocument::new();
        run(&mut doc, "new 10 10").unwrap();
        let err = run(&mut doc, "save").unwrap_err();
        assert_eq!(err.to_string(), "map has no filename");
    }

    #[test]
    fn help_lists_every_command() {
        let mut doc = MapDocument::new();
        let lines = run(&mut doc, "help").unwrap();
        for name in map_commands().names() {
            assert!(
                lines.iter().any(|l| l.trim_start().starts_with(name)),
                "help is missing {name}"
            );
        }
        assert!(lines.iter().any(|l| l.contains("clear")));
    }
}
