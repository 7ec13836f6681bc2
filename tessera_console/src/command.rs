// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command lines, handlers, and the table that dispatches between them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{CommandError, Result};

/// A tokenized command line.
///
/// Tokens are separated by whitespace. Double quotes group a token that contains
/// spaces; the quotes themselves are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Args {
    name: String,
    params: Vec<String>,
}

impl Args {
    /// Tokenize `line`. Returns `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = tokenize(line).into_iter();
        let name = tokens.next()?;
        Some(Self {
            name,
            params: tokens.collect(),
        })
    }

    /// Command name, the first token.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters after the name.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// True when only the name was given.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parameter `i`, if present.
    pub fn get(&self, i: usize) -> Option<&str> {
        self.params.get(i).map(String::as_str)
    }

    /// Fail with [`CommandError::TooFewParameters`] unless at least `n` parameters exist.
    pub fn require(&self, n: usize, usage: &'static str) -> Result<()> {
        if self.params.len() < n {
            return Err(CommandError::TooFewParameters { usage });
        }
        Ok(())
    }

    /// Parse parameter `i`.
    pub fn parse_at<T>(&self, i: usize, what: &'static str, usage: &'static str) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let raw = self
            .get(i)
            .ok_or(CommandError::TooFewParameters { usage })?;
        raw.parse().map_err(|e: T::Err| CommandError::InvalidArgument {
            what,
            value: raw.to_owned(),
            reason: e.to_string(),
        })
    }

    /// Parameters from `i` on, joined by single spaces.
    pub fn rest(&self, i: usize) -> String {
        self.params.get(i..).map(|p| p.join(" ")).unwrap_or_default()
    }
}

fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;
    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if c.is_whitespace() && !quoted => {
                if pending {
                    tokens.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if pending {
        tokens.push(current);
    }
    tokens
}

/// Handler signature: parsed line and command target in, log lines out.
pub type CommandFn<T> = fn(&Args, &mut T) -> Result<Vec<String>>;

/// A registered command.
pub struct Command<T> {
    /// Usage line, for example `save [path]`.
    pub usage: &'static str,
    /// One-line description.
    pub help: &'static str,
    /// Handler.
    pub run: CommandFn<T>,
}

impl<T> Clone for Command<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Command<T> {}

impl<T> fmt::Debug for Command<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("usage", &self.usage)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

/// Name → command mapping for targets of type `T`.
pub struct CommandTable<T> {
    commands: BTreeMap<String, Command<T>>,
}

impl<T> Default for CommandTable<T> {
    fn default() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }
}

impl<T> Clone for CommandTable<T> {
    fn clone(&self) -> Self {
        Self {
            commands: self.commands.clone(),
        }
    }
}

impl<T> fmt::Debug for CommandTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.commands.iter()).finish()
    }
}

impl<T> CommandTable<T> {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `run` under `name`, replacing any previous command of that name.
    pub fn register(
        &mut self,
        name: &str,
        usage: &'static str,
        help: &'static str,
        run: CommandFn<T>,
    ) -> &mut Self {
        self.commands
            .insert(name.to_owned(), Command { usage, help, run });
        self
    }

    /// Command registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Command<T>> {
        self.commands.get(name)
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.keys().map(String::as_str)
    }

    /// `usage - help` lines in name order.
    pub fn help_lines(&self) -> Vec<String> {
        self.commands
            .values()
            .map(|c| format!("{} - {}", c.usage, c.help))
            .collect()
    }

    /// Parse `line` and run the matching command. Blank lines do nothing.
    pub fn execute(&self, line: &str, target: &mut T) -> Result<Vec<String>> {
        let Some(args) = Args::parse(line) else {
            return Ok(Vec::new());
        };
        self.dispatch(&args, target)
    }

    /// Run an already parsed line.
    pub fn dispatch(&self, args: &Args, target: &mut T) -> Result<Vec<String>> {
        let command = self
            .commands
            .get(args.name())
            .ok_or_else(|| CommandError::Unknown(args.name().to_owned()))?;
        debug!(name = args.name(), params = args.len(), "running command");
        (command.run)(args, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizer_handles_quotes_and_spacing() {
        assert_eq!(tokenize("  a   b  "), vec!["a", "b"]);
        assert_eq!(tokenize(r#"name "Big Cave" x"#), vec!["name", "Big Cave", "x"]);
        assert_eq!(tokenize(r#"set """#), vec!["set", ""]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn args_accessors() {
        let a = Args::parse("new 100 200 My Map").unwrap();
        assert_eq!(a.name(), "new");
        assert_eq!(a.len(), 4);
        assert_eq!(a.rest(2), "My Map");
        assert_eq!(a.rest(9), "");
        assert_eq!(a.parse_at::<i32>(0, "width", "new").unwrap(), 100);
        assert!(matches!(
            a.parse_at::<i32>(2, "height", "new"),
            Err(CommandError::InvalidArgument { what: "height", .. })
        ));
        assert!(matches!(
            a.require(5, "new <w> <h>"),
            Err(CommandError::TooFewParameters { .. })
        ));
        assert!(Args::parse("").is_none());
    }

    fn add(args: &Args, total: &mut i32) -> Result<Vec<String>> {
        let n: i32 = args.parse_at(0, "amount", "add <n>")?;
        *total += n;
        Ok(vec![format!("total = {total}")])
    }

    #[test]
    fn table_dispatches_by_name() {
        let mut table = CommandTable::new();
        table.register("add", "add <n>", "adds n", add);
        let mut total = 1;
        assert_eq!(
            table.execute("add 41", &mut total).unwrap(),
            vec!["total = 42"]
        );
        assert_eq!(total, 42);
        assert!(table.execute("", &mut total).unwrap().is_empty());
        let err = table.execute("sub 1", &mut total).unwrap_err();
        assert_eq!(err.to_string(), "Unknown command 'sub'");
        assert_eq!(table.help_lines(), vec!["add <n> - adds n"]);
    }
}
