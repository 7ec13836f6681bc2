// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered set of available block textures.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// Block ids with display names, ordered by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockPalette {
    entries: BTreeMap<i32, String>,
}

impl BlockPalette {
    /// Empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or rename an entry, returning the previous name.
    pub fn insert(&mut self, id: i32, name: impl Into<String>) -> Option<String> {
        self.entries.insert(id, name.into())
    }

    /// Whether `id` is available.
    pub fn contains(&self, id: i32) -> bool {
        self.entries.contains_key(&id)
    }

    /// Display name of `id`.
    pub fn name(&self, id: i32) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Smallest id.
    pub fn first(&self) -> Option<i32> {
        self.entries.keys().next().copied()
    }

    /// Largest id.
    pub fn last(&self) -> Option<i32> {
        self.entries.keys().next_back().copied()
    }

    /// Smallest id greater than `id`.
    pub fn next(&self, id: i32) -> Option<i32> {
        let start = id.checked_add(1)?;
        self.entries.range(start..).next().map(|(&k, _)| k)
    }

    /// Largest id smaller than `id`.
    pub fn prev(&self, id: i32) -> Option<i32> {
        self.entries.range(..id).next_back().map(|(&k, _)| k)
    }

    /// Entries in id order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (i32, &str)> + '_ {
        self.entries.iter().map(|(&k, v)| (k, v.as_str()))
    }

    /// Up to `count` ids starting at `start` (inclusive) in id order.
    pub fn window(&self, start: i32, count: usize) -> impl Iterator<Item = i32> + '_ {
        self.entries.range(start..).map(|(&k, _)| k).take(count)
    }
}

impl<S: Into<String>> FromIterator<(i32, S)> for BlockPalette {
    fn from_iter<I: IntoIterator<Item = (i32, S)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}
