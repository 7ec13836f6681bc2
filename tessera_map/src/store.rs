// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena owning every placed block of a document.

use crate::block::{Block, BlockId};

#[derive(Clone, Debug)]
struct Entry {
    generation: u32,
    block: Block,
}

/// Canonical collection of placed blocks.
///
/// Blocks are owned by value in slots addressed by [`BlockId`]. Iteration follows
/// insertion order, which is also the serialization order, independently of slot
/// reuse.
#[derive(Clone, Debug, Default)]
pub struct BlockStore {
    slots: Vec<Option<Entry>>,
    generations: Vec<u32>, // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    order: Vec<BlockId>,
}

impl BlockStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `n` blocks.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            slots: Vec::with_capacity(n),
            generations: Vec::with_capacity(n),
            free_list: Vec::new(),
            order: Vec::with_capacity(n),
        }
    }

    /// Append a block and return its handle.
    pub fn add(&mut self, block: Block) -> BlockId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(Entry { generation, block });
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(Entry { generation, block }));
            self.generations.push(generation);
            (self.slots.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "BlockId uses 32-bit slot indices by design."
        )]
        let id = BlockId::new(idx as u32, generation);
        self.order.push(id);
        id
    }

    /// Remove a block, returning it. Unknown or stale handles yield `None`.
    pub fn remove(&mut self, id: BlockId) -> Option<Block> {
        self.get(id)?;
        let entry = self.slots[id.idx()].take()?;
        self.free_list.push(id.idx());
        if let Some(pos) = self.order.iter().position(|&o| o == id) {
            self.order.remove(pos);
        }
        Some(entry.block)
    }

    /// Look up a live block.
    pub fn get(&self, id: BlockId) -> Option<&Block> {
        let e = self.slots.get(id.idx())?.as_ref()?;
        (e.generation == id.generation()).then_some(&e.block)
    }

    /// Whether `id` refers to a live block.
    pub fn contains(&self, id: BlockId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live blocks.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when the store holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Drop every block. Previously issued handles become stale.
    pub fn clear(&mut self) {
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if slot.take().is_some() {
                self.free_list.push(idx);
            }
        }
        self.order.clear();
    }

    /// Iterate over `(handle, block)` pairs in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (BlockId, &Block)> + '_ {
        // `order` only ever holds live handles.
        self.order.iter().filter_map(|&id| {
            let e = self.slots.get(id.idx())?.as_ref()?;
            Some((id, &e.block))
        })
    }

    /// Iterate over blocks in insertion order.
    pub fn blocks(&self) -> impl DoubleEndedIterator<Item = &Block> + '_ {
        self.iter().map(|(_, b)| b)
    }
}
