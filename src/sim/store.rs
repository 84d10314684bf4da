//! Ordered collection of live blocks
//!
//! Every structural change (push, remove, retain) marks all index offsets
//! stale. Only a mesh build assigns them again.

use super::block::Block;

#[derive(Debug, Clone, Default)]
pub struct BlockStore {
    blocks: Vec<Block>,
}

impl BlockStore {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn as_slice(&self) -> &[Block] {
        &self.blocks
    }

    /// Index of the block closest to the viewer (minimum z).
    /// Ties resolve to the earliest block in store order.
    pub fn nearest(&self) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, block) in self.blocks.iter().enumerate() {
            match best {
                Some((_, z)) if block.position.z >= z => {}
                _ => best = Some((i, block.position.z)),
            }
        }
        best.map(|(i, _)| i)
    }

    pub(crate) fn push(&mut self, block: Block) {
        self.invalidate_offsets();
        self.blocks.push(block);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<Block> {
        if index >= self.blocks.len() {
            return None;
        }
        self.invalidate_offsets();
        Some(self.blocks.remove(index))
    }

    /// Keep blocks matching `keep`; returns how many were removed
    pub(crate) fn retain(&mut self, keep: impl FnMut(&Block) -> bool) -> usize {
        let before = self.blocks.len();
        self.blocks.retain(keep);
        let removed = before - self.blocks.len();
        if removed > 0 {
            self.invalidate_offsets();
        }
        removed
    }

    pub(crate) fn clear(&mut self) {
        self.blocks.clear();
    }

    /// Non-structural mutation (motion, rotation); offsets stay valid
    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Block> {
        self.blocks.iter_mut()
    }

    fn invalidate_offsets(&mut self) {
        for block in &mut self.blocks {
            block.invalidate_offset();
        }
    }
}

impl<'a> IntoIterator for &'a BlockStore {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
