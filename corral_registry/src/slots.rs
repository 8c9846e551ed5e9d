// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generational slot storage backing the registry.

use alloc::vec::Vec;

/// Slots addressed by `(index, generation)`.
///
/// A freed slot keeps its last generation; reusing it increments the generation
/// so handles to the previous occupant stay stale.
#[derive(Clone, Debug)]
pub(crate) struct Slots<T> {
    entries: Vec<Option<T>>,
    generations: Vec<u32>, // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }
}

impl<T> Slots<T> {
    /// The handle the next [`Slots::insert`] will return.
    pub(crate) fn vacant(&self) -> (u32, u32) {
        match self.free_list.last() {
            Some(&idx) => (to_u32(idx), self.generations[idx].saturating_add(1)),
            None => (to_u32(self.entries.len()), 1),
        }
    }

    /// Handles that successive inserts will return, in order.
    pub(crate) fn upcoming(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let reused = self
            .free_list
            .iter()
            .rev()
            .map(|&idx| (to_u32(idx), self.generations[idx].saturating_add(1)));
        let fresh = (self.entries.len()..).map(|idx| (to_u32(idx), 1));
        reused.chain(fresh)
    }

    /// Store `value` and return its handle.
    pub(crate) fn insert(&mut self, value: T) -> (u32, u32) {
        if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.entries[idx] = Some(value);
            (to_u32(idx), generation)
        } else {
            let generation = 1_u32;
            self.entries.push(Some(value));
            self.generations.push(generation);
            (to_u32(self.entries.len() - 1), generation)
        }
    }

    /// Remove the value at a live handle.
    pub(crate) fn remove(&mut self, idx: u32, generation: u32) -> Option<T> {
        if !self.is_alive(idx, generation) {
            return None;
        }
        let idx = idx as usize;
        self.free_list.push(idx);
        self.entries[idx].take()
    }

    pub(crate) fn is_alive(&self, idx: u32, generation: u32) -> bool {
        self.entries
            .get(idx as usize)
            .is_some_and(|e| e.is_some() && self.generations[idx as usize] == generation)
    }

    pub(crate) fn get(&self, idx: u32, generation: u32) -> Option<&T> {
        if !self.is_alive(idx, generation) {
            return None;
        }
        self.entries[idx as usize].as_ref()
    }

    pub(crate) fn get_mut(&mut self, idx: u32, generation: u32) -> Option<&mut T> {
        if !self.is_alive(idx, generation) {
            return None;
        }
        self.entries[idx as usize].as_mut()
    }

    /// Live values in slot order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().filter_map(Option::as_ref)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len() - self.free_list.len()
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Entity ids carry 32-bit slot indices."
)]
fn to_u32(idx: usize) -> u32 {
    idx as u32
}
