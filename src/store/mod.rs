//! Item store - the canonical flat sequence of comments and replies.
//!
//! The store owns every item. Callers get positions and clones back, never
//! references that outlive a mutation. Positions are always re-derived from
//! the current sequence; nothing here caches an index across calls.
//!
//! # Invariants
//!
//! - Ids are unique within the sequence.
//! - An expanded comment is followed by exactly `reply_count` replies
//!   parented to it; a collapsed comment is followed by none of its own.
//! - `expand`/`collapse` either apply completely or leave the sequence
//!   untouched.

use crate::model::{Item, ItemId, ListError, SeedEntry, SeedKind};
use std::collections::HashSet;
use std::ops::Range;
use tracing::{debug, trace};

/// Result direction of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleDirection {
    /// Replies were inserted.
    Expanded,
    /// Replies were removed.
    Collapsed,
}

/// Outcome of [`ItemStore::toggle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggled {
    pub direction: ToggleDirection,
    /// Ascending positions inserted or removed.
    pub changed: Vec<usize>,
}

/// Owner of the flat comment/reply sequence.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    /// Build the sequence from seed entries. Nothing starts expanded.
    ///
    /// Entries without an id get a fresh one.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidSeed`] if an entry has an empty id or two entries
    /// share an id.
    pub fn initialize(seed: &[SeedEntry]) -> Result<Self, ListError> {
        let mut seen = HashSet::with_capacity(seed.len());
        let mut items = Vec::with_capacity(seed.len());

        for (position, entry) in seed.iter().enumerate() {
            let id = match &entry.id {
                Some(raw) => ItemId::new(raw.as_str()).map_err(|e| {
                    ListError::invalid_seed(format!("entry {}: {}", position, e))
                })?,
                None => ItemId::fresh(),
            };

            if !seen.insert(id.clone()) {
                return Err(ListError::invalid_seed(format!(
                    "entry {}: duplicate id {}",
                    position, id
                )));
            }

            items.push(match entry.kind {
                SeedKind::Comment => Item::comment(id, entry.has_replies, entry.reply_count),
                SeedKind::Reply => Item::reply(id, None),
            });
        }

        debug!(items = items.len(), "Item store initialized");
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at a position, if any.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Current position of the item with this id.
    ///
    /// # Errors
    ///
    /// [`ListError::ItemNotFound`] if no such item is present, including
    /// replies removed by an earlier collapse.
    pub fn locate(&self, id: &ItemId) -> Result<usize, ListError> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| ListError::ItemNotFound(id.clone()))
    }

    /// Materialize the reply block of a collapsed comment.
    ///
    /// Returns the ascending positions of the inserted replies. Expanding an
    /// already expanded comment is a no-op returning no positions.
    ///
    /// # Errors
    ///
    /// [`ListError::ItemNotFound`], or [`ListError::NotExpandable`] for
    /// replies and comments without available replies.
    pub fn expand(&mut self, id: &ItemId) -> Result<Vec<usize>, ListError> {
        let parent = self.locate_expandable(id)?;
        let Some(state) = self.items[parent].comment_state_mut() else {
            return Err(ListError::NotExpandable(id.clone()));
        };
        if state.is_expanded {
            trace!(%id, "Expand ignored, already expanded");
            return Ok(Vec::new());
        }
        state.is_expanded = true;
        let count = state.reply_count;

        let block = reply_block(parent, count);
        self.items.splice(
            block.start..block.start,
            (0..count).map(|_| Item::reply(ItemId::fresh(), Some(id.clone()))),
        );

        debug!(%id, parent, count, "Replies expanded");
        Ok(block.collect())
    }

    /// Remove the reply block of an expanded comment.
    ///
    /// Returns the ascending positions the replies occupied. Collapsing an
    /// already collapsed comment is a no-op returning no positions.
    ///
    /// # Errors
    ///
    /// Same as [`ItemStore::expand`], plus [`ListError::BrokenReplyBlock`] if
    /// the rows after the comment are not its reply block.
    pub fn collapse(&mut self, id: &ItemId) -> Result<Vec<usize>, ListError> {
        let parent = self.locate_expandable(id)?;
        let (expanded, count) = match self.items[parent].comment_state() {
            Some(state) => (state.is_expanded, state.reply_count),
            None => return Err(ListError::NotExpandable(id.clone())),
        };
        if !expanded {
            trace!(%id, "Collapse ignored, already collapsed");
            return Ok(Vec::new());
        }

        let block = reply_block(parent, count);
        let intact = self
            .items
            .get(block.clone())
            .is_some_and(|rows| rows.iter().all(|row| row.is_reply_of(id)));
        if !intact {
            return Err(ListError::BrokenReplyBlock(id.clone()));
        }

        self.items.drain(block.clone());
        if let Some(state) = self.items[parent].comment_state_mut() {
            state.is_expanded = false;
        }

        debug!(%id, parent, count, "Replies collapsed");
        Ok(block.collect())
    }

    /// Expand a collapsed comment or collapse an expanded one.
    pub fn toggle(&mut self, id: &ItemId) -> Result<Toggled, ListError> {
        let index = self.locate(id)?;
        if self.items[index].is_expanded() {
            Ok(Toggled {
                direction: ToggleDirection::Collapsed,
                changed: self.collapse(id)?,
            })
        } else {
            Ok(Toggled {
                direction: ToggleDirection::Expanded,
                changed: self.expand(id)?,
            })
        }
    }

    /// Position of a comment that can carry replies.
    fn locate_expandable(&self, id: &ItemId) -> Result<usize, ListError> {
        let index = self.locate(id)?;
        match self.items[index].comment_state() {
            Some(state) if state.has_replies_available => Ok(index),
            _ => Err(ListError::NotExpandable(id.clone())),
        }
    }
}

/// Positions occupied by a reply block of `count` rows after `parent`.
///
/// Empty when `count == 0`. Shared by insertion and removal since the block
/// always sits directly after its parent.
fn reply_block(parent: usize, count: usize) -> Range<usize> {
    parent + 1..parent + 1 + count
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
