//! Items of the flat comment list.

use crate::model::identifiers::ItemId;

/// Expansion state carried by top-level comments only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentState {
    /// Whether the reply block is currently materialized below the comment.
    pub is_expanded: bool,
    /// When `false` the comment never offers an expand affordance.
    pub has_replies_available: bool,
    /// Number of replies materialized on expand.
    pub reply_count: usize,
}

impl CommentState {
    /// Collapsed state for a new comment.
    pub fn new(has_replies_available: bool, reply_count: usize) -> Self {
        Self {
            is_expanded: false,
            has_replies_available,
            reply_count,
        }
    }
}

/// What kind of row an item is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// Top-level comment.
    Comment(CommentState),
    /// Reply row. Replies never own further replies.
    Reply {
        /// Comment whose expansion materialized this reply.
        /// `None` for replies that were part of the initial list.
        parent: Option<ItemId>,
    },
}

/// One row of the flat sequence.
///
/// Equality is identity: two items are equal iff their ids are equal.
#[derive(Debug, Clone)]
pub struct Item {
    id: ItemId,
    kind: ItemKind,
}

impl Item {
    /// New collapsed comment.
    pub fn comment(id: ItemId, has_replies_available: bool, reply_count: usize) -> Self {
        Self {
            id,
            kind: ItemKind::Comment(CommentState::new(has_replies_available, reply_count)),
        }
    }

    /// New reply, optionally attached to the comment that materialized it.
    pub fn reply(id: ItemId, parent: Option<ItemId>) -> Self {
        Self {
            id,
            kind: ItemKind::Reply { parent },
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// Comment state, or `None` for replies.
    pub fn comment_state(&self) -> Option<&CommentState> {
        match &self.kind {
            ItemKind::Comment(state) => Some(state),
            ItemKind::Reply { .. } => None,
        }
    }

    pub(crate) fn comment_state_mut(&mut self) -> Option<&mut CommentState> {
        match &mut self.kind {
            ItemKind::Comment(state) => Some(state),
            ItemKind::Reply { .. } => None,
        }
    }

    pub fn is_reply(&self) -> bool {
        matches!(self.kind, ItemKind::Reply { .. })
    }

    /// True only for comments whose reply block is materialized.
    pub fn is_expanded(&self) -> bool {
        self.comment_state().is_some_and(|state| state.is_expanded)
    }

    /// True if this is a reply materialized under `comment`.
    pub fn is_reply_of(&self, comment: &ItemId) -> bool {
        matches!(&self.kind, ItemKind::Reply { parent: Some(parent) } if parent == comment)
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}
