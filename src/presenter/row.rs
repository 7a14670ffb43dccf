//! Read-only row projections handed to renderers.

use crate::config::{DEFAULT_HIDE_REPLIES_LABEL, DEFAULT_SHOW_REPLIES_LABEL};
use crate::model::{Item, ItemId, ItemKind};

/// Labels shown on the expand control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffordanceLabels {
    /// Shown while the comment is collapsed.
    pub show: String,
    /// Shown while the comment is expanded.
    pub hide: String,
}

impl AffordanceLabels {
    pub fn new(show: impl Into<String>, hide: impl Into<String>) -> Self {
        Self {
            show: show.into(),
            hide: hide.into(),
        }
    }
}

impl Default for AffordanceLabels {
    fn default() -> Self {
        Self::new(DEFAULT_SHOW_REPLIES_LABEL, DEFAULT_HIDE_REPLIES_LABEL)
    }
}

/// State of a row's expand control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Affordance {
    /// No control: replies, and comments without replies.
    Hidden,
    /// Control is drawn with this label.
    Visible {
        label: String,
        /// Whether the reply block is currently shown.
        expanded: bool,
    },
}

impl Affordance {
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Hidden => None,
            Self::Visible { label, .. } => Some(label),
        }
    }
}

/// Everything a renderer needs to draw one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDescriptor {
    pub id: ItemId,
    /// Display text. Items carry no body, so this is the id.
    pub text: String,
    /// 0 for comments, 1 for replies.
    pub indent: u8,
    pub affordance: Affordance,
}

impl RowDescriptor {
    /// Project an item into a row.
    pub fn project(item: &Item, labels: &AffordanceLabels) -> Self {
        let (indent, affordance) = match item.kind() {
            ItemKind::Reply { .. } => (1, Affordance::Hidden),
            ItemKind::Comment(state) if !state.has_replies_available => (0, Affordance::Hidden),
            ItemKind::Comment(state) => {
                let label = if state.is_expanded {
                    &labels.hide
                } else {
                    &labels.show
                };
                (
                    0,
                    Affordance::Visible {
                        label: label.clone(),
                        expanded: state.is_expanded,
                    },
                )
            }
        };

        Self {
            id: item.id().clone(),
            text: item.id().to_string(),
            indent,
            affordance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ItemId {
        ItemId::new(s).expect("valid test id")
    }

    #[test]
    fn collapsed_comment_offers_view_more() {
        let row = RowDescriptor::project(&Item::comment(id("c1"), true, 3), &AffordanceLabels::default());
        assert_eq!(row.indent, 0);
        assert_eq!(row.text, "c1");
        assert_eq!(row.affordance.label(), Some("View more replies..."));
    }

    #[test]
    fn expanded_comment_offers_hide() {
        let mut item = Item::comment(id("c1"), true, 3);
        if let Some(state) = item.comment_state_mut() {
            state.is_expanded = true;
        }
        let row = RowDescriptor::project(&item, &AffordanceLabels::default());
        assert_eq!(
            row.affordance,
            Affordance::Visible {
                label: "Hide replies".to_string(),
                expanded: true,
            }
        );
    }

    #[test]
    fn comment_without_replies_hides_control() {
        let row = RowDescriptor::project(&Item::comment(id("c2"), false, 0), &AffordanceLabels::default());
        assert_eq!(row.indent, 0);
        assert_eq!(row.affordance, Affordance::Hidden);
    }

    #[test]
    fn reply_is_indented_without_control() {
        let row = RowDescriptor::project(&Item::reply(id("r1"), Some(id("c1"))), &AffordanceLabels::default());
        assert_eq!(row.indent, 1);
        assert_eq!(row.affordance, Affordance::Hidden);
    }

    #[test]
    fn custom_labels_are_used() {
        let labels = AffordanceLabels::new("More", "Less");
        let row = RowDescriptor::project(&Item::comment(id("c1"), true, 1), &labels);
        assert_eq!(row.affordance.label(), Some("More"));
    }
}
