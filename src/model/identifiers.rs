//! Item identifier newtype with a smart constructor.
//!
//! Identity in the list is always decided by `ItemId`, never by position.
//! The raw constructor is never exported - use `ItemId::new` or `ItemId::fresh`.

use std::fmt;

/// Opaque, globally unique identifier of a comment or reply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Smart constructor: rejects empty and whitespace-only ids.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidItemId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidItemId::Empty);
        }
        Ok(Self(raw))
    }

    /// Generate a new random id (UUID v4, hyphenated, uppercase).
    pub fn fresh() -> Self {
        Self(uuid::Uuid::new_v4().to_string().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidItemId {
    #[error("Item ID cannot be empty")]
    Empty,
}
