//! Initial list contents.
//!
//! The list is seeded once at startup, either from the built-in sample or
//! from a TOML seed file:
//!
//! ```toml
//! [[items]]
//! id = "c1"
//! kind = "comment"
//! has_replies = true
//! reply_count = 3
//!
//! [[items]]
//! kind = "reply"
//! ```

use crate::model::error::ListError;
use serde::Deserialize;
use std::path::Path;

/// Whether a seed entry becomes a comment or a free-standing reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedKind {
    #[default]
    Comment,
    Reply,
}

/// One entry of the initial list.
///
/// `has_replies` and `reply_count` are ignored for replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedEntry {
    /// Explicit id. `None` gets a fresh id at initialization.
    pub id: Option<String>,
    pub kind: SeedKind,
    pub has_replies: bool,
    pub reply_count: usize,
}

impl SeedEntry {
    pub fn comment(has_replies: bool, reply_count: usize) -> Self {
        Self {
            id: None,
            kind: SeedKind::Comment,
            has_replies,
            reply_count,
        }
    }

    pub fn reply() -> Self {
        Self {
            id: None,
            kind: SeedKind::Reply,
            has_replies: false,
            reply_count: 0,
        }
    }

    /// Same entry with an explicit id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// The built-in sample list.
///
/// Two expandable comments (3 and 2 replies), one comment without replies,
/// and two free-standing replies.
pub fn builtin_seed() -> Vec<SeedEntry> {
    vec![
        SeedEntry::comment(true, 3),
        SeedEntry::reply(),
        SeedEntry::comment(false, 0),
        SeedEntry::comment(true, 2),
        SeedEntry::reply(),
    ]
}

/// Seed file structure.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct SeedFile {
    #[serde(default)]
    items: Vec<SeedFileEntry>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct SeedFileEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    kind: SeedKind,
    #[serde(default)]
    has_replies: Option<bool>,
    #[serde(default)]
    reply_count: Option<usize>,
}

/// Parse seed entries from TOML text.
///
/// Comments without `reply_count` take `default_reply_count`; comments
/// without `has_replies` have replies available.
///
/// # Errors
///
/// Returns [`ListError::InvalidSeed`] for malformed TOML.
pub fn parse_seed(contents: &str, default_reply_count: usize) -> Result<Vec<SeedEntry>, ListError> {
    let file: SeedFile =
        toml::from_str(contents).map_err(|e| ListError::invalid_seed(e.to_string()))?;

    Ok(file
        .items
        .into_iter()
        .map(|entry| SeedEntry {
            id: entry.id,
            kind: entry.kind,
            has_replies: entry.has_replies.unwrap_or(true),
            reply_count: entry.reply_count.unwrap_or(default_reply_count),
        })
        .collect())
}

/// Read and parse a seed file.
///
/// # Errors
///
/// Returns [`ListError::InvalidSeed`] if the file cannot be read or parsed.
pub fn load_seed_file(path: &Path, default_reply_count: usize) -> Result<Vec<SeedEntry>, ListError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ListError::invalid_seed(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_seed(&contents, default_reply_count)
}
