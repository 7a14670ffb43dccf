//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod item;
pub mod key_action;
pub mod seed;

// Re-export for convenience
pub use error::ListError;
pub use identifiers::{InvalidItemId, ItemId};
pub use item::{CommentState, Item, ItemKind};
pub use key_action::KeyAction;
pub use seed::{builtin_seed, load_seed_file, parse_seed, SeedEntry, SeedKind};
