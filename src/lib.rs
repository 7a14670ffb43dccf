//! threadfold - collapsible comment threads in a flat list
//!
//! Comments and replies live in one ordered sequence. Expanding a comment
//! materializes its replies directly below it; collapsing removes exactly
//! that block again. A presenter turns each toggle into one incremental
//! update for the rendering surface.
//!
//! Pure core (`model`, `store`, `presenter`) / impure shell (`config`,
//! `logging`, `view`).

pub mod config;
pub mod logging;
pub mod model;
pub mod presenter;
pub mod store;
pub mod view;
