//! List presenter - bridges the item store to a rendering surface.
//!
//! The presenter owns the [`ItemStore`] handed to it by the hosting screen
//! and never keeps a copy of the sequence. Every query projects the current
//! sequence; every toggle is replayed to the surface as a single
//! [`UpdateBatch`].
//!
//! # Module Structure
//!
//! - `row`: RowDescriptor / Affordance - per-row projections
//! - `extent_cache`: ExtentCache - measured row extents keyed by position

pub mod extent_cache;
pub mod row;

pub use extent_cache::{Extent, ExtentCache};
pub use row::{Affordance, AffordanceLabels, RowDescriptor};

use crate::config::ResolvedConfig;
use crate::model::{builtin_seed, load_seed_file, Item, ListError};
use crate::store::{ItemStore, ToggleDirection};
use tracing::{debug, warn};

/// Row-level change within an update batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowChange {
    /// Insert rows at these ascending positions.
    Insert(Vec<usize>),
    /// Remove rows at these ascending positions.
    Remove(Vec<usize>),
}

impl RowChange {
    /// Positions touched by the change.
    pub fn indices(&self) -> &[usize] {
        match self {
            Self::Insert(indices) | Self::Remove(indices) => indices,
        }
    }
}

/// One atomic update for a rendering surface.
///
/// Surfaces must apply the row change and the reload of the triggering row
/// in the same animation group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBatch {
    pub change: RowChange,
    /// Row whose affordance label changed.
    pub reload: usize,
}

/// A list view that can apply incremental row updates.
pub trait RenderSurface {
    /// Apply one batch atomically.
    fn apply_batch(&mut self, batch: &UpdateBatch);
}

/// Adapter between the item store and a rendering surface.
#[derive(Debug, Clone)]
pub struct ListPresenter {
    store: ItemStore,
    labels: AffordanceLabels,
    extents: ExtentCache,
}

impl ListPresenter {
    pub fn new(store: ItemStore, labels: AffordanceLabels) -> Self {
        Self {
            store,
            labels,
            extents: ExtentCache::new(),
        }
    }

    /// Build the store from the configured seed (or the built-in sample)
    /// and wrap it with the configured labels.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidSeed`] if the seed cannot be read or is rejected.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, ListError> {
        let seed = match &config.seed_file {
            Some(path) => load_seed_file(path, config.default_reply_count)?,
            None => builtin_seed(),
        };
        let store = ItemStore::initialize(&seed)?;
        let labels = AffordanceLabels::new(
            config.show_replies_label.clone(),
            config.hide_replies_label.clone(),
        );
        debug!(rows = store.len(), "Presenter built from configuration");
        Ok(Self::new(store, labels))
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn row_count(&self) -> usize {
        self.store.len()
    }

    /// Projection of the item at `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] outside `[0, row_count())`.
    pub fn row_descriptor(&self, index: usize) -> Result<RowDescriptor, ListError> {
        let item = self.item_at(index)?;
        Ok(RowDescriptor::project(item, &self.labels))
    }

    /// Projections of every row, in order.
    pub fn rows(&self) -> Vec<RowDescriptor> {
        self.store
            .iter()
            .map(|item| RowDescriptor::project(item, &self.labels))
            .collect()
    }

    /// Handle the per-row toggle trigger.
    ///
    /// Resolves the row to its item, toggles it in the store and replays the
    /// result to `surface` as one batch. On error nothing is emitted and
    /// nothing changes.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] for a bad position, or whatever
    /// [`ItemStore::toggle`] refuses with.
    pub fn on_toggle_requested<S>(
        &mut self,
        index: usize,
        surface: &mut S,
    ) -> Result<UpdateBatch, ListError>
    where
        S: RenderSurface + ?Sized,
    {
        let id = self.item_at(index)?.id().clone();

        let toggled = self.store.toggle(&id).inspect_err(|err| {
            warn!(index, %id, error = %err, "Toggle refused");
        })?;

        if let Some(&first) = toggled.changed.first() {
            self.extents.invalidate_from(first);
        }
        // The affordance label changed, so the row may wrap differently
        self.extents.forget(index);

        let change = match toggled.direction {
            ToggleDirection::Expanded => RowChange::Insert(toggled.changed),
            ToggleDirection::Collapsed => RowChange::Remove(toggled.changed),
        };
        let batch = UpdateBatch {
            change,
            reload: index,
        };

        debug!(index, %id, ?batch, "Applying update batch");
        surface.apply_batch(&batch);
        Ok(batch)
    }

    /// Record the extent a row was laid out with.
    pub fn record_measured_extent(&mut self, index: usize, extent: Extent) {
        self.extents.record(index, extent);
    }

    /// Extent to report for `index`: the last measurement if one survives,
    /// otherwise the surface's estimate.
    pub fn estimated_extent(&self, index: usize, surface_estimate: Extent) -> Extent {
        self.extents.resolve(index, surface_estimate)
    }

    /// Forget every measurement, e.g. after the viewport width changed.
    pub fn clear_measured_extents(&mut self) {
        self.extents.clear();
    }

    pub fn extent_cache(&self) -> &ExtentCache {
        &self.extents
    }

    fn item_at(&self, index: usize) -> Result<&Item, ListError> {
        self.store.get(index).ok_or(ListError::IndexOutOfRange {
            index,
            len: self.store.len(),
        })
    }
}

#[cfg(test)]
#[path = "presenter_tests.rs"]
mod tests;
