//! Position-keyed cache of measured row extents.
//!
//! Rendering surfaces estimate a row's extent before laying it out. While
//! rows are being inserted or removed, handing back a stale estimate for a
//! row that was already measured makes the list jitter. The cache keeps the
//! last measured extent per position and prefers it over any estimate.
//!
//! Keys are positions, not ids, so an insert or remove invalidates every
//! position at or after the first changed row.

use std::collections::BTreeMap;

/// Extent of a row, in lines.
pub type Extent = u16;

/// Last measured extent per row position.
#[derive(Debug, Clone, Default)]
pub struct ExtentCache {
    measured: BTreeMap<usize, Extent>,
}

impl ExtentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the extent a row was laid out with.
    pub fn record(&mut self, index: usize, extent: Extent) {
        self.measured.insert(index, extent);
    }

    /// Last measured extent, if the row was measured since the last shift.
    pub fn measured(&self, index: usize) -> Option<Extent> {
        self.measured.get(&index).copied()
    }

    /// Measured extent if known, otherwise the surface's own estimate.
    pub fn resolve(&self, index: usize, estimate: Extent) -> Extent {
        self.measured(index).unwrap_or(estimate)
    }

    /// Drop every position `>= first`. Called with the first inserted or
    /// removed position.
    pub fn invalidate_from(&mut self, first: usize) {
        let dropped = self.measured.split_off(&first);
        if !dropped.is_empty() {
            tracing::trace!(first, dropped = dropped.len(), "Extent cache invalidated");
        }
    }

    /// Drop the measurement of a single row.
    pub fn forget(&mut self, index: usize) {
        self.measured.remove(&index);
    }

    pub fn clear(&mut self) {
        self.measured.clear();
    }

    pub fn len(&self) -> usize {
        self.measured.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measured.is_empty()
    }
}
