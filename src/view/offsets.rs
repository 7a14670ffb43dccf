//! RowOffsets - vertical row offsets via Fenwick tree prefix sums
//!
//! Maps between row positions and line offsets inside the list area, for
//! scrolling the selection into view and for mouse hit-testing.
//!
//! # Complexity
//!
//! - `from_extents`: O(n log n)
//! - `offset_of`: O(log n)
//! - `row_at`: O(log² n)

use crate::presenter::Extent;

/// Cumulative row extents.
#[derive(Debug, Clone, Default)]
pub struct RowOffsets {
    /// Fenwick tree backing storage (1-indexed internally, 0-indexed API)
    tree: Vec<isize>,
}

impl RowOffsets {
    /// Build offsets from per-row extents, in row order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use threadfold::view::offsets::RowOffsets;
    /// let offsets = RowOffsets::from_extents(&[2, 1, 3]);
    /// assert_eq!(offsets.offset_of(2), 3);
    /// assert_eq!(offsets.total(), 6);
    /// ```
    pub fn from_extents(extents: &[Extent]) -> Self {
        let mut tree = vec![0; extents.len()];
        for (index, &extent) in extents.iter().enumerate() {
            fenwick::array::update(&mut tree, index, extent as isize);
        }
        Self { tree }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Line offset of the first line of `index`.
    ///
    /// `offset_of(len())` is the total height.
    pub fn offset_of(&self, index: usize) -> usize {
        if index == 0 || self.is_empty() {
            0
        } else {
            self.end_of(index.min(self.len()) - 1)
        }
    }

    /// Line offset just past the last line of `index`.
    fn end_of(&self, index: usize) -> usize {
        fenwick::array::prefix_sum(&self.tree, index).max(0) as usize
    }

    /// Total height of all rows.
    pub fn total(&self) -> usize {
        self.offset_of(self.len())
    }

    /// Row covering the given line offset, `None` past the last row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use threadfold::view::offsets::RowOffsets;
    /// let offsets = RowOffsets::from_extents(&[2, 1, 3]);
    /// assert_eq!(offsets.row_at(0), Some(0));
    /// assert_eq!(offsets.row_at(2), Some(1));
    /// assert_eq!(offsets.row_at(5), Some(2));
    /// assert_eq!(offsets.row_at(6), None);
    /// ```
    pub fn row_at(&self, offset: usize) -> Option<usize> {
        // First row whose end lies past the offset
        let mut left = 0;
        let mut right = self.len();
        while left < right {
            let mid = left + (right - left) / 2;
            if self.end_of(mid) > offset {
                right = mid;
            } else {
                left = mid + 1;
            }
        }
        (left < self.len()).then_some(left)
    }
}
