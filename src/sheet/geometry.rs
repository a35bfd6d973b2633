//! Merged-region containment queries.
//!
//! The extractor revisits the same cells once per roster teacher, so the
//! region list is indexed up front: every covered cell maps to its region
//! index, making containment lookups O(1) average for the whole pass.
//! A `MergeMap` is sheet-scoped and must be rebuilt for each new sheet.

use std::collections::HashMap;

use super::{MergedRegion, Sheet};

/// Cell-indexed view of one sheet's merged regions.
#[derive(Debug, Clone, Default)]
pub struct MergeMap {
    regions: Vec<MergedRegion>,
    by_cell: HashMap<(u32, u32), usize>,
}

impl MergeMap {
    /// Index the merged regions of `sheet`.
    pub fn new(sheet: &dyn Sheet) -> Self {
        Self::from_regions(sheet.merged_regions())
    }

    /// Index an explicit region list.
    pub fn from_regions(regions: &[MergedRegion]) -> Self {
        let regions = regions.to_vec();
        let mut by_cell = HashMap::new();

        for (idx, region) in regions.iter().enumerate() {
            for row in region.min_row..=region.max_row {
                for col in region.min_col..=region.max_col {
                    by_cell.insert((row, col), idx);
                }
            }
        }

        Self { regions, by_cell }
    }

    /// Bounding box of the merged region containing (row, col).
    ///
    /// Returns `None` for singleton cells.
    pub fn region_containing(&self, row: u32, col: u32) -> Option<&MergedRegion> {
        self.by_cell.get(&(row, col)).map(|&idx| &self.regions[idx])
    }

    /// Anchor cell through which (row, col) reads its value.
    ///
    /// The cell itself when it is not part of any merged region.
    pub fn anchor_of(&self, row: u32, col: u32) -> (u32, u32) {
        self.region_containing(row, col)
            .map(|r| r.anchor())
            .unwrap_or((row, col))
    }
}
