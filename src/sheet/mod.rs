//! Sheet-source boundary.
//!
//! The extractor consumes a published workbook only through the [`Sheet`]
//! trait: value-by-cell lookup plus the list of merged rectangular regions.
//! [`GridSheet`] is the in-memory implementation used by tests and by the
//! XLSX adapter; [`geometry::MergeMap`] answers merged-region containment
//! queries for one extraction pass.
//!
//! Rows and columns are 1-based throughout, matching how the published
//! workbook is addressed in the layout configuration.

pub mod geometry;

#[cfg(feature = "xlsx-input")]
pub mod xlsx;

pub use geometry::MergeMap;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Rectangular merged region of a sheet, inclusive on all sides.
///
/// The top-left cell is the region's anchor, the only cell holding the
/// region's value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedRegion {
    pub min_row: u32,
    pub min_col: u32,
    pub max_row: u32,
    pub max_col: u32,
}

impl MergedRegion {
    pub fn new(min_row: u32, min_col: u32, max_row: u32, max_col: u32) -> Self {
        Self {
            min_row,
            min_col,
            max_row,
            max_col,
        }
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        (self.min_row..=self.max_row).contains(&row)
            && (self.min_col..=self.max_col).contains(&col)
    }

    /// Top-left cell of the region.
    pub fn anchor(&self) -> (u32, u32) {
        (self.min_row, self.min_col)
    }

    pub fn is_anchor(&self, row: u32, col: u32) -> bool {
        self.anchor() == (row, col)
    }

    /// Columns spanned by the region, in increasing order.
    pub fn columns(&self) -> impl Iterator<Item = u32> {
        self.min_col..=self.max_col
    }
}

/// Read-only 2-D cell grid with a queryable list of merged regions.
pub trait Sheet {
    /// Text of the cell at 1-based (row, col), if the cell is non-blank.
    ///
    /// Non-anchor cells of a merged region read as blank, exactly as the
    /// source workbook stores them.
    fn value(&self, row: u32, col: u32) -> Option<&str>;

    /// Merged rectangular regions of this sheet.
    fn merged_regions(&self) -> &[MergedRegion];
}

/// In-memory [`Sheet`] implementation.
///
/// Values live only at their cell (for merged regions, the anchor), the way
/// a real workbook stores them. The builder methods keep test fixtures
/// short.
#[derive(Debug, Clone, Default)]
pub struct GridSheet {
    cells: HashMap<(u32, u32), String>,
    merged: Vec<MergedRegion>,
}

impl GridSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell value; blank text clears the cell.
    pub fn set(&mut self, row: u32, col: u32, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), trimmed.to_string());
        }
        self
    }

    /// Declare a merged region.
    pub fn merge(&mut self, min_row: u32, min_col: u32, max_row: u32, max_col: u32) -> &mut Self {
        self.merged
            .push(MergedRegion::new(min_row, min_col, max_row, max_col));
        self
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

impl Sheet for GridSheet {
    fn value(&self, row: u32, col: u32) -> Option<&str> {
        self.cells.get(&(row, col)).map(|s| s.as_str())
    }

    fn merged_regions(&self) -> &[MergedRegion] {
        &self.merged
    }
}
