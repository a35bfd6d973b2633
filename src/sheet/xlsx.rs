//! XLSX workbook ingestion via calamine.
//!
//! Loads one worksheet of a published timetable workbook into a
//! [`GridSheet`], converting calamine's 0-based cell and merged-region
//! coordinates to the 1-based convention used by the layout configuration.
//! Only genuinely exceptional conditions (unreadable workbook, missing
//! worksheet) surface as errors; blank or odd cells simply read as blank.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};

use super::{GridSheet, MergedRegion, Sheet};

/// Load a worksheet from an XLSX file on disk.
///
/// # Arguments
/// * `path` - Path to the workbook
/// * `sheet_name` - Worksheet to read; the workbook's first sheet when `None`
///
/// # Returns
/// * `Ok(GridSheet)` with cell values and merged regions
/// * `Err` if the workbook cannot be opened or the worksheet is missing
pub fn load_sheet_from_path<P: AsRef<Path>>(
    path: P,
    sheet_name: Option<&str>,
) -> Result<GridSheet> {
    let mut workbook: Xlsx<_> = open_workbook(path.as_ref())
        .with_context(|| format!("Failed to open workbook {}", path.as_ref().display()))?;
    grid_from_workbook(&mut workbook, sheet_name)
}

/// Load a worksheet from XLSX bytes (e.g. a chat file download).
pub fn load_sheet_from_bytes(bytes: &[u8], sheet_name: Option<&str>) -> Result<GridSheet> {
    let mut workbook =
        Xlsx::new(Cursor::new(bytes.to_vec())).context("Failed to open workbook from bytes")?;
    grid_from_workbook(&mut workbook, sheet_name)
}

fn grid_from_workbook<RS: Read + Seek>(
    workbook: &mut Xlsx<RS>,
    sheet_name: Option<&str>,
) -> Result<GridSheet> {
    let name = match sheet_name {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .context("Workbook has no worksheets")?,
    };

    workbook
        .load_merged_regions()
        .context("Failed to load merged regions")?;

    let range = workbook
        .worksheet_range(&name)
        .with_context(|| format!("Worksheet '{}' not found", name))?;

    let mut grid = GridSheet::new();

    let start = range.start().unwrap_or((0, 0));
    for (row_offset, row) in range.rows().enumerate() {
        for (col_offset, cell) in row.iter().enumerate() {
            let text = cell_text(cell);
            if text.is_empty() {
                continue;
            }
            grid.set(
                start.0 + row_offset as u32 + 1,
                start.1 + col_offset as u32 + 1,
                text,
            );
        }
    }

    for (_, _, dims) in workbook
        .merged_regions()
        .iter()
        .filter(|(sheet, _, _)| sheet == &name)
    {
        let region = region_from_zero_based(dims.start, dims.end);
        grid.merge(region.min_row, region.min_col, region.max_row, region.max_col);
    }

    log::debug!(
        "Loaded worksheet '{}': {} non-blank cells, {} merged regions",
        name,
        grid.cell_count(),
        grid.merged_regions().len()
    );

    Ok(grid)
}

/// Render one cell as trimmed text; anything unreadable reads as blank.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// Merged region in the crate's 1-based convention, from calamine's 0-based
/// inclusive dimensions.
pub fn region_from_zero_based(
    start: (u32, u32),
    end: (u32, u32),
) -> MergedRegion {
    MergedRegion::new(start.0 + 1, start.1 + 1, end.0 + 1, end.1 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_variants() {
        assert_eq!(cell_text(&Data::String("  Math ".to_string())), "Math");
        assert_eq!(cell_text(&Data::Float(204.0)), "204");
        assert_eq!(cell_text(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_text(&Data::Int(3)), "3");
        assert_eq!(cell_text(&Data::Empty), "");
    }

    #[test]
    fn test_region_coordinate_conversion() {
        let region = region_from_zero_based((5, 3), (5, 6));
        assert_eq!(region, MergedRegion::new(6, 4, 6, 7));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_sheet_from_path("no-such-file.xlsx", None).is_err());
    }

    #[test]
    fn test_garbage_bytes_are_an_error() {
        assert!(load_sheet_from_bytes(b"not an xlsx archive", None).is_err());
    }
}
