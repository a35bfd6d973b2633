//! Physical layout of the published timetable workbook.
//!
//! The layout is configuration, not computed: it records where each day's
//! rows live, which columns carry each cohort's groups, and where the group
//! labels are printed. It is loaded once at startup, validated, and treated
//! as immutable from then on.

use serde::{Deserialize, Serialize};

use crate::api::Day;

/// Inclusive row range holding one day's teaching rows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRange {
    pub start_row: u32,
    pub end_row: u32,
}

impl DayRange {
    pub fn new(start_row: u32, end_row: u32) -> Self {
        Self { start_row, end_row }
    }

    pub fn rows(&self) -> impl Iterator<Item = u32> {
        self.start_row..=self.end_row
    }
}

/// Column layout for one cohort (a set of groups sharing the same block
/// structure, e.g. first-course vs. second-course students).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortLayout {
    /// Cohort name, e.g. "first-course".
    pub name: String,
    /// Column holding the pair-index label for this cohort's rows.
    pub time_column: u32,
    /// Columns holding this cohort's groups, strictly increasing.
    pub group_columns: Vec<u32>,
}

/// Full workbook layout: day row ranges in week order, the row where group
/// labels are printed, and the per-cohort column layout.
///
/// Rows and columns are 1-based, matching how the source workbook is
/// addressed everywhere else in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    pub day_ranges: Vec<DayRange>,
    pub group_label_row: u32,
    pub cohorts: Vec<CohortLayout>,
}

impl SheetLayout {
    /// Day ranges paired with their day, in week order.
    pub fn days(&self) -> impl Iterator<Item = (Day, DayRange)> + '_ {
        Day::ALL.iter().copied().zip(self.day_ranges.iter().copied())
    }

    /// Whether `col` is a configured group column of any cohort.
    pub fn is_group_column(&self, col: u32) -> bool {
        self.cohorts
            .iter()
            .any(|c| c.group_columns.contains(&col))
    }

    /// Validate the layout once at startup.
    ///
    /// # Returns
    /// * `Ok(())` if the layout is internally consistent
    /// * `Err(String)` describing the first violation found
    pub fn validate(&self) -> Result<(), String> {
        if self.day_ranges.len() != Day::ALL.len() {
            return Err(format!(
                "Expected {} day ranges, got {}",
                Day::ALL.len(),
                self.day_ranges.len()
            ));
        }

        for (day, range) in self.days() {
            if range.start_row == 0 {
                return Err(format!("Day range for {} must use 1-based rows", day));
            }
            if range.start_row > range.end_row {
                return Err(format!(
                    "Day range for {} is not increasing: {}-{}",
                    day, range.start_row, range.end_row
                ));
            }
        }

        for pair in self.day_ranges.windows(2) {
            if pair[0].end_row >= pair[1].start_row {
                return Err(format!(
                    "Day ranges overlap or are out of order: {}-{} then {}-{}",
                    pair[0].start_row, pair[0].end_row, pair[1].start_row, pair[1].end_row
                ));
            }
        }

        if self.group_label_row == 0 || self.group_label_row >= self.day_ranges[0].start_row {
            return Err(format!(
                "Group label row {} must sit above the first day range (row {})",
                self.group_label_row, self.day_ranges[0].start_row
            ));
        }

        if self.cohorts.is_empty() {
            return Err("Layout must declare at least one cohort".to_string());
        }

        for cohort in &self.cohorts {
            if cohort.group_columns.is_empty() {
                return Err(format!("Cohort '{}' has no group columns", cohort.name));
            }
            if cohort.time_column == 0 || cohort.group_columns.contains(&0) {
                return Err(format!("Cohort '{}' must use 1-based columns", cohort.name));
            }
            if !cohort
                .group_columns
                .windows(2)
                .all(|pair| pair[0] < pair[1])
            {
                return Err(format!(
                    "Cohort '{}' group columns must be strictly increasing",
                    cohort.name
                ));
            }
            if cohort.group_columns.contains(&cohort.time_column) {
                return Err(format!(
                    "Cohort '{}' time column {} is also listed as a group column",
                    cohort.name, cohort.time_column
                ));
            }
        }

        Ok(())
    }
}
