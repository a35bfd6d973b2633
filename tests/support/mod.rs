//! Shared fixtures for integration tests.

use std::collections::BTreeSet;

use utn_rust::api::UserId;
use utn_rust::models::{
    CohortLayout, DayRange, GroupUnion, GroupUnionTable, SheetLayout, TeacherRoster,
    TimetableContext,
};
use utn_rust::sheet::GridSheet;

/// Context with two cohorts, a three-teacher roster, one configured union,
/// and one admin (user 99).
pub fn test_context() -> TimetableContext {
    TimetableContext {
        roster: TeacherRoster::new(vec![
            "Tajieva A".to_string(),
            "Mamirbaeva D".to_string(),
            "Arzieva B".to_string(),
        ])
        .expect("roster fixture"),
        layout: SheetLayout {
            day_ranges: vec![
                DayRange::new(5, 16),
                DayRange::new(18, 29),
                DayRange::new(31, 42),
                DayRange::new(44, 55),
                DayRange::new(57, 68),
                DayRange::new(70, 81),
            ],
            group_label_row: 3,
            cohorts: vec![
                CohortLayout {
                    name: "first-course".to_string(),
                    time_column: 3,
                    group_columns: vec![4, 6, 8],
                },
                CohortLayout {
                    name: "second-course".to_string(),
                    time_column: 30,
                    group_columns: vec![31, 33],
                },
            ],
        },
        unions: GroupUnionTable::new(vec![GroupUnion {
            name: "101-102".to_string(),
            members: vec!["101".to_string(), "102".to_string()],
        }])
        .expect("union fixture"),
        admin_ids: BTreeSet::from([UserId::new(99)]),
    }
}

/// Sheet with two assignments on the first day:
/// - pair 1: "Tajieva A" in a merged block over groups 101+102, subject
///   Math, room 204;
/// - pair 2: "Arzieva B" in the single group-103 column, subject History,
///   room 310.
pub fn baseline_sheet() -> GridSheet {
    let mut sheet = GridSheet::new();
    sheet
        .set(3, 4, "101")
        .set(3, 6, "102")
        .set(3, 8, "103")
        // Pair 1, merged block spanning both group columns.
        .set(5, 3, "1")
        .set(5, 4, "Math")
        .merge(5, 4, 5, 7)
        .set(6, 4, "Tajieva A.")
        .merge(6, 4, 6, 7)
        .set(6, 9, "204")
        // Pair 2, single-column assignment.
        .set(7, 3, "2")
        .set(7, 8, "History")
        .set(8, 8, "Arzieva B")
        .set(8, 9, "310");
    sheet
}

/// [`baseline_sheet`] with Tajieva's room moved, leaving Arzieva untouched.
pub fn changed_room_sheet() -> GridSheet {
    let mut sheet = baseline_sheet();
    sheet.set(6, 9, "301");
    sheet
}
