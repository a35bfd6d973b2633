//! Schedule extraction from a published timetable sheet.
//!
//! The published workbook encodes one teaching assignment as a merged cell
//! block spanning the group columns taught together, with the subject on
//! the pair's slot row and the teacher name on the row below. The extractor
//! walks the configured layout once per roster teacher and emits one
//! normalized record per visited block.

use std::collections::BTreeSet;

use crate::api::{ScheduleRecord, Slot, NONE_SENTINEL};
use crate::models::{cell_mentions_name, GroupUnionTable, SheetLayout, TeacherRoster};
use crate::sheet::{MergeMap, Sheet};

/// Extract all schedule records for the roster from one sheet.
///
/// One pass per call; pure with respect to the same sheet. Malformed cells
/// degrade to sentinel values and never abort the pass; duplicates in
/// malformed source data pass through unchanged. An overall empty result
/// means the upload should be rejected, which is the caller's decision.
pub fn extract_schedule(
    sheet: &dyn Sheet,
    roster: &TeacherRoster,
    layout: &SheetLayout,
    unions: &GroupUnionTable,
) -> Vec<ScheduleRecord> {
    let merge_map = MergeMap::new(sheet);
    let mut records = Vec::new();

    for teacher in roster.names() {
        for cohort in &layout.cohorts {
            for (day, range) in layout.days() {
                for slot_row in range.rows() {
                    let assignment_row = slot_row + 1;
                    let slot = sheet
                        .value(slot_row, cohort.time_column)
                        .map(Slot::parse_label)
                        .unwrap_or(Slot::NONE);

                    for &group_col in &cohort.group_columns {
                        let region = merge_map.region_containing(assignment_row, group_col);

                        // Each merged block is visited exactly once, via its
                        // anchor cell; an unmerged cell is its own 1x1 block.
                        if let Some(region) = region {
                            if !region.is_anchor(assignment_row, group_col) {
                                continue;
                            }
                        }

                        let Some(cell_text) = sheet.value(assignment_row, group_col) else {
                            continue;
                        };
                        if !cell_mentions_name(cell_text, teacher) {
                            continue;
                        }

                        let (span_min, span_max) = region
                            .map(|r| (r.min_col, r.max_col))
                            .unwrap_or((group_col, group_col));

                        let labels: BTreeSet<String> = (span_min..=span_max)
                            .filter(|col| cohort.group_columns.contains(col))
                            .filter_map(|col| sheet.value(layout.group_label_row, col))
                            .map(|label| label.to_string())
                            .collect();
                        let group = if labels.is_empty() {
                            NONE_SENTINEL.to_string()
                        } else {
                            unions.resolve(&labels)
                        };

                        // Subject sits one row above the assignment row and
                        // may itself be merged across the same span.
                        let (subject_row, subject_col) = merge_map.anchor_of(slot_row, span_min);
                        let subject = sheet
                            .value(subject_row, subject_col)
                            .unwrap_or(NONE_SENTINEL)
                            .to_string();

                        let room = sheet
                            .value(assignment_row, room_column(layout, span_max))
                            .unwrap_or(NONE_SENTINEL)
                            .to_string();

                        records.push(ScheduleRecord {
                            day,
                            slot,
                            group,
                            subject,
                            teacher: teacher.clone(),
                            room,
                        });
                    }
                }
            }
        }
    }

    log::debug!(
        "Extraction pass over {} teachers produced {} records",
        roster.len(),
        records.len()
    );

    records
}

/// First non-group column after the block span.
///
/// A blank cell there means the room is unknown; the value is not hunted
/// further along the row, so a room printed for an unrelated later block is
/// never attributed to this one.
fn room_column(layout: &SheetLayout, span_max: u32) -> u32 {
    let mut col = span_max + 1;
    while layout.is_group_column(col) {
        col += 1;
    }
    col
}
