//! Extraction tests against the shared two-cohort layout.

mod support;

use utn_rust::api::{Day, ScheduleRecord, Slot, NONE_SENTINEL};
use utn_rust::services::extract_schedule;

use support::{baseline_sheet, changed_room_sheet, test_context};

fn sorted(mut records: Vec<ScheduleRecord>) -> Vec<ScheduleRecord> {
    records.sort_by(|a, b| {
        (a.day, a.slot, &a.teacher, &a.group).cmp(&(b.day, b.slot, &b.teacher, &b.group))
    });
    records
}

#[test]
fn test_baseline_sheet_extracts_both_assignments() {
    let ctx = test_context();
    let sheet = baseline_sheet();
    let records = sorted(extract_schedule(&sheet, &ctx.roster, &ctx.layout, &ctx.unions));

    assert_eq!(records.len(), 2);

    assert_eq!(records[0].day, Day::Duysembi);
    assert_eq!(records[0].slot, Slot::new(1));
    assert_eq!(records[0].group, "101-102");
    assert_eq!(records[0].subject, "Math");
    assert_eq!(records[0].teacher, "Tajieva A");
    assert_eq!(records[0].room, "204");

    assert_eq!(records[1].slot, Slot::new(2));
    assert_eq!(records[1].group, "103");
    assert_eq!(records[1].subject, "History");
    assert_eq!(records[1].teacher, "Arzieva B");
    assert_eq!(records[1].room, "310");
}

#[test]
fn test_second_cohort_uses_its_own_columns() {
    let ctx = test_context();
    let mut sheet = baseline_sheet();
    // Second-cohort assignment on the same rows: its own time column and
    // group labels, room in the column after the single-group span.
    sheet
        .set(3, 31, "201")
        .set(5, 30, "1")
        .set(5, 31, "Physics")
        .set(6, 31, "Mamirbaeva D")
        .set(6, 32, "410");

    let records = sorted(extract_schedule(&sheet, &ctx.roster, &ctx.layout, &ctx.unions));
    assert_eq!(records.len(), 3);

    let second_cohort = records
        .iter()
        .find(|r| r.teacher == "Mamirbaeva D")
        .unwrap();
    assert_eq!(second_cohort.day, Day::Duysembi);
    assert_eq!(second_cohort.slot, Slot::new(1));
    assert_eq!(second_cohort.group, "201");
    assert_eq!(second_cohort.subject, "Physics");
    assert_eq!(second_cohort.room, "410");
}

#[test]
fn test_extraction_multiset_is_idempotent() {
    let ctx = test_context();
    let sheet = baseline_sheet();

    let first = sorted(extract_schedule(&sheet, &ctx.roster, &ctx.layout, &ctx.unions));
    let second = sorted(extract_schedule(&sheet, &ctx.roster, &ctx.layout, &ctx.unions));
    assert_eq!(first, second);
}

#[test]
fn test_every_extracted_field_is_populated() {
    let ctx = test_context();
    let mut sheet = baseline_sheet();
    // An assignment with nothing around it: slot, subject, and room blank.
    sheet.set(33, 8, "Mamirbaeva D");

    let records = extract_schedule(&sheet, &ctx.roster, &ctx.layout, &ctx.unions);
    assert_eq!(records.len(), 3);
    for record in &records {
        assert!(!record.group.is_empty());
        assert!(!record.subject.is_empty());
        assert!(!record.teacher.is_empty());
        assert!(!record.room.is_empty());
    }

    let bare = records.iter().find(|r| r.day == Day::Sarshembi).unwrap();
    assert_eq!(bare.slot, Slot::NONE);
    assert_eq!(bare.subject, NONE_SENTINEL);
    assert_eq!(bare.room, NONE_SENTINEL);
    assert_eq!(bare.group, "103");
}

#[test]
fn test_room_change_alters_exactly_one_record() {
    let ctx = test_context();
    let before = sorted(extract_schedule(
        &baseline_sheet(),
        &ctx.roster,
        &ctx.layout,
        &ctx.unions,
    ));
    let after = sorted(extract_schedule(
        &changed_room_sheet(),
        &ctx.roster,
        &ctx.layout,
        &ctx.unions,
    ));

    assert_eq!(before.len(), after.len());
    let differing: Vec<_> = before
        .iter()
        .zip(after.iter())
        .filter(|(b, a)| b != a)
        .collect();
    assert_eq!(differing.len(), 1);

    let (b, a) = differing[0];
    assert_eq!(b.teacher, "Tajieva A");
    assert_eq!(b.room, "204");
    assert_eq!(a.room, "301");
}
