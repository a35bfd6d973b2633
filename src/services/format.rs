//! Display formatting for schedule records and change notices.
//!
//! The chat layer sends plain text; these helpers turn record sequences
//! into ready-to-send message bodies. Records are kept unordered
//! everywhere else in the crate, so the canonical day/pair sort order is
//! imposed only here, at the display boundary.

use crate::api::{Day, ScheduleRecord};
use crate::models::{normalize_name, GroupUnionTable};
use crate::services::diff::ScheduleDiff;

/// One schedule line: pair, wall-clock time, subject, group, room.
pub fn format_record_line(record: &ScheduleRecord) -> String {
    match record.slot.wall_clock() {
        Some(time) => format!(
            "{} ({}): {} | {} | room {}",
            record.slot, time, record.subject, record.group, record.room
        ),
        None => format!(
            "{}: {} | {} | room {}",
            record.slot, record.subject, record.group, record.room
        ),
    }
}

/// All lines for one day, sorted by pair, under the day's header.
pub fn format_day_schedule(day: Day, records: &[ScheduleRecord]) -> String {
    let mut day_records: Vec<&ScheduleRecord> =
        records.iter().filter(|r| r.day == day).collect();
    day_records.sort_by_key(|r| r.slot);

    let mut lines = vec![day.label().to_string()];
    if day_records.is_empty() {
        lines.push("(no classes)".to_string());
    } else {
        lines.extend(day_records.iter().map(|r| format_record_line(r)));
    }
    lines.join("\n")
}

/// Full week for one teacher, matched under name normalization.
pub fn format_teacher_schedule(records: &[ScheduleRecord], teacher: &str) -> String {
    let needle = normalize_name(teacher);
    let own: Vec<ScheduleRecord> = records
        .iter()
        .filter(|r| normalize_name(&r.teacher) == needle)
        .cloned()
        .collect();

    Day::ALL
        .iter()
        .map(|&day| format_day_schedule(day, &own))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Full week for one group, including sessions taught to a union the
/// group belongs to.
pub fn format_group_schedule(
    records: &[ScheduleRecord],
    group: &str,
    unions: &GroupUnionTable,
) -> String {
    let wanted = unions.expand(group);
    let own: Vec<ScheduleRecord> = records
        .iter()
        .filter(|r| !unions.expand(&r.group).is_disjoint(&wanted))
        .cloned()
        .collect();

    Day::ALL
        .iter()
        .map(|&day| format_day_schedule(day, &own))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Body of a change notification.
pub fn format_change_notice(diff: &ScheduleDiff) -> String {
    if diff.is_empty() {
        return "The schedule was republished without changes.".to_string();
    }

    let mut lines = vec!["The schedule has changed.".to_string()];
    if !diff.affected_teachers.is_empty() {
        lines.push(format!(
            "Affected teachers: {}",
            diff.affected_teachers
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }
    if !diff.affected_groups.is_empty() {
        lines.push(format!(
            "Affected groups: {}",
            diff.affected_groups
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }
    lines.join("\n")
}
