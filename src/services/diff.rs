//! Change detection between two schedule snapshots.
//!
//! Records carry no identity beyond their field values, so the comparison
//! is a pure multiset symmetric difference: a record whose occurrence count
//! differs between the snapshots is a change, and contributes its teacher
//! and the raw groups of its (possibly union) group label to the affected
//! sets.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::api::{ScheduleRecord, NONE_SENTINEL};
use crate::models::GroupUnionTable;

/// Affected recipients derived from a snapshot comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDiff {
    pub affected_teachers: BTreeSet<String>,
    pub affected_groups: BTreeSet<String>,
}

impl ScheduleDiff {
    pub fn is_empty(&self) -> bool {
        self.affected_teachers.is_empty() && self.affected_groups.is_empty()
    }
}

/// Compare two snapshots and collect the affected teachers and raw groups.
///
/// Either side empty means there is nothing meaningful to compare (a
/// first-ever upload has no prior snapshot), and the result is an empty
/// diff rather than the whole non-empty side reported as changed.
pub fn diff_snapshots(
    old: &[ScheduleRecord],
    new: &[ScheduleRecord],
    unions: &GroupUnionTable,
) -> ScheduleDiff {
    if old.is_empty() || new.is_empty() {
        return ScheduleDiff::default();
    }

    let mut counts: HashMap<&ScheduleRecord, i64> = HashMap::new();
    for record in old {
        *counts.entry(record).or_default() += 1;
    }
    for record in new {
        *counts.entry(record).or_default() -= 1;
    }

    let mut diff = ScheduleDiff::default();
    for (record, count) in counts {
        if count == 0 {
            continue;
        }
        if record.teacher != NONE_SENTINEL {
            diff.affected_teachers.insert(record.teacher.clone());
        }
        if record.group != NONE_SENTINEL {
            diff.affected_groups.extend(unions.expand(&record.group));
        }
    }

    log::debug!(
        "Snapshot diff: {} affected teachers, {} affected groups",
        diff.affected_teachers.len(),
        diff.affected_groups.len()
    );

    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Day, Slot};
    use crate::models::GroupUnion;

    fn unions() -> GroupUnionTable {
        GroupUnionTable::new(vec![GroupUnion {
            name: "101-102".to_string(),
            members: vec!["101".to_string(), "102".to_string()],
        }])
        .unwrap()
    }

    fn record(day: Day, slot: u8, group: &str, subject: &str, teacher: &str) -> ScheduleRecord {
        ScheduleRecord {
            day,
            slot: Slot::new(slot),
            group: group.to_string(),
            subject: subject.to_string(),
            teacher: teacher.to_string(),
            room: "204".to_string(),
        }
    }

    #[test]
    fn test_identical_snapshots_are_unchanged() {
        let snapshot = vec![
            record(Day::Duysembi, 1, "101", "Math", "Tajieva A"),
            record(Day::Juma, 3, "102", "History", "Arzieva B"),
        ];
        let diff = diff_snapshots(&snapshot, &snapshot, &unions());
        assert!(diff.is_empty());
    }

    #[test]
    fn test_no_prior_snapshot_reports_no_diff() {
        let snapshot = vec![record(Day::Duysembi, 1, "101", "Math", "Tajieva A")];
        assert!(diff_snapshots(&[], &snapshot, &unions()).is_empty());
        assert!(diff_snapshots(&snapshot, &[], &unions()).is_empty());
    }

    #[test]
    fn test_changed_record_affects_both_sides_symmetrically() {
        let old = vec![
            record(Day::Duysembi, 1, "101", "Math", "Tajieva A"),
            record(Day::Juma, 3, "102", "History", "Arzieva B"),
        ];
        let mut new = old.clone();
        new[1].subject = "Geography".to_string();

        let forward = diff_snapshots(&old, &new, &unions());
        let backward = diff_snapshots(&new, &old, &unions());

        assert_eq!(forward, backward);
        assert_eq!(
            forward.affected_teachers,
            BTreeSet::from(["Arzieva B".to_string()])
        );
        assert_eq!(
            forward.affected_groups,
            BTreeSet::from(["102".to_string()])
        );
    }

    #[test]
    fn test_union_group_expands_to_raw_labels() {
        let old = vec![record(Day::Duysembi, 1, "101-102", "Math", "Tajieva A")];
        let mut new = old.clone();
        new[0].room = "301".to_string();

        let diff = diff_snapshots(&old, &new, &unions());
        assert_eq!(
            diff.affected_groups,
            BTreeSet::from(["101".to_string(), "102".to_string()])
        );
    }

    #[test]
    fn test_count_difference_is_a_change() {
        let repeated = record(Day::Duysembi, 1, "101", "Math", "Tajieva A");
        let old = vec![repeated.clone(), repeated.clone()];
        let new = vec![repeated];

        let diff = diff_snapshots(&old, &new, &unions());
        assert_eq!(
            diff.affected_teachers,
            BTreeSet::from(["Tajieva A".to_string()])
        );
    }

    #[test]
    fn test_reordering_is_not_a_change() {
        let a = record(Day::Duysembi, 1, "101", "Math", "Tajieva A");
        let b = record(Day::Juma, 2, "102", "History", "Arzieva B");
        let diff = diff_snapshots(
            &[a.clone(), b.clone()],
            &[b, a],
            &unions(),
        );
        assert!(diff.is_empty());
    }

    #[test]
    fn test_sentinel_fields_are_not_collected() {
        let old = vec![record(Day::Duysembi, 1, NONE_SENTINEL, "Math", NONE_SENTINEL)];
        let mut new = old.clone();
        new[0].subject = "Physics".to_string();

        let diff = diff_snapshots(&old, &new, &unions());
        assert!(diff.affected_teachers.is_empty());
        assert!(diff.affected_groups.is_empty());
    }

    #[test]
    fn test_added_record_affects_its_recipients() {
        let old = vec![record(Day::Duysembi, 1, "101", "Math", "Tajieva A")];
        let mut new = old.clone();
        new.push(record(Day::Shembi, 6, "103", "Algebra", "Dauletmuratova X"));

        let diff = diff_snapshots(&old, &new, &unions());
        assert_eq!(
            diff.affected_teachers,
            BTreeSet::from(["Dauletmuratova X".to_string()])
        );
        assert_eq!(
            diff.affected_groups,
            BTreeSet::from(["103".to_string()])
        );
    }
}
