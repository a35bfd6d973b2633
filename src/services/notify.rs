//! Notification targeting.
//!
//! Turns an affected-set computed by the change detector, plus the
//! registered-user directory, into the exact set of user ids to notify.
//! Pure with respect to its inputs; message dispatch belongs to the chat
//! layer.

use std::collections::BTreeSet;

use crate::api::{RecipientDirectory, RecipientProfile, Role, UserId};
use crate::models::GroupUnionTable;
use crate::services::diff::ScheduleDiff;

/// Users to notify about a detected schedule change.
///
/// A user is targeted iff they are subscribed (or an admin) and their
/// registered identity intersects the affected sets: teachers by roster
/// name, students when any raw group of their registered union is
/// affected. Each id appears at most once regardless of how many matches
/// triggered it. The uploader, when privileged and not already included,
/// is appended last.
pub fn change_targets(
    diff: &ScheduleDiff,
    directory: &RecipientDirectory,
    unions: &GroupUnionTable,
    admin_ids: &BTreeSet<UserId>,
    uploader: Option<UserId>,
) -> Vec<UserId> {
    let mut targets = Vec::new();
    let mut seen = BTreeSet::new();

    for (&user_id, profile) in directory {
        if !(profile.notifications || admin_ids.contains(&user_id)) {
            continue;
        }
        if seen.contains(&user_id) {
            continue;
        }
        if profile_matches(profile, diff, unions) {
            seen.insert(user_id);
            targets.push(user_id);
        }
    }

    append_privileged_uploader(&mut targets, admin_ids, uploader);
    targets
}

/// Users to notify that a new schedule was published.
///
/// Unconditional broadcast to every subscribed user, independent of
/// diffing; the uploader is appended last when privileged.
pub fn broadcast_targets(
    directory: &RecipientDirectory,
    admin_ids: &BTreeSet<UserId>,
    uploader: Option<UserId>,
) -> Vec<UserId> {
    let mut targets: Vec<UserId> = directory
        .iter()
        .filter(|(_, profile)| profile.notifications)
        .map(|(&user_id, _)| user_id)
        .collect();

    append_privileged_uploader(&mut targets, admin_ids, uploader);
    targets
}

/// Whether the profile's registered identity intersects the affected sets.
///
/// A profile with a role but no identity (or an unset role) never matches.
fn profile_matches(
    profile: &RecipientProfile,
    diff: &ScheduleDiff,
    unions: &GroupUnionTable,
) -> bool {
    match profile.role {
        Some(Role::Teacher) => profile
            .teacher_name
            .as_deref()
            .map(|name| diff.affected_teachers.contains(name))
            .unwrap_or(false),
        Some(Role::Student) => profile
            .group
            .as_deref()
            .map(|group| !unions.expand(group).is_disjoint(&diff.affected_groups))
            .unwrap_or(false),
        None => false,
    }
}

fn append_privileged_uploader(
    targets: &mut Vec<UserId>,
    admin_ids: &BTreeSet<UserId>,
    uploader: Option<UserId>,
) {
    if let Some(uploader) = uploader {
        if admin_ids.contains(&uploader) && !targets.contains(&uploader) {
            targets.push(uploader);
        }
    }
}
