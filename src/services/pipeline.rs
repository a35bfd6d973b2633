//! Upload processing pipeline.
//!
//! Orchestrates one schedule upload end to end: extract, persist, compare,
//! target. The prior snapshot is captured before the replacement write,
//! since the store keeps no version history. Failures surface as
//! human-readable reason strings; the chat layer owns user-facing
//! messaging and the actual dispatch.

use serde::{Deserialize, Serialize};

use crate::api::{SnapshotName, UserId};
use crate::db::repository::FullRepository;
use crate::models::TimetableContext;
use crate::services::diff::{diff_snapshots, ScheduleDiff};
use crate::services::extract::extract_schedule;
use crate::services::notify::{broadcast_targets, change_targets};
use crate::sheet::Sheet;

/// Result of one processed upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadOutcome {
    /// Which snapshot the upload replaced.
    pub snapshot: SnapshotName,
    /// Number of extracted records.
    pub record_count: usize,
    /// Affected sets, present only for change uploads.
    pub diff: Option<ScheduleDiff>,
    /// Users the chat layer should notify, each at most once.
    pub targets: Vec<UserId>,
}

/// Publish a new authoritative timetable.
///
/// Replaces the `Original` snapshot and targets every subscribed user
/// unconditionally; a first-ever upload therefore notifies without any
/// diffing.
///
/// # Returns
/// * `Ok(UploadOutcome)` on success
/// * `Err(String)` with the rejection reason (empty or invalid content,
///   storage failure)
pub async fn publish_original(
    sheet: &dyn Sheet,
    ctx: &TimetableContext,
    repo: &dyn FullRepository,
    uploader: Option<UserId>,
) -> Result<UploadOutcome, String> {
    let records = extract_schedule(sheet, &ctx.roster, &ctx.layout, &ctx.unions);
    if records.is_empty() {
        log::warn!("Rejected original upload: no records extracted");
        return Err("File rejected: empty or invalid schedule content".to_string());
    }

    repo.save_snapshot(SnapshotName::Original, &records)
        .await
        .map_err(|e| format!("Failed to store schedule: {}", e))?;

    let directory = repo
        .load_recipients()
        .await
        .map_err(|e| format!("Failed to load recipients: {}", e))?;
    let targets = broadcast_targets(&directory, &ctx.admin_ids, uploader);

    log::info!(
        "Published original schedule: {} records, notifying {} users",
        records.len(),
        targets.len()
    );

    Ok(UploadOutcome {
        snapshot: SnapshotName::Original,
        record_count: records.len(),
        diff: None,
        targets,
    })
}

/// Publish a replacement timetable and target only affected recipients.
///
/// The `Original` snapshot is read before the `Changes` write so the
/// comparison always runs against the version readers saw until now.
/// Without a prior snapshot the diff is empty and nobody is targeted
/// beyond a privileged uploader.
pub async fn publish_changes(
    sheet: &dyn Sheet,
    ctx: &TimetableContext,
    repo: &dyn FullRepository,
    uploader: Option<UserId>,
) -> Result<UploadOutcome, String> {
    let records = extract_schedule(sheet, &ctx.roster, &ctx.layout, &ctx.unions);
    if records.is_empty() {
        log::warn!("Rejected change upload: no records extracted");
        return Err("File rejected: empty or invalid schedule content".to_string());
    }

    let previous = repo
        .load_snapshot(SnapshotName::Original)
        .await
        .map_err(|e| format!("Failed to load prior schedule: {}", e))?;

    repo.save_snapshot(SnapshotName::Changes, &records)
        .await
        .map_err(|e| format!("Failed to store schedule: {}", e))?;

    let diff = diff_snapshots(&previous, &records, &ctx.unions);

    let directory = repo
        .load_recipients()
        .await
        .map_err(|e| format!("Failed to load recipients: {}", e))?;
    let targets = change_targets(&diff, &directory, &ctx.unions, &ctx.admin_ids, uploader);

    log::info!(
        "Published schedule changes: {} records, {} affected teachers, {} affected groups, notifying {} users",
        records.len(),
        diff.affected_teachers.len(),
        diff.affected_groups.len(),
        targets.len()
    );

    Ok(UploadOutcome {
        snapshot: SnapshotName::Changes,
        record_count: records.len(),
        diff: Some(diff),
        targets,
    })
}
