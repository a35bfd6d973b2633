//! Service layer for business logic and orchestration.
//!
//! This module contains the services that sit between the sheet-source and
//! persistence boundaries: extraction, change detection, notification
//! targeting, display formatting, and the upload pipeline that ties them
//! together.

pub mod diff;
pub mod extract;
pub mod format;
pub mod notify;
pub mod pipeline;

pub use diff::{diff_snapshots, ScheduleDiff};
pub use extract::extract_schedule;
pub use format::{
    format_change_notice, format_day_schedule, format_group_schedule, format_record_line,
    format_teacher_schedule,
};
pub use notify::{broadcast_targets, change_targets};
pub use pipeline::{publish_changes, publish_original, UploadOutcome};
