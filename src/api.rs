//! Public API surface for the timetable backend.
//!
//! This file consolidates the core domain types shared by the extraction,
//! diffing, and targeting services. All types derive Serialize/Deserialize
//! so the persistence and chat layers can move them across their boundaries
//! without bespoke mapping code.

pub use crate::services::diff::ScheduleDiff;
pub use crate::services::pipeline::UploadOutcome;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder stored in place of a blank source cell.
///
/// Every field of a [`ScheduleRecord`] is always present; a blank subject,
/// teacher, or room cell degrades to this value so consumers can render a
/// line without null handling.
pub const NONE_SENTINEL: &str = "none";

/// Chat user identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(value: i64) -> Self {
        UserId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Working day of the teaching week, Monday-equivalent first.
///
/// Display labels are the day names as printed in the published timetable.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Day {
    Duysembi,
    Siyshembi,
    Sarshembi,
    Piyshembi,
    Juma,
    Shembi,
}

impl Day {
    /// All six working days in week order.
    pub const ALL: [Day; 6] = [
        Day::Duysembi,
        Day::Siyshembi,
        Day::Sarshembi,
        Day::Piyshembi,
        Day::Juma,
        Day::Shembi,
    ];

    /// Printed day label from the published timetable.
    pub fn label(&self) -> &'static str {
        match self {
            Day::Duysembi => "DUYSEMBI",
            Day::Siyshembi => "SIYSHEMBI",
            Day::Sarshembi => "SARSHEMBI",
            Day::Piyshembi => "PIYSHEMBI",
            Day::Juma => "JUMA",
            Day::Shembi => "SHEMBI",
        }
    }

    /// Zero-based position within the week.
    pub fn index(&self) -> usize {
        Day::ALL.iter().position(|d| d == self).unwrap_or(0)
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Day::ALL
            .iter()
            .copied()
            .find(|d| d.label() == upper)
            .ok_or_else(|| format!("Unknown day label: {}", s))
    }
}

/// Pair (teaching period) index within one day.
///
/// Valid pairs are 1..=6, each mapped to a fixed wall-clock range.
/// [`Slot::NONE`] (value 0) stands in for a blank slot label so the field
/// stays non-nullable.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Slot(pub u8);

impl Slot {
    /// Sentinel for a blank or unparseable slot label.
    pub const NONE: Slot = Slot(0);

    /// Highest pair index that appears in the timetable.
    pub const MAX: u8 = 6;

    pub fn new(value: u8) -> Self {
        Slot(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }

    /// Wall-clock time range for this pair, if it is a valid pair index.
    pub fn wall_clock(&self) -> Option<&'static str> {
        match self.0 {
            1 => Some("8:30-9:50"),
            2 => Some("10:00-11:20"),
            3 => Some("11:30-12:50"),
            4 => Some("13:00-14:20"),
            5 => Some("14:30-15:50"),
            6 => Some("16:00-17:20"),
            _ => None,
        }
    }

    /// Parse a slot label cell into a pair index.
    ///
    /// Takes the first run of ASCII digits in the label ("3" and
    /// "3-para 11:30" both parse to pair 3). Blank labels and values
    /// outside 1..=6 degrade to [`Slot::NONE`].
    pub fn parse_label(text: &str) -> Slot {
        let digits: String = text
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();

        match digits.parse::<u8>() {
            Ok(n) if (1..=Slot::MAX).contains(&n) => Slot(n),
            _ => Slot::NONE,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "{}", NONE_SENTINEL)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// One teaching event instance extracted from the published timetable.
///
/// Equality and hashing are structural over all six fields; a record has no
/// identity beyond its field values, which is what makes snapshot diffing a
/// pure multiset operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub day: Day,
    pub slot: Slot,
    /// Canonical group label, possibly a union name such as "101-102".
    pub group: String,
    pub subject: String,
    pub teacher: String,
    pub room: String,
}

/// Logical name of a stored schedule snapshot.
///
/// `Original` is the current authoritative timetable; `Changes` is the
/// newer replacement being compared against it. Snapshots are replaced
/// wholesale on every upload, never patched.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnapshotName {
    Original,
    Changes,
}

impl SnapshotName {
    /// Stable storage key for this snapshot.
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotName::Original => "original",
            SnapshotName::Changes => "changes",
        }
    }
}

impl std::fmt::Display for SnapshotName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SnapshotName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "original" => Ok(SnapshotName::Original),
            "changes" => Ok(SnapshotName::Changes),
            other => Err(format!("Unknown snapshot name: {}", other)),
        }
    }
}

/// Registered role of a chat user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Student,
}

/// Per-user notification preferences and identity.
///
/// Created on first contact, mutated by preference commands, persisted by
/// the external store. A profile with a role but no matching identity never
/// matches any affected set and is skipped silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipientProfile {
    #[serde(default)]
    pub role: Option<Role>,
    /// Roster display name; set only when role is `Teacher`.
    #[serde(default)]
    pub teacher_name: Option<String>,
    /// Canonical group label; set only when role is `Student`.
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default = "default_notifications")]
    pub notifications: bool,
}

fn default_notifications() -> bool {
    true
}

impl Default for RecipientProfile {
    fn default() -> Self {
        Self {
            role: None,
            teacher_name: None,
            group: None,
            notifications: true,
        }
    }
}

impl RecipientProfile {
    /// Profile for a registered teacher.
    pub fn teacher(name: impl Into<String>) -> Self {
        Self {
            role: Some(Role::Teacher),
            teacher_name: Some(name.into()),
            group: None,
            notifications: true,
        }
    }

    /// Profile for a registered student of the given group.
    pub fn student(group: impl Into<String>) -> Self {
        Self {
            role: Some(Role::Student),
            teacher_name: None,
            group: Some(group.into()),
            notifications: true,
        }
    }

    pub fn with_notifications(mut self, enabled: bool) -> Self {
        self.notifications = enabled;
        self
    }
}

/// Registered-user directory keyed by chat user id.
///
/// A `BTreeMap` keeps iteration deterministic, so targeting output is
/// stable across runs for identical input.
pub type RecipientDirectory = BTreeMap<UserId, RecipientProfile>;
