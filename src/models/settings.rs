//! Timetable settings file support.
//!
//! This module reads the deployment's static configuration (teacher roster,
//! workbook layout, group unions, admin ids) from a TOML file and turns it
//! into the validated, immutable [`TimetableContext`] the services receive
//! at call time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::groups::{GroupUnion, GroupUnionTable};
use super::layout::{CohortLayout, DayRange, SheetLayout};
use super::roster::TeacherRoster;
use crate::api::UserId;

/// Error raised while loading or validating the settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(String),

    #[error("Failed to parse settings file: {0}")]
    Parse(String),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Validated bundle of static configuration handed to the services.
///
/// Built once during process startup and treated as immutable thereafter;
/// every extraction or targeting call receives it explicitly instead of
/// reaching for globals.
#[derive(Debug, Clone)]
pub struct TimetableContext {
    pub roster: TeacherRoster,
    pub layout: SheetLayout,
    pub unions: GroupUnionTable,
    pub admin_ids: BTreeSet<UserId>,
}

/// Timetable configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableSettings {
    pub roster: RosterSettings,
    pub layout: LayoutSettings,
    #[serde(default)]
    pub groups: GroupSettings,
    #[serde(default)]
    pub notify: NotifySettings,
}

/// Teacher roster settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSettings {
    pub teachers: Vec<String>,
}

/// Workbook layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Six `[start_row, end_row]` pairs in week order.
    pub day_ranges: Vec<(u32, u32)>,
    pub group_label_row: u32,
    #[serde(rename = "cohort")]
    pub cohorts: Vec<CohortSettings>,
}

/// One cohort's column layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortSettings {
    pub name: String,
    pub time_column: u32,
    pub group_columns: Vec<u32>,
}

/// Group union settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupSettings {
    #[serde(rename = "union", default)]
    pub unions: Vec<UnionSettings>,
}

/// One configured group union.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnionSettings {
    pub name: String,
    pub members: Vec<String>,
}

/// Notification settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifySettings {
    #[serde(default)]
    pub admin_ids: Vec<i64>,
}

impl TimetableSettings {
    /// Load settings from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the settings file
    ///
    /// # Returns
    /// * `Ok(TimetableSettings)` if successful
    /// * `Err(SettingsError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| SettingsError::Io(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parse settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        toml::from_str(content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Load settings from the default location.
    ///
    /// Searches for `timetable.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(TimetableSettings)` if found and parsed successfully
    /// * `Err(SettingsError)` if no settings file was found or a parse error
    pub fn from_default_location() -> Result<Self, SettingsError> {
        let search_paths = vec![
            PathBuf::from("timetable.toml"),
            PathBuf::from("config/timetable.toml"),
            PathBuf::from("../timetable.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(SettingsError::Io(
            "No timetable.toml found in standard locations".to_string(),
        ))
    }

    /// Validate the settings and build the immutable context.
    ///
    /// # Returns
    /// * `Ok(TimetableContext)` when roster, layout, and unions all validate
    /// * `Err(SettingsError::Invalid)` describing the first violation
    pub fn build_context(self) -> Result<TimetableContext, SettingsError> {
        let roster =
            TeacherRoster::new(self.roster.teachers).map_err(SettingsError::Invalid)?;

        let layout = SheetLayout {
            day_ranges: self
                .layout
                .day_ranges
                .iter()
                .map(|&(start, end)| DayRange::new(start, end))
                .collect(),
            group_label_row: self.layout.group_label_row,
            cohorts: self
                .layout
                .cohorts
                .into_iter()
                .map(|c| CohortLayout {
                    name: c.name,
                    time_column: c.time_column,
                    group_columns: c.group_columns,
                })
                .collect(),
        };
        layout.validate().map_err(SettingsError::Invalid)?;

        let unions = GroupUnionTable::new(
            self.groups
                .unions
                .into_iter()
                .map(|u| GroupUnion {
                    name: u.name,
                    members: u.members,
                })
                .collect(),
        )
        .map_err(SettingsError::Invalid)?;

        let admin_ids = self.notify.admin_ids.into_iter().map(UserId::new).collect();

        Ok(TimetableContext {
            roster,
            layout,
            unions,
            admin_ids,
        })
    }
}
