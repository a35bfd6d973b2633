//! Teacher roster and name normalization.
//!
//! The roster is deployment configuration: the ordered list of teacher
//! display names the extractor scans for. Cell text in the workbook is
//! hand-typed, so matching goes through one normalization function applied
//! symmetrically to both sides.

use serde::{Deserialize, Serialize};

/// Normalize a display name for matching.
///
/// Lower-cases and strips everything that is not alphanumeric, so
/// "Tajieva A." and "tajieva a" normalize identically.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Whether `cell_text` mentions `name`, compared in normalized form.
pub fn cell_mentions_name(cell_text: &str, name: &str) -> bool {
    let needle = normalize_name(name);
    if needle.is_empty() {
        return false;
    }
    normalize_name(cell_text).contains(&needle)
}

/// Ordered list of teacher display names, fixed at deployment time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherRoster {
    names: Vec<String>,
}

impl TeacherRoster {
    /// Build a roster, dropping blank entries.
    ///
    /// # Returns
    /// * `Ok(TeacherRoster)` with at least one usable name
    /// * `Err(String)` if the roster is effectively empty
    pub fn new(names: Vec<String>) -> Result<Self, String> {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !normalize_name(n).is_empty())
            .collect();

        if names.is_empty() {
            return Err("Teacher roster is empty".to_string());
        }

        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Roster entry matching `display_name` under normalization, if any.
    pub fn find(&self, display_name: &str) -> Option<&str> {
        let needle = normalize_name(display_name);
        self.names
            .iter()
            .find(|n| normalize_name(n) == needle)
            .map(|n| n.as_str())
    }
}
