//! Group union table: canonical display names for groups taught together.
//!
//! Some sessions merge several physical groups into one block; the published
//! timetable spans their columns with one merged cell. The union table maps
//! each such raw-label set to the canonical display name users register
//! under. Lookups in both directions must be total: a miss composes a
//! deterministic name instead of failing.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Separator used when composing a fallback union name from raw labels.
pub const UNION_SEPARATOR: &str = "-";

/// One configured union: a canonical name standing in for a set of raw
/// group labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupUnion {
    pub name: String,
    pub members: Vec<String>,
}

/// Bidirectional canonical-name table for group unions.
#[derive(Debug, Clone, Default)]
pub struct GroupUnionTable {
    by_members: HashMap<BTreeSet<String>, String>,
    by_name: HashMap<String, BTreeSet<String>>,
}

impl GroupUnionTable {
    /// Build the table from configured unions.
    ///
    /// # Returns
    /// * `Ok(GroupUnionTable)` if names and member sets are unique
    /// * `Err(String)` when a canonical name or raw-label set repeats
    pub fn new(unions: Vec<GroupUnion>) -> Result<Self, String> {
        let mut by_members = HashMap::new();
        let mut by_name = HashMap::new();

        for union in unions {
            if union.members.is_empty() {
                return Err(format!("Union '{}' has no members", union.name));
            }

            let members: BTreeSet<String> = union.members.into_iter().collect();

            if by_name.contains_key(&union.name) {
                return Err(format!("Duplicate union name '{}'", union.name));
            }
            if let Some(existing) = by_members.get(&members) {
                return Err(format!(
                    "Member set of union '{}' already mapped to '{}'",
                    union.name, existing
                ));
            }

            by_members.insert(members.clone(), union.name.clone());
            by_name.insert(union.name, members);
        }

        Ok(Self {
            by_members,
            by_name,
        })
    }

    /// Resolve a set of raw group labels to its canonical display name.
    ///
    /// Exact-set lookup against the configured unions; on miss the sorted
    /// labels are joined with [`UNION_SEPARATOR`]. Total and independent of
    /// input ordering.
    pub fn resolve(&self, raw_labels: &BTreeSet<String>) -> String {
        if let Some(name) = self.by_members.get(raw_labels) {
            return name.clone();
        }

        raw_labels
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(UNION_SEPARATOR)
    }

    /// Expand a canonical (or composed) label back into raw group labels.
    ///
    /// Known union names expand to their configured members; anything else
    /// splits on [`UNION_SEPARATOR`], which also inverts the composed
    /// fallback of [`resolve`](Self::resolve). A plain raw label expands to
    /// itself.
    pub fn expand(&self, label: &str) -> BTreeSet<String> {
        if let Some(members) = self.by_name.get(label) {
            return members.clone();
        }

        label
            .split(UNION_SEPARATOR)
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .collect()
    }

    /// Whether `label` is a configured canonical union name.
    pub fn contains_name(&self, label: &str) -> bool {
        self.by_name.contains_key(label)
    }
}
