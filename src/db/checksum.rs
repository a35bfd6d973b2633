//! Checksum calculation for upload deduplication.

use sha2::{Digest, Sha256};

use crate::api::ScheduleRecord;

/// Calculate SHA-256 checksum of raw uploaded workbook bytes.
///
/// # Arguments
/// * `content` - Raw bytes of the uploaded file
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let result = hasher.finalize();
    hex::encode(result)
}

/// Checksum of a normalized record set, for detecting no-op re-uploads of
/// an equivalent snapshot independent of the source file's byte layout.
pub fn snapshot_checksum(records: &[ScheduleRecord]) -> String {
    let json = serde_json::to_string(records).unwrap_or_default();
    calculate_checksum(json.as_bytes())
}
