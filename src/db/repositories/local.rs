//! In-memory repository for unit testing and local development.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{RecipientDirectory, RecipientProfile, ScheduleRecord, SnapshotName, UserId};
use crate::db::repository::{
    FullRepository, RecipientRepository, RepositoryResult, SnapshotRepository,
};

/// In-memory [`FullRepository`] implementation.
///
/// Snapshot replacement happens under a single write lock, so readers see
/// either the fully-old or fully-new record set, matching the atomicity the
/// production store guarantees.
#[derive(Debug, Default)]
pub struct LocalRepository {
    snapshots: RwLock<HashMap<SnapshotName, Vec<ScheduleRecord>>>,
    recipients: RwLock<RecipientDirectory>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored under `name`.
    pub fn snapshot_len(&self, name: SnapshotName) -> usize {
        self.snapshots
            .read()
            .get(&name)
            .map(|records| records.len())
            .unwrap_or(0)
    }
}

#[async_trait]
impl SnapshotRepository for LocalRepository {
    async fn save_snapshot(
        &self,
        name: SnapshotName,
        records: &[ScheduleRecord],
    ) -> RepositoryResult<()> {
        let mut snapshots = self.snapshots.write();
        let previous = snapshots.insert(name, records.to_vec());
        log::debug!(
            "Replaced snapshot '{}': {} -> {} records",
            name,
            previous.map(|p| p.len()).unwrap_or(0),
            records.len()
        );
        Ok(())
    }

    async fn load_snapshot(&self, name: SnapshotName) -> RepositoryResult<Vec<ScheduleRecord>> {
        Ok(self
            .snapshots
            .read()
            .get(&name)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl RecipientRepository for LocalRepository {
    async fn load_recipients(&self) -> RepositoryResult<RecipientDirectory> {
        Ok(self.recipients.read().clone())
    }

    async fn load_recipient(&self, user_id: UserId) -> RepositoryResult<Option<RecipientProfile>> {
        Ok(self.recipients.read().get(&user_id).cloned())
    }

    async fn save_recipient(
        &self,
        user_id: UserId,
        profile: &RecipientProfile,
    ) -> RepositoryResult<()> {
        self.recipients.write().insert(user_id, profile.clone());
        Ok(())
    }
}

#[async_trait]
impl FullRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
