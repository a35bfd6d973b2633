//! Repository traits for the persistence boundary.
//!
//! The durable store (tables of normalized schedule rows and user
//! preference records) lives outside this crate; the core reads and writes
//! it only through these traits. Implementations must be `Send + Sync` to
//! work with async Rust.

use async_trait::async_trait;

use crate::api::{RecipientDirectory, RecipientProfile, ScheduleRecord, SnapshotName, UserId};

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Backend read/write failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration or initialization error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal/unexpected errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Named schedule snapshots, replaced wholesale on every upload.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Replace the named snapshot with `records`.
    ///
    /// The replacement is atomic at this boundary: a concurrent reader sees
    /// either the fully-old or fully-new snapshot, never a partial one.
    async fn save_snapshot(
        &self,
        name: SnapshotName,
        records: &[ScheduleRecord],
    ) -> RepositoryResult<()>;

    /// Load the named snapshot; empty when it has never been saved.
    async fn load_snapshot(&self, name: SnapshotName) -> RepositoryResult<Vec<ScheduleRecord>>;
}

/// Registered-user directory.
#[async_trait]
pub trait RecipientRepository: Send + Sync {
    /// All registered recipient profiles keyed by user id.
    async fn load_recipients(&self) -> RepositoryResult<RecipientDirectory>;

    /// One recipient profile, if registered.
    async fn load_recipient(&self, user_id: UserId) -> RepositoryResult<Option<RecipientProfile>>;

    /// Insert or replace one recipient profile.
    async fn save_recipient(
        &self,
        user_id: UserId,
        profile: &RecipientProfile,
    ) -> RepositoryResult<()>;
}

/// Combined repository surface the services depend on.
#[async_trait]
pub trait FullRepository: SnapshotRepository + RecipientRepository {
    /// Verify the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
