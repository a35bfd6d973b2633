//! Persistence boundary for snapshots and recipient profiles.
//!
//! This module provides abstractions for the external store via the
//! Repository pattern, allowing different storage backends to be swapped
//! easily. The durable relational backend lives outside this crate and
//! implements the same traits; the in-memory `LocalRepository` backs unit
//! tests and local development.

pub mod checksum;
pub mod factory;
pub mod repositories;
pub mod repository;

pub use checksum::{calculate_checksum, snapshot_checksum};
pub use factory::{RepositoryFactory, RepositoryType};
#[cfg(feature = "local-repo")]
pub use repositories::LocalRepository;
pub use repository::{
    FullRepository, RecipientRepository, RepositoryError, RepositoryResult, SnapshotRepository,
};
