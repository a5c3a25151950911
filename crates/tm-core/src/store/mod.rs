pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::filter::ProfileFilter;
use crate::Profile;

pub use memory::MemoryProfileStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("profile already exists: {0}")]
    Conflict(String),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Boundary to the profile storage collaborator. The engine only ever needs
/// these three operations; anything durable lives behind this trait.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Persist a fully-built profile. The caller assigns id, photo URL, and
    /// creation timestamp.
    async fn create(&self, profile: Profile) -> Result<Profile, StoreError>;

    /// List stored profiles in insertion order, scanning at most the
    /// configured record bound, then applying `filter` when present.
    async fn list(&self, filter: Option<&ProfileFilter>) -> Result<Vec<Profile>, StoreError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<Profile>, StoreError>;
}
