//! Reference profile storage trait.

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::ReferenceProfile;

/// Storage abstraction for reference profiles.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch one live profile by id.
    ///
    /// # Errors
    ///
    /// `CoreError::ProfileNotFound` if no live profile has this id
    /// (soft-deleted profiles count as absent).
    async fn profile_by_id(&self, id: i64) -> CoreResult<ReferenceProfile>;

    /// Snapshot of every non-deleted profile, ordered ascending by id.
    ///
    /// Ascending id is contractual: it makes the nearest-search
    /// first-wins tie-break reproducible across runs. An empty snapshot
    /// is valid and yields a no-match search result.
    async fn all_profiles(&self) -> CoreResult<Vec<ReferenceProfile>>;
}
