//! In-memory stub implementations of the storage traits.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::{AnswerStore, ProfileStore};
use crate::types::{AnswerRecord, ReferenceProfile};

/// In-memory answer store.
///
/// A `BTreeMap` behind an `RwLock`: snapshots come out ascending by id for
/// free, matching the ordering contract of [`AnswerStore::all_answers`].
#[derive(Debug, Default)]
pub struct InMemoryAnswerStore {
    answers: Arc<RwLock<BTreeMap<i64, AnswerRecord>>>,
}

impl InMemoryAnswerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            answers: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Insert or replace a record.
    pub async fn insert(&self, record: AnswerRecord) {
        let mut answers = self.answers.write().await;
        answers.insert(record.id, record);
    }
}

#[async_trait]
impl AnswerStore for InMemoryAnswerStore {
    async fn answer_by_id(&self, id: i64) -> CoreResult<AnswerRecord> {
        let answers = self.answers.read().await;
        answers
            .get(&id)
            .cloned()
            .ok_or(CoreError::AnswerNotFound { id })
    }

    async fn latest_answer_for_user(&self, user_id: i64) -> CoreResult<AnswerRecord> {
        let answers = self.answers.read().await;
        answers
            .values()
            .filter(|record| record.user_id == Some(user_id))
            .max_by_key(|record| record.created_at)
            .cloned()
            .ok_or(CoreError::AnswerNotFound { id: user_id })
    }

    async fn all_answers(&self) -> CoreResult<Vec<AnswerRecord>> {
        let answers = self.answers.read().await;
        Ok(answers.values().cloned().collect())
    }
}

/// In-memory profile store with soft-delete filtering in reads.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: Arc<RwLock<BTreeMap<i64, ReferenceProfile>>>,
}

impl InMemoryProfileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Insert or replace a profile.
    pub async fn insert(&self, profile: ReferenceProfile) {
        let mut profiles = self.profiles.write().await;
        profiles.insert(profile.id, profile);
    }

    /// Soft-delete a profile. Returns false if the id is unknown.
    pub async fn mark_deleted(&self, id: i64) -> bool {
        let mut profiles = self.profiles.write().await;
        match profiles.get_mut(&id) {
            Some(profile) => {
                profile.deleted = true;
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn profile_by_id(&self, id: i64) -> CoreResult<ReferenceProfile> {
        let profiles = self.profiles.read().await;
        profiles
            .get(&id)
            .filter(|profile| !profile.deleted)
            .cloned()
            .ok_or(CoreError::ProfileNotFound { id })
    }

    async fn all_profiles(&self) -> CoreResult<Vec<ReferenceProfile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles
            .values()
            .filter(|profile| !profile.deleted)
            .cloned()
            .collect())
    }
}
