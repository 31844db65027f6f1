//! Answer storage trait.

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::AnswerRecord;

/// Storage abstraction for questionnaire submissions.
///
/// Implementations live outside this crate (the engine ships only test
/// stubs). Failures inside an implementation surface as
/// `CoreError::StorageError` and are propagated unchanged; the engine
/// never retries.
#[async_trait]
pub trait AnswerStore: Send + Sync {
    /// Fetch one submission by id.
    ///
    /// # Errors
    ///
    /// `CoreError::AnswerNotFound` if no submission has this id.
    async fn answer_by_id(&self, id: i64) -> CoreResult<AnswerRecord>;

    /// Fetch a user's most recent submission.
    ///
    /// # Errors
    ///
    /// `CoreError::AnswerNotFound` if the user has not answered yet.
    async fn latest_answer_for_user(&self, user_id: i64) -> CoreResult<AnswerRecord>;

    /// Snapshot of every submission, ordered ascending by id.
    ///
    /// This is the population the statistics operate on; anonymous
    /// submissions are included. An empty snapshot is valid.
    async fn all_answers(&self) -> CoreResult<Vec<AnswerRecord>>;
}
