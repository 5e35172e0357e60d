//! Storage port for presentations, polls, options and votes.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    OptionRecord, PollId, PollRecord, PresentationId, PresentationRecord, Vote,
};

/// Errors surfaced by storage adapters.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("database connection failed: {0}")]
    Connection(String),

    #[error("database query failed: {0}")]
    Query(String),

    #[error("failed to decode row: {0}")]
    Decode(String),
}

/// Persistence operations over the four tables backing a presentation.
///
/// Inserts store exactly the given record. Reads return whatever the store
/// holds; ordering of the returned lists is unspecified and callers sort
/// where the response format requires it.
#[async_trait]
pub trait PresentationStore: Send + Sync {
    async fn insert_presentation(&self, record: &PresentationRecord) -> Result<(), StoreError>;

    async fn insert_poll(&self, record: &PollRecord) -> Result<(), StoreError>;

    async fn insert_option(&self, record: &OptionRecord) -> Result<(), StoreError>;

    async fn insert_vote(&self, vote: &Vote) -> Result<(), StoreError>;

    /// Looks up one presentation row, `None` when no row matches.
    async fn presentation(
        &self,
        id: &PresentationId,
    ) -> Result<Option<PresentationRecord>, StoreError>;

    async fn polls_for_presentation(
        &self,
        presentation_id: &PresentationId,
    ) -> Result<Vec<PollRecord>, StoreError>;

    async fn options_for_poll(&self, poll_id: &PollId) -> Result<Vec<OptionRecord>, StoreError>;

    async fn votes_for_poll(&self, poll_id: &PollId) -> Result<Vec<Vote>, StoreError>;

    /// Sets the current poll index. Matching zero rows is not an error; the
    /// caller is responsible for any existence check it needs.
    async fn set_current_poll_index(
        &self,
        presentation_id: &PresentationId,
        index: i32,
    ) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_trait_is_object_safe() {
        fn assert_object_safe(_: &dyn PresentationStore) {}
        let _ = assert_object_safe;
    }

    #[test]
    fn store_errors_render_their_cause() {
        let err = StoreError::Query("insert poll: connection reset".into());
        assert_eq!(
            err.to_string(),
            "database query failed: insert poll: connection reset"
        );
    }
}
