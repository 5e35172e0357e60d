//! Route configuration for presentation endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    advance_current_poll, create_presentation, get_current_poll, get_poll_votes, post_vote,
    PresentationAppState,
};

/// Creates the presentation router; state is attached by the caller.
///
/// Routes:
/// - `POST /presentations` - Create a presentation
/// - `GET /presentations/:presentation_id/polls/current` - Read the live poll
/// - `PUT /presentations/:presentation_id/polls/current` - Step to the next poll
/// - `POST /presentations/:presentation_id/polls/current/votes` - Cast a vote
/// - `GET /presentations/:presentation_id/polls/:poll_id/votes` - List votes
pub fn presentation_router() -> Router<PresentationAppState> {
    Router::new()
        .route("/presentations", post(create_presentation))
        .route(
            "/presentations/:presentation_id/polls/current",
            get(get_current_poll).put(advance_current_poll),
        )
        .route(
            "/presentations/:presentation_id/polls/current/votes",
            post(post_vote),
        )
        .route(
            "/presentations/:presentation_id/polls/:poll_id/votes",
            get(get_poll_votes),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        OptionRecord, PollId, PollRecord, PresentationId, PresentationRecord, Vote,
    };
    use crate::ports::{
        CreatorError, PresentationCreator, PresentationStore, StoreError, UpstreamResponse,
    };
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    // ───────────────────────────────────────────────────────────────
    // Mock implementations (minimal for route testing)
    // ───────────────────────────────────────────────────────────────

    struct EmptyStore;

    #[async_trait]
    impl PresentationStore for EmptyStore {
        async fn insert_presentation(&self, _: &PresentationRecord) -> Result<(), StoreError> {
            Ok(())
        }

        async fn insert_poll(&self, _: &PollRecord) -> Result<(), StoreError> {
            Ok(())
        }

        async fn insert_option(&self, _: &OptionRecord) -> Result<(), StoreError> {
            Ok(())
        }

        async fn insert_vote(&self, _: &Vote) -> Result<(), StoreError> {
            Ok(())
        }

        async fn presentation(
            &self,
            _: &PresentationId,
        ) -> Result<Option<PresentationRecord>, StoreError> {
            Ok(None)
        }

        async fn polls_for_presentation(
            &self,
            _: &PresentationId,
        ) -> Result<Vec<PollRecord>, StoreError> {
            Ok(vec![])
        }

        async fn options_for_poll(&self, _: &PollId) -> Result<Vec<OptionRecord>, StoreError> {
            Ok(vec![])
        }

        async fn votes_for_poll(&self, _: &PollId) -> Result<Vec<Vote>, StoreError> {
            Ok(vec![])
        }

        async fn set_current_poll_index(
            &self,
            _: &PresentationId,
            _: i32,
        ) -> Result<(), StoreError> {
            Ok(())
        }
    }

    struct RejectingCreator;

    #[async_trait]
    impl PresentationCreator for RejectingCreator {
        async fn create_presentation(&self, _: &[u8]) -> Result<UpstreamResponse, CreatorError> {
            Ok(UpstreamResponse {
                status: 400,
                body: Vec::new(),
            })
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Tests
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn presentation_router_mounts_current_poll_endpoint() {
        let state =
            PresentationAppState::new(Arc::new(EmptyStore), Arc::new(RejectingCreator));
        let app = presentation_router().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!(
                        "/presentations/{}/polls/current",
                        PresentationId::new()
                    ))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // A body with the handler's envelope (rather than the bare 404 a
        // route miss produces) proves the route is mounted.
        assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "No presentation found");
    }

    #[tokio::test]
    async fn presentation_router_mounts_votes_endpoint() {
        let state =
            PresentationAppState::new(Arc::new(EmptyStore), Arc::new(RejectingCreator));
        let app = presentation_router().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!(
                        "/presentations/{}/polls/{}/votes",
                        PresentationId::new(),
                        PollId::new()
                    ))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }
}
