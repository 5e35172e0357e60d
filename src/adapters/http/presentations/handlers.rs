//! Request handlers for the presentation endpoints.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;

use crate::domain::{
    OptionRecord, Poll, PollId, PollOption, PollRecord, Presentation, PresentationId,
    PresentationRecord, Vote,
};
use crate::ports::{
    CreatorError, PresentationCreator, PresentationStore, StoreError, UpstreamResponse,
};

use super::dto::ErrorResponse;

// ════════════════════════════════════════════════════════════════════════════
// State
// ════════════════════════════════════════════════════════════════════════════

/// Shared handler state: the storage and creation ports.
#[derive(Clone)]
pub struct PresentationAppState {
    pub store: Arc<dyn PresentationStore>,
    pub creator: Arc<dyn PresentationCreator>,
}

impl PresentationAppState {
    pub fn new(
        store: Arc<dyn PresentationStore>,
        creator: Arc<dyn PresentationCreator>,
    ) -> Self {
        Self { store, creator }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /presentations - Create a presentation
///
/// Forwards the raw body to the external creation service first; only a 201
/// commits anything locally. The body is parsed after that round-trip, so a
/// payload the service accepts but we cannot parse leaves the upstream
/// presentation without local rows.
pub async fn create_presentation(
    State(state): State<PresentationAppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let upstream = state.creator.create_presentation(&body).await?;
    if !upstream.is_created() {
        return Err(ApiError::Upstream(upstream.status));
    }

    let presentation_id = created_presentation_id(&upstream)?;

    let request: Presentation = serde_json::from_slice(&body)
        .map_err(|_| ApiError::BadRequest("Invalid request body".to_string()))?;

    state
        .store
        .insert_presentation(&PresentationRecord {
            id: presentation_id,
            current_poll_index: 0,
        })
        .await?;

    for (poll_index, poll) in request.polls.iter().enumerate() {
        let poll_record = PollRecord {
            id: PollId::new(),
            question: poll.question.clone(),
            presentation_id,
            index: poll_index as i32,
        };
        state.store.insert_poll(&poll_record).await?;

        for (option_index, option) in poll.options.iter().enumerate() {
            state
                .store
                .insert_option(&OptionRecord {
                    key: option.key.clone(),
                    value: option.value.clone(),
                    poll_id: poll_record.id,
                    index: option_index as i32,
                })
                .await?;
        }
    }

    Ok((
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "application/json")],
        upstream.body,
    )
        .into_response())
}

/// GET /presentations/:presentation_id/polls/current - Read the live poll
pub async fn get_current_poll(
    State(state): State<PresentationAppState>,
    Path(presentation_id): Path<String>,
) -> Result<Json<Poll>, ApiError> {
    let presentation_id: PresentationId = presentation_id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid presentation ID".to_string()))?;

    let presentation = state
        .store
        .presentation(&presentation_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("No presentation found".to_string()))?;

    let poll = assemble_poll_at(
        state.store.as_ref(),
        &presentation_id,
        presentation.current_poll_index,
    )
    .await?;

    Ok(Json(poll))
}

/// PUT /presentations/:presentation_id/polls/current - Step to the next poll
///
/// Moves the cursor one step forward and returns the poll it now points at.
/// The cursor keeps counting past the last poll, so repeated calls return
/// the empty sentinel rather than wrapping or stopping.
pub async fn advance_current_poll(
    State(state): State<PresentationAppState>,
    Path(presentation_id): Path<String>,
) -> Result<Json<Poll>, ApiError> {
    let presentation_id: PresentationId = presentation_id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid presentation ID".to_string()))?;

    let presentation = state
        .store
        .presentation(&presentation_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("No presentation found".to_string()))?;

    state
        .store
        .set_current_poll_index(&presentation_id, presentation.current_poll_index + 1)
        .await?;

    // Re-read rather than trust the in-memory value, so the response always
    // reflects what the store now holds.
    let updated = state
        .store
        .presentation(&presentation_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("No presentation found".to_string()))?;

    let poll = assemble_poll_at(
        state.store.as_ref(),
        &presentation_id,
        updated.current_poll_index,
    )
    .await?;

    Ok(Json(poll))
}

/// POST /presentations/:presentation_id/polls/current/votes - Cast a vote
///
/// Stores the vote exactly as given. There is no check that the poll exists
/// and no de-duplication per client; every accepted body adds a row.
pub async fn post_vote(
    State(state): State<PresentationAppState>,
    Path(_presentation_id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let vote: Vote = serde_json::from_slice(&body)
        .map_err(|_| ApiError::BadRequest("Invalid request body".to_string()))?;

    state.store.insert_vote(&vote).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /presentations/:presentation_id/polls/:poll_id/votes - List votes
pub async fn get_poll_votes(
    State(state): State<PresentationAppState>,
    Path((_presentation_id, poll_id)): Path<(String, String)>,
) -> Result<Json<Vec<Vote>>, ApiError> {
    let poll_id: PollId = poll_id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid poll ID".to_string()))?;

    let votes = state.store.votes_for_poll(&poll_id).await?;

    Ok(Json(votes))
}

/// Pulls the assigned presentation id out of a 201 response body.
fn created_presentation_id(upstream: &UpstreamResponse) -> Result<PresentationId, ApiError> {
    let body: serde_json::Value = serde_json::from_slice(&upstream.body).map_err(|e| {
        ApiError::Internal(format!("presentation service returned unparseable body: {}", e))
    })?;

    body.get("presentation_id")
        .and_then(|value| value.as_str())
        .and_then(|value| value.parse::<PresentationId>().ok())
        .ok_or_else(|| {
            ApiError::Internal("presentation service response has no presentation_id".to_string())
        })
}

/// Builds the wire poll at `index`, or the empty sentinel when the index
/// points past the stored polls.
async fn assemble_poll_at(
    store: &dyn PresentationStore,
    presentation_id: &PresentationId,
    index: i32,
) -> Result<Poll, ApiError> {
    let polls = store.polls_for_presentation(presentation_id).await?;

    let record = match polls.into_iter().find(|poll| poll.index == index) {
        Some(record) => record,
        None => return Ok(Poll::empty()),
    };

    let mut options = store.options_for_poll(&record.id).await?;
    options.sort_by_key(|option| option.index);

    Ok(Poll {
        poll_id: record.id,
        question: record.question,
        options: options
            .into_iter()
            .map(|option| PollOption {
                key: option.key,
                value: option.value,
            })
            .collect(),
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════

/// Error type for the presentation endpoints.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    /// The creation service answered with a non-201 status.
    Upstream(u16),
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<CreatorError> for ApiError {
    fn from(err: CreatorError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(message)),
            )
                .into_response(),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::not_found(message)),
            )
                .into_response(),
            ApiError::Upstream(code) => {
                tracing::warn!(status = code, "presentation service rejected the request");
                let status = StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY);
                (
                    status,
                    Json(ErrorResponse::upstream("Failed to create presentation")),
                )
                    .into_response()
            }
            ApiError::Internal(message) => {
                tracing::error!(%message, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::internal("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}
