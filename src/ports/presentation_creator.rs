//! Port for the external presentation-creation service.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by creation adapters.
#[derive(Debug, Clone, Error)]
pub enum CreatorError {
    #[error("presentation service unreachable: {0}")]
    Transport(String),

    #[error("failed to read presentation service response: {0}")]
    Response(String),
}

/// What the creation service answered: its status code and raw body.
///
/// The body is kept as bytes because a successful response is relayed to the
/// client verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    /// Whether the service accepted the presentation.
    pub fn is_created(&self) -> bool {
        self.status == 201
    }
}

/// Forwards a raw create-presentation body to the external service.
#[async_trait]
pub trait PresentationCreator: Send + Sync {
    /// Sends `body` unmodified and returns the service's status and body.
    ///
    /// Only transport-level failures are errors; any HTTP status is a
    /// successful call from this trait's point of view.
    async fn create_presentation(&self, body: &[u8]) -> Result<UpstreamResponse, CreatorError>;
}
