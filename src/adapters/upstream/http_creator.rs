//! reqwest-based implementation of the presentation creator.

use async_trait::async_trait;
use reqwest::Client;

use crate::ports::{CreatorError, PresentationCreator, UpstreamResponse};

/// Forwards create requests to the hosted presentation service.
pub struct HttpPresentationCreator {
    base_url: String,
    client: Client,
}

impl HttpPresentationCreator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    fn presentations_url(&self) -> String {
        format!("{}/presentations", self.base_url)
    }
}

#[async_trait]
impl PresentationCreator for HttpPresentationCreator {
    async fn create_presentation(&self, body: &[u8]) -> Result<UpstreamResponse, CreatorError> {
        let response = self
            .client
            .post(self.presentations_url())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_vec())
            .send()
            .await
            .map_err(|e| CreatorError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| CreatorError::Response(e.to_string()))?;

        Ok(UpstreamResponse {
            status,
            body: body.to_vec(),
        })
    }
}
