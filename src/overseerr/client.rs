use crate::config::MediaKind;
use crate::overseerr::types::{MediaDetails, RequestUpdateDocument};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Connection timeout for Overseerr API requests
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(10);

const API_KEY_HEADER: &str = "X-Api-Key";

#[derive(Debug, Error)]
pub enum OverseerrError {
    #[error("Overseerr returned {status} for {path}: {body}")]
    Status {
        status: StatusCode,
        path: String,
        body: String,
    },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Thin client for the Overseerr v1 API.
#[derive(Debug, Clone)]
pub struct OverseerrClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OverseerrClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(CONNECTION_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    async fn check(
        path: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, OverseerrError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(OverseerrError::Status {
            status,
            path: path.to_string(),
            body,
        })
    }

    /// Fetch canonical item details for a movie or series.
    pub async fn get_media_details(
        &self,
        kind: MediaKind,
        tmdb_id: i64,
    ) -> Result<MediaDetails, OverseerrError> {
        let path = format!("/{}/{}", kind, tmdb_id);
        let response = self
            .client
            .get(self.url(&path))
            .query(&[("language", "en")])
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let response = Self::check(&path, response).await?;
        Ok(response.json().await?)
    }

    /// Apply routing/profile/season changes to a request.
    pub async fn update_request(
        &self,
        request_id: i64,
        update: &RequestUpdateDocument,
    ) -> Result<(), OverseerrError> {
        let path = format!("/request/{}", request_id);
        let response = self
            .client
            .put(self.url(&path))
            .header(API_KEY_HEADER, &self.api_key)
            .json(update)
            .send()
            .await?;

        Self::check(&path, response).await?;
        Ok(())
    }

    /// Approve a request.
    pub async fn approve_request(&self, request_id: i64) -> Result<(), OverseerrError> {
        let path = format!("/request/{}/approve", request_id);
        let response = self
            .client
            .post(self.url(&path))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        Self::check(&path, response).await?;
        Ok(())
    }
}
