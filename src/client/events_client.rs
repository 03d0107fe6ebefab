//! HTTP implementation of the five event operations.

use async_trait::async_trait;
use reqwest::Response;

use crate::config::ClientConfig;
use crate::domain::{Event, EventRequest, Page};
use crate::error::{ApiError, ErrorBody};

use super::EventsApi;

/// Stateless HTTP client for the `/api/events` resource.
///
/// Holds only a shared `reqwest::Client` and the resource URL; safe to
/// clone and share across views. Every operation is a single round trip:
/// no retry, no caching. Freshness is the caller's decision via explicit
/// reload.
#[derive(Debug, Clone)]
pub struct EventsClient {
    http: reqwest::Client,
    events_url: String,
}

impl EventsClient {
    /// Creates a client from configuration, applying the configured
    /// request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.http_timeout_secs))
            .build()?;
        Ok(Self::with_http(http, &config.base_url))
    }

    /// Creates a client over an existing `reqwest::Client`.
    #[must_use]
    pub fn with_http(http: reqwest::Client, base_url: &str) -> Self {
        let events_url = format!("{}/api/events", base_url.trim_end_matches('/'));
        Self { http, events_url }
    }

    /// Resolves an error response into the matching [`ApiError`] variant,
    /// consuming whatever structured body the backend attached.
    async fn classify_failure(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.json::<ErrorBody>().await.ok();
        ApiError::from_status(status, body)
    }

    /// Decodes a success body, or classifies the failure.
    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.status().is_success() {
            Ok(response.json::<T>().await?)
        } else {
            Err(Self::classify_failure(response).await)
        }
    }
}

#[async_trait]
impl EventsApi for EventsClient {
    async fn list(&self, page: u32, size: u32) -> Result<Page<Event>, ApiError> {
        tracing::debug!(page, size, "listing events");
        let response = self
            .http
            .get(&self.events_url)
            .query(&[("page", page), ("size", size)])
            .send()
            .await?;
        Self::read_json(response).await.inspect_err(|err| {
            tracing::warn!(page, size, %err, "list failed");
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Event, ApiError> {
        tracing::debug!(id, "fetching event");
        let response = self
            .http
            .get(format!("{}/{id}", self.events_url))
            .send()
            .await?;
        Self::read_json(response).await.inspect_err(|err| {
            tracing::warn!(id, %err, "fetch failed");
        })
    }

    async fn create(&self, draft: &EventRequest) -> Result<Event, ApiError> {
        tracing::debug!(title = %draft.title, "creating event");
        let response = self
            .http
            .post(&self.events_url)
            .json(draft)
            .send()
            .await?;
        let created: Event = Self::read_json(response).await.inspect_err(|err| {
            tracing::warn!(%err, "create failed");
        })?;
        tracing::info!(id = ?created.id, "event created");
        Ok(created)
    }

    async fn update(&self, id: i64, draft: &EventRequest) -> Result<Event, ApiError> {
        tracing::debug!(id, "updating event");
        let response = self
            .http
            .put(format!("{}/{id}", self.events_url))
            .json(draft)
            .send()
            .await?;
        let updated: Event = Self::read_json(response).await.inspect_err(|err| {
            tracing::warn!(id, %err, "update failed");
        })?;
        tracing::info!(id, "event updated");
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        tracing::debug!(id, "deleting event");
        let response = self
            .http
            .delete(format!("{}/{id}", self.events_url))
            .send()
            .await?;
        if response.status().is_success() {
            tracing::info!(id, "event deleted");
            Ok(())
        } else {
            let err = Self::classify_failure(response).await;
            tracing::warn!(id, %err, "delete failed");
            Err(err)
        }
    }
}
