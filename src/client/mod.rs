//! Resource client: the sole boundary between this crate and the backend.
//!
//! [`EventsApi`] is the trait the view layer is written against;
//! [`EventsClient`] is its HTTP implementation. Tests drive the view layer
//! with in-memory implementations of the same trait.

pub mod events_client;

use async_trait::async_trait;

use crate::domain::{Event, EventRequest, Page};
use crate::error::ApiError;

pub use events_client::EventsClient;

/// The five operations of the events resource.
///
/// Implementations never recover errors: every failure surfaces as a typed
/// [`ApiError`] for the caller to interpret.
#[async_trait]
pub trait EventsApi: Send + Sync + std::fmt::Debug {
    /// Lists events with pagination. `page` is zero-based.
    ///
    /// # Errors
    ///
    /// [`ApiError::Transport`] on network failure, [`ApiError::Server`] on
    /// HTTP ≥500, [`ApiError::Client`] on other 4xx.
    async fn list(&self, page: u32, size: u32) -> Result<Page<Event>, ApiError>;

    /// Fetches a single event by id.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] if the event is absent or soft-deleted, else
    /// as for [`EventsApi::list`].
    async fn get_by_id(&self, id: i64) -> Result<Event, ApiError>;

    /// Creates a new event from the given payload.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] on HTTP 400/422 carrying server-reported
    /// field errors, else as for [`EventsApi::list`].
    async fn create(&self, draft: &EventRequest) -> Result<Event, ApiError>;

    /// Updates an existing event.
    ///
    /// # Errors
    ///
    /// As for [`EventsApi::create`], plus [`ApiError::NotFound`].
    async fn update(&self, id: i64, draft: &EventRequest) -> Result<Event, ApiError>;

    /// Soft-deletes an event. The resource disappears from subsequent
    /// `list`/`get_by_id` results; the caller reloads rather than mutating
    /// any local copy.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] or [`ApiError::Server`].
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}
