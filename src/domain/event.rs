//! Event resource model and its write-side request payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An event as exposed by the backend.
///
/// `id` and `created_at` are assigned by the server: both are absent on a
/// not-yet-persisted event and immutable once set. All timestamps are
/// timezone-aware RFC 3339 instants; the client presents them in the local
/// timezone but never alters the instant itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Server-assigned identifier. `None` until persisted.
    #[serde(default)]
    pub id: Option<i64>,
    /// Title, 1..100 characters.
    pub title: String,
    /// Optional free-text description, up to 1000 characters.
    #[serde(default)]
    pub description: Option<String>,
    /// When the event takes place. In the future at creation time.
    pub event_at: DateTime<Utc>,
    /// Venue, 1..200 characters.
    pub location: String,
    /// Server-assigned creation timestamp, read-only.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Write payload for create and update operations.
///
/// Structurally omits `id` and `created_at`, so a client can never supply
/// them: the invariant lives in the type, not in runtime checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    /// Title, 1..100 characters.
    pub title: String,
    /// Optional description; serialized as `null` when absent.
    pub description: Option<String>,
    /// When the event takes place.
    pub event_at: DateTime<Utc>,
    /// Venue, 1..200 characters.
    pub location: String,
}
