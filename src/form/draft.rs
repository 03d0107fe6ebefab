//! In-progress, not-yet-submitted event form value.

use chrono::{DateTime, Utc};

use crate::domain::{Event, EventRequest};

use super::validate::{FieldError, validate_at};

/// Raw form fields as typed by the user, pre-validation.
///
/// All fields are plain text; `event_at` in particular stays a string
/// until a successful [`EventDraft::to_request`], so an unparseable
/// instant is a validation result rather than a construction failure, and
/// the user's input survives any failed submission untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    /// Title text.
    pub title: String,
    /// Description text; empty means "no description".
    pub description: String,
    /// Event instant as an RFC 3339 string.
    pub event_at: String,
    /// Venue text.
    pub location: String,
}

impl EventDraft {
    /// Pre-fills a draft from an existing event, for the edit flow.
    #[must_use]
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            event_at: event.event_at.to_rfc3339(),
            location: event.location.clone(),
        }
    }

    /// Validates against the given instant and converts into the write
    /// payload. An empty description becomes `None` on the wire.
    ///
    /// # Errors
    ///
    /// Returns the full set of [`FieldError`]s when any rule is broken;
    /// the draft itself is left untouched.
    pub fn to_request(&self, now: DateTime<Utc>) -> Result<EventRequest, Vec<FieldError>> {
        let errors = validate_at(self, now);
        if !errors.is_empty() {
            return Err(errors);
        }
        let Ok(event_at) = DateTime::parse_from_rfc3339(self.event_at.trim()) else {
            // validate_at already parsed this; reaching here means the
            // draft changed between the two calls.
            return Err(vec![FieldError {
                field: super::validate::Field::EventAt,
                violation: super::validate::Violation::InvalidTimestamp,
            }]);
        };
        let description = {
            let trimmed = self.description.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };
        Ok(EventRequest {
            title: self.title.trim().to_string(),
            description,
            event_at: event_at.with_timezone(&Utc),
            location: self.location.trim().to_string(),
        })
    }
}
