//! Pure validation rules over an event draft.
//!
//! [`validate`] has no side effects and is cheap enough to run on every
//! keystroke. The future-instant rule is time-dependent: a draft that was
//! valid when typed can become invalid while submission is delayed, so
//! callers re-validate immediately before a create/update fires rather
//! than only at field blur.

use chrono::{DateTime, Utc};

use super::draft::EventDraft;

/// Maximum title length in characters.
pub const TITLE_MAX: usize = 100;
/// Maximum description length in characters.
pub const DESCRIPTION_MAX: usize = 1000;
/// Maximum location length in characters.
pub const LOCATION_MAX: usize = 200;

/// The draft field a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The event title.
    Title,
    /// The free-text description.
    Description,
    /// The event instant.
    EventAt,
    /// The venue.
    Location,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::EventAt => "eventAt",
            Self::Location => "location",
        };
        f.write_str(name)
    }
}

/// A single broken rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The field may not be empty.
    Required,
    /// The field exceeds its maximum length.
    TooLong {
        /// The allowed maximum in characters.
        max: usize,
    },
    /// The field does not parse as an RFC 3339 timestamp.
    InvalidTimestamp,
    /// The instant is not strictly in the future.
    NotInFuture,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => f.write_str("is required"),
            Self::TooLong { max } => write!(f, "must be at most {max} characters"),
            Self::InvalidTimestamp => f.write_str("is not a valid timestamp"),
            Self::NotInFuture => f.write_str("must be in the future"),
        }
    }
}

/// A field paired with the rule it breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// The offending field.
    pub field: Field,
    /// The broken rule.
    pub violation: Violation,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.violation)
    }
}

/// Validates a draft against "now" evaluated at call time.
///
/// Rules are independent; violations for several fields may be returned
/// together, at most one per field. An empty result means the draft is
/// submittable.
#[must_use]
pub fn validate(draft: &EventDraft) -> Vec<FieldError> {
    validate_at(draft, Utc::now())
}

/// [`validate`] with an explicit reference instant for the future check.
#[must_use]
pub fn validate_at(draft: &EventDraft, now: DateTime<Utc>) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if let Some(violation) = check_required_text(&draft.title, TITLE_MAX) {
        errors.push(FieldError {
            field: Field::Title,
            violation,
        });
    }

    if draft.description.chars().count() > DESCRIPTION_MAX {
        errors.push(FieldError {
            field: Field::Description,
            violation: Violation::TooLong {
                max: DESCRIPTION_MAX,
            },
        });
    }

    if let Some(violation) = check_event_at(&draft.event_at, now) {
        errors.push(FieldError {
            field: Field::EventAt,
            violation,
        });
    }

    if let Some(violation) = check_required_text(&draft.location, LOCATION_MAX) {
        errors.push(FieldError {
            field: Field::Location,
            violation,
        });
    }

    errors
}

fn check_required_text(value: &str, max: usize) -> Option<Violation> {
    if value.trim().is_empty() {
        Some(Violation::Required)
    } else if value.chars().count() > max {
        Some(Violation::TooLong { max })
    } else {
        None
    }
}

fn check_event_at(value: &str, now: DateTime<Utc>) -> Option<Violation> {
    if value.trim().is_empty() {
        return Some(Violation::Required);
    }
    let Ok(instant) = DateTime::parse_from_rfc3339(value.trim()) else {
        return Some(Violation::InvalidTimestamp);
    };
    if instant.with_timezone(&Utc) <= now {
        return Some(Violation::NotInFuture);
    }
    None
}
