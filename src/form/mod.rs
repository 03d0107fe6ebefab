//! Form layer: the event draft and its pure validation rules.
//!
//! Nothing here touches the transport. [`validate`] runs over an
//! [`EventDraft`] as often as the caller likes; [`EventDraft::to_request`]
//! is the single gate between typed-in text and the wire payload.

pub mod draft;
pub mod validate;

pub use draft::EventDraft;
pub use validate::{Field, FieldError, Violation, validate, validate_at};
