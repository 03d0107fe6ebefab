//! Create/edit flow for a single event.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::client::EventsApi;
use crate::domain::Event;
use crate::form::{EventDraft, FieldError};

use super::slot::RequestSlot;
use super::RequestState;

/// Drives the create/edit form over one [`RequestSlot`].
///
/// Owns the draft the user is typing into. Submission re-validates at call
/// time, since the future-instant rule can expire between keystroke and
/// click. A rejected or failed submission never resets the draft, so the
/// user resubmits without re-typing.
#[derive(Debug)]
pub struct EventForm {
    api: Arc<dyn EventsApi>,
    slot: RequestSlot<Event>,
    draft: RwLock<EventDraft>,
    target: Option<i64>,
}

impl EventForm {
    /// Creates a form for a new event.
    #[must_use]
    pub fn for_create(api: Arc<dyn EventsApi>) -> Self {
        Self {
            api,
            slot: RequestSlot::new(),
            draft: RwLock::new(EventDraft::default()),
            target: None,
        }
    }

    /// Creates a form editing the event with the given id. Call
    /// [`EventForm::load`] to pre-fill the draft.
    #[must_use]
    pub fn for_edit(api: Arc<dyn EventsApi>, id: i64) -> Self {
        Self {
            api,
            slot: RequestSlot::new(),
            draft: RwLock::new(EventDraft::default()),
            target: Some(id),
        }
    }

    /// `true` when this form updates an existing event.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.target.is_some()
    }

    /// Snapshot of the slot state for rendering.
    pub async fn state(&self) -> RequestState<Event> {
        self.slot.state().await
    }

    /// Snapshot of the current draft.
    pub async fn draft(&self) -> EventDraft {
        self.draft.read().await.clone()
    }

    /// Replaces the draft with edited field values.
    pub async fn set_draft(&self, draft: EventDraft) {
        *self.draft.write().await = draft;
    }

    /// Validates the current draft against "now".
    pub async fn validate(&self) -> Vec<FieldError> {
        crate::form::validate(&*self.draft.read().await)
    }

    /// Edit mode only: fetches the target event and pre-fills the draft.
    /// A no-op for create forms.
    pub async fn load(&self) {
        let Some(id) = self.target else {
            return;
        };
        let state = self.slot.track(self.api.get_by_id(id)).await;
        if let RequestState::Success(event) = state {
            *self.draft.write().await = EventDraft::from_event(&event);
        }
    }

    /// Re-validates the draft and, when clean, issues the create or update
    /// call through the slot.
    ///
    /// # Errors
    ///
    /// Returns the violations when validation fails; no HTTP call is made
    /// and the slot is left untouched. Transport and backend failures show
    /// up as the returned `Failure` state instead, with the draft intact.
    pub async fn submit(&self) -> Result<RequestState<Event>, Vec<FieldError>> {
        let draft = self.draft().await;
        let request = draft.to_request(Utc::now())?;
        let state = match self.target {
            Some(id) => self.slot.track(self.api.update(id, &request)).await,
            None => self.slot.track(self.api.create(&request)).await,
        };
        Ok(state)
    }
}
