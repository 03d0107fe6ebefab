//! View layer: request lifecycle tracking and the flows built on it.
//!
//! [`RequestSlot`] is the single generalized async-operation tracker every
//! flow uses: list, detail, and form share one lifecycle model instead of
//! per-view loading/error flags. [`EventPager`] and [`EventForm`] compose a
//! slot with the client for the two stateful flows; a detail view uses a
//! bare slot directly:
//!
//! ```no_run
//! # async fn example(api: std::sync::Arc<dyn events_client::client::EventsApi>) {
//! use events_client::view::RequestSlot;
//!
//! let slot = RequestSlot::new();
//! let state = slot.track(api.get_by_id(7)).await;
//! # let _ = state;
//! # }
//! ```

pub mod form;
pub mod pagination;
pub mod request_state;
pub mod slot;

pub use form::EventForm;
pub use pagination::EventPager;
pub use request_state::RequestState;
pub use slot::{RequestSlot, Ticket};
