//! # events-client
//!
//! Typed async client and view-state tracking for the events REST API.
//!
//! This crate turns caller intent (load page N, submit a form, delete an
//! item) into HTTP calls against the `/api/events` backend, tracks the
//! asynchronous lifecycle of each call, and exposes a small, deterministic
//! set of view states so presentation code never has to reason about race
//! conditions or partial failures.
//!
//! ## Architecture
//!
//! ```text
//! Presentation (out of scope)
//!     │
//!     ├── EventPager / EventForm (view/)
//!     ├── RequestSlot + RequestState (view/)
//!     │
//!     ├── FormValidator (form/)
//!     │
//!     ├── EventsApi / EventsClient (client/)
//!     │
//!     └── events backend (/api/events)
//! ```
//!
//! Views own their [`view::RequestSlot`] exclusively; the
//! [`client::EventsClient`] is stateless and shared. Every `begin` on a slot
//! supersedes any in-flight request for the same slot, so the latest issued
//! request is the only one allowed to apply its result.

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod view;
