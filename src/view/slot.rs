//! One logical, independently tracked asynchronous operation.
//!
//! [`RequestSlot`] wraps a single [`RequestState`] behind a
//! [`tokio::sync::RwLock`] together with a generation counter. Every
//! [`RequestSlot::begin`] bumps the generation and hands back a single-use
//! [`Ticket`]; a completion is applied only while its ticket's generation
//! still matches, so of several overlapping requests on the same slot only
//! the most recently issued one may publish its result.

use std::future::Future;

use tokio::sync::RwLock;

use crate::error::ApiError;

use super::RequestState;

/// Single-use proof that a request was started on a slot.
///
/// Not `Clone`: consuming the ticket in [`RequestSlot::resolve`] makes a
/// double resolution unrepresentable.
#[derive(Debug)]
pub struct Ticket {
    generation: u64,
}

#[derive(Debug)]
struct SlotInner<T> {
    state: RequestState<T>,
    generation: u64,
}

/// Tracks the lifecycle of one logical operation owned by a view.
///
/// The lock is never held across an await of the underlying operation, so
/// overlapping `track` calls interleave freely; ordering is enforced by the
/// generation counter alone. The network call behind a superseded request
/// is not cancelled; only its effect is suppressed.
#[derive(Debug)]
pub struct RequestSlot<T> {
    inner: RwLock<SlotInner<T>>,
}

impl<T: Clone> RequestSlot<T> {
    /// Creates a slot in the `Idle` state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(SlotInner {
                state: RequestState::Idle,
                generation: 0,
            }),
        }
    }

    /// Starts a new request: transitions any state to `Loading` and
    /// supersedes whatever was in flight.
    pub async fn begin(&self) -> Ticket {
        let mut inner = self.inner.write().await;
        inner.generation += 1;
        inner.state = RequestState::Loading;
        Ticket {
            generation: inner.generation,
        }
    }

    /// Applies a completion to the slot if its ticket is still current.
    ///
    /// Returns `true` if the result was applied, `false` if it belonged to
    /// a superseded request and was discarded. The discard is deliberate
    /// suppression, not an error.
    pub async fn resolve(&self, ticket: Ticket, outcome: Result<T, ApiError>) -> bool {
        let mut inner = self.inner.write().await;
        if ticket.generation != inner.generation {
            tracing::debug!(
                stale = ticket.generation,
                current = inner.generation,
                "discarding superseded completion"
            );
            return false;
        }
        inner.state = match outcome {
            Ok(value) => RequestState::Success(value),
            Err(err) => RequestState::Failure(err.display_message()),
        };
        true
    }

    /// Runs one operation through the slot: begin, await, resolve.
    ///
    /// Returns the slot's state afterwards, which reflects this operation's
    /// outcome unless a later `begin` superseded it mid-flight.
    pub async fn track<F>(&self, operation: F) -> RequestState<T>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let ticket = self.begin().await;
        let outcome = operation.await;
        self.resolve(ticket, outcome).await;
        self.state().await
    }

    /// Returns a snapshot of the current state.
    pub async fn state(&self) -> RequestState<T> {
        self.inner.read().await.state.clone()
    }
}

impl<T: Clone> Default for RequestSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn begin_moves_any_state_to_loading() {
        let slot: RequestSlot<u32> = RequestSlot::new();
        assert_eq!(slot.state().await, RequestState::Idle);

        let ticket = slot.begin().await;
        assert!(slot.state().await.is_loading());
        assert!(slot.resolve(ticket, Ok(1)).await);
        assert_eq!(slot.state().await, RequestState::Success(1));

        // Re-entrant from Success
        let ticket = slot.begin().await;
        assert!(slot.state().await.is_loading());
        let failure = ApiError::from_status(503, None);
        assert!(slot.resolve(ticket, Err(failure)).await);
        assert_eq!(
            slot.state().await,
            RequestState::Failure("server error".to_string())
        );

        // Re-entrant from Failure
        let _ = slot.begin().await;
        assert!(slot.state().await.is_loading());
    }

    #[tokio::test]
    async fn stale_completion_is_discarded() {
        let slot: RequestSlot<u32> = RequestSlot::new();
        let first = slot.begin().await;
        let second = slot.begin().await;

        // The superseded request finishes first; its result must not land.
        assert!(!slot.resolve(first, Ok(1)).await);
        assert!(slot.state().await.is_loading());

        assert!(slot.resolve(second, Ok(2)).await);
        assert_eq!(slot.state().await, RequestState::Success(2));
    }

    #[tokio::test]
    async fn stale_completion_arriving_late_keeps_newer_result() {
        let slot: RequestSlot<u32> = RequestSlot::new();
        let first = slot.begin().await;
        let second = slot.begin().await;

        assert!(slot.resolve(second, Ok(2)).await);
        assert_eq!(slot.state().await, RequestState::Success(2));

        // Slow first response arrives after the newer one already landed.
        assert!(!slot.resolve(first, Ok(1)).await);
        assert_eq!(slot.state().await, RequestState::Success(2));
    }

    #[tokio::test]
    async fn racing_tracks_apply_latest_only() {
        let slot: RequestSlot<u32> = RequestSlot::new();
        let (slow_tx, slow_rx) = oneshot::channel::<u32>();
        let (fast_tx, fast_rx) = oneshot::channel::<u32>();

        let slow = slot.track(async move {
            slow_rx
                .await
                .map_err(|_| ApiError::Transport("channel closed".to_string()))
        });
        let fast = slot.track(async move {
            fast_rx
                .await
                .map_err(|_| ApiError::Transport("channel closed".to_string()))
        });

        // Complete the newer request first, then the superseded one.
        let driver = async move {
            tokio::task::yield_now().await;
            let _ = fast_tx.send(2);
            tokio::task::yield_now().await;
            let _ = slow_tx.send(1);
        };

        let (_, _, ()) = tokio::join!(slow, fast, driver);
        assert_eq!(slot.state().await, RequestState::Success(2));
    }

    #[tokio::test]
    async fn failure_carries_display_message() {
        let slot: RequestSlot<u32> = RequestSlot::new();
        let state = slot
            .track(async { Err(ApiError::Transport("refused".to_string())) })
            .await;
        assert_eq!(state.failure(), Some("could not reach the server"));
    }
}
