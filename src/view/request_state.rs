//! Tagged lifecycle state of one asynchronous operation.

/// Lifecycle of a single tracked request.
///
/// Exactly one variant holds at any time per logical operation. This
/// replaces the ad hoc `loading` / `error` flag pairs a view would
/// otherwise carry: presentation code matches on the variant and cannot
/// observe contradictory combinations.
///
/// ```text
/// Idle --begin--> Loading
/// Loading --ok--> Success(value)
/// Loading --err--> Failure(message)
/// Success|Failure --begin--> Loading
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState<T> {
    /// No request has been issued yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The most recent request completed with a value.
    Success(T),
    /// The most recent request failed; carries the display message.
    Failure(String),
}

impl<T> RequestState<T> {
    /// Returns `true` while a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the success value, if this is the `Success` variant.
    #[must_use]
    pub const fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the failure message, if this is the `Failure` variant.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let state: RequestState<u32> = RequestState::default();
        assert_eq!(state, RequestState::Idle);
        assert!(!state.is_loading());
    }

    #[test]
    fn accessors_match_variants() {
        assert!(RequestState::<u32>::Loading.is_loading());
        assert_eq!(RequestState::Success(5).success(), Some(&5));
        assert_eq!(
            RequestState::<u32>::Failure("server error".to_string()).failure(),
            Some("server error")
        );
        assert!(RequestState::<u32>::Idle.success().is_none());
        assert!(RequestState::<u32>::Loading.failure().is_none());
    }
}
