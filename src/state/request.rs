//! Add-to-cart request state machine

use std::time::Duration;

/// How long the Succeeded/Failed label lingers before the control returns
/// to Idle.
pub const LABEL_RESET_DELAY: Duration = Duration::from_millis(2_000);

/// Lifecycle of one add-to-cart submission. Owned exclusively by the sticky
/// controller; at most one request is in flight per control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CartRequestState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl CartRequestState {
    /// Idle -> Submitting. Returns false and leaves the state untouched
    /// unless the machine is Idle; this is the re-entrancy guard that keeps
    /// a second click from issuing a second request.
    pub fn begin(&mut self) -> bool {
        if *self == Self::Idle {
            *self = Self::Submitting;
            true
        } else {
            false
        }
    }

    /// Submitting -> Succeeded or Failed. Ignored outside Submitting.
    pub fn finish(&mut self, success: bool) {
        if *self == Self::Submitting {
            *self = if success { Self::Succeeded } else { Self::Failed };
        }
    }

    /// Succeeded/Failed -> Idle, once the label delay has run out.
    pub fn reset(&mut self) {
        if matches!(self, Self::Succeeded | Self::Failed) {
            *self = Self::Idle;
        }
    }

    pub fn is_submitting(&self) -> bool {
        *self == Self::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_only_fires_from_idle() {
        let mut state = CartRequestState::Idle;
        assert!(state.begin());
        assert_eq!(state, CartRequestState::Submitting);
        assert!(!state.begin());
        assert_eq!(state, CartRequestState::Submitting);
    }

    #[test]
    fn finish_maps_outcome_from_submitting_only() {
        let mut state = CartRequestState::Submitting;
        state.finish(true);
        assert_eq!(state, CartRequestState::Succeeded);

        let mut state = CartRequestState::Submitting;
        state.finish(false);
        assert_eq!(state, CartRequestState::Failed);

        let mut state = CartRequestState::Idle;
        state.finish(true);
        assert_eq!(state, CartRequestState::Idle);
    }

    #[test]
    fn reset_returns_settled_states_to_idle() {
        let mut state = CartRequestState::Succeeded;
        state.reset();
        assert_eq!(state, CartRequestState::Idle);

        let mut state = CartRequestState::Failed;
        state.reset();
        assert_eq!(state, CartRequestState::Idle);

        let mut state = CartRequestState::Submitting;
        state.reset();
        assert_eq!(state, CartRequestState::Submitting);
    }
}
