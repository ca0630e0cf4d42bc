//! One-shot state machine for the identity-provider callback.
//!
//! The ephemeral token in the URL fragment must be exchanged at most once
//! per page load, even when the callback view is mounted more than once.
//! `try_begin` is the latch: it flips `Idle -> Processing` synchronously,
//! before the first await, so a duplicate activation arriving while the
//! exchange is in flight loses the race and becomes a no-op.

#[cfg(test)]
#[path = "callback_test.rs"]
mod callback_test;

/// Lifecycle of the callback controller. Only `Idle` may start an
/// exchange; every other phase is terminal for this page lifetime
/// (`Processing` settles into one of the two).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CallbackPhase {
    #[default]
    Idle,
    Processing,
    Succeeded,
    Failed,
}

/// Page-lifetime callback state, provided via context from the app root
/// so remounts of the callback view share the latch.
#[derive(Clone, Copy, Debug, Default)]
pub struct CallbackState {
    pub phase: CallbackPhase,
}

impl CallbackState {
    /// Claim the single exchange attempt. Returns `true` for exactly one
    /// caller per page lifetime.
    pub fn try_begin(&mut self) -> bool {
        if self.phase == CallbackPhase::Idle {
            self.phase = CallbackPhase::Processing;
            true
        } else {
            false
        }
    }

    /// Record the outcome of the exchange attempt.
    pub fn finish(&mut self, succeeded: bool) {
        self.phase = if succeeded {
            CallbackPhase::Succeeded
        } else {
            CallbackPhase::Failed
        };
    }
}
