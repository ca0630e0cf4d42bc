//! Route-guard decision logic for protected views.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::auth::AuthPhase;

/// What to render for a protected-view activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// The fragment carries an ephemeral token: render the callback's
    /// transitional view instead of the guarded content.
    Callback,
    /// The session check has not settled: render a loading placeholder.
    Loading,
    /// Render the guarded content.
    Protected,
    /// No session: redirect to the entry point, replacing history.
    Entry,
}

/// Decide what a protected-view activation renders.
///
/// Priority order matters: the fragment check comes first and is
/// synchronous, so neither the entry view nor the guarded content can
/// flash before the callback runs. A present handoff user grants access
/// even while `user` is still unset; this trusts the just-completed
/// exchange instead of waiting for a confirmation read, trading a short
/// staleness window for zero added latency.
pub fn decide(
    fragment_has_token: bool,
    phase: AuthPhase,
    handoff_user: bool,
    current_user: bool,
) -> GuardDecision {
    if fragment_has_token {
        GuardDecision::Callback
    } else if phase != AuthPhase::Resolved {
        GuardDecision::Loading
    } else if handoff_user {
        GuardDecision::Protected
    } else if !current_user {
        GuardDecision::Entry
    } else {
        GuardDecision::Protected
    }
}
