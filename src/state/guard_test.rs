use super::*;

// =============================================================
// Priority order
// =============================================================

#[test]
fn token_fragment_always_routes_to_callback() {
    // The synchronous fragment check wins over every other input.
    for phase in [AuthPhase::Uninitialized, AuthPhase::Resolving, AuthPhase::Resolved] {
        for handoff in [false, true] {
            for user in [false, true] {
                assert_eq!(
                    decide(true, phase, handoff, user),
                    GuardDecision::Callback
                );
            }
        }
    }
}

#[test]
fn unresolved_session_renders_loading() {
    assert_eq!(
        decide(false, AuthPhase::Uninitialized, false, false),
        GuardDecision::Loading
    );
    assert_eq!(
        decide(false, AuthPhase::Resolving, false, true),
        GuardDecision::Loading
    );
}

// =============================================================
// Optimistic handoff bypass
// =============================================================

#[test]
fn handoff_user_grants_access_without_current_user() {
    // Fresh callback: NavigationState carries the user, currentUser is
    // still null, resolution has settled.
    assert_eq!(
        decide(false, AuthPhase::Resolved, true, false),
        GuardDecision::Protected
    );
}

#[test]
fn handoff_user_grants_access_alongside_current_user() {
    assert_eq!(
        decide(false, AuthPhase::Resolved, true, true),
        GuardDecision::Protected
    );
}

// =============================================================
// Settled decisions
// =============================================================

#[test]
fn no_session_redirects_to_entry() {
    assert_eq!(
        decide(false, AuthPhase::Resolved, false, false),
        GuardDecision::Entry
    );
}

#[test]
fn resolved_user_renders_protected_content() {
    assert_eq!(
        decide(false, AuthPhase::Resolved, false, true),
        GuardDecision::Protected
    );
}
