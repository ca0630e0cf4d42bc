use super::*;

fn user(id: &str) -> User {
    User {
        user_id: id.to_owned(),
        email: format!("{id}@example.edu"),
        name: "Test User".to_owned(),
        picture: None,
        role: "ADVISOR".to_owned(),
    }
}

// =============================================================
// AuthState lifecycle
// =============================================================

#[test]
fn default_state_is_uninitialized_with_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert_eq!(state.phase, AuthPhase::Uninitialized);
    assert!(state.is_resolving());
}

#[test]
fn resolving_counts_as_unresolved() {
    let state = AuthState {
        user: None,
        phase: AuthPhase::Resolving,
    };
    assert!(state.is_resolving());
}

#[test]
fn resolve_without_user_settles_to_no_user() {
    let mut state = AuthState {
        user: None,
        phase: AuthPhase::Resolving,
    };
    state.resolve_without_user();
    assert!(state.user.is_none());
    assert!(!state.is_resolving());
}

#[test]
fn resolve_with_user_settles_to_that_user() {
    let mut state = AuthState::default();
    state.resolve_with_user(user("u-1"));
    assert_eq!(state.user.as_ref().map(|u| u.user_id.as_str()), Some("u-1"));
    assert!(!state.is_resolving());
}

#[test]
fn callback_success_replaces_user_wholesale() {
    let mut state = AuthState::default();
    state.resolve_with_user(user("u-1"));
    state.on_callback_success(user("u-2"));
    assert_eq!(state.user.as_ref().map(|u| u.user_id.as_str()), Some("u-2"));
}

#[test]
fn clear_wins_even_while_resolving() {
    // logout racing an unresolved who-am-I: the synchronous clear is not
    // guarded by the resolution flag, so the final state has no user.
    let mut state = AuthState {
        user: Some(user("u-1")),
        phase: AuthPhase::Resolving,
    };
    state.clear();
    assert!(state.user.is_none());
    assert!(!state.is_resolving());
}

#[test]
fn clear_settles_before_any_backend_outcome() {
    // Sign-out clears the session eagerly; the backend invalidation runs
    // afterwards and its outcome never reaches this state. Whatever the
    // server later says, the local state is already signed out.
    let mut state = AuthState {
        user: Some(user("u-1")),
        phase: AuthPhase::Resolved,
    };
    state.clear();
    assert!(state.user.is_none());
    assert_eq!(state.phase, AuthPhase::Resolved);
}

// =============================================================
// NavHandoff
// =============================================================

#[test]
fn handoff_is_consumed_at_most_once() {
    let mut handoff = NavHandoff {
        user: Some(user("u-1")),
    };
    assert!(handoff.take().is_some());
    assert!(handoff.take().is_none());
}

// =============================================================
// Initial-check deferral
// =============================================================

#[test]
fn token_fragment_defers_who_am_i() {
    assert!(should_defer_initial_check("#session_id=tok-1"));
    assert!(should_defer_initial_check("#session_id=tok-1&state=xyz"));
}

#[test]
fn plain_fragment_does_not_defer_who_am_i() {
    assert!(!should_defer_initial_check(""));
    assert!(!should_defer_initial_check("#section-2"));
}

// =============================================================
// Login URL derivation
// =============================================================

#[test]
fn login_url_encodes_origin_derived_return_target() {
    let url = login_url("https://pulse.example.edu");
    assert_eq!(
        url,
        "https://auth.emergentagent.com/?redirect=https%3A%2F%2Fpulse.example.edu%2Fdashboard"
    );
}

#[test]
fn login_url_points_at_the_dashboard_not_the_entry() {
    let url = login_url("http://localhost:3000");
    assert!(url.contains("%2Fdashboard"));
    assert!(url.starts_with(IDENTITY_PROVIDER_URL));
}
