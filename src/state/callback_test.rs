use super::*;

// =============================================================
// One-shot latch
// =============================================================

#[test]
fn first_caller_claims_the_exchange() {
    let mut state = CallbackState::default();
    assert!(state.try_begin());
    assert_eq!(state.phase, CallbackPhase::Processing);
}

#[test]
fn reentry_while_processing_is_a_no_op() {
    // Duplicate mount before the first exchange resolves must not issue
    // a second network call.
    let mut state = CallbackState::default();
    assert!(state.try_begin());
    assert!(!state.try_begin());
    assert!(!state.try_begin());
}

#[test]
fn reentry_after_settling_is_a_no_op() {
    let mut state = CallbackState::default();
    assert!(state.try_begin());
    state.finish(true);
    assert!(!state.try_begin());

    let mut state = CallbackState::default();
    assert!(state.try_begin());
    state.finish(false);
    assert!(!state.try_begin());
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn finish_records_the_outcome() {
    let mut state = CallbackState::default();
    state.try_begin();
    state.finish(true);
    assert_eq!(state.phase, CallbackPhase::Succeeded);

    let mut state = CallbackState::default();
    state.try_begin();
    state.finish(false);
    assert_eq!(state.phase, CallbackPhase::Failed);
}
