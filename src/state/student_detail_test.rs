use super::*;
use crate::net::types::{RiskLevel, Student};
use std::collections::HashMap;

fn bundle(id: &str) -> StudentBundle {
    StudentBundle {
        student: Student {
            student_id: id.to_owned(),
            name: "Noor".to_owned(),
            email: "noor@example.edu".to_owned(),
            major: "Biology".to_owned(),
            year: 4,
            gpa: 3.9,
            enrollment_date: "2022-09-01".to_owned(),
            risk_level: RiskLevel::Low,
            engagement_score: 0.8,
            attendance_rate: 0.95,
            late_submission_ratio: 0.05,
        },
        enrollments: vec![],
        prediction: None,
        engagement_history: vec![],
    }
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn begin_fetch_clears_previous_bundle() {
    let mut state = DetailState::default();
    let generation = state.begin_fetch();
    state.finish_fetch(generation, Ok(bundle("s-1")));
    assert!(state.bundle.is_some());

    state.begin_fetch();
    assert!(state.bundle.is_none());
    assert!(state.loading);
    assert!(!state.missing);
}

#[test]
fn not_found_sets_missing_instead_of_erroring() {
    let mut state = DetailState::default();
    let generation = state.begin_fetch();
    state.finish_fetch(generation, Err(NetError::NotFound));
    assert!(!state.loading);
    assert!(state.missing);
    assert!(state.bundle.is_none());
}

#[test]
fn transport_failure_settles_without_missing_flag() {
    let mut state = DetailState::default();
    let generation = state.begin_fetch();
    state.finish_fetch(generation, Err(NetError::Transport("offline".to_owned())));
    assert!(!state.loading);
    assert!(!state.missing);
    assert!(state.bundle.is_none());
}

#[test]
fn stale_response_is_discarded_after_navigation() {
    // Navigating from one student to another while the first fetch is
    // still in flight: the late response must not land under the new id.
    let mut state = DetailState::default();
    let first = state.begin_fetch();
    let second = state.begin_fetch();
    state.finish_fetch(first, Ok(bundle("s-1")));
    assert!(state.bundle.is_none());
    state.finish_fetch(second, Ok(bundle("s-2")));
    assert_eq!(
        state.bundle.as_ref().map(|b| b.student.student_id.as_str()),
        Some("s-2")
    );
}

// =============================================================
// SHAP ranking
// =============================================================

#[test]
fn shap_features_rank_by_absolute_weight() {
    let prediction = RiskPrediction {
        prediction_id: "p-1".to_owned(),
        student_id: "s-1".to_owned(),
        risk_score: 0.7,
        risk_level: RiskLevel::High,
        confidence: 0.9,
        features: HashMap::new(),
        shap_values: HashMap::from([
            ("gpa".to_owned(), -0.40),
            ("attendance_rate".to_owned(), 0.10),
            ("late_submission_ratio".to_owned(), 0.25),
        ]),
        recommendations: vec![],
    };
    let ranked = ranked_shap(&prediction);
    assert_eq!(ranked[0].0, "gpa");
    assert_eq!(ranked[1].0, "late_submission_ratio");
    assert_eq!(ranked[2].0, "attendance_rate");
}
