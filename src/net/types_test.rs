use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_parses_from_backend_payload() {
    let user: User = serde_json::from_value(serde_json::json!({
        "user_id": "u-1",
        "email": "ada@example.edu",
        "name": "Ada Lovelace",
        "picture": "https://cdn.example.com/ada.png",
        "role": "ADVISOR",
        "created_at": "2026-01-02T03:04:05Z"
    }))
    .expect("user");
    assert_eq!(user.user_id, "u-1");
    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(user.picture.as_deref(), Some("https://cdn.example.com/ada.png"));
    assert_eq!(user.role, "ADVISOR");
}

#[test]
fn user_tolerates_missing_optional_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "user_id": "u-2",
        "email": "g@example.edu",
        "name": "Grace"
    }))
    .expect("user");
    assert!(user.picture.is_none());
    assert!(user.role.is_empty());
}

// =============================================================
// RiskLevel
// =============================================================

#[test]
fn risk_level_parses_lowercase_wire_values() {
    assert_eq!(
        serde_json::from_str::<RiskLevel>("\"high\"").expect("high"),
        RiskLevel::High
    );
    assert_eq!(
        serde_json::from_str::<RiskLevel>("\"medium\"").expect("medium"),
        RiskLevel::Medium
    );
    assert_eq!(
        serde_json::from_str::<RiskLevel>("\"low\"").expect("low"),
        RiskLevel::Low
    );
}

#[test]
fn risk_level_defaults_to_low() {
    assert_eq!(RiskLevel::default(), RiskLevel::Low);
}

#[test]
fn risk_level_query_params_round_trip_labels() {
    assert_eq!(RiskLevel::High.as_param(), "high");
    assert_eq!(RiskLevel::High.label(), "High");
    assert_eq!(RiskLevel::Medium.as_param(), "medium");
    assert_eq!(RiskLevel::Low.as_param(), "low");
}

// =============================================================
// Students envelope
// =============================================================

#[test]
fn students_envelope_parses_page() {
    let envelope: StudentsEnvelope = serde_json::from_value(serde_json::json!({
        "students": [{
            "student_id": "s-1",
            "name": "Lin Wei",
            "email": "lin@example.edu",
            "major": "Physics",
            "year": 2,
            "gpa": 3.4,
            "enrollment_date": "2024-09-01",
            "risk_level": "medium",
            "engagement_score": 0.61,
            "attendance_rate": 0.88,
            "late_submission_ratio": 0.12
        }],
        "total": 31,
        "page": 1,
        "limit": 15,
        "pages": 3
    }))
    .expect("envelope");
    assert_eq!(envelope.students.len(), 1);
    assert_eq!(envelope.students[0].risk_level, RiskLevel::Medium);
    assert_eq!(envelope.total, 31);
    assert_eq!(envelope.pages, 3);
}

// =============================================================
// Student bundle
// =============================================================

#[test]
fn student_bundle_defaults_absent_sections() {
    let bundle: StudentBundle = serde_json::from_value(serde_json::json!({
        "student": {
            "student_id": "s-9",
            "name": "Noor",
            "email": "noor@example.edu",
            "major": "Biology",
            "year": 4,
            "gpa": 3.9,
            "enrollment_date": "2022-09-01"
        },
        "prediction": null
    }))
    .expect("bundle");
    assert!(bundle.prediction.is_none());
    assert!(bundle.enrollments.is_empty());
    assert!(bundle.engagement_history.is_empty());
    assert_eq!(bundle.student.risk_level, RiskLevel::Low);
}

#[test]
fn prediction_parses_shap_and_recommendations() {
    let prediction: RiskPrediction = serde_json::from_value(serde_json::json!({
        "prediction_id": "p-1",
        "student_id": "s-9",
        "risk_score": 0.82,
        "risk_level": "high",
        "confidence": 0.9,
        "features": {"gpa": 2.1},
        "shap_values": {"gpa": -0.4, "attendance_rate": 0.1},
        "recommendations": ["Schedule advisor meeting"]
    }))
    .expect("prediction");
    assert_eq!(prediction.risk_level, RiskLevel::High);
    assert_eq!(prediction.shap_values.len(), 2);
    assert_eq!(prediction.recommendations.len(), 1);
}

// =============================================================
// Analytics payloads
// =============================================================

#[test]
fn overview_parses_kpis() {
    let overview: Overview = serde_json::from_value(serde_json::json!({
        "total_students": 500,
        "at_risk_count": 74,
        "medium_risk_count": 120,
        "low_risk_count": 306,
        "avg_engagement_score": 68.4,
        "avg_attendance_rate": 84.2,
        "avg_gpa": 3.12,
        "burnout_weeks_detected": 17,
        "total_courses": 40
    }))
    .expect("overview");
    assert_eq!(overview.total_students, 500);
    assert_eq!(overview.at_risk_count, 74);
    assert!((overview.avg_engagement_score - 68.4).abs() < f64::EPSILON);
}

#[test]
fn trend_and_heatmap_rows_parse() {
    let point: TrendPoint = serde_json::from_value(serde_json::json!({
        "week": "Week 3",
        "engagement": 71.5,
        "attendance": 88.0
    }))
    .expect("trend point");
    assert_eq!(point.week, "Week 3");

    let cell: HeatmapCell = serde_json::from_value(serde_json::json!({
        "week": 6,
        "day": "Wed",
        "intensity": 0.87
    }))
    .expect("heatmap cell");
    assert_eq!(cell.day, "Wed");
    assert_eq!(cell.week, 6);
}
