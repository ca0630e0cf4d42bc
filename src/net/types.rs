//! Wire types matching the analytics backend's JSON contract.
//!
//! Field names and defaults mirror the server's models exactly; unknown
//! fields are ignored so the client tolerates additive backend changes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The authenticated user, replaced wholesale on login/logout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub role: String,
}

/// Student risk bands as the backend reports them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    #[default]
    Low,
}

impl RiskLevel {
    /// Human-readable badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// CSS class for the risk badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::High => "risk-badge risk-badge--high",
            Self::Medium => "risk-badge risk-badge--medium",
            Self::Low => "risk-badge risk-badge--low",
        }
    }

    /// Wire value used in the `risk_level` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// A student row as served by `/api/students`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub major: String,
    pub year: u32,
    pub gpa: f64,
    pub enrollment_date: String,
    #[serde(default)]
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub engagement_score: f64,
    #[serde(default)]
    pub attendance_rate: f64,
    #[serde(default)]
    pub late_submission_ratio: f64,
}

/// A course as served by `/api/courses` and the difficulty leaderboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub course_id: String,
    pub code: String,
    pub name: String,
    pub department: String,
    pub credits: u32,
    #[serde(default)]
    pub difficulty_score: f64,
    #[serde(default)]
    pub avg_grade: f64,
    #[serde(default)]
    pub dropout_rate: f64,
    pub instructor: String,
    pub term: String,
}

/// A student's enrollment in one course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub enrollment_id: String,
    pub student_id: String,
    pub course_id: String,
    pub term: String,
    #[serde(default)]
    pub grade: Option<f64>,
    #[serde(default)]
    pub status: String,
}

/// One predicted risk assessment with its explanation payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskPrediction {
    pub prediction_id: String,
    pub student_id: String,
    pub risk_score: f64,
    #[serde(default)]
    pub risk_level: RiskLevel,
    pub confidence: f64,
    #[serde(default)]
    pub features: HashMap<String, f64>,
    #[serde(default)]
    pub shap_values: HashMap<String, f64>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// One week of a student's engagement history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngagementWeek {
    pub week: u32,
    #[serde(default)]
    pub date: String,
    pub engagement_score: f64,
    pub attendance_rate: f64,
    #[serde(default)]
    pub submission_rate: f64,
}

/// Paginated `/api/students` envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentsEnvelope {
    pub students: Vec<Student>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub pages: u32,
}

/// Paginated `/api/courses` envelope; views only consume `courses`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoursesEnvelope {
    pub courses: Vec<Course>,
}

/// `/api/students/{id}` bundle: the student plus everything the detail
/// view renders. Sibling sections default to empty when absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentBundle {
    pub student: Student,
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
    #[serde(default)]
    pub prediction: Option<RiskPrediction>,
    #[serde(default)]
    pub engagement_history: Vec<EngagementWeek>,
}

/// `/api/analytics/overview` KPI payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub total_students: u64,
    pub at_risk_count: u64,
    #[serde(default)]
    pub medium_risk_count: u64,
    #[serde(default)]
    pub low_risk_count: u64,
    pub avg_engagement_score: f64,
    #[serde(default)]
    pub avg_attendance_rate: f64,
    #[serde(default)]
    pub avg_gpa: f64,
    pub burnout_weeks_detected: u64,
    #[serde(default)]
    pub total_courses: u64,
}

/// `/api/analytics/risk-distribution` payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

/// One point of the campus-wide engagement trend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub week: String,
    pub engagement: f64,
    pub attendance: f64,
}

/// One cell of the burnout heatmap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub week: u32,
    pub day: String,
    pub intensity: f64,
}
