use super::*;

fn overview() -> Overview {
    Overview {
        total_students: 500,
        at_risk_count: 74,
        medium_risk_count: 120,
        low_risk_count: 306,
        avg_engagement_score: 68.4,
        avg_attendance_rate: 84.2,
        avg_gpa: 3.12,
        burnout_weeks_detected: 17,
        total_courses: 40,
    }
}

fn full_batch() -> DashboardBatch {
    DashboardBatch {
        overview: Ok(overview()),
        risk_distribution: Ok(RiskDistribution {
            high: 74,
            medium: 120,
            low: 306,
        }),
        engagement_trend: Ok(vec![TrendPoint {
            week: "Week 1".to_owned(),
            engagement: 70.0,
            attendance: 85.0,
        }]),
        course_difficulty: Ok(vec![]),
        burnout_heatmap: Ok(vec![HeatmapCell {
            week: 1,
            day: "Mon".to_owned(),
            intensity: 0.4,
        }]),
    }
}

// =============================================================
// Batch application
// =============================================================

#[test]
fn successful_batch_populates_every_key() {
    let mut data = DashboardData {
        loading: true,
        ..DashboardData::default()
    };
    data.apply(full_batch());
    assert!(!data.loading);
    assert!(data.overview.is_some());
    assert!(data.risk_distribution.is_some());
    assert!(data.engagement_trend.is_some());
    assert!(data.course_difficulty.is_some());
    assert!(data.burnout_heatmap.is_some());
}

#[test]
fn one_failed_key_leaves_siblings_populated() {
    // Five queries, #3 rejects: loading still drops, four keys populate,
    // the failed key stays unset.
    let mut batch = full_batch();
    batch.engagement_trend = Err(NetError::Status(500));

    let mut data = DashboardData {
        loading: true,
        ..DashboardData::default()
    };
    data.apply(batch);

    assert!(!data.loading);
    assert!(data.overview.is_some());
    assert!(data.risk_distribution.is_some());
    assert!(data.engagement_trend.is_none());
    assert!(data.course_difficulty.is_some());
    assert!(data.burnout_heatmap.is_some());
}

#[test]
fn all_failed_keys_still_settle_loading() {
    let batch = DashboardBatch {
        overview: Err(NetError::Transport("offline".to_owned())),
        risk_distribution: Err(NetError::Transport("offline".to_owned())),
        engagement_trend: Err(NetError::Transport("offline".to_owned())),
        course_difficulty: Err(NetError::Transport("offline".to_owned())),
        burnout_heatmap: Err(NetError::Transport("offline".to_owned())),
    };
    let mut data = DashboardData {
        loading: true,
        ..DashboardData::default()
    };
    data.apply(batch);
    assert!(!data.loading);
    assert!(data.overview.is_none());
    assert!(data.burnout_heatmap.is_none());
}

#[test]
fn reapplied_batch_replaces_previous_results() {
    let mut data = DashboardData::default();
    data.apply(full_batch());

    let mut second = full_batch();
    second.overview = Err(NetError::Status(502));
    data.apply(second);

    // A key that fails on refresh is cleared, not left stale.
    assert!(data.overview.is_none());
    assert!(data.risk_distribution.is_some());
}
