//! Dashboard view data: five independent analytics keys fetched as one
//! batch.
//!
//! The batch shares a single loading flag but every key settles from its
//! own `Result`; a failed key stays unset while the others populate, so
//! each chart renders (or reports "unavailable") independently.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::error::NetError;
use crate::net::types::{Course, HeatmapCell, Overview, RiskDistribution, TrendPoint};

/// Settled outcomes of the five concurrent analytics queries.
#[derive(Clone, Debug)]
pub struct DashboardBatch {
    pub overview: Result<Overview, NetError>,
    pub risk_distribution: Result<RiskDistribution, NetError>,
    pub engagement_trend: Result<Vec<TrendPoint>, NetError>,
    pub course_difficulty: Result<Vec<Course>, NetError>,
    pub burnout_heatmap: Result<Vec<HeatmapCell>, NetError>,
}

/// Result set owned by the dashboard page. A `None` key means that query
/// has not succeeded for this view.
#[derive(Clone, Debug, Default)]
pub struct DashboardData {
    pub overview: Option<Overview>,
    pub risk_distribution: Option<RiskDistribution>,
    pub engagement_trend: Option<Vec<TrendPoint>>,
    pub course_difficulty: Option<Vec<Course>>,
    pub burnout_heatmap: Option<Vec<HeatmapCell>>,
    pub loading: bool,
}

impl DashboardData {
    /// Apply a settled batch. Loading drops once for the whole batch;
    /// per-key failures are logged and leave that key unset.
    pub fn apply(&mut self, batch: DashboardBatch) {
        self.overview = keep("overview", batch.overview);
        self.risk_distribution = keep("risk-distribution", batch.risk_distribution);
        self.engagement_trend = keep("engagement-trend", batch.engagement_trend);
        self.course_difficulty = keep("course-difficulty", batch.course_difficulty);
        self.burnout_heatmap = keep("burnout-heatmap", batch.burnout_heatmap);
        self.loading = false;
    }
}

fn keep<T>(key: &str, result: Result<T, NetError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            leptos::logging::warn!("analytics query {key} failed: {e}");
            None
        }
    }
}
