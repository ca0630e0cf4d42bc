//! REST API client for the analytics backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, same-origin and
//! cookie-credentialed. Server-side (SSR): stubs returning
//! `NetError::server_side()` since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, NetError>` so auth failures resolve to a
//! safe UI state and analytics failures stay isolated per key. Nothing in
//! this module panics.

#![allow(clippy::unused_async)]

use super::error::NetError;
use super::types::{
    Course, HeatmapCell, Overview, RiskDistribution, StudentBundle, StudentsEnvelope, TrendPoint,
    User,
};
use crate::state::dashboard::DashboardBatch;
use crate::state::students::StudentsQuery;

const API_BASE: &str = "/api";

/// GET a JSON payload from a data endpoint, mapping statuses onto the
/// failure taxonomy.
#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, NetError> {
    let url = format!("{API_BASE}{path}");
    let resp = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| NetError::Transport(e.to_string()))?;
    match resp.status() {
        200..=299 => resp
            .json::<T>()
            .await
            .map_err(|e| NetError::Transport(e.to_string())),
        401 | 403 => Err(NetError::Unauthenticated),
        404 => Err(NetError::NotFound),
        status => Err(NetError::Status(status)),
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
///
/// # Errors
///
/// `Unauthenticated` on any non-2xx response (expected when no session
/// cookie is set); `Transport` when the backend is unreachable.
pub async fn fetch_current_user() -> Result<User, NetError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{API_BASE}/auth/me"))
            .send()
            .await
            .map_err(|e| NetError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(NetError::Unauthenticated);
        }
        resp.json::<User>()
            .await
            .map_err(|e| NetError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NetError::server_side())
    }
}

/// Exchange an ephemeral session token for a durable session via
/// `POST /api/auth/session`. The backend sets the session cookie as a
/// side effect and returns the resolved user.
///
/// # Errors
///
/// `ExchangeFailed` when the backend rejects the token; `Transport` on
/// network-level failure.
pub async fn exchange_session_token(token: &str) -> Result<User, NetError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{API_BASE}/auth/session"))
            .json(&serde_json::json!({ "session_id": token }))
            .map_err(|e| NetError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| NetError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(NetError::ExchangeFailed);
        }
        resp.json::<User>()
            .await
            .map_err(|e| NetError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(NetError::server_side())
    }
}

/// Invalidate the backend session via `POST /api/auth/logout`.
///
/// Best effort: a failure is logged and swallowed because the caller
/// clears local state unconditionally either way.
pub async fn destroy_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(&format!("{API_BASE}/auth/logout"))
            .send()
            .await
        {
            leptos::logging::warn!("logout request failed: {e}");
        }
    }
}

/// Fetch one page of students matching the explorer's query.
///
/// # Errors
///
/// Propagates the taxonomy from the shared GET helper.
pub async fn fetch_students(query: &StudentsQuery) -> Result<StudentsEnvelope, NetError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/students?{}", query.to_query_string())).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(NetError::server_side())
    }
}

/// Fetch one student's full detail bundle.
///
/// # Errors
///
/// `NotFound` when the student does not exist; otherwise the shared
/// taxonomy.
pub async fn fetch_student(student_id: &str) -> Result<StudentBundle, NetError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/students/{student_id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = student_id;
        Err(NetError::server_side())
    }
}

/// Fetch the course catalog, optionally filtered by department.
///
/// # Errors
///
/// Propagates the taxonomy from the shared GET helper.
pub async fn fetch_courses(department: Option<&str>) -> Result<Vec<Course>, NetError> {
    #[cfg(feature = "hydrate")]
    {
        let mut params = url::form_urlencoded::Serializer::new(String::new());
        params.append_pair("limit", "50");
        if let Some(dept) = department {
            params.append_pair("department", dept);
        }
        let envelope: super::types::CoursesEnvelope =
            get_json(&format!("/courses?{}", params.finish())).await?;
        Ok(envelope.courses)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = department;
        Err(NetError::server_side())
    }
}

/// Fetch the dashboard KPI overview.
///
/// # Errors
///
/// Propagates the taxonomy from the shared GET helper.
pub async fn fetch_overview() -> Result<Overview, NetError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/analytics/overview").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NetError::server_side())
    }
}

/// Fetch the student risk distribution.
///
/// # Errors
///
/// Propagates the taxonomy from the shared GET helper.
pub async fn fetch_risk_distribution() -> Result<RiskDistribution, NetError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/analytics/risk-distribution").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NetError::server_side())
    }
}

/// Fetch the weekly campus-wide engagement trend.
///
/// # Errors
///
/// Propagates the taxonomy from the shared GET helper.
pub async fn fetch_engagement_trend() -> Result<Vec<TrendPoint>, NetError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/analytics/engagement-trend").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NetError::server_side())
    }
}

/// Fetch the course-difficulty leaderboard.
///
/// # Errors
///
/// Propagates the taxonomy from the shared GET helper.
pub async fn fetch_course_difficulty() -> Result<Vec<Course>, NetError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/analytics/course-difficulty").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NetError::server_side())
    }
}

/// Fetch the burnout heatmap cells.
///
/// # Errors
///
/// Propagates the taxonomy from the shared GET helper.
pub async fn fetch_burnout_heatmap() -> Result<Vec<HeatmapCell>, NetError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/analytics/burnout-heatmap").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NetError::server_side())
    }
}

/// Issue the dashboard's five analytics queries concurrently and collect
/// every outcome. Each key settles independently; one failure never
/// aborts the others.
pub async fn fetch_dashboard_batch() -> DashboardBatch {
    #[cfg(feature = "hydrate")]
    {
        let (overview, risk_distribution, engagement_trend, course_difficulty, burnout_heatmap) = futures::join!(
            fetch_overview(),
            fetch_risk_distribution(),
            fetch_engagement_trend(),
            fetch_course_difficulty(),
            fetch_burnout_heatmap(),
        );
        DashboardBatch {
            overview,
            risk_distribution,
            engagement_trend,
            course_difficulty,
            burnout_heatmap,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DashboardBatch {
            overview: Err(NetError::server_side()),
            risk_distribution: Err(NetError::server_side()),
            engagement_trend: Err(NetError::server_side()),
            course_difficulty: Err(NetError::server_side()),
            burnout_heatmap: Err(NetError::server_side()),
        }
    }
}
