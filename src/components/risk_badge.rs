//! Colored badge for a student's risk band.

use leptos::prelude::*;

use crate::net::types::RiskLevel;

/// Pill badge showing the risk band label.
#[component]
pub fn RiskBadge(level: RiskLevel) -> impl IntoView {
    view! { <span class=level.badge_class()>{level.label()}</span> }
}
