//! KPI summary card for the dashboard's overview row.

use leptos::prelude::*;

/// A single headline metric with a short trend hint.
#[component]
pub fn KpiCard(label: &'static str, value: String, hint: &'static str) -> impl IntoView {
    view! {
        <div class="kpi-card">
            <span class="kpi-card__label">{label}</span>
            <span class="kpi-card__value">{value}</span>
            <span class="kpi-card__hint">{hint}</span>
        </div>
    }
}
