//! Titled card wrapping one chart or data section.

use leptos::prelude::*;

/// Card chrome around a data section. The children render whatever data
/// the owning page hands them; an unavailable key renders its own marker
/// inside.
#[component]
pub fn ChartCard(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="chart-card">
            <header class="chart-card__header">
                <h2 class="chart-card__title">{title}</h2>
                <p class="chart-card__subtitle">{subtitle}</p>
            </header>
            <div class="chart-card__body">{children()}</div>
        </section>
    }
}

/// Marker rendered when a section's analytics key failed to load.
#[component]
pub fn Unavailable() -> impl IntoView {
    view! { <p class="chart-card__unavailable">"Data unavailable"</p> }
}
