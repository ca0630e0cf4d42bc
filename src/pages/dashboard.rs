//! Dashboard page: KPI row plus four analytics sections, each fed by its
//! own key of the batch result set.

use leptos::prelude::*;

use crate::components::chart_card::{ChartCard, Unavailable};
use crate::components::kpi_card::KpiCard;
use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::state::dashboard::DashboardData;

/// Dashboard page. Issues the five analytics queries concurrently on
/// mount; each section renders from its own key and degrades to an
/// unavailable marker independently.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let data = RwSignal::new(DashboardData {
        loading: true,
        ..DashboardData::default()
    });

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            leptos::task::spawn_local(async move {
                let batch = crate::net::api::fetch_dashboard_batch().await;
                data.update(|d| d.apply(batch));
            });
        });
    }

    let greeting = move || {
        auth.get()
            .user
            .map_or_else(|| "Welcome back".to_owned(), |u| format!("Welcome back, {}", u.name))
    };

    view! {
        <div class="page">
            <Sidebar/>
            <main class="page__main dashboard-page">
                <header class="dashboard-page__header">
                    <h1>{greeting}</h1>
                    <p>"Here's what's happening with your campus analytics"</p>
                </header>

                <div class="dashboard-page__kpis">
                    {move || {
                        let state = data.get();
                        if state.loading {
                            return view! { <p class="dashboard-page__loading">"Loading metrics..."</p> }
                                .into_any();
                        }
                        match state.overview {
                            Some(overview) => {
                                view! {
                                    <KpiCard
                                        label="Total Students"
                                        value=overview.total_students.to_string()
                                        hint="+12%"
                                    />
                                    <KpiCard
                                        label="At-Risk Students"
                                        value=overview.at_risk_count.to_string()
                                        hint="-5%"
                                    />
                                    <KpiCard
                                        label="Avg Engagement"
                                        value=format!("{}%", overview.avg_engagement_score)
                                        hint="+3%"
                                    />
                                    <KpiCard
                                        label="Burnout Detected"
                                        value=overview.burnout_weeks_detected.to_string()
                                        hint="This week"
                                    />
                                }
                                    .into_any()
                            }
                            None => view! { <Unavailable/> }.into_any(),
                        }
                    }}
                </div>

                <div class="dashboard-page__grid">
                    <ChartCard title="Engagement Trend" subtitle="Weekly engagement and attendance rates">
                        {move || {
                            let state = data.get();
                            if state.loading {
                                return ().into_any();
                            }
                            match state.engagement_trend {
                                Some(points) => {
                                    view! {
                                        <ul class="trend-list">
                                            {points
                                                .into_iter()
                                                .map(|p| {
                                                    view! {
                                                        <li class="trend-list__row">
                                                            <span>{p.week}</span>
                                                            <span>{format!("{:.1}% engagement", p.engagement)}</span>
                                                            <span>{format!("{:.1}% attendance", p.attendance)}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                                None => view! { <Unavailable/> }.into_any(),
                            }
                        }}
                    </ChartCard>

                    <ChartCard title="Risk Distribution" subtitle="Students by risk level">
                        {move || {
                            let state = data.get();
                            if state.loading {
                                return ().into_any();
                            }
                            match state.risk_distribution {
                                Some(dist) => {
                                    view! {
                                        <ul class="dist-list">
                                            <li class="dist-list__row dist-list__row--high">
                                                <span>"High Risk"</span>
                                                <span>{dist.high}</span>
                                            </li>
                                            <li class="dist-list__row dist-list__row--medium">
                                                <span>"Medium Risk"</span>
                                                <span>{dist.medium}</span>
                                            </li>
                                            <li class="dist-list__row dist-list__row--low">
                                                <span>"Low Risk"</span>
                                                <span>{dist.low}</span>
                                            </li>
                                        </ul>
                                    }
                                        .into_any()
                                }
                                None => view! { <Unavailable/> }.into_any(),
                            }
                        }}
                    </ChartCard>

                    <ChartCard title="Course Difficulty" subtitle="Hardest courses by difficulty score">
                        {move || {
                            let state = data.get();
                            if state.loading {
                                return ().into_any();
                            }
                            match state.course_difficulty {
                                Some(courses) => {
                                    view! {
                                        <ul class="difficulty-list">
                                            {courses
                                                .into_iter()
                                                .map(|c| {
                                                    view! {
                                                        <li class="difficulty-list__row">
                                                            <span class="difficulty-list__code">{c.code}</span>
                                                            <span class="difficulty-list__name">{c.name}</span>
                                                            <span class="difficulty-list__score">
                                                                {format!("{:.1}", c.difficulty_score)}
                                                            </span>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                                None => view! { <Unavailable/> }.into_any(),
                            }
                        }}
                    </ChartCard>

                    <ChartCard title="Burnout Heatmap" subtitle="Workload pressure by week and day">
                        {move || {
                            let state = data.get();
                            if state.loading {
                                return ().into_any();
                            }
                            match state.burnout_heatmap {
                                Some(cells) => {
                                    view! {
                                        <div class="heatmap">
                                            {cells
                                                .into_iter()
                                                .map(|cell| {
                                                    let style = format!("opacity: {:.2}", cell.intensity);
                                                    let title = format!(
                                                        "Week {} {} - {:.0}%",
                                                        cell.week,
                                                        cell.day,
                                                        cell.intensity * 100.0
                                                    );
                                                    view! {
                                                        <span class="heatmap__cell" style=style title=title></span>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                None => view! { <Unavailable/> }.into_any(),
                            }
                        }}
                    </ChartCard>
                </div>
            </main>
        </div>
    }
}
