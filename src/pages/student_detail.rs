//! Student detail: profile header, risk prediction with explanation,
//! engagement history, and enrollments.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::chart_card::ChartCard;
use crate::components::risk_badge::RiskBadge;
use crate::components::sidebar::Sidebar;
use crate::state::student_detail::{DetailState, ranked_shap};

/// Student detail page, keyed on the `:id` route parameter. An unknown
/// id renders an explicit empty state rather than an error page.
#[component]
pub fn StudentDetailPage() -> impl IntoView {
    let params = use_params_map();
    let detail = RwSignal::new(DetailState::default());
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(id) = params.get().get("id") else {
                return;
            };
            let generation = detail.try_update(DetailState::begin_fetch).unwrap_or_default();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::fetch_student(&id).await;
                detail.update(|d| d.finish_fetch(generation, outcome));
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &params;
    }

    let on_back = move |_| {
        navigate("/students", NavigateOptions::default());
    };

    view! {
        <div class="page">
            <Sidebar/>
            <main class="page__main student-detail">
                <button class="btn student-detail__back" on:click=on_back>
                    "Back to Students"
                </button>

                {move || {
                    let state = detail.get();
                    if state.loading {
                        return view! { <p class="student-detail__loading">"Loading student..."</p> }
                            .into_any();
                    }
                    if state.missing {
                        return view! {
                            <div class="student-detail__empty">
                                <h2>"Student not found"</h2>
                                <p>"This student does not exist or has been removed."</p>
                            </div>
                        }
                            .into_any();
                    }
                    let Some(bundle) = state.bundle else {
                        return ().into_any();
                    };
                    let student = bundle.student;
                    view! {
                        <header class="student-detail__header">
                            <div>
                                <h1>{student.name.clone()}</h1>
                                <p class="student-detail__email">{student.email.clone()}</p>
                                <p class="student-detail__meta">
                                    {format!(
                                        "{} - Year {} - GPA {:.2}",
                                        student.major,
                                        student.year,
                                        student.gpa,
                                    )}
                                </p>
                            </div>
                            <RiskBadge level=student.risk_level/>
                        </header>

                        <div class="student-detail__grid">
                            <ChartCard title="Risk Prediction" subtitle="Model output with top factors">
                                {match bundle.prediction {
                                    Some(prediction) => {
                                        let ranked = ranked_shap(&prediction);
                                        view! {
                                            <div class="prediction">
                                                <p class="prediction__score">
                                                    {format!("Risk score {:.0}%", prediction.risk_score * 100.0)}
                                                </p>
                                                <p class="prediction__confidence">
                                                    {format!("Confidence {:.0}%", prediction.confidence * 100.0)}
                                                </p>
                                                <ul class="prediction__factors">
                                                    {ranked
                                                        .into_iter()
                                                        .map(|(feature, weight)| {
                                                            view! {
                                                                <li class="prediction__factor">
                                                                    <span>{feature}</span>
                                                                    <span>{format!("{weight:+.2}")}</span>
                                                                </li>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </ul>
                                                <ul class="prediction__recommendations">
                                                    {prediction
                                                        .recommendations
                                                        .into_iter()
                                                        .map(|r| view! { <li>{r}</li> })
                                                        .collect::<Vec<_>>()}
                                                </ul>
                                            </div>
                                        }
                                            .into_any()
                                    }
                                    None => {
                                        view! { <p class="prediction__none">"No prediction available"</p> }
                                            .into_any()
                                    }
                                }}
                            </ChartCard>

                            <ChartCard title="Engagement History" subtitle="Last 12 weeks">
                                <ul class="history-list">
                                    {bundle
                                        .engagement_history
                                        .into_iter()
                                        .map(|week| {
                                            view! {
                                                <li class="history-list__row">
                                                    <span>{format!("Week {}", week.week)}</span>
                                                    <span>
                                                        {format!("{:.0}% engagement", week.engagement_score * 100.0)}
                                                    </span>
                                                    <span>
                                                        {format!("{:.0}% attendance", week.attendance_rate * 100.0)}
                                                    </span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </ChartCard>

                            <ChartCard title="Enrollments" subtitle="Current and past courses">
                                <table class="enrollments-table">
                                    <thead>
                                        <tr>
                                            <th>"Course"</th>
                                            <th>"Term"</th>
                                            <th>"Grade"</th>
                                            <th>"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {bundle
                                            .enrollments
                                            .into_iter()
                                            .map(|e| {
                                                let grade = e
                                                    .grade
                                                    .map_or_else(|| "-".to_owned(), |g| format!("{g:.1}"));
                                                view! {
                                                    <tr>
                                                        <td>{e.course_id}</td>
                                                        <td>{e.term}</td>
                                                        <td>{grade}</td>
                                                        <td>{e.status}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            </ChartCard>
                        </div>
                    }
                        .into_any()
                }}
            </main>
        </div>
    }
}
