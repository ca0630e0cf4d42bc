//! Students explorer: searchable, filterable, paginated student table.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::risk_badge::RiskBadge;
use crate::components::sidebar::Sidebar;
use crate::state::students::{RiskFilter, SearchDebounce, StudentsQuery, StudentsResults};

/// Students explorer page.
///
/// Search input commits into the query after 300ms of quiescence and
/// resets pagination; the risk filter resets pagination on change; page
/// moves reset nothing. Every committed query change refetches, and
/// stale responses are discarded by generation.
#[component]
pub fn StudentsPage() -> impl IntoView {
    let query = RwSignal::new(StudentsQuery::default());
    let results = RwSignal::new(StudentsResults::default());
    let search_input = RwSignal::new(String::new());
    let debounce = RwSignal::new(SearchDebounce::default());
    let navigate = use_navigate();

    // Debounced commit of the search box into the query.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let text = search_input.get();
            // Arming invalidates any pending timer even when the input has
            // reverted to the committed text, in which case no new timer
            // is needed.
            let generation = debounce.try_update(SearchDebounce::arm).unwrap_or_default();
            if !query.with_untracked(|q| q.needs_commit(&text)) {
                return;
            }
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(
                    crate::state::students::SEARCH_DEBOUNCE_MS,
                ))
                .await;
                if debounce.with_untracked(|d| d.is_current(generation)) {
                    query.update(|q| {
                        q.set_search(&text);
                    });
                }
            });
        });
    }

    // Refetch whenever the committed query changes.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let q = query.get();
            let generation = results
                .try_update(StudentsResults::begin_fetch)
                .unwrap_or_default();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::fetch_students(&q).await;
                results.update(|r| r.finish_fetch(generation, outcome));
            });
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &debounce;
    }

    let on_filter = move |ev| {
        let filter = RiskFilter::from_value(&event_target_value(&ev));
        query.update(|q| {
            q.set_risk(filter);
        });
    };

    let on_prev = move |_| {
        query.update(|q| {
            q.prev_page();
        });
    };

    let on_next = move |_| {
        let pages = results.with_untracked(|r| r.pages);
        query.update(|q| {
            q.next_page(pages);
        });
    };

    view! {
        <div class="page">
            <Sidebar/>
            <main class="page__main students-page">
                <header class="students-page__header">
                    <h1>"Students Explorer"</h1>
                    <p>
                        {move || format!("Browse and filter {} students", results.get().total)}
                    </p>
                </header>

                <div class="students-page__controls">
                    <input
                        class="students-page__search"
                        type="search"
                        placeholder="Search by name, email, or ID..."
                        prop:value=move || search_input.get()
                        on:input=move |ev| search_input.set(event_target_value(&ev))
                    />
                    <select
                        class="students-page__filter"
                        prop:value=move || query.get().risk.as_value()
                        on:change=on_filter
                    >
                        <option value="all">"All risk levels"</option>
                        <option value="high">"High"</option>
                        <option value="medium">"Medium"</option>
                        <option value="low">"Low"</option>
                    </select>
                </div>

                <table class="students-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Major"</th>
                            <th>"Year"</th>
                            <th>"GPA"</th>
                            <th>"Engagement"</th>
                            <th>"Risk"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let state = results.get();
                            if state.loading && state.rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="6">"Loading students..."</td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            state
                                .rows
                                .into_iter()
                                .map(|student| {
                                    let navigate = navigate.clone();
                                    let id = student.student_id.clone();
                                    view! {
                                        <tr
                                            class="students-table__row"
                                            on:click=move |_| {
                                                navigate(
                                                    &format!("/students/{id}"),
                                                    NavigateOptions::default(),
                                                );
                                            }
                                        >
                                            <td>
                                                <span class="students-table__name">{student.name}</span>
                                                <span class="students-table__email">{student.email}</span>
                                            </td>
                                            <td>{student.major}</td>
                                            <td>{student.year}</td>
                                            <td>{format!("{:.2}", student.gpa)}</td>
                                            <td>{format!("{:.0}%", student.engagement_score * 100.0)}</td>
                                            <td>
                                                <RiskBadge level=student.risk_level/>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </tbody>
                </table>

                <div class="students-page__pagination">
                    <button
                        class="btn"
                        disabled=move || query.get().page == 1
                        on:click=on_prev
                    >
                        "Previous"
                    </button>
                    <span>
                        {move || {
                            format!("Page {} of {}", query.get().page, results.get().pages.max(1))
                        }}
                    </span>
                    <button
                        class="btn"
                        disabled=move || !results.get().can_advance(query.get().page)
                        on:click=on_next
                    >
                        "Next"
                    </button>
                </div>
            </main>
        </div>
    }
}
