//! Courses page: department-filtered catalog with client-side search.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::state::courses::{CoursesState, DEPARTMENTS, DeptFilter, filter_courses};

/// Courses page. Changing the department refetches (limit 50); the
/// search box filters the loaded catalog client-side over name and code.
#[component]
pub fn CoursesPage() -> impl IntoView {
    let department = RwSignal::new(DeptFilter::All);
    let catalog = RwSignal::new(CoursesState::default());
    let search = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let dept = department.get();
            let generation = catalog.try_update(CoursesState::begin_fetch).unwrap_or_default();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::fetch_courses(dept.as_param()).await;
                catalog.update(|c| c.finish_fetch(generation, outcome));
            });
        });
    }

    let on_department = move |ev| {
        department.set(DeptFilter::from_value(&event_target_value(&ev)));
    };

    view! {
        <div class="page">
            <Sidebar/>
            <main class="page__main courses-page">
                <header class="courses-page__header">
                    <h1>"Courses"</h1>
                    <p>"Difficulty, grades, and dropout rates across the catalog"</p>
                </header>

                <div class="courses-page__controls">
                    <input
                        class="courses-page__search"
                        type="search"
                        placeholder="Search by name or code..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <select class="courses-page__filter" on:change=on_department>
                        <option value="all">"All departments"</option>
                        {DEPARTMENTS
                            .into_iter()
                            .map(|d| view! { <option value=d>{d}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>

                <div class="courses-page__grid">
                    {move || {
                        let state = catalog.get();
                        if state.loading && state.items.is_empty() {
                            return view! { <p>"Loading courses..."</p> }.into_any();
                        }
                        let needle = search.get();
                        let visible = filter_courses(&state.items, &needle);
                        if visible.is_empty() {
                            return view! { <p class="courses-page__empty">"No courses match"</p> }
                                .into_any();
                        }
                        visible
                            .into_iter()
                            .map(|course| {
                                view! {
                                    <div class="course-card">
                                        <div class="course-card__top">
                                            <span class="course-card__code">{course.code.clone()}</span>
                                            <span class="course-card__dept">
                                                {course.department.clone()}
                                            </span>
                                        </div>
                                        <h3 class="course-card__name">{course.name.clone()}</h3>
                                        <p class="course-card__instructor">
                                            {course.instructor.clone()} " - " {course.term.clone()}
                                        </p>
                                        <div class="course-card__stats">
                                            <span>
                                                {format!("Difficulty {:.1}", course.difficulty_score)}
                                            </span>
                                            <span>{format!("Avg grade {:.1}", course.avg_grade)}</span>
                                            <span>
                                                {format!("Dropout {:.0}%", course.dropout_rate * 100.0)}
                                            </span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>
            </main>
        </div>
    }
}
