//! Unauthenticated entry point with the sign-in call to action.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Landing page. A signed-in visitor gets a shortcut to the dashboard;
/// everyone else gets the external sign-in redirect.
#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_login = move |_| crate::state::auth::login();

    view! {
        <div class="landing-page">
            <header class="landing-page__hero">
                <h1>"Campus Pulse"</h1>
                <p class="landing-page__tagline">
                    "Early-warning analytics for student engagement, risk, and burnout"
                </p>
                {move || {
                    if auth.get().user.is_some() {
                        view! {
                            <a class="btn btn--primary" href="/dashboard">
                                "Go to Dashboard"
                            </a>
                        }
                            .into_any()
                    } else {
                        view! {
                            <button class="btn btn--primary" on:click=on_login>
                                "Sign in"
                            </button>
                        }
                            .into_any()
                    }
                }}
            </header>

            <section class="landing-page__features">
                <div class="feature-card">
                    <h3>"Risk radar"</h3>
                    <p>"Spot at-risk students before grades slip"</p>
                </div>
                <div class="feature-card">
                    <h3>"Engagement trends"</h3>
                    <p>"Weekly attendance and participation signals"</p>
                </div>
                <div class="feature-card">
                    <h3>"Burnout heatmap"</h3>
                    <p>"Campus-wide workload pressure at a glance"</p>
                </div>
            </section>
        </div>
    }
}
