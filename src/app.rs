//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::protected::Protected;
use crate::components::toaster::Toaster;
use crate::pages::callback::CallbackPage;
use crate::pages::courses::CoursesPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::landing::LandingPage;
use crate::pages::student_detail::StudentDetailPage;
use crate::pages::students::StudentsPage;
use crate::state::auth::{AuthState, NavHandoff};
use crate::state::callback::CallbackState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session contexts, kicks off the initial session check,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Session-scoped state shared through context. The callback latch
    // lives here so remounts of the callback view share it.
    let auth = RwSignal::new(AuthState::default());
    let callback = RwSignal::new(CallbackState::default());
    let handoff = RwSignal::new(NavHandoff::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(callback);
    provide_context(handoff);
    provide_context(toasts);

    crate::state::auth::init(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/campus-pulse.css"/>
        <Title text="Campus Pulse"/>

        <Router>
            <AppRouter/>
        </Router>
        <Toaster/>
    }
}

/// Routing with the callback-fragment check.
///
/// While the navigation target's fragment carries an ephemeral session
/// token the callback view renders instead of any route. The check reads
/// the router's location, so when the callback's own navigation clears
/// the fragment the routes mount in its place. The first evaluation runs
/// during render, before any asynchronous resolution, so neither the
/// entry view nor a guarded view can flash first.
#[component]
fn AppRouter() -> impl IntoView {
    let hash = use_location().hash;

    move || {
        if crate::util::url::has_session_token(&hash.get()) {
            return view! { <CallbackPage/> }.into_any();
        }

        view! {
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <Protected>
                                <DashboardPage/>
                            </Protected>
                        }
                    }
                />
                <Route
                    path=StaticSegment("students")
                    view=|| {
                        view! {
                            <Protected>
                                <StudentsPage/>
                            </Protected>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("students"), ParamSegment("id"))
                    view=|| {
                        view! {
                            <Protected>
                                <StudentDetailPage/>
                            </Protected>
                        }
                    }
                />
                <Route
                    path=StaticSegment("courses")
                    view=|| {
                        view! {
                            <Protected>
                                <CoursesPage/>
                            </Protected>
                        }
                    }
                />
            </Routes>
        }
        .into_any()
    }
}
