//! Navigation sidebar shown on every protected view.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;

const NAV_ITEMS: [(&str, &str); 3] = [
    ("/dashboard", "Dashboard"),
    ("/students", "Students"),
    ("/courses", "Courses"),
];

/// Sidebar with navigation links, the signed-in identity, and the
/// sign-out control.
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;

    let on_logout = move |_| crate::state::auth::logout(auth);

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"Campus Pulse"</div>

            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(path, label)| {
                        let class = move || {
                            if pathname.get() == path {
                                "sidebar__link sidebar__link--active"
                            } else {
                                "sidebar__link"
                            }
                        };
                        view! {
                            <a href=path class=class>
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="sidebar__user">
                {move || {
                    auth.get()
                        .user
                        .map(|user| {
                            view! {
                                <div class="sidebar__identity">
                                    {user
                                        .picture
                                        .map(|src| {
                                            view! {
                                                <img class="sidebar__avatar" src=src alt=""/>
                                            }
                                        })}
                                    <span class="sidebar__name">{user.name}</span>
                                    <span class="sidebar__email">{user.email}</span>
                                </div>
                            }
                        })
                }}
                <button class="sidebar__logout" on:click=on_logout>
                    "Sign out"
                </button>
            </div>
        </aside>
    }
}
