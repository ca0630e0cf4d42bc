//! On-screen toast stack.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Renders the toast queue in the top-right corner.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast.kind.css_class()>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "\u{00d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
