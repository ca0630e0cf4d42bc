//! Route-guard wrapper for protected views.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading::LoadingCard;
use crate::state::auth::{AuthState, ENTRY_PATH, NavHandoff};
use crate::state::guard::{self, GuardDecision};

/// Gates its children behind the session state.
///
/// The callback-fragment case is decided synchronously by the router
/// before this component ever mounts, so the fragment input to the guard
/// is always false here. A handoff user from a just-completed callback is
/// consumed on mount and grants access for this navigation without
/// waiting for a confirmation read.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let handoff = expect_context::<RwSignal<NavHandoff>>();
    let navigate = use_navigate();

    // Consume the transient payload exactly once, outside the reactive
    // graph so taking it does not retrigger rendering.
    let handed = handoff.with_untracked(|h| h.user.is_some());
    if handed {
        handoff.update_untracked(|h| {
            h.take();
        });
    }

    // Redirect to the entry point once resolution settles with no user.
    Effect::new(move || {
        let state = auth.get();
        let decision = guard::decide(false, state.phase, handed, state.user.is_some());
        if decision == GuardDecision::Entry {
            navigate(
                ENTRY_PATH,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    move || {
        let state = auth.get();
        match guard::decide(false, state.phase, handed, state.user.is_some()) {
            GuardDecision::Protected => children().into_any(),
            GuardDecision::Callback | GuardDecision::Loading | GuardDecision::Entry => {
                view! { <LoadingCard message="Loading..."/> }.into_any()
            }
        }
    }
}
