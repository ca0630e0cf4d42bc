//! Transitional view for the identity-provider callback.
//!
//! Exchanges the ephemeral token from the URL fragment exactly once, then
//! hands the resolved user to the auth state and across the navigation
//! into the dashboard.

use leptos::prelude::*;

use crate::components::loading::LoadingCard;

/// Callback view. The exchange is claimed through the shared one-shot
/// latch before the first await; remounts render the spinner but never
/// issue a second exchange.
#[component]
pub fn CallbackPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        use crate::state::auth::{AuthState, DASHBOARD_PATH, ENTRY_PATH, NavHandoff};
        use crate::state::callback::CallbackState;
        use crate::state::toast::{self, ToastKind, ToastState};

        let auth = expect_context::<RwSignal<AuthState>>();
        let callback = expect_context::<RwSignal<CallbackState>>();
        let toasts = expect_context::<RwSignal<ToastState>>();
        let handoff = expect_context::<RwSignal<NavHandoff>>();
        let navigate = use_navigate();

        let claimed = callback
            .try_update(CallbackState::try_begin)
            .unwrap_or(false);

        if claimed {
            leptos::task::spawn_local(async move {
                let fragment = crate::util::url::current_fragment();
                let Some(token) =
                    crate::util::url::extract_session_token(&fragment).map(str::to_owned)
                else {
                    callback.update(|c| c.finish(false));
                    toast::notify(toasts, ToastKind::Error, "Authentication failed");
                    navigate(ENTRY_PATH, NavigateOptions::default());
                    return;
                };

                match crate::net::api::exchange_session_token(&token).await {
                    Ok(user) => {
                        callback.update(|c| c.finish(true));
                        auth.update(|a| a.on_callback_success(user.clone()));
                        toast::notify(
                            toasts,
                            ToastKind::Success,
                            format!("Welcome, {}!", user.name),
                        );
                        handoff.update(|h| h.user = Some(user));
                        // Replace the history entry so back-navigation does
                        // not return to the callback state.
                        navigate(
                            DASHBOARD_PATH,
                            NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    }
                    Err(e) => {
                        leptos::logging::warn!("session exchange failed: {e}");
                        callback.update(|c| c.finish(false));
                        toast::notify(toasts, ToastKind::Error, "Authentication failed");
                        navigate(ENTRY_PATH, NavigateOptions::default());
                    }
                }
            });
        }
    }

    view! { <LoadingCard message="Authenticating..."/> }
}
