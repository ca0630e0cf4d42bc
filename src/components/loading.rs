//! Full-screen loading placeholder shown while auth or a callback
//! resolves.

use leptos::prelude::*;

/// Centered spinner card with a status message.
#[component]
pub fn LoadingCard(message: &'static str) -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__card">
                <div class="loading-screen__spinner"></div>
                <p class="loading-screen__message">{message}</p>
            </div>
        </div>
    }
}
