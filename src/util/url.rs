//! URL-fragment helpers for the identity-provider hand-off.
//!
//! The provider returns the browser to the app with an ephemeral token in
//! the URL *fragment* (never the query string), as `session_id=<token>`,
//! optionally followed by `&...`. Detection must be cheap and synchronous:
//! the router consults it before anything async runs.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

/// Marker pattern the identity provider appends to the fragment.
pub const SESSION_TOKEN_MARKER: &str = "session_id=";

/// Whether a fragment carries the ephemeral-token marker at all.
///
/// A marker with an empty token still counts: the callback view owns the
/// failure path for malformed fragments.
pub fn has_session_token(fragment: &str) -> bool {
    fragment.contains(SESSION_TOKEN_MARKER)
}

/// Extract the ephemeral session token from a URL fragment.
///
/// Takes the substring after `session_id=` up to the next `&` or the end
/// of the fragment. Returns `None` when the marker is missing or the token
/// is empty.
pub fn extract_session_token(fragment: &str) -> Option<&str> {
    let start = fragment.find(SESSION_TOKEN_MARKER)? + SESSION_TOKEN_MARKER.len();
    let token = fragment[start..].split('&').next().unwrap_or_default();
    if token.is_empty() { None } else { Some(token) }
}

/// Read the current navigation target's fragment, `#` prefix included.
/// Empty on the server or when no fragment is present.
pub fn current_fragment() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
