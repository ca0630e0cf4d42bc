//! Networking layer: backend wire types, failure taxonomy, and the
//! gloo-net API client used by the session core and the view
//! orchestrators.

pub mod api;
pub mod error;
pub mod types;
