//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so pages depend on small focused models.
//! Session state (`auth`, `callback`, `toast`) lives in context signals
//! provided by the app root; per-view query/result state (`dashboard`,
//! `students`, `student_detail`, `courses`) is owned by the page that
//! renders it. All decision logic is plain data + methods so it is
//! testable without a browser.

pub mod auth;
pub mod callback;
pub mod courses;
pub mod dashboard;
pub mod guard;
pub mod student_detail;
pub mod students;
pub mod toast;
