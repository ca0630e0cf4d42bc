//! Routed views. Each protected page owns its own query/result state and
//! fetch orchestration; nothing is shared between views except the
//! session contexts.

pub mod callback;
pub mod courses;
pub mod dashboard;
pub mod landing;
pub mod student_detail;
pub mod students;
