//! Courses view data: a department-driven refetch plus a client-side
//! search filter over the loaded catalog.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use crate::net::error::NetError;
use crate::net::types::Course;

/// Departments offered in the filter dropdown.
pub const DEPARTMENTS: [&str; 10] = [
    "Computer Science",
    "Data Science",
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "Psychology",
    "Economics",
    "Business Administration",
    "Engineering",
];

/// Department filter. `All` fetches the whole catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DeptFilter {
    #[default]
    All,
    Department(String),
}

impl DeptFilter {
    /// Value of the `department` query parameter, if any.
    pub fn as_param(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Department(name) => Some(name),
        }
    }

    /// Parse a `<select>` value back into a filter.
    pub fn from_value(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Department(value.to_owned())
        }
    }
}

/// Loaded catalog with generation-tracked fetches.
#[derive(Clone, Debug, Default)]
pub struct CoursesState {
    pub items: Vec<Course>,
    pub loading: bool,
    generation: u64,
}

impl CoursesState {
    /// Mark a fetch as started and claim its generation.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Settle a fetch; stale generations are dropped and failures keep
    /// the previous catalog.
    pub fn finish_fetch(&mut self, generation: u64, outcome: Result<Vec<Course>, NetError>) {
        if generation != self.generation {
            return;
        }
        self.loading = false;
        match outcome {
            Ok(items) => self.items = items,
            Err(e) => leptos::logging::warn!("courses fetch failed: {e}"),
        }
    }
}

/// Case-insensitive client-side filter over course name and code.
pub fn filter_courses<'a>(courses: &'a [Course], search: &str) -> Vec<&'a Course> {
    if search.is_empty() {
        return courses.iter().collect();
    }
    let needle = search.to_lowercase();
    courses
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle) || c.code.to_lowercase().contains(&needle)
        })
        .collect()
}
