//! Students-explorer view data: the committed query, the debounce
//! machinery for search input, and generation-tracked results.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use crate::net::error::NetError;
use crate::net::types::{RiskLevel, Student, StudentsEnvelope};

/// Input quiescence before a search commit triggers a refetch.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Rows requested per page.
pub const PAGE_SIZE: u32 = 15;

/// Risk filter applied to the student list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RiskFilter {
    #[default]
    All,
    Level(RiskLevel),
}

impl RiskFilter {
    /// Value of the `risk_level` query parameter, if any.
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Level(level) => Some(level.as_param()),
        }
    }

    /// Parse a `<select>` value back into a filter.
    pub fn from_value(value: &str) -> Self {
        match value {
            "high" => Self::Level(RiskLevel::High),
            "medium" => Self::Level(RiskLevel::Medium),
            "low" => Self::Level(RiskLevel::Low),
            _ => Self::All,
        }
    }

    /// Value rendered into the `<select>`.
    pub fn as_value(self) -> &'static str {
        self.as_param().unwrap_or("all")
    }
}

/// The committed query the explorer fetches with. Search and filter
/// changes reset pagination; page changes never touch anything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentsQuery {
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    pub risk: RiskFilter,
}

impl Default for StudentsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE,
            search: String::new(),
            risk: RiskFilter::default(),
        }
    }
}

impl StudentsQuery {
    /// Commit debounced search text. Resets to page 1 only when the text
    /// actually changed, so the initial empty commit is a no-op.
    pub fn set_search(&mut self, text: &str) -> bool {
        if self.search == text {
            return false;
        }
        self.search = text.to_owned();
        self.page = 1;
        true
    }

    /// Change the risk filter, resetting to page 1 on a real change.
    pub fn set_risk(&mut self, risk: RiskFilter) -> bool {
        if self.risk == risk {
            return false;
        }
        self.risk = risk;
        self.page = 1;
        true
    }

    /// Advance one page, if the server reported more.
    pub fn next_page(&mut self, pages: u32) -> bool {
        if self.page < pages {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page, if not already on the first.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Whether debounced input would change the committed search at all.
    /// Input that reverted to the committed text needs no pending commit.
    pub fn needs_commit(&self, text: &str) -> bool {
        self.search != text
    }

    /// Build the `/api/students` query string.
    pub fn to_query_string(&self) -> String {
        let mut params = url::form_urlencoded::Serializer::new(String::new());
        params.append_pair("page", &self.page.to_string());
        params.append_pair("limit", &self.page_size.to_string());
        if !self.search.is_empty() {
            params.append_pair("search", &self.search);
        }
        if let Some(level) = self.risk.as_param() {
            params.append_pair("risk_level", level);
        }
        params.finish()
    }
}

/// Generation counter for debounced search input. Each keystroke arms a
/// new generation; only the timer holding the latest one commits.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchDebounce {
    generation: u64,
}

impl SearchDebounce {
    /// Arm a new generation, invalidating any timer still pending.
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether the given generation is still the latest.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

/// Fetched results plus the per-request generation that discards stale
/// responses when queries change while a fetch is in flight.
#[derive(Clone, Debug, Default)]
pub struct StudentsResults {
    pub rows: Vec<Student>,
    pub total: u64,
    pub pages: u32,
    pub loading: bool,
    generation: u64,
}

impl StudentsResults {
    /// Mark a fetch as started and claim its generation.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Settle a fetch. Stale generations are dropped; failures keep the
    /// previous rows on screen and only clear the loading flag.
    pub fn finish_fetch(&mut self, generation: u64, outcome: Result<StudentsEnvelope, NetError>) {
        if generation != self.generation {
            return;
        }
        self.loading = false;
        match outcome {
            Ok(envelope) => {
                self.rows = envelope.students;
                self.total = envelope.total;
                self.pages = envelope.pages.max(1);
            }
            Err(e) => leptos::logging::warn!("students fetch failed: {e}"),
        }
    }

    /// The "next" control is enabled exactly when more pages exist.
    pub fn can_advance(&self, page: u32) -> bool {
        page < self.pages
    }
}
