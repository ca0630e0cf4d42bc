//! Student-detail view data: one fetch of the full bundle, with an
//! explicit missing state for unknown students.

#[cfg(test)]
#[path = "student_detail_test.rs"]
mod student_detail_test;

use crate::net::error::NetError;
use crate::net::types::{RiskPrediction, StudentBundle};

/// Detail-view state keyed on the route's student id.
#[derive(Clone, Debug, Default)]
pub struct DetailState {
    pub bundle: Option<StudentBundle>,
    /// The backend answered 404: render an empty state, not an error.
    pub missing: bool,
    pub loading: bool,
    generation: u64,
}

impl DetailState {
    /// Mark a fetch as started and claim its generation. Clears any
    /// previous bundle so a navigation between students never shows the
    /// old one under the new id.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.missing = false;
        self.bundle = None;
        self.generation
    }

    /// Settle a fetch; stale generations are dropped.
    pub fn finish_fetch(&mut self, generation: u64, outcome: Result<StudentBundle, NetError>) {
        if generation != self.generation {
            return;
        }
        self.loading = false;
        match outcome {
            Ok(bundle) => self.bundle = Some(bundle),
            Err(NetError::NotFound) => self.missing = true,
            Err(e) => leptos::logging::warn!("student detail fetch failed: {e}"),
        }
    }
}

/// SHAP features ordered by descending absolute weight for the
/// explanation bars.
pub fn ranked_shap(prediction: &RiskPrediction) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = prediction
        .shap_values
        .iter()
        .map(|(feature, weight)| (feature.clone(), *weight))
        .collect();
    ranked.sort_by(|a, b| {
        b.1.abs()
            .partial_cmp(&a.1.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}
