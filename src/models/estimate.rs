//! Estimator outputs

use serde::{Deserialize, Serialize};

/// Cost breakdown and affordability verdict for one destination
///
/// Values are unrounded. Round only for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub daily_accommodation: f64,
    pub daily_food: f64,
    pub daily_transport: f64,
    pub daily_total: f64,
    pub grand_total: f64,
    /// `true` iff `budget_diff >= 0`
    pub affordable: bool,
    /// Remaining budget when positive, overage when negative
    pub budget_diff: f64,
}

impl EstimateResult {
    /// Amount over budget, zero when affordable
    #[must_use]
    pub fn overage(&self) -> f64 {
        (-self.budget_diff).max(0.0)
    }
}

/// Outcome of checking a budget allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub total_pct: u16,
}
