//! Trip cost estimation and affordability filtering
//!
//! Turns a destination record, a traveler composition and trip parameters
//! into a per-category daily cost breakdown, a total trip cost and an
//! affordability verdict. Everything here is a pure function of its inputs:
//! no I/O and no state kept between calls.

use tracing::{debug, instrument};

use crate::models::{
    BudgetAllocation, DestinationRecord, EstimateResult, TravelerComposition, TripParameters,
    ValidationResult,
};
use crate::{Result, TravelBudgetError};

/// Share of an adult's food cost charged for each child
pub const DEFAULT_CHILD_COST_FACTOR: f64 = 0.6;

/// Computes trip costs for destinations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostEstimator {
    child_cost_factor: f64,
}

impl Default for CostEstimator {
    fn default() -> Self {
        Self {
            child_cost_factor: DEFAULT_CHILD_COST_FACTOR,
        }
    }
}

impl CostEstimator {
    /// Create an estimator with a custom child cost factor in `[0, 1]`
    pub fn new(child_cost_factor: f64) -> Result<Self> {
        if !child_cost_factor.is_finite() || !(0.0..=1.0).contains(&child_cost_factor) {
            return Err(TravelBudgetError::invalid_input(
                "child_cost_factor",
                format!("must be between 0 and 1, got {child_cost_factor}"),
            ));
        }
        Ok(Self { child_cost_factor })
    }

    #[must_use]
    pub fn child_cost_factor(&self) -> f64 {
        self.child_cost_factor
    }

    /// Estimate the cost of a trip to one destination
    ///
    /// Fails with `InvalidInput` naming the offending field when a cost is
    /// negative, there are no adults, the dates are reversed, or the budget
    /// is negative. The budget allocation on `trip` is ignored.
    #[instrument(level = "debug", skip_all, fields(city = %record.city))]
    pub fn estimate(
        &self,
        record: &DestinationRecord,
        travelers: &TravelerComposition,
        trip: &TripParameters,
    ) -> Result<EstimateResult> {
        record.validate_costs()?;
        travelers.validate()?;
        trip.validate()?;

        let days = trip.days();
        if days < 1 {
            return Err(TravelBudgetError::invalid_input(
                "days",
                format!("trip must last at least one day, got {days}"),
            ));
        }

        let adults = f64::from(travelers.adults);
        let children = f64::from(travelers.children);

        let daily_food =
            adults * record.food_daily + children * record.food_daily * self.child_cost_factor;
        let daily_total = record.accommodation_daily + daily_food + record.transport_daily;
        let grand_total = daily_total * days as f64;
        let budget_diff = trip.total_budget - grand_total;
        let affordable = budget_diff >= 0.0;

        debug!(days, grand_total, budget_diff, affordable, "Estimated trip cost");

        Ok(EstimateResult {
            daily_accommodation: record.accommodation_daily,
            daily_food,
            daily_transport: record.transport_daily,
            daily_total,
            grand_total,
            affordable,
            budget_diff,
        })
    }

    /// Estimate every record and keep only the affordable ones
    ///
    /// Input order is preserved. The first record that fails validation
    /// fails the whole call.
    #[instrument(level = "debug", skip_all)]
    pub fn filter_affordable<'a, I>(
        &self,
        records: I,
        travelers: &TravelerComposition,
        trip: &TripParameters,
    ) -> Result<Vec<(&'a DestinationRecord, EstimateResult)>>
    where
        I: IntoIterator<Item = &'a DestinationRecord>,
    {
        let mut affordable = Vec::new();
        let mut considered = 0usize;

        for record in records {
            considered += 1;
            let estimate = self.estimate(record, travelers, trip)?;
            if estimate.affordable {
                affordable.push((record, estimate));
            }
        }

        debug!(
            "{} of {} destinations fit the budget",
            affordable.len(),
            considered
        );
        Ok(affordable)
    }
}

/// Sum an allocation's percentages and check they total exactly 100
///
/// Advisory: callers show a warning when `valid` is false. The estimate is
/// never affected.
#[must_use]
pub fn validate_allocation(allocation: &BudgetAllocation) -> ValidationResult {
    let total_pct: u16 = allocation
        .fields()
        .iter()
        .map(|(_, pct)| u16::from(*pct))
        .sum();

    ValidationResult {
        valid: total_pct == 100,
        total_pct,
    }
}
