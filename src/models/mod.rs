//! Data models for the travel budget estimator
//!
//! Plain data records passed between the catalog, the estimator and
//! whatever application sits around them:
//! - Destination: one row of the destination catalog
//! - Trip: traveler composition, trip dates, budget and allocation
//! - Estimate: computed cost breakdown and allocation check

pub mod destination;
pub mod estimate;
pub mod trip;

// Re-export all public types for convenient access
pub use destination::DestinationRecord;
pub use estimate::{EstimateResult, ValidationResult};
pub use trip::{BudgetAllocation, TravelerComposition, TripParameters};

use crate::{Result, TravelBudgetError};

/// Reject negative, NaN and infinite amounts for the named field
pub(crate) fn ensure_non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(TravelBudgetError::invalid_input(
            field,
            format!("must be a finite number, got {value}"),
        ));
    }
    if value < 0.0 {
        return Err(TravelBudgetError::invalid_input(
            field,
            format!("must not be negative, got {value}"),
        ));
    }
    Ok(())
}
