//! Trip request models: who travels, when, and with how much money

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ensure_non_negative;
use crate::{Result, TravelBudgetError};

/// Counts of adults and children in a trip party
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelerComposition {
    /// At least one adult is required
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
}

impl TravelerComposition {
    #[must_use]
    pub fn new(adults: u32, children: u32) -> Self {
        Self { adults, children }
    }

    pub fn validate(&self) -> Result<()> {
        if self.adults < 1 {
            return Err(TravelBudgetError::invalid_input(
                "adults",
                "at least one adult is required",
            ));
        }
        Ok(())
    }
}

/// Percentage split of the budget across spending categories
///
/// Advisory only: it is checked for summing to 100 but never enters the
/// cost estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub accommodation_pct: u8,
    pub food_pct: u8,
    pub transport_pct: u8,
    pub expenditure_pct: u8,
}

impl Default for BudgetAllocation {
    fn default() -> Self {
        Self {
            accommodation_pct: 40,
            food_pct: 20,
            transport_pct: 20,
            expenditure_pct: 20,
        }
    }
}

impl BudgetAllocation {
    #[must_use]
    pub fn new(accommodation_pct: u8, food_pct: u8, transport_pct: u8, expenditure_pct: u8) -> Self {
        Self {
            accommodation_pct,
            food_pct,
            transport_pct,
            expenditure_pct,
        }
    }

    /// Check that each percentage lies in `[0, 100]`
    pub fn validate(&self) -> Result<()> {
        for (field, pct) in self.fields() {
            if pct > 100 {
                return Err(TravelBudgetError::invalid_input(
                    field,
                    format!("must be between 0 and 100, got {pct}"),
                ));
            }
        }
        Ok(())
    }

    /// Percentages paired with their field names
    #[must_use]
    pub fn fields(&self) -> [(&'static str, u8); 4] {
        [
            ("accommodation_pct", self.accommodation_pct),
            ("food_pct", self.food_pct),
            ("transport_pct", self.transport_pct),
            ("expenditure_pct", self.expenditure_pct),
        ]
    }
}

/// Trip dates and budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripParameters {
    pub start_date: NaiveDate,
    /// Inclusive; never before `start_date`
    pub end_date: NaiveDate,
    pub total_budget: f64,
    #[serde(default)]
    pub allocation: Option<BudgetAllocation>,
}

impl TripParameters {
    /// Create validated trip parameters
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, total_budget: f64) -> Result<Self> {
        let trip = Self {
            start_date,
            end_date,
            total_budget,
            allocation: None,
        };
        trip.validate()?;
        Ok(trip)
    }

    /// A trip that starts and ends on the same date
    pub fn single_day(date: NaiveDate, total_budget: f64) -> Result<Self> {
        Self::new(date, date, total_budget)
    }

    #[must_use]
    pub fn with_allocation(mut self, allocation: BudgetAllocation) -> Self {
        self.allocation = Some(allocation);
        self
    }

    /// Number of days, counting both endpoints
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Check dates and budget. The allocation is not inspected here.
    pub fn validate(&self) -> Result<()> {
        if self.end_date < self.start_date {
            return Err(TravelBudgetError::invalid_input(
                "end_date",
                format!(
                    "end date {} is before start date {}",
                    self.end_date, self.start_date
                ),
            ));
        }
        ensure_non_negative("total_budget", self.total_budget)
    }
}
