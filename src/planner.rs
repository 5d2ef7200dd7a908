//! Trip planning requests
//!
//! Request/response records for a search-then-results flow, and the
//! [`TripPlanner`] that answers them from a shared catalog. All request
//! state is owned by the caller and passed in; the planner keeps none.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::Result;
use crate::catalog::DestinationCatalog;
use crate::estimator::{CostEstimator, validate_allocation};
use crate::models::{
    BudgetAllocation, DestinationRecord, EstimateResult, TravelerComposition, TripParameters,
    ValidationResult,
};

/// A destination search as submitted by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub state: String,
    /// Estimate a single destination instead of filtering the whole state
    #[serde(default)]
    pub city: Option<String>,
    pub start_date: NaiveDate,
    /// Defaults to `start_date` for a single-day trip
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub total_budget: f64,
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub allocation: Option<BudgetAllocation>,
}

impl SearchRequest {
    fn travelers(&self) -> TravelerComposition {
        TravelerComposition::new(self.adults, self.children)
    }

    fn trip(&self) -> Result<TripParameters> {
        let end_date = self.end_date.unwrap_or(self.start_date);
        let trip = TripParameters::new(self.start_date, end_date, self.total_budget)?;
        Ok(match self.allocation {
            Some(allocation) => trip.with_allocation(allocation),
            None => trip,
        })
    }
}

/// Display fields of a destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationSummary {
    pub state: String,
    pub city: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub rating: Option<f64>,
    pub distance_from_hub_km: Option<f64>,
    pub travel_type: Option<String>,
    pub local_dish: Option<String>,
}

impl From<&DestinationRecord> for DestinationSummary {
    fn from(record: &DestinationRecord) -> Self {
        Self {
            state: record.state.clone(),
            city: record.city.clone(),
            description: record.description.clone(),
            image_url: record.image_url.clone(),
            rating: record.rating,
            distance_from_hub_km: record.distance_from_hub_km,
            travel_type: record.travel_type.clone(),
            local_dish: record.local_dish.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationMatch {
    pub destination: DestinationSummary,
    pub estimate: EstimateResult,
}

/// Answer to a [`SearchRequest`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub state: String,
    pub days: i64,
    pub travelers: TravelerComposition,
    pub total_budget: f64,
    /// With a city: that destination, affordable or not.
    /// Without: every affordable destination of the state, in catalog order.
    pub matches: Vec<DestinationMatch>,
    /// Present when the request carried an allocation
    pub allocation_check: Option<ValidationResult>,
}

/// Answers searches against a shared, read-only catalog
#[derive(Debug, Clone)]
pub struct TripPlanner {
    catalog: Arc<DestinationCatalog>,
    estimator: CostEstimator,
}

impl TripPlanner {
    #[must_use]
    pub fn new(catalog: Arc<DestinationCatalog>, estimator: CostEstimator) -> Self {
        Self { catalog, estimator }
    }

    #[must_use]
    pub fn catalog(&self) -> &DestinationCatalog {
        &self.catalog
    }

    /// Destinations of a state, for picking a city
    pub fn cities(&self, state: &str) -> Result<Vec<DestinationSummary>> {
        Ok(self
            .catalog
            .cities_in(state)?
            .into_iter()
            .map(DestinationSummary::from)
            .collect())
    }

    /// Run a search
    #[instrument(skip_all, fields(state = %request.state, city = ?request.city))]
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let travelers = request.travelers();
        let trip = request.trip()?;

        let allocation_check = match &request.allocation {
            Some(allocation) => {
                allocation.validate()?;
                Some(validate_allocation(allocation))
            }
            None => None,
        };

        let matches: Vec<DestinationMatch> = match &request.city {
            Some(city) => {
                let record = self.catalog.find(&request.state, city)?;
                let estimate = self.estimator.estimate(record, &travelers, &trip)?;
                vec![DestinationMatch {
                    destination: record.into(),
                    estimate,
                }]
            }
            None => {
                let records = self.catalog.cities_in(&request.state)?;
                self.estimator
                    .filter_affordable(records, &travelers, &trip)?
                    .into_iter()
                    .map(|(record, estimate)| DestinationMatch {
                        destination: record.into(),
                        estimate,
                    })
                    .collect()
            }
        };

        info!("Search returned {} destinations", matches.len());

        Ok(SearchResponse {
            state: request.state.clone(),
            days: trip.days(),
            travelers,
            total_budget: trip.total_budget,
            matches,
            allocation_check,
        })
    }
}

/// Format an amount as a currency string rounded to cents
///
/// Display only; never feed the result back into a computation.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${amount:.2}")
    }
}
