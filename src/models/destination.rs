//! Destination record: one row of the destination catalog

use serde::{Deserialize, Serialize};

use super::ensure_non_negative;
use crate::{Result, TravelBudgetError};

/// Highest rating a destination can carry
pub const MAX_RATING: f64 = 5.0;

/// A destination and its daily cost attributes
///
/// Field names on the wire follow the catalog's CSV header
/// (`State`, `City`, `Accommodation_Daily`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationRecord {
    #[serde(rename = "State")]
    pub state: String,
    /// Unique within `state`
    #[serde(rename = "City")]
    pub city: String,
    /// Cost per night, per booking (not per person)
    #[serde(rename = "Accommodation_Daily")]
    pub accommodation_daily: f64,
    /// Cost per day, per adult
    #[serde(rename = "Food_Daily")]
    pub food_daily: f64,
    /// Cost per day, for the whole group
    #[serde(rename = "Transport_Daily")]
    pub transport_daily: f64,
    /// Miscellaneous spend; display-only, never part of the estimate
    #[serde(rename = "Expenditure_Daily", default)]
    pub expenditure_daily: Option<f64>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Image_URL", default)]
    pub image_url: Option<String>,
    /// Rating in `[0, 5]`
    #[serde(rename = "Rating", default)]
    pub rating: Option<f64>,
    #[serde(rename = "Distance_Hub", default)]
    pub distance_from_hub_km: Option<f64>,
    #[serde(rename = "Travel_Type", default)]
    pub travel_type: Option<String>,
    #[serde(rename = "Local_Dish", default)]
    pub local_dish: Option<String>,
}

impl DestinationRecord {
    /// Create a record with the required cost fields and no display data
    #[must_use]
    pub fn new(
        state: impl Into<String>,
        city: impl Into<String>,
        accommodation_daily: f64,
        food_daily: f64,
        transport_daily: f64,
    ) -> Self {
        Self {
            state: state.into(),
            city: city.into(),
            accommodation_daily,
            food_daily,
            transport_daily,
            expenditure_daily: None,
            description: None,
            image_url: None,
            rating: None,
            distance_from_hub_km: None,
            travel_type: None,
            local_dish: None,
        }
    }

    /// Check only the fields the cost formula reads
    pub fn validate_costs(&self) -> Result<()> {
        ensure_non_negative("accommodation_daily", self.accommodation_daily)?;
        ensure_non_negative("food_daily", self.food_daily)?;
        ensure_non_negative("transport_daily", self.transport_daily)?;
        Ok(())
    }

    /// Check every constrained field of the record
    pub fn validate(&self) -> Result<()> {
        if self.state.trim().is_empty() {
            return Err(TravelBudgetError::invalid_input("state", "must not be empty"));
        }
        if self.city.trim().is_empty() {
            return Err(TravelBudgetError::invalid_input("city", "must not be empty"));
        }

        self.validate_costs()?;

        if let Some(expenditure) = self.expenditure_daily {
            ensure_non_negative("expenditure_daily", expenditure)?;
        }
        if let Some(rating) = self.rating {
            if !(0.0..=MAX_RATING).contains(&rating) {
                return Err(TravelBudgetError::invalid_input(
                    "rating",
                    format!("must be between 0 and {MAX_RATING}, got {rating}"),
                ));
            }
        }
        if let Some(distance) = self.distance_from_hub_km {
            ensure_non_negative("distance_from_hub_km", distance)?;
        }

        Ok(())
    }

    /// Format as "City, State" for display
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}
