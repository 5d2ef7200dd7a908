//! Trip cost estimation and affordability filtering
//!
//! This library turns a destination record, a traveler composition, a trip
//! length and a budget into a cost breakdown and an affordability verdict,
//! and filters a destination catalog down to the places a budget can cover.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod estimator;
pub mod logging;
pub mod models;
pub mod planner;
pub mod web;

// Re-export core types for public API
pub use catalog::DestinationCatalog;
pub use config::TravelBudgetConfig;
pub use error::TravelBudgetError;
pub use estimator::{CostEstimator, DEFAULT_CHILD_COST_FACTOR, validate_allocation};
pub use models::{
    BudgetAllocation, DestinationRecord, EstimateResult, TravelerComposition, TripParameters,
    ValidationResult,
};
pub use planner::{SearchRequest, SearchResponse, TripPlanner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelBudgetError>;
