//! JSON API over the trip planner
//!
//! Routes (nested under `/api` by [`crate::web`]):
//! - `GET  /health`
//! - `GET  /states`
//! - `GET  /states/{state}/cities`
//! - `POST /search`
//! - `POST /allocation/validate`

use axum::{
    Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::TravelBudgetError;
use crate::estimator::validate_allocation;
use crate::models::{BudgetAllocation, ValidationResult};
use crate::planner::{DestinationSummary, SearchRequest, SearchResponse, TripPlanner};

/// Error body returned by every failing route
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub message: String,
}

/// Maps library errors onto HTTP status codes
#[derive(Debug)]
pub struct ApiError(TravelBudgetError);

impl From<TravelBudgetError> for ApiError {
    fn from(err: TravelBudgetError) -> Self {
        Self(err)
    }
}

/// Malformed or ill-typed request bodies are invalid input, like any other
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(TravelBudgetError::invalid_input("body", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TravelBudgetError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            TravelBudgetError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        } else {
            warn!("Rejected request: {}", self.0);
        }

        let body = ApiErrorBody {
            error: self.0.code().to_string(),
            message: self.0.user_message(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(planner: TripPlanner) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/states", get(get_states))
        .route("/states/{state}/cities", get(get_cities))
        .route("/search", post(search))
        .route("/allocation/validate", post(check_allocation))
        .with_state(planner)
}

async fn health() -> &'static str {
    "ok"
}

async fn get_states(State(planner): State<TripPlanner>) -> Json<Vec<String>> {
    Json(planner.catalog().states().to_vec())
}

async fn get_cities(
    State(planner): State<TripPlanner>,
    Path(state): Path<String>,
) -> Result<Json<Vec<DestinationSummary>>, ApiError> {
    Ok(Json(planner.cities(&state)?))
}

async fn search(
    State(planner): State<TripPlanner>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(planner.search(&request)?))
}

async fn check_allocation(
    payload: Result<Json<BudgetAllocation>, JsonRejection>,
) -> Result<Json<ValidationResult>, ApiError> {
    let Json(allocation) = payload?;
    allocation.validate()?;
    Ok(Json(validate_allocation(&allocation)))
}
