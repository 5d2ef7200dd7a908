//! Error types and handling for the travel budget estimator

use thiserror::Error;

/// Main error type for the travel budget estimator
#[derive(Error, Debug)]
pub enum TravelBudgetError {
    /// A precondition on an input value was violated. Not retryable.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput { field: String, message: String },

    /// No catalog record matches the requested state/city.
    /// An empty `city` means the state itself is unknown.
    #[error("{}", not_found_display(.state, .city))]
    NotFound { state: String, city: String },

    /// The destination catalog could not be read or parsed
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

fn not_found_display(state: &str, city: &str) -> String {
    if city.is_empty() {
        format!("No destinations for state '{state}'")
    } else {
        format!("No such destination: {city} ({state})")
    }
}

impl TravelBudgetError {
    /// Create a new invalid input error naming the offending field
    pub fn invalid_input<F: Into<String>, S: Into<String>>(field: F, message: S) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new not-found error for a state, or a city within a state
    pub fn not_found<S: Into<String>, C: Into<String>>(state: S, city: C) -> Self {
        Self::NotFound {
            state: state.into(),
            city: city.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Stable machine-readable code, used in API error bodies
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            TravelBudgetError::InvalidInput { .. } => "invalid_input",
            TravelBudgetError::NotFound { .. } => "not_found",
            TravelBudgetError::Catalog { .. } => "catalog_error",
            TravelBudgetError::Config { .. } => "config_error",
            TravelBudgetError::Io { .. } => "io_error",
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelBudgetError::InvalidInput { field, message } => {
                format!("Invalid {field}: {message}")
            }
            TravelBudgetError::NotFound { state, city } if city.is_empty() => {
                format!("No destinations found for state '{state}'.")
            }
            TravelBudgetError::NotFound { state, city } => {
                format!("No such destination: '{city}' in '{state}'.")
            }
            TravelBudgetError::Catalog { .. } => {
                "The destination catalog could not be loaded. Please check the catalog file."
                    .to_string()
            }
            TravelBudgetError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TravelBudgetError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
