//! Destination catalog
//!
//! A read-only table of destinations, loaded once and then shared freely.
//! Nothing mutates a catalog after construction, so an `Arc<DestinationCatalog>`
//! can be handed to any number of concurrent callers without locking.

pub mod generator;

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::models::DestinationRecord;
use crate::{Result, TravelBudgetError};

/// Destinations indexed by state, in catalog order
#[derive(Debug, Clone, Default)]
pub struct DestinationCatalog {
    records: Vec<DestinationRecord>,
    /// Distinct states in order of first appearance
    states: Vec<String>,
    by_state: HashMap<String, Vec<usize>>,
}

impl DestinationCatalog {
    /// Build a catalog from already-parsed records
    ///
    /// Every record is validated and cities must be unique within their
    /// state. Record order is preserved.
    pub fn from_records(records: Vec<DestinationRecord>) -> Result<Self> {
        let mut states = Vec::new();
        let mut by_state: HashMap<String, Vec<usize>> = HashMap::new();

        for (index, record) in records.iter().enumerate() {
            record.validate()?;

            let indices = by_state.entry(record.state.clone()).or_insert_with(|| {
                states.push(record.state.clone());
                Vec::new()
            });
            if indices.iter().any(|&i| records[i].city == record.city) {
                return Err(TravelBudgetError::invalid_input(
                    "city",
                    format!(
                        "duplicate destination '{}' in state '{}'",
                        record.city, record.state
                    ),
                ));
            }
            indices.push(index);
        }

        Ok(Self {
            records,
            states,
            by_state,
        })
    }

    /// Load a catalog from a CSV file
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            TravelBudgetError::catalog(format!("cannot open {}: {e}", path.display()))
        })?;

        let catalog = Self::from_reader(file)?;
        info!(
            "Loaded {} destinations across {} states from {}",
            catalog.len(),
            catalog.states.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse a catalog from CSV data with a header row
    ///
    /// An empty or non-numeric cost cell fails the load; missing costs are
    /// never read as zero.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let records = csv_reader
            .deserialize::<DestinationRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TravelBudgetError::catalog(e.to_string()))?;
        debug!("Parsed {} catalog rows", records.len());

        Self::from_records(records).map_err(|e| TravelBudgetError::catalog(e.to_string()))
    }

    /// Distinct states, in the order they first appear
    #[must_use]
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// All destinations of a state, in catalog order
    pub fn cities_in(&self, state: &str) -> Result<Vec<&DestinationRecord>> {
        self.by_state
            .get(state)
            .map(|indices| indices.iter().map(|&i| &self.records[i]).collect())
            .ok_or_else(|| TravelBudgetError::not_found(state, ""))
    }

    /// Look up one destination by state and city
    pub fn find(&self, state: &str, city: &str) -> Result<&DestinationRecord> {
        self.cities_in(state)?
            .into_iter()
            .find(|record| record.city == city)
            .ok_or_else(|| TravelBudgetError::not_found(state, city))
    }

    #[must_use]
    pub fn records(&self) -> &[DestinationRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
