//! Synthetic catalog generation
//!
//! Produces a demo catalog of Malaysian destinations with randomized costs,
//! and writes catalogs back out as CSV in the same layout the loader reads.

use std::path::Path;

use rand::RngExt;
use tracing::info;

use crate::models::DestinationRecord;
use crate::{Result, TravelBudgetError};

pub const STATES: [&str; 13] = [
    "Kuala Lumpur",
    "Selangor",
    "Penang",
    "Johor",
    "Perak",
    "Melaka",
    "Pahang",
    "Terengganu",
    "Kelantan",
    "Kedah",
    "Negeri Sembilan",
    "Sabah",
    "Sarawak",
];

pub const TRAVEL_TYPES: [&str; 6] = [
    "Nature",
    "Foodie",
    "Adventure",
    "History",
    "Leisure",
    "Modern",
];

pub const LOCAL_DISHES: [&str; 6] = [
    "Nasi Lemak",
    "Laksa",
    "Satay",
    "Char Kway Teow",
    "Cendol",
    "Roti Canai",
];

/// Fixed miscellaneous daily spend written to every generated row
pub const EXPENDITURE_DAILY: f64 = 50.0;

pub const DEFAULT_PLACES_PER_STATE: u32 = 29;

fn pick<'a, R: RngExt + ?Sized>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options[rng.random_range(0..options.len())]
}

/// Generate `places_per_state` destinations for each state
pub fn generate<R: RngExt + ?Sized>(rng: &mut R, places_per_state: u32) -> Vec<DestinationRecord> {
    let mut records = Vec::with_capacity(STATES.len() * places_per_state as usize);

    for state in STATES {
        for i in 1..=places_per_state {
            let accommodation = f64::from(rng.random_range(50..=400u32));
            let food = f64::from(rng.random_range(30..=120u32));
            let transport = f64::from(rng.random_range(10..=80u32));
            let rating = (rng.random_range(3.5..=5.0f64) * 10.0).round() / 10.0;
            let distance = f64::from(rng.random_range(2..=150u32));

            let city = format!("{state} District {i}");
            let mut record = DestinationRecord::new(state, city, accommodation, food, transport);
            record.expenditure_daily = Some(EXPENDITURE_DAILY);
            record.description = Some(format!(
                "A beautiful spot in {state} perfect for {}.",
                pick(rng, &TRAVEL_TYPES)
            ));
            record.image_url = Some(format!("https://picsum.photos/seed/{state}{i}/400/250"));
            record.rating = Some(rating);
            record.distance_from_hub_km = Some(distance);
            record.travel_type = Some(pick(rng, &TRAVEL_TYPES).to_string());
            record.local_dish = Some(pick(rng, &LOCAL_DISHES).to_string());

            records.push(record);
        }
    }

    records
}

/// Write records as CSV with the catalog header row
pub fn write_csv(path: impl AsRef<Path>, records: &[DestinationRecord]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        TravelBudgetError::catalog(format!("cannot create {}: {e}", path.display()))
    })?;

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| TravelBudgetError::catalog(e.to_string()))?;
    }
    writer.flush()?;

    info!("Wrote {} destinations to {}", records.len(), path.display());
    Ok(())
}
