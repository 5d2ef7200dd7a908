use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use tracing::info;

use travel_budget::catalog::generator::{self, DEFAULT_PLACES_PER_STATE};
use travel_budget::planner::format_currency;
use travel_budget::{
    CostEstimator, DestinationCatalog, SearchRequest, TravelBudgetConfig, TripPlanner, logging,
    web,
};

const USAGE: &str = "\
travel-budget - trip cost estimation and affordability filtering

Usage:
  travel-budget [--config PATH] [serve]
  travel-budget [--config PATH] generate-catalog OUT [PLACES_PER_STATE]
  travel-budget [--config PATH] estimate STATE CITY START END BUDGET ADULTS [CHILDREN]

Dates are YYYY-MM-DD. Settings can be overridden with TRAVELBUDGET_* variables.";

#[tokio::main]
async fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return Ok(());
    }

    let config_path = take_option(&mut args, "--config")?;
    let config = TravelBudgetConfig::load_from_path(config_path.map(PathBuf::from))?;
    logging::init(&config.logging)?;

    match args.first().map(String::as_str) {
        None | Some("serve") => serve(&config).await,
        Some("generate-catalog") => generate_catalog(&args[1..]),
        Some("estimate") => estimate(&config, &args[1..]),
        Some(other) => {
            eprintln!("{USAGE}");
            bail!("Unknown command '{other}'")
        }
    }
}

/// Remove `flag VALUE` from the argument list and return the value
fn take_option(args: &mut Vec<String>, flag: &str) -> Result<Option<String>> {
    let Some(index) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    if index + 1 >= args.len() {
        bail!("{flag} requires a value");
    }
    let value = args.remove(index + 1);
    args.remove(index);
    Ok(Some(value))
}

fn build_planner(config: &TravelBudgetConfig) -> Result<TripPlanner> {
    let catalog = DestinationCatalog::load_csv(&config.catalog.path)
        .with_context(|| format!("Failed to load catalog from {}", config.catalog.path))?;
    let estimator = CostEstimator::new(config.estimator.child_cost_factor)?;
    Ok(TripPlanner::new(Arc::new(catalog), estimator))
}

async fn serve(config: &TravelBudgetConfig) -> Result<()> {
    let planner = build_planner(config)?;
    info!(
        "Serving {} destinations from {}",
        planner.catalog().len(),
        config.catalog.path
    );
    web::run(config, planner).await
}

fn generate_catalog(args: &[String]) -> Result<()> {
    let Some(out) = args.first() else {
        bail!("generate-catalog requires an output path\n\n{USAGE}");
    };
    let places = match args.get(1) {
        Some(n) => n
            .parse::<u32>()
            .with_context(|| format!("Invalid place count: {n}"))?,
        None => DEFAULT_PLACES_PER_STATE,
    };

    let records = generator::generate(&mut rand::rng(), places);
    generator::write_csv(out, &records)?;
    println!("Created {out} with {} places", records.len());
    Ok(())
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{value}', expected YYYY-MM-DD"))
}

fn estimate(config: &TravelBudgetConfig, args: &[String]) -> Result<()> {
    if args.len() < 6 {
        bail!("estimate requires STATE CITY START END BUDGET ADULTS [CHILDREN]\n\n{USAGE}");
    }

    let request = SearchRequest {
        state: args[0].clone(),
        city: Some(args[1].clone()),
        start_date: parse_date(&args[2])?,
        end_date: Some(parse_date(&args[3])?),
        total_budget: args[4]
            .parse()
            .with_context(|| format!("Invalid budget: {}", args[4]))?,
        adults: args[5]
            .parse()
            .with_context(|| format!("Invalid adult count: {}", args[5]))?,
        children: match args.get(6) {
            Some(n) => n
                .parse()
                .with_context(|| format!("Invalid child count: {n}"))?,
            None => 0,
        },
        allocation: None,
    };

    let planner = build_planner(config)?;
    let response = planner.search(&request)?;

    for found in &response.matches {
        let estimate = &found.estimate;
        println!("{}, {}", found.destination.city, found.destination.state);
        println!("  Days:           {}", response.days);
        println!("  Accommodation:  {}/day", format_currency(estimate.daily_accommodation));
        println!("  Food:           {}/day", format_currency(estimate.daily_food));
        println!("  Transport:      {}/day", format_currency(estimate.daily_transport));
        println!("  Daily total:    {}", format_currency(estimate.daily_total));
        println!("  Trip total:     {}", format_currency(estimate.grand_total));
        if estimate.affordable {
            println!("  Within budget, {} left", format_currency(estimate.budget_diff));
        } else {
            println!("  Over budget by {}", format_currency(estimate.overage()));
        }
    }

    Ok(())
}
