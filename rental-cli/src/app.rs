//! Glue between the command line and the calculations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rental_core::{NewApartment, Portfolio, PortfolioReport, TaxBasePolicy};
use tracing::{debug, info};

use crate::edits::{FieldEdit, remove_by_name};

/// Everything one run of the planner needs.
#[derive(Debug, Clone, Default)]
pub struct PlannerConfig {
    /// CSV of apartments; the default building when `None`.
    pub input: Option<PathBuf>,
    pub policy: TaxBasePolicy,
    /// Names of blank units to append.
    pub add: Vec<String>,
    pub set: Vec<FieldEdit>,
    /// Names of units to drop.
    pub remove: Vec<String>,
    /// Where to export the report as CSV, if anywhere.
    pub output: Option<PathBuf>,
}

/// Loads the starting apartments and applies the requested edits:
/// additions first, then field edits, then removals.
pub fn build_portfolio(config: &PlannerConfig) -> Result<Portfolio> {
    let mut portfolio = match &config.input {
        Some(path) => {
            let apartments = rental_data::load_from_file(path)
                .with_context(|| format!("failed to load apartments from {}", path.display()))?;
            info!(path = %path.display(), count = apartments.len(), "loaded apartments");
            Portfolio::from_new(apartments)
        }
        None => {
            debug!("using default building");
            Portfolio::with_defaults()
        }
    };

    for name in &config.add {
        portfolio.insert(NewApartment::named(name.as_str()));
    }
    for edit in &config.set {
        edit.clone()
            .apply(&mut portfolio)
            .with_context(|| format!("cannot edit apartment '{}'", edit.apartment))?;
    }
    for name in &config.remove {
        remove_by_name(&mut portfolio, name)
            .with_context(|| format!("cannot remove apartment '{name}'"))?;
    }

    Ok(portfolio)
}

/// Builds the portfolio, evaluates it and exports the report if asked to.
pub fn run(config: &PlannerConfig) -> Result<PortfolioReport> {
    let portfolio = build_portfolio(config)?;
    let report = portfolio.evaluate(config.policy);

    if let Some(path) = &config.output {
        rental_data::write_report_to_file(path, &report)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
    }

    Ok(report)
}
